//! Process id validation for caller-supplied input.
//!
//! Callers hand over an arbitrary integer; only values in `1..=i32::MAX`
//! name a process we are willing to touch. Everything else is rejected
//! before any OS interaction, distinctly from an empty result.

use thiserror::Error;

/// Largest process id representable in the caller-safe signed range.
pub const MAX_PID: i64 = i32::MAX as i64;

/// A caller-supplied process id that failed validation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPid {
    #[error("process id must be positive, got {0}")]
    NotPositive(i64),
    #[error("process id {0} exceeds the supported range")]
    OutOfRange(i64),
}

/// Validate a raw caller-supplied process id.
pub fn validate_pid(raw: i64) -> Result<u32, InvalidPid> {
    if raw < 1 {
        return Err(InvalidPid::NotPositive(raw));
    }
    if raw > MAX_PID {
        return Err(InvalidPid::OutOfRange(raw));
    }
    Ok(raw as u32)
}

/// Whether an OS-enumerated pid fits the caller-safe range.
///
/// Enumeration skips out-of-range ids rather than truncating them.
pub fn in_safe_range(pid: u32) -> bool {
    pid != 0 && pid <= i32::MAX as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_non_positive() {
        assert_eq!(validate_pid(0), Err(InvalidPid::NotPositive(0)));
        assert_eq!(validate_pid(-5), Err(InvalidPid::NotPositive(-5)));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert_eq!(
            validate_pid(MAX_PID + 1),
            Err(InvalidPid::OutOfRange(MAX_PID + 1))
        );
        assert_eq!(
            validate_pid(i64::MAX),
            Err(InvalidPid::OutOfRange(i64::MAX))
        );
    }

    #[test]
    fn test_validate_accepts_valid() {
        assert_eq!(validate_pid(1), Ok(1));
        assert_eq!(validate_pid(4242), Ok(4242));
        assert_eq!(validate_pid(MAX_PID), Ok(i32::MAX as u32));
    }

    #[test]
    fn test_safe_range() {
        assert!(!in_safe_range(0));
        assert!(in_safe_range(4));
        assert!(in_safe_range(i32::MAX as u32));
        assert!(!in_safe_range(i32::MAX as u32 + 1));
        assert!(!in_safe_range(u32::MAX));
    }
}
