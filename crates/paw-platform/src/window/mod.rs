//! Window enumeration and minimize control.
//!
//! Provides functionality for:
//! - Listing visible top-level windows with non-empty titles
//! - Minimizing the first eligible window owned by a process
//!
//! Both operations run through one bounded walk primitive so the visit
//! cap holds uniformly across call sites.
//!
//! Platform implementations:
//! - Windows: Win32 `EnumWindows` walk (`windows.rs`)
//! - elsewhere: explicit fallbacks (empty list, `Ok(false)`)

use crate::error::PlatformResult;
use paw_core::{validate_pid, WindowRecord};

#[cfg(windows)]
mod windows;

/// List visible top-level windows.
///
/// Windows with empty titles are excluded; titles that fail to decode
/// safely cause the window to be skipped, not the call to fail. At most
/// `limits::MAX_WINDOW_VISITS` windows are inspected per pass. Order is
/// OS enumeration order. This call never errors.
pub fn list_windows() -> Vec<WindowRecord> {
    #[cfg(windows)]
    {
        windows::list_windows()
    }
    #[cfg(not(windows))]
    {
        Vec::new()
    }
}

/// Minimize the first eligible window owned by the given process.
///
/// Returns `Ok(true)` only when a visible, minimize-capable window owned
/// by the process was found within the search cap and the minimize
/// request was issued. An id that names no accessible process returns
/// `Ok(false)` without walking any windows. When a process owns several
/// windows the first one in OS enumeration order wins; which window that
/// is, is not under caller control.
///
/// Ids outside `1..=i32::MAX` are rejected before any OS interaction.
pub fn minimize_window_for_process(pid: i64) -> PlatformResult<bool> {
    let pid = validate_pid(pid)?;
    #[cfg(windows)]
    {
        Ok(windows::minimize_window_for_process(pid))
    }
    #[cfg(not(windows))]
    {
        let _ = pid;
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlatformError;
    use paw_core::InvalidPid;

    #[test]
    fn test_minimize_rejects_non_positive_pid() {
        let err = minimize_window_for_process(0).unwrap_err();
        assert!(matches!(
            err,
            PlatformError::InvalidPid(InvalidPid::NotPositive(0))
        ));

        let err = minimize_window_for_process(-1).unwrap_err();
        assert!(matches!(err, PlatformError::InvalidPid(_)));
    }

    #[test]
    fn test_minimize_rejects_out_of_range_pid() {
        let err = minimize_window_for_process(i64::from(i32::MAX) + 1).unwrap_err();
        assert!(matches!(
            err,
            PlatformError::InvalidPid(InvalidPid::OutOfRange(_))
        ));
    }

    #[cfg(windows)]
    #[test]
    fn test_minimize_missing_process_is_false() {
        // Windows pids are multiples of 4, so 3 never names a process.
        assert_eq!(minimize_window_for_process(3).unwrap(), false);
    }

    #[cfg(windows)]
    #[test]
    fn test_listed_windows_have_titles() {
        use paw_core::limits::MAX_WINDOW_VISITS;

        let windows = list_windows();
        assert!(windows.len() <= MAX_WINDOW_VISITS as usize);
        for w in &windows {
            assert!(!w.title.is_empty());
            assert_ne!(w.owner_pid, 0);
        }
    }

    #[cfg(not(windows))]
    #[test]
    fn test_fallbacks_off_windows() {
        assert!(list_windows().is_empty());
        assert_eq!(minimize_window_for_process(4242).unwrap(), false);
    }
}
