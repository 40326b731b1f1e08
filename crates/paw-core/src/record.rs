//! Record types produced by one enumeration pass.
//!
//! Records are built fresh per call, never mutated after construction,
//! and never retained by the enumerators. The OS reuses process ids, so
//! `pid` is not a stable long-lived key across calls; see [`ProcessKey`].

use serde::{Deserialize, Serialize};

use crate::limits::MAX_NAME_CHARS;
use crate::text;

/// One running process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// OS process id; positive and within the caller-safe signed range.
    pub pid: u32,
    /// Executable display name (final path component, length-clamped).
    pub name: String,
    /// Full executable path; may hold a codec sentinel on failure.
    pub path: String,
}

impl ProcessRecord {
    /// Build a record from a resolved image path, deriving the display
    /// name from the final path component.
    pub fn from_image_path(pid: u32, path: String) -> Self {
        let name = clamp_name(trailing_component(&path));
        Self { pid, name, path }
    }

    /// Identity that survives process restarts.
    pub fn stable_key(&self) -> ProcessKey {
        let path = (!self.path.is_empty() && !text::is_sentinel(&self.path))
            .then(|| self.path.clone());
        ProcessKey {
            path,
            name: self.name.to_lowercase(),
        }
    }
}

/// Stable identity for re-matching a process across launches.
///
/// OS pids are recycled after exit; consumers that persist a selection
/// key on executable identity instead. Names are lowercased so matches
/// are case-insensitive, and sentinel paths are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessKey {
    pub path: Option<String>,
    pub name: String,
}

/// One visible top-level window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    /// Opaque OS window handle.
    pub handle: usize,
    /// Process id of the window's owner.
    pub owner_pid: u32,
    /// Window title; non-empty by construction.
    pub title: String,
}

fn trailing_component(path: &str) -> &str {
    path.rsplit(['\\', '/']).next().unwrap_or(path)
}

fn clamp_name(name: &str) -> String {
    name.chars().take(MAX_NAME_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_backslash_path() {
        let r = ProcessRecord::from_image_path(8, "C:\\Windows\\notepad.exe".to_string());
        assert_eq!(r.name, "notepad.exe");
        assert_eq!(r.path, "C:\\Windows\\notepad.exe");
    }

    #[test]
    fn test_name_from_forward_slash_path() {
        let r = ProcessRecord::from_image_path(8, "/usr/bin/htop".to_string());
        assert_eq!(r.name, "htop");
    }

    #[test]
    fn test_name_without_separator() {
        let r = ProcessRecord::from_image_path(8, "standalone.exe".to_string());
        assert_eq!(r.name, "standalone.exe");
    }

    #[test]
    fn test_name_clamped() {
        let long = format!("C:\\{}.exe", "x".repeat(400));
        let r = ProcessRecord::from_image_path(8, long);
        assert_eq!(r.name.chars().count(), MAX_NAME_CHARS);
    }

    #[test]
    fn test_stable_key_lowercases_and_keeps_path() {
        let r = ProcessRecord::from_image_path(8, "C:\\Apps\\MyTool.EXE".to_string());
        let key = r.stable_key();
        assert_eq!(key.name, "mytool.exe");
        assert_eq!(key.path.as_deref(), Some("C:\\Apps\\MyTool.EXE"));
    }

    #[test]
    fn test_stable_key_drops_sentinel_path() {
        let r = ProcessRecord::from_image_path(8, text::TOO_LONG_SENTINEL.to_string());
        assert_eq!(r.stable_key().path, None);
    }

    #[test]
    fn test_record_json_shape() {
        let w = WindowRecord {
            handle: 0x20_0a4,
            owner_pid: 4242,
            title: "Calculator".to_string(),
        };
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["owner_pid"], 4242);
        assert_eq!(json["title"], "Calculator");

        let back: WindowRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, w);
    }
}
