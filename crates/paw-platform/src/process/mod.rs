//! Process enumeration: walk the OS pid table into a bounded batch.
//!
//! Platform implementations:
//! - Windows: PSAPI pid table + least-privilege handle per pid (`windows.rs`)
//! - elsewhere: explicit empty fallback

use paw_core::ProcessRecord;

#[cfg(windows)]
pub(crate) mod windows;

/// List accessible running processes.
///
/// Returns at most `limits::MAX_PROCESS_RESULTS` records, in OS
/// enumeration order. Processes that cannot be opened or whose image
/// path cannot be resolved are skipped; a failure to obtain the pid
/// table at all yields an empty batch. This call never errors.
pub fn list_processes() -> Vec<ProcessRecord> {
    #[cfg(windows)]
    {
        windows::list_processes()
    }
    #[cfg(not(windows))]
    {
        Vec::new()
    }
}
