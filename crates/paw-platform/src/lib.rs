//! paw-platform: the OS boundary for Processes And Windows.
//!
//! This crate provides:
//! - Process enumeration with a bounded result count (`list_processes`)
//! - Visible top-level window listing (`list_windows`)
//! - Minimize-by-pid control (`minimize_window_for_process`)
//!
//! Every operation is single-threaded and synchronous: one call walks
//! the OS tables, materializes a batch of records, and returns. Hard
//! caps from `paw_core::limits` bound the work of every pass, so a host
//! with thousands of processes or pathological window counts yields a
//! partial batch rather than unbounded allocation or a stuck walk.
//!
//! Enumeration never surfaces per-item errors; inaccessible processes
//! and unreadable windows are skipped. The only fallible input is a
//! caller-supplied process id, rejected as [`PlatformError::InvalidPid`]
//! before any OS interaction.
//!
//! On non-Windows hosts the operations compile to explicit fallbacks
//! (empty batches, `Ok(false)`); there is no cross-platform window model.

mod error;
mod process;
mod window;

// Re-export error types
pub use error::{PlatformError, PlatformResult};

// Re-export the enumeration API
pub use process::list_processes;
pub use window::{list_windows, minimize_window_for_process};

// Record types live in paw-core; surface them for callers.
pub use paw_core::{ProcessRecord, WindowRecord};
