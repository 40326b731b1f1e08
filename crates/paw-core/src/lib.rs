//! paw-core: platform-independent domain for Processes And Windows.
//!
//! This crate provides:
//! - Record types for enumerated processes and windows (`record`)
//! - Wide-character text decoding with explicit failure sentinels (`text`)
//! - Process id validation for caller-supplied input (`pid`)
//! - Fixed safety budgets governing every enumeration pass (`limits`)
//! - A counting guard that bounds callback-driven OS walks (`walk`)
//!
//! Nothing here touches the OS; `paw-platform` builds the actual
//! enumeration on top of these pieces.

pub mod limits;
pub mod pid;
pub mod record;
pub mod text;
pub mod walk;

// Re-export the types callers touch most.
pub use pid::{validate_pid, InvalidPid};
pub use record::{ProcessKey, ProcessRecord, WindowRecord};
pub use text::WideText;
pub use walk::{VisitBudget, WalkControl};
