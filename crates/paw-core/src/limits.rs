//! Fixed safety budgets for one enumeration pass.
//!
//! These are deliberately constants rather than call-time parameters:
//! predictable worst-case resource use is traded for tunability. A host
//! with more processes or windows than the caps yields a partial,
//! non-crashing result instead of unbounded allocation or a stuck walk.

/// Slots requested from the OS process-id table in one pass.
pub const MAX_PROCESS_SLOTS: usize = 4096;

/// Process records returned from one listing pass.
pub const MAX_PROCESS_RESULTS: usize = 1000;

/// UTF-16 units accepted for an executable image path.
pub const MAX_IMAGE_PATH_UNITS: usize = 32 * 1024;

/// Characters kept for a process display name.
pub const MAX_NAME_CHARS: usize = 255;

/// UTF-16 units accepted for a window title. Caption length reports are
/// attacker-influenced, so this bounds the allocation made to read one.
pub const MAX_TITLE_UNITS: usize = 16 * 1024;

/// Window-callback invocations allowed during a listing pass.
pub const MAX_WINDOW_VISITS: u32 = 2048;

/// Window-callback invocations allowed during a minimize search.
pub const MAX_SEARCH_VISITS: u32 = 100;

/// UTF-16 units the codec will address in one conversion.
pub const MAX_WIDE_UNITS: usize = i32::MAX as usize;

/// UTF-8 bytes the codec will produce for one conversion.
pub const MAX_TEXT_BYTES: usize = 64 * 1024;
