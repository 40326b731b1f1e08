//! Windows implementation of process enumeration using Win32/PSAPI.

use paw_core::limits::{MAX_IMAGE_PATH_UNITS, MAX_PROCESS_RESULTS, MAX_PROCESS_SLOTS};
use paw_core::pid::in_safe_range;
use paw_core::{text, ProcessRecord};
use tracing::{debug, warn};
use windows_sys::Win32::Foundation::{CloseHandle, HANDLE};
use windows_sys::Win32::System::ProcessStatus::K32EnumProcesses;
use windows_sys::Win32::System::Threading::{
    OpenProcess, QueryFullProcessImageNameW, PROCESS_NAME_WIN32,
    PROCESS_QUERY_LIMITED_INFORMATION,
};

/// Owned process handle, closed when dropped.
///
/// Every handle opened during enumeration lives inside one loop
/// iteration; Drop guarantees release on the skip paths as well as the
/// success path.
pub(crate) struct ProcessHandle(HANDLE);

impl ProcessHandle {
    /// Open `pid` with the minimum rights needed for name/path queries.
    pub(crate) fn open_for_query(pid: u32) -> Option<Self> {
        let raw = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, 0, pid) };
        if raw.is_null() {
            None
        } else {
            Some(Self(raw))
        }
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        unsafe { CloseHandle(self.0) };
    }
}

pub fn list_processes() -> Vec<ProcessRecord> {
    let mut pids: Vec<u32> = vec![0; MAX_PROCESS_SLOTS];
    let cap_bytes = (pids.len() * std::mem::size_of::<u32>()) as u32;
    let mut needed: u32 = 0;

    let ok = unsafe { K32EnumProcesses(pids.as_mut_ptr(), cap_bytes, &mut needed) };
    if ok == 0 {
        warn!("EnumProcesses failed, returning empty process list");
        return Vec::new();
    }

    // The table may hold more pids than our buffer; clamp to capacity
    // instead of reallocating, trading completeness for a fixed bound.
    if needed > cap_bytes {
        debug!(slots = MAX_PROCESS_SLOTS, "process table clamped to slot cap");
        needed = cap_bytes;
    }
    pids.truncate(needed as usize / std::mem::size_of::<u32>());

    let mut records = Vec::new();
    for pid in pids {
        if records.len() >= MAX_PROCESS_RESULTS {
            debug!(cap = MAX_PROCESS_RESULTS, "process result cap reached");
            break;
        }
        // Skip the idle pseudo-pid and ids outside the caller-safe range.
        if !in_safe_range(pid) {
            continue;
        }
        if let Some(record) = query_process(pid) {
            records.push(record);
        }
    }
    records
}

/// Resolve one pid to a record, or `None` to skip it.
///
/// Inaccessible and unresolvable processes are expected (protected or
/// just-exited); skipping them is not an error.
fn query_process(pid: u32) -> Option<ProcessRecord> {
    let handle = ProcessHandle::open_for_query(pid)?;
    let wide = query_image_path(&handle)?;
    if wide.is_empty() {
        return None;
    }
    // Codec failures become sentinel path text, not a skipped record.
    let path = text::decode_wide(&wide).into_record_text();
    Some(ProcessRecord::from_image_path(pid, path))
}

fn query_image_path(handle: &ProcessHandle) -> Option<Vec<u16>> {
    let mut buf: Vec<u16> = vec![0; MAX_IMAGE_PATH_UNITS];
    let mut len = buf.len() as u32;

    let ok = unsafe {
        QueryFullProcessImageNameW(handle.0, PROCESS_NAME_WIN32, buf.as_mut_ptr(), &mut len)
    };
    if ok == 0 {
        return None;
    }

    buf.truncate(len as usize);
    Some(buf)
}
