//! Windows implementation of the window API using Win32.

use crate::process::windows::ProcessHandle;
use paw_core::limits::{MAX_SEARCH_VISITS, MAX_WINDOW_VISITS};
use paw_core::text::{self, WideText};
use paw_core::{VisitBudget, WalkControl, WindowRecord};
use tracing::debug;
use windows_sys::Win32::Foundation::{BOOL, FALSE, HWND, LPARAM, TRUE};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetWindowLongW, GetWindowTextLengthW, GetWindowTextW,
    GetWindowThreadProcessId, IsWindow, IsWindowVisible, ShowWindow, GWL_STYLE, SW_MINIMIZE,
    WS_MINIMIZEBOX,
};

struct WalkState<'a, F> {
    budget: VisitBudget,
    visit: &'a mut F,
}

/// Bounded walk over top-level windows.
///
/// The single primitive behind both the listing and the minimize search:
/// the visitor filters and decides stop-on-first-match, the budget caps
/// callback invocations regardless of how many windows the OS holds.
fn walk_top_level<F>(cap: u32, mut visit: F)
where
    F: FnMut(HWND) -> WalkControl,
{
    let mut state = WalkState {
        budget: VisitBudget::new(cap),
        visit: &mut visit,
    };
    unsafe {
        EnumWindows(
            Some(walk_callback::<F>),
            &mut state as *mut WalkState<'_, F> as LPARAM,
        );
    }
}

unsafe extern "system" fn walk_callback<F>(hwnd: HWND, lparam: LPARAM) -> BOOL
where
    F: FnMut(HWND) -> WalkControl,
{
    let state = &mut *(lparam as *mut WalkState<'_, F>);

    if !state.budget.admit() {
        debug!(visited = state.budget.visited(), "window walk visit cap reached");
        return FALSE;
    }

    match (state.visit)(hwnd) {
        WalkControl::Continue => TRUE,
        WalkControl::Stop => FALSE,
    }
}

pub fn list_windows() -> Vec<WindowRecord> {
    let mut records: Vec<WindowRecord> = Vec::new();

    walk_top_level(MAX_WINDOW_VISITS, |hwnd| {
        if let Some(record) = snapshot_window(hwnd) {
            records.push(record);
        }
        WalkControl::Continue
    });

    records
}

fn snapshot_window(hwnd: HWND) -> Option<WindowRecord> {
    unsafe {
        // Skip invisible windows
        if IsWindowVisible(hwnd) == 0 {
            return None;
        }

        // Skip windows with empty or undecodable titles
        let title = read_title(hwnd)?;
        if title.is_empty() {
            return None;
        }

        let mut owner_pid: u32 = 0;
        GetWindowThreadProcessId(hwnd, &mut owner_pid);
        if owner_pid == 0 {
            return None;
        }

        Some(WindowRecord {
            handle: hwnd as usize,
            owner_pid,
            title,
        })
    }
}

fn read_title(hwnd: HWND) -> Option<String> {
    unsafe {
        // The reported length is controlled by the window owner; it is
        // capped before sizing any buffer from it. Over-cap captions are
        // skipped without an allocation.
        let title_len = text::accepted_title_len(GetWindowTextLengthW(hwnd))?;

        let mut title_buf: Vec<u16> = vec![0; title_len + 1];
        let copied = GetWindowTextW(hwnd, title_buf.as_mut_ptr(), title_buf.len() as i32);
        if copied <= 0 {
            return None;
        }
        title_buf.truncate(copied as usize);

        match text::decode_wide(&title_buf) {
            WideText::Text(title) => Some(text::escape_control_chars(&title)),
            // Overlong or malformed titles skip the window, they never
            // abort the pass.
            WideText::TooLong | WideText::ConversionFailed => None,
        }
    }
}

pub fn minimize_window_for_process(pid: u32) -> bool {
    // Fail fast: a pid that cannot even be opened for query has no
    // window worth searching for.
    if ProcessHandle::open_for_query(pid).is_none() {
        debug!(pid, "minimize target not accessible, skipping window search");
        return false;
    }

    let mut minimized = false;
    walk_top_level(MAX_SEARCH_VISITS, |hwnd| {
        unsafe {
            if IsWindow(hwnd) == 0 || IsWindowVisible(hwnd) == 0 {
                return WalkControl::Continue;
            }

            let mut owner_pid: u32 = 0;
            GetWindowThreadProcessId(hwnd, &mut owner_pid);
            if owner_pid != pid {
                return WalkControl::Continue;
            }

            // An owner window without a minimize box is not eligible;
            // keep searching instead of stopping on it.
            let style = GetWindowLongW(hwnd, GWL_STYLE) as u32;
            if style & WS_MINIMIZEBOX == 0 {
                return WalkControl::Continue;
            }

            ShowWindow(hwnd, SW_MINIMIZE);
            minimized = true;
            WalkControl::Stop
        }
    });

    minimized
}
