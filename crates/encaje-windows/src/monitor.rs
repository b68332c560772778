use std::mem;

use encaje_core::{OsResult, Rect};

use windows::Win32::Foundation::{HWND, POINT};
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, HMONITOR, MONITOR_DEFAULTTONEAREST, MONITORINFO, MONITORINFOF_PRIMARY,
    MonitorFromPoint, MonitorFromWindow,
};
use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;

/// A monitor snapshot: full bounds plus the usable work area.
///
/// Never cached — display configuration can change at any time
/// (reconnect, resolution change), so every action queries afresh.
#[derive(Debug, Clone, Copy)]
pub struct Monitor {
    /// Opaque monitor handle, kept for logging.
    pub handle: isize,
    /// Full monitor bounds, including taskbar space.
    pub bounds: Rect,
    /// Bounds minus taskbar and docked toolbars; placement target.
    pub work_area: Rect,
    pub is_primary: bool,
}

/// Resolves the monitor owning (or nearest to) the given window.
///
/// `MONITOR_DEFAULTTONEAREST` guarantees a monitor even for windows
/// dragged off every display.
pub fn for_window(hwnd: HWND) -> OsResult<Monitor> {
    // SAFETY: MonitorFromWindow always returns a monitor handle with
    // the DEFAULTTONEAREST fallback.
    let monitor = unsafe { MonitorFromWindow(hwnd, MONITOR_DEFAULTTONEAREST) };
    info(monitor)
}

/// Resolves the monitor under the current cursor position.
///
/// The minimize-all gesture uses this so it acts on whichever display
/// the user is pointing at, not the one holding keyboard focus.
pub fn under_cursor() -> OsResult<Monitor> {
    let mut point = POINT::default();
    // SAFETY: GetCursorPos writes the cursor position into the POINT.
    unsafe { GetCursorPos(&mut point)? };

    // SAFETY: MonitorFromPoint always returns a monitor handle with
    // the DEFAULTTONEAREST fallback.
    let monitor = unsafe { MonitorFromPoint(point, MONITOR_DEFAULTTONEAREST) };
    info(monitor)
}

/// Queries bounds and work area for a monitor handle.
fn info(monitor: HMONITOR) -> OsResult<Monitor> {
    let mut info = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    // SAFETY: GetMonitorInfoW fills the MONITORINFO struct; cbSize is
    // set as the API requires.
    let success = unsafe { GetMonitorInfoW(monitor, &mut info) };
    if !success.as_bool() {
        return Err("Failed to get monitor info".into());
    }

    let rc = info.rcMonitor;
    let rw = info.rcWork;
    Ok(Monitor {
        handle: monitor.0 as isize,
        bounds: Rect::new(rc.left, rc.top, rc.right, rc.bottom),
        work_area: Rect::new(rw.left, rw.top, rw.right, rw.bottom),
        is_primary: info.dwFlags & MONITORINFOF_PRIMARY != 0,
    })
}
