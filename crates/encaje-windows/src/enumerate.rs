use encaje_core::OsResult;

use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::EnumWindows;
use windows::core::BOOL;

use crate::window::Window;

/// Enumerates every top-level window on the system, unfiltered.
///
/// The minimize batch applies its own predicate (visibility, owning
/// process, monitor intersection), so nothing is excluded here.
pub fn top_level_windows() -> OsResult<Vec<Window>> {
    let mut windows: Vec<Window> = Vec::new();

    // SAFETY: EnumWindows calls our callback synchronously for each
    // top-level window. The LPARAM carries a pointer to the Vec, which
    // outlives the call.
    unsafe {
        EnumWindows(
            Some(enum_window_callback),
            LPARAM(&mut windows as *mut _ as isize),
        )?;
    }

    Ok(windows)
}

/// Callback invoked by `EnumWindows` for each top-level window.
///
/// Win32 can't call Rust closures directly: the callback uses the
/// Windows calling convention and the Vec pointer travels through the
/// LPARAM user-data slot.
unsafe extern "system" fn enum_window_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the Vec<Window> pointer cast in top_level_windows.
    let windows = unsafe { &mut *(lparam.0 as *mut Vec<Window>) };
    windows.push(Window::new(hwnd));
    BOOL(1) // TRUE — continue enumerating
}
