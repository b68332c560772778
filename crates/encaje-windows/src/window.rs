use std::mem;

use encaje_core::{OsResult, Rect};

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Dwm::{DWMWA_EXTENDED_FRAME_BOUNDS, DwmGetWindowAttribute};
use windows::Win32::UI::WindowsAndMessaging::{
    GetForegroundWindow, GetWindowRect, GetWindowTextLengthW, GetWindowTextW,
    GetWindowThreadProcessId, IsWindowVisible, RealGetWindowClassW, SW_MINIMIZE,
    SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOCOPYBITS, SWP_NOZORDER, SetWindowPos, ShowWindow,
};

/// A top-level window, wrapping a Win32 `HWND`.
///
/// The handle is an opaque identifier; all metadata is queried from
/// the OS on demand and never cached.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

/// The invisible drop-shadow border widths around a window.
///
/// `GetWindowRect` includes them, the DWM extended frame does not.
/// Typical values are ~7px left/right/bottom and 0px top.
struct BorderOffset {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Window {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Returns the window currently holding keyboard focus, or `None`
    /// when the OS reports no foreground window (e.g. the desktop
    /// itself is focused). Callers degrade to a no-op in that case.
    pub fn foreground() -> Option<Self> {
        // SAFETY: GetForegroundWindow takes no arguments and returns a
        // possibly-null HWND.
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.is_invalid() {
            encaje_core::log_warn!("No foreground window found");
            return None;
        }
        Some(Self::new(hwnd))
    }

    /// Returns the window title, for logging.
    pub fn title(&self) -> String {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW read window
        // text without modifying state. +1 for the null terminator.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length == 0 {
                return String::new();
            }
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            String::from_utf16_lossy(&buffer[..copied as usize])
        }
    }

    /// Returns the window class name.
    pub fn class(&self) -> String {
        // SAFETY: RealGetWindowClassW reads the class name; 256 is the
        // maximum class name length in Win32.
        unsafe {
            let mut buffer = [0u16; 256];
            let length = RealGetWindowClassW(self.hwnd, &mut buffer);
            String::from_utf16_lossy(&buffer[..length as usize])
        }
    }

    /// Returns the pid of the process owning this window (0 on failure).
    pub fn process_id(&self) -> u32 {
        let mut pid = 0u32;
        // SAFETY: GetWindowThreadProcessId writes the owning process id
        // through the out pointer.
        unsafe {
            GetWindowThreadProcessId(self.hwnd, Some(&mut pid));
        }
        pid
    }

    pub fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query returning a BOOL.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }

    /// Returns the visible bounds of the window.
    ///
    /// Prefers the DWM extended frame (what the user actually sees),
    /// falling back to `GetWindowRect` when DWM is unavailable.
    pub fn rect(&self) -> OsResult<Rect> {
        let frame = self.visible_frame()?;
        Ok(Rect::new(frame.left, frame.top, frame.right, frame.bottom))
    }

    /// Moves and resizes the window in one atomic call.
    ///
    /// Z-order and activation are untouched (`SWP_NOZORDER |
    /// SWP_NOACTIVATE`); the invisible borders are compensated so the
    /// visible frame lands exactly on `rect`.
    pub fn set_rect(&self, rect: &Rect) -> OsResult<()> {
        let border = self.border_offset()?;

        let x = rect.left - border.left;
        let y = rect.top - border.top;
        let cx = rect.width() + border.left + border.right;
        let cy = rect.height() + border.top + border.bottom;

        // SWP_NOCOPYBITS discards old client-area contents instead of
        // blitting them, avoiding stale surfaces after the move.
        let mut flags = SWP_NOZORDER | SWP_NOACTIVATE | SWP_NOCOPYBITS;

        // GPU-composited apps (Chrome, Electron, Firefox) only refresh
        // their rendering surface when WM_NCCALCSIZE fires, which
        // SWP_FRAMECHANGED forces. It also lets windows enforce size
        // constraints, so it is limited to the classes that need it.
        if self.needs_frame_changed() {
            flags |= SWP_FRAMECHANGED;
        }

        encaje_core::log_debug!(
            "set_rect 0x{:X}: target({},{} {}x{})",
            self.hwnd.0 as usize,
            rect.left,
            rect.top,
            rect.width(),
            rect.height()
        );

        // SAFETY: SetWindowPos with a valid HWND is safe.
        unsafe { SetWindowPos(self.hwnd, None, x, y, cx, cy, flags)? };
        Ok(())
    }

    /// Minimizes the window. Fire-and-forget: the result is ignored so
    /// a window that vanished mid-batch cannot abort anything.
    pub fn minimize(&self) {
        // SAFETY: ShowWindow is safe to call with any HWND value.
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_MINIMIZE);
        }
    }

    fn needs_frame_changed(&self) -> bool {
        let class = self.class();
        class == "Chrome_WidgetWin_1" || class == "MozillaWindowClass"
    }

    fn visible_frame(&self) -> OsResult<RECT> {
        let mut frame = RECT::default();
        // SAFETY: DwmGetWindowAttribute fills the RECT with the
        // extended frame bounds; the size argument matches.
        let result = unsafe {
            DwmGetWindowAttribute(
                self.hwnd,
                DWMWA_EXTENDED_FRAME_BOUNDS,
                &mut frame as *mut RECT as *mut _,
                mem::size_of::<RECT>() as u32,
            )
        };

        if result.is_err() {
            // SAFETY: GetWindowRect fills the RECT on success.
            unsafe { GetWindowRect(self.hwnd, &mut frame)? };
        }

        Ok(frame)
    }

    /// Invisible border widths: `GetWindowRect` (includes borders)
    /// minus the DWM extended frame (visible area).
    fn border_offset(&self) -> OsResult<BorderOffset> {
        let mut window_rect = RECT::default();
        // SAFETY: GetWindowRect fills the RECT on success.
        unsafe { GetWindowRect(self.hwnd, &mut window_rect)? };

        let frame = self.visible_frame()?;

        Ok(BorderOffset {
            left: frame.left - window_rect.left,
            top: frame.top - window_rect.top,
            right: window_rect.right - frame.right,
            bottom: window_rect.bottom - frame.bottom,
        })
    }
}
