//! User-visible notices for a process with no console.

use windows::Win32::UI::WindowsAndMessaging::{MB_ICONERROR, MB_OK, MessageBoxW};
use windows::core::{HSTRING, w};

/// Shows the collected hotkey-registration failures in a blocking
/// message box.
///
/// The box is raised from its own thread: a modal dialog must not
/// stall hotkey delivery or the daemon loop while it waits for the
/// user to dismiss it.
pub fn registration_failures(failures: &[String]) {
    if failures.is_empty() {
        return;
    }
    for failure in failures {
        encaje_core::log_error!("Hotkey registration failed: {failure}");
    }

    let text = format!(
        "Some hotkeys could not be registered:\n\n{}",
        failures.join("\n")
    );
    std::thread::spawn(move || {
        // SAFETY: MessageBoxW blocks this helper thread until the user
        // dismisses the dialog.
        unsafe {
            let _ = MessageBoxW(None, &HSTRING::from(text), w!("Encaje"), MB_OK | MB_ICONERROR);
        }
    });
}
