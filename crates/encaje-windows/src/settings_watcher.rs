//! Watches the settings file and sends validated reloads.
//!
//! Uses `FindFirstChangeNotificationW` on the config directory plus an
//! mtime check on `settings.json`. Only documents that parse cleanly
//! are sent — editors write non-atomically, and a half-saved file must
//! not wipe the live hotkey set.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::time::SystemTime;

use windows::Win32::Foundation::WAIT_OBJECT_0;
use windows::Win32::Storage::FileSystem::{
    FILE_NOTIFY_CHANGE_FILE_NAME, FILE_NOTIFY_CHANGE_LAST_WRITE, FindCloseChangeNotification,
    FindFirstChangeNotificationW, FindNextChangeNotification,
};
use windows::Win32::System::Threading::WaitForSingleObject;
use windows::core::HSTRING;

use encaje_core::{Settings, settings};

/// Timeout between stop-flag checks when no changes occur (ms).
const WAIT_TIMEOUT_MS: u32 = 5000;

/// Runs the watcher loop. Blocks until the stop flag is set or the
/// receiver is dropped.
pub fn watch(tx: Sender<Settings>, stop: Arc<AtomicBool>) {
    let Some(dir) = settings::config_dir() else {
        encaje_core::log_info!("config dir not found, watcher exiting");
        return;
    };
    let Some(path) = settings::settings_path() else {
        return;
    };

    let mut last_mtime = mtime(&path);

    let dir_str = HSTRING::from(dir.as_os_str());
    let flags = FILE_NOTIFY_CHANGE_LAST_WRITE | FILE_NOTIFY_CHANGE_FILE_NAME;

    // SAFETY: FindFirstChangeNotificationW opens a change-notification
    // handle on the directory; closed below.
    let handle = unsafe { FindFirstChangeNotificationW(&dir_str, false, flags) };
    let Ok(handle) = handle else {
        encaje_core::log_info!("FindFirstChangeNotificationW failed, watcher exiting");
        return;
    };

    while !stop.load(Ordering::Relaxed) {
        // SAFETY: WaitForSingleObject blocks until the handle signals
        // or the timeout elapses.
        let result = unsafe { WaitForSingleObject(handle, WAIT_TIMEOUT_MS) };
        if stop.load(Ordering::Relaxed) {
            break;
        }
        if result != WAIT_OBJECT_0 {
            continue; // timeout or error — loop back to check the flag
        }

        let new_mtime = mtime(&path);
        if new_mtime != last_mtime {
            last_mtime = new_mtime;
            match settings::try_load() {
                Ok(new_settings) => {
                    encaje_core::log_info!("settings.json changed, reloading");
                    if tx.send(new_settings).is_err() {
                        break; // receiver dropped
                    }
                }
                Err(e) => {
                    encaje_core::log_info!("settings.json invalid, skipping: {e}");
                }
            }
        }

        // SAFETY: re-arms the notification for the next change.
        let _ = unsafe { FindNextChangeNotification(handle) };
    }

    // SAFETY: closes the handle opened above.
    let _ = unsafe { FindCloseChangeNotification(handle) };
}

/// Modification time, or `None` if the file is unreadable.
fn mtime(path: &std::path::Path) -> Option<SystemTime> {
    path.metadata().ok().and_then(|m| m.modified().ok())
}
