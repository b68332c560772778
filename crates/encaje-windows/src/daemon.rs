use encaje_core::{OsResult, pid};

#[path = "daemon_loop.rs"]
mod daemon_loop;
#[path = "daemon_threads.rs"]
mod daemon_threads;
#[path = "daemon_types.rs"]
mod daemon_types;

pub use daemon_types::{DaemonMsg, ResponseSender};

/// Runs the Encaje daemon.
///
/// Starts background threads for the Win32 hotkey loop, the tray
/// icon, the IPC listener, and the settings watcher. The main thread
/// executes every window action.
pub fn run() -> OsResult<()> {
    encaje_core::log::init();
    pid::write_pid_file()?;
    encaje_core::log_info!("Daemon started (PID: {})", std::process::id());

    let result = daemon_loop::daemon_loop();

    let _ = pid::remove_pid_file();
    encaje_core::log_info!("Daemon stopped");

    result
}
