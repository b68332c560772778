use std::os::windows::process::CommandExt;
use std::process::Command;

/// Windows process creation flags for launching a fully detached daemon.
///
/// `CREATE_NEW_PROCESS_GROUP` (0x200) — the daemon gets its own process
/// group, so Ctrl+C in the CLI terminal won't kill it.
///
/// `CREATE_NO_WINDOW` (0x08000000) — no console window, and no
/// inherited console handles that would keep the parent alive.
const DETACH_FLAGS: u32 = 0x08000000 | 0x00000200;

pub fn execute() {
    if encaje_windows::ipc::is_daemon_running() {
        println!("Encaje is already running.");
        return;
    }

    // Clean up a stale PID file from a previous unclean shutdown.
    if let Ok(Some(pid)) = encaje_core::pid::read_pid_file() {
        if encaje_windows::process::is_process_alive(pid) {
            println!("Encaje process exists (PID: {pid}) but is not responding.");
            return;
        }
        let _ = encaje_core::pid::remove_pid_file();
    }

    let exe = std::env::current_exe().expect("failed to get current executable path");

    // Re-run ourselves with the hidden `daemon` subcommand, fully
    // detached so this CLI process can exit immediately.
    let mut child = Command::new(exe)
        .arg("daemon")
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .creation_flags(DETACH_FLAGS)
        .spawn()
        .expect("failed to start daemon");

    let pid = child.id();

    // Acknowledge the child without blocking, then drop our handle.
    let _ = child.try_wait();

    println!("Encaje started (PID: {pid}).");
    println!("Settings: ~/.config/encaje/settings.json");
}
