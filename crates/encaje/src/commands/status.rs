pub fn execute() {
    if encaje_windows::ipc::is_daemon_running() {
        match encaje_windows::ipc::send_command(&encaje_core::Command::Status) {
            Ok(response) => println!("{}", response.message.unwrap_or("Encaje is running.".into())),
            Err(_) => println!("Encaje is running."),
        }
        return;
    }

    // Pipe isn't responding — check for a stale PID file left behind
    // by a daemon that was killed without a clean shutdown.
    if let Ok(Some(pid)) = encaje_core::pid::read_pid_file() {
        if encaje_windows::process::is_process_alive(pid) {
            println!("Encaje process exists (PID: {pid}) but is not responding.");
        } else {
            let _ = encaje_core::pid::remove_pid_file();
            println!("Encaje is not running (cleaned up stale PID file).");
        }
    } else {
        println!("Encaje is not running.");
    }
}
