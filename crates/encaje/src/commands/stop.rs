use encaje_core::ipc::ResponseStatus;

pub fn execute() {
    // Try graceful shutdown via IPC first.
    if encaje_windows::ipc::is_daemon_running() {
        let command = encaje_core::Command::Stop;
        match encaje_windows::ipc::send_command(&command) {
            Ok(response) if response.status == ResponseStatus::Ok => {
                println!("Encaje stopped. {}", response.message.unwrap_or_default());
                let _ = encaje_core::pid::remove_pid_file();
                return;
            }
            Ok(response) => {
                eprintln!(
                    "Error: {}",
                    response.message.unwrap_or("unknown error".into())
                );
                return;
            }
            Err(e) => eprintln!("IPC failed: {e}"),
        }
    }

    // Fallback: the pipe is gone but the process may still be alive
    // (e.g. the IPC thread crashed). Check the PID file.
    match encaje_core::pid::read_pid_file() {
        Ok(Some(pid)) if encaje_windows::process::is_process_alive(pid) => {
            if encaje_windows::process::kill_process(pid) {
                let _ = encaje_core::pid::remove_pid_file();
                println!("Encaje stopped (killed PID {pid}).");
            } else {
                eprintln!("Failed to kill process {pid}.");
                std::process::exit(1);
            }
        }
        _ => {
            println!("Encaje is not running.");
        }
    }
}
