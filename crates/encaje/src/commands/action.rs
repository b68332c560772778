use encaje_core::Action;
use encaje_core::ipc::{Command, ResponseStatus};

/// Sends a one-off action to the running daemon.
pub fn execute(action: Action) {
    if !encaje_windows::ipc::is_daemon_running() {
        eprintln!("Encaje is not running. Start it with 'encaje start'.");
        std::process::exit(1);
    }

    match encaje_windows::ipc::send_command(&Command::Action { action }) {
        Ok(response) if response.status == ResponseStatus::Ok => {
            if let Some(message) = response.message {
                println!("{message}");
            }
        }
        Ok(response) => {
            eprintln!(
                "Error: {}",
                response.message.unwrap_or("unknown error".into())
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("IPC failed: {e}");
            std::process::exit(1);
        }
    }
}
