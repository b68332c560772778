pub fn execute() {
    if let Err(e) = encaje_windows::daemon::run() {
        eprintln!("Daemon error: {e}");
        std::process::exit(1);
    }
}
