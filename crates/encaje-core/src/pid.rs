use std::fs;
use std::path::PathBuf;

use crate::OsResult;

/// Returns the path to the PID file, creating the data directory
/// (`%LOCALAPPDATA%\encaje`) if needed.
pub fn pid_path() -> OsResult<PathBuf> {
    // LOCALAPPDATA is the standard per-user data location on Windows.
    let base =
        std::env::var("LOCALAPPDATA").map_err(|_| "LOCALAPPDATA environment variable not set")?;
    let dir = PathBuf::from(base).join("encaje");
    fs::create_dir_all(&dir)?;
    Ok(dir.join("encaje.pid"))
}

/// Writes the current process's PID. Called when the daemon starts;
/// lets the CLI detect a running daemon even when the pipe check
/// fails, and forcibly kill a stuck one.
pub fn write_pid_file() -> OsResult<()> {
    let path = pid_path()?;
    fs::write(&path, std::process::id().to_string())?;
    Ok(())
}

/// Reads the PID from the PID file, if it exists.
pub fn read_pid_file() -> OsResult<Option<u32>> {
    let path = pid_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)?;
    let pid: u32 = contents
        .trim()
        .parse()
        .map_err(|e| format!("invalid PID file contents: {e}"))?;
    Ok(Some(pid))
}

/// Removes the PID file. Called on clean daemon shutdown.
pub fn remove_pid_file() -> OsResult<()> {
    let path = pid_path()?;
    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(())
}
