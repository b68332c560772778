use windows::Win32::Foundation::CloseHandle;
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION, PROCESS_TERMINATE, TerminateProcess,
};

/// Checks whether a process with the given PID is still alive.
///
/// Used to detect stale PID files left behind when the daemon was
/// killed without a clean shutdown.
pub fn is_process_alive(pid: u32) -> bool {
    // SAFETY: OpenProcess with the least-privilege access right that
    // still confirms existence.
    let result = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) };

    match result {
        Ok(handle) => {
            // SAFETY: the handle was only opened to check existence.
            unsafe {
                let _ = CloseHandle(handle);
            }
            true
        }
        Err(_) => false,
    }
}

/// Forcibly terminates a process. Last resort when the daemon's IPC
/// thread is gone but the process is still alive.
pub fn kill_process(pid: u32) -> bool {
    // SAFETY: OpenProcess with terminate rights; handle closed below.
    let Ok(handle) = (unsafe { OpenProcess(PROCESS_TERMINATE, false, pid) }) else {
        return false;
    };

    // SAFETY: TerminateProcess on a handle we own.
    let killed = unsafe { TerminateProcess(handle, 1) }.is_ok();
    unsafe {
        let _ = CloseHandle(handle);
    }
    killed
}
