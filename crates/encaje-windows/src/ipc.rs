//! Named-pipe IPC between the CLI and the daemon.
//!
//! One connection carries one request: the client writes a JSON line,
//! the daemon answers with a JSON line and disconnects. Both halves
//! live here — [`listen`] runs on the daemon's IPC thread,
//! [`send_command`] is the client side used by the CLI.

use std::io::{BufRead, BufReader, Write};
use std::os::windows::io::FromRawHandle;
use std::sync::mpsc;

use encaje_core::ipc::{Command, PIPE_NAME, Response};
use encaje_core::OsResult;
use windows::Win32::Foundation::{
    CloseHandle, DUPLICATE_SAME_ACCESS, DuplicateHandle, HANDLE, INVALID_HANDLE_VALUE,
};
use windows::Win32::Storage::FileSystem::{
    CreateFileW, FILE_SHARE_NONE, FlushFileBuffers, OPEN_EXISTING, PIPE_ACCESS_DUPLEX,
};
use windows::Win32::System::Pipes::{
    ConnectNamedPipe, CreateNamedPipeW, DisconnectNamedPipe, PIPE_READMODE_BYTE, PIPE_TYPE_BYTE,
    PIPE_UNLIMITED_INSTANCES, PIPE_WAIT, WaitNamedPipeW,
};
use windows::Win32::System::Threading::GetCurrentProcess;
use windows::core::HSTRING;

use crate::daemon::{DaemonMsg, ResponseSender};

const GENERIC_READ_WRITE: u32 = 0x80000000 | 0x40000000;

/// Accepts connections in a loop and forwards commands to the daemon
/// thread. Runs on a dedicated thread; returns after serving a Stop.
pub fn listen(tx: mpsc::Sender<DaemonMsg>) {
    loop {
        let server = match PipeServer::create() {
            Ok(s) => s,
            Err(e) => {
                encaje_core::log_error!("Failed to create pipe: {e}");
                return;
            }
        };

        let command = match server.accept_command() {
            Ok(cmd) => cmd,
            Err(e) => {
                encaje_core::log_warn!("Error reading command: {e}");
                continue;
            }
        };

        let (reply_tx, reply_rx): (ResponseSender, _) = mpsc::channel();
        let is_stop = matches!(command, Command::Stop);

        if tx.send(DaemonMsg::Command(command, reply_tx)).is_err() {
            return;
        }

        if let Ok(response) = reply_rx.recv() {
            let _ = server.send_response(&response);
        }

        if is_stop {
            return;
        }
    }
}

/// One named-pipe server instance; serves a single request.
struct PipeServer {
    handle: HANDLE,
}

impl PipeServer {
    fn create() -> OsResult<Self> {
        let pipe_name = HSTRING::from(PIPE_NAME);

        // SAFETY: CreateNamedPipeW creates a new pipe instance; the
        // result is checked against INVALID_HANDLE_VALUE.
        let handle = unsafe {
            CreateNamedPipeW(
                &pipe_name,
                PIPE_ACCESS_DUPLEX,
                PIPE_TYPE_BYTE | PIPE_READMODE_BYTE | PIPE_WAIT,
                PIPE_UNLIMITED_INSTANCES,
                512, // output buffer size
                512, // input buffer size
                0,   // default timeout
                None,
            )
        };

        if handle == INVALID_HANDLE_VALUE {
            return Err("Failed to create named pipe".into());
        }

        Ok(Self { handle })
    }

    /// Blocks until a client connects, then reads one command.
    fn accept_command(&self) -> OsResult<Command> {
        // SAFETY: ConnectNamedPipe blocks until a client connects.
        unsafe {
            ConnectNamedPipe(self.handle, None)?;
        }

        let mut reader = BufReader::new(duplicate_as_file(self.handle)?);
        let mut line = String::new();
        reader.read_line(&mut line)?;

        Ok(serde_json::from_str(line.trim())?)
    }

    /// Sends the response and disconnects the client.
    fn send_response(&self, response: &Response) -> OsResult<()> {
        let mut writer = duplicate_as_file(self.handle)?;
        writeln!(writer, "{}", serde_json::to_string(response)?)?;
        writer.flush()?;

        // SAFETY: FlushFileBuffers blocks until the client has read
        // everything; disconnecting earlier would discard unread data.
        unsafe {
            let _ = FlushFileBuffers(self.handle);
        }

        // SAFETY: DisconnectNamedPipe frees the server side for the
        // next connection.
        unsafe {
            DisconnectNamedPipe(self.handle)?;
        }

        Ok(())
    }
}

impl Drop for PipeServer {
    fn drop(&mut self) {
        // SAFETY: CloseHandle releases the pipe handle.
        unsafe {
            let _ = CloseHandle(self.handle);
        }
    }
}

/// Sends a command to the daemon and returns its response (client side).
pub fn send_command(command: &Command) -> OsResult<Response> {
    let pipe_name = HSTRING::from(PIPE_NAME);

    // SAFETY: CreateFileW opens the existing named pipe as a client.
    let handle = unsafe {
        CreateFileW(
            &pipe_name,
            GENERIC_READ_WRITE,
            FILE_SHARE_NONE,
            None,
            OPEN_EXISTING,
            Default::default(),
            None,
        )?
    };

    let _guard = HandleGuard(handle);

    let mut writer = duplicate_as_file(handle)?;
    writeln!(writer, "{}", serde_json::to_string(command)?)?;
    writer.flush()?;

    let mut reader = BufReader::new(duplicate_as_file(handle)?);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    Ok(serde_json::from_str(line.trim())?)
}

/// Whether the daemon's pipe exists (i.e. the daemon is running).
///
/// `WaitNamedPipeW` with a 1 ms timeout probes existence without
/// consuming a pipe connection.
pub fn is_daemon_running() -> bool {
    let pipe_name = HSTRING::from(PIPE_NAME);
    // SAFETY: WaitNamedPipeW only checks pipe availability.
    unsafe { WaitNamedPipeW(&pipe_name, 1).as_bool() }
}

/// RAII guard that closes a HANDLE on drop.
struct HandleGuard(HANDLE);

impl Drop for HandleGuard {
    fn drop(&mut self) {
        // SAFETY: the guard owns this handle exclusively.
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

/// Duplicates a HANDLE and wraps it as a `std::fs::File`.
///
/// Duplicating lets the original handle and the File close
/// independently — no double-close.
fn duplicate_as_file(handle: HANDLE) -> OsResult<std::fs::File> {
    let mut dup = HANDLE::default();

    // SAFETY: DuplicateHandle copies the handle; the duplicate is
    // owned by the returned File and closed on its drop.
    unsafe {
        DuplicateHandle(
            GetCurrentProcess(),
            handle,
            GetCurrentProcess(),
            &mut dup,
            0,
            false,
            DUPLICATE_SAME_ACCESS,
        )?;

        Ok(std::fs::File::from_raw_handle(dup.0))
    }
}
