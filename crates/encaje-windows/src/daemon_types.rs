use std::sync::mpsc;

use encaje_core::Action;
use encaje_core::Settings;
use encaje_core::ipc::{Command, Response};

use crate::tray::TrayCommand;

/// Internal message type for the main daemon thread.
pub enum DaemonMsg {
    /// A hotkey press resolved to an action by the event loop.
    Action(Action),
    /// A CLI command with a callback to send the response.
    Command(Command, ResponseSender),
    /// A validated settings reload from the file watcher.
    Reload(Settings),
    /// A tray menu pick.
    Tray(TrayCommand),
    /// Ctrl+C during a console run.
    Interrupt,
}

/// Sends a response back to the IPC thread for the connected client.
pub type ResponseSender = mpsc::Sender<Response>;
