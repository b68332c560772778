use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc;
use std::thread;

use encaje_core::{Action, Settings};

use crate::tray::TrayCommand;

use super::daemon_types::DaemonMsg;

/// Bridges hotkey actions into the daemon message channel.
pub(super) fn spawn_action_bridge(
    action_rx: mpsc::Receiver<Action>,
    tx: mpsc::Sender<DaemonMsg>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        for action in action_rx {
            if tx.send(DaemonMsg::Action(action)).is_err() {
                break;
            }
        }
    })
}

/// Bridges tray menu picks into the daemon message channel.
pub(super) fn spawn_tray_bridge(
    tray_rx: mpsc::Receiver<TrayCommand>,
    tx: mpsc::Sender<DaemonMsg>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        for command in tray_rx {
            if tx.send(DaemonMsg::Tray(command)).is_err() {
                break;
            }
        }
    })
}

/// Spawns the IPC listener thread.
///
/// The handle is not joined on shutdown: the listener blocks in
/// `ConnectNamedPipe` until a client connects and dies with the
/// process when the stop came from elsewhere.
pub(super) fn spawn_ipc_listener(tx: mpsc::Sender<DaemonMsg>) -> thread::JoinHandle<()> {
    thread::spawn(move || crate::ipc::listen(tx))
}

/// Spawns the settings watcher thread and a bridge into the daemon
/// channel. The returned flag stops the watcher.
pub(super) fn spawn_settings_watcher(
    tx: mpsc::Sender<DaemonMsg>,
) -> (
    Arc<AtomicBool>,
    thread::JoinHandle<()>,
    thread::JoinHandle<()>,
) {
    let (reload_tx, reload_rx) = mpsc::channel::<Settings>();
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = stop.clone();
    let watcher_thread = thread::spawn(move || crate::settings_watcher::watch(reload_tx, stop_flag));

    let reload_bridge = thread::spawn(move || {
        for settings in reload_rx {
            if tx.send(DaemonMsg::Reload(settings)).is_err() {
                break;
            }
        }
    });

    (stop, watcher_thread, reload_bridge)
}

/// Bridges Ctrl+C notifications into the daemon message channel.
pub(super) fn spawn_interrupt_bridge(
    interrupt_rx: mpsc::Receiver<()>,
    tx: mpsc::Sender<DaemonMsg>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        for () in interrupt_rx {
            if tx.send(DaemonMsg::Interrupt).is_err() {
                break;
            }
        }
    })
}
