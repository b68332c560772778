use std::sync::atomic::Ordering;
use std::sync::mpsc;

use encaje_core::ipc::{Command, Response};
use encaje_core::{OsResult, Settings, bindings, settings};
use windows::Win32::UI::Shell::ShellExecuteW;
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;
use windows::core::{HSTRING, PCWSTR, w};

use crate::engine::Engine;
use crate::event_loop::{self, EventLoopHandle};
use crate::{autostart, ctrl_c, notify, tray};

use super::daemon_threads;
use super::daemon_types::DaemonMsg;

/// The inner daemon loop, separated so cleanup always runs in `run()`.
pub(super) fn daemon_loop() -> OsResult<()> {
    let mut current = settings::load();
    sync_autostart(&current);

    let (tx, rx) = mpsc::channel::<DaemonMsg>();

    // Hotkey loop on its own thread; kept as an Option because a
    // settings reload replaces it wholesale.
    let (action_tx, action_rx) = mpsc::channel();
    let mut hotkey_loop = Some(start_hotkey_loop(&action_tx, &current)?);

    // Bridge: forward hotkey actions into the unified channel.
    let action_bridge = daemon_threads::spawn_action_bridge(action_rx, tx.clone());

    // Tray icon on its own thread. A failed tray is logged, not fatal:
    // hotkeys still work without it.
    let (tray_tx, tray_rx) = mpsc::channel();
    let mut tray_handle = match tray::start(tray_tx) {
        Ok(handle) => Some(handle),
        Err(e) => {
            encaje_core::log_warn!("Could not start tray icon: {e}");
            None
        }
    };
    let tray_bridge = daemon_threads::spawn_tray_bridge(tray_rx, tx.clone());

    // IPC listener and settings watcher on their own threads.
    let _ipc_thread = daemon_threads::spawn_ipc_listener(tx.clone());
    let (watcher_stop, watcher_thread, reload_bridge) =
        daemon_threads::spawn_settings_watcher(tx.clone());

    // Ctrl+C for console runs.
    let (interrupt_tx, interrupt_rx) = mpsc::channel();
    ctrl_c::set_handler(interrupt_tx);
    let interrupt_bridge = daemon_threads::spawn_interrupt_bridge(interrupt_rx, tx.clone());

    let mut engine = Engine::new();

    // Main processing loop — blocks until a message arrives.
    while let Ok(msg) = rx.recv() {
        match msg {
            DaemonMsg::Action(action) => engine.handle(&action),
            DaemonMsg::Command(command, reply_tx) => {
                let stop = matches!(command, Command::Stop);
                let response = handle_command(&command, &mut engine);
                let _ = reply_tx.send(response);
                if stop {
                    encaje_core::log_info!("Stop command received, shutting down");
                    break;
                }
            }
            DaemonMsg::Reload(new_settings) => {
                current = new_settings;
                sync_autostart(&current);

                // Tear the whole hotkey set down before re-registering:
                // RegisterHotKey rejects combinations that are still
                // held, so the old loop must be gone first. The brief
                // gap with no hotkeys registered is accepted.
                if let Some(old) = hotkey_loop.take() {
                    old.stop();
                }
                match start_hotkey_loop(&action_tx, &current) {
                    Ok(handle) => hotkey_loop = Some(handle),
                    Err(e) => encaje_core::log_error!("Could not restart hotkey loop: {e}"),
                }
                encaje_core::log_info!("Hotkeys rebuilt from saved settings");
            }
            DaemonMsg::Tray(tray::TrayCommand::Restore) => open_settings_file(),
            DaemonMsg::Tray(tray::TrayCommand::Exit) => {
                encaje_core::log_info!("Exit requested from tray");
                break;
            }
            DaemonMsg::Interrupt => {
                encaje_core::log_info!("Interrupted, shutting down");
                break;
            }
        }
    }

    // Shutdown order: watcher first, then the hotkey loop (unregisters
    // everything), then the tray — its thread must not outlive us.
    watcher_stop.store(true, Ordering::Relaxed);
    if let Some(handle) = hotkey_loop.take() {
        handle.stop();
    }
    if let Some(handle) = tray_handle.take() {
        handle.stop();
    }

    // Bridges exit once their senders are gone.
    drop(action_tx);
    drop(tx);
    let _ = action_bridge.join();
    let _ = tray_bridge.join();
    let _ = interrupt_bridge.join();
    let _ = watcher_thread.join();
    let _ = reload_bridge.join();

    Ok(())
}

/// Starts the hotkey loop for the given settings and surfaces any
/// registration failures to the user.
fn start_hotkey_loop(
    action_tx: &mpsc::Sender<encaje_core::Action>,
    current: &Settings,
) -> OsResult<EventLoopHandle> {
    let handle = event_loop::start(action_tx.clone(), bindings::from_settings(current))?;
    notify::registration_failures(handle.failures());
    Ok(handle)
}

fn handle_command(command: &Command, engine: &mut Engine) -> Response {
    match command {
        Command::Stop => Response::ok_with_message("Daemon stopping"),
        Command::Status => Response::ok_with_message(format!(
            "Daemon is running (PID: {})",
            std::process::id()
        )),
        Command::Action { action } => {
            engine.handle(action);
            Response::ok()
        }
    }
}

fn sync_autostart(current: &Settings) {
    if let Err(e) = autostart::sync(current.startup) {
        encaje_core::log_warn!("Could not update autostart entry: {e}");
    }
}

/// Opens the settings file with its default handler ("Restore" from
/// the tray). A first run has no file yet, so one is written first.
fn open_settings_file() {
    let Some(path) = settings::settings_path() else {
        return;
    };
    if !path.exists()
        && let Err(e) = settings::save(&Settings::default())
    {
        encaje_core::log_warn!("Could not create settings file: {e}");
        return;
    }

    let file = HSTRING::from(path.as_os_str());
    // SAFETY: ShellExecuteW launches the registered handler for the
    // file; the returned HINSTANCE is only an error indicator.
    unsafe {
        ShellExecuteW(
            None,
            w!("open"),
            &file,
            PCWSTR::null(),
            PCWSTR::null(),
            SW_SHOWNORMAL,
        );
    }
    encaje_core::log_info!("Opened settings file");
}
