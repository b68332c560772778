use std::sync::mpsc::Sender;
use std::thread;

use encaje_core::{Action, Binding, HotkeyRegistry, OsResult};
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, MSG, PostThreadMessageW, TranslateMessage, WM_HOTKEY, WM_QUIT,
};

use crate::listener::Win32Listener;

/// Starts the Win32 hotkey loop on a new thread.
///
/// The thread owns the hotkey registry: all bindings are registered on
/// its message queue, `WM_HOTKEY` messages are resolved to actions and
/// sent through `action_tx`, and dropping the registry on exit
/// unregisters everything. Replacing the binding set means stopping
/// this loop and starting a fresh one — the registry is never mutated
/// from another thread.
pub fn start(action_tx: Sender<Action>, bindings: Vec<Binding>) -> OsResult<EventLoopHandle> {
    let (ready_tx, ready_rx) = std::sync::mpsc::channel::<(u32, Vec<String>)>();

    let handle = thread::spawn(move || {
        // SAFETY: GetCurrentThreadId takes no arguments.
        let thread_id = unsafe { windows::Win32::System::Threading::GetCurrentThreadId() };

        let mut registry = HotkeyRegistry::new(Win32Listener::new());
        let failures = registry.rebuild_all(&bindings);

        let _ = ready_tx.send((thread_id, failures));

        run_message_pump(&registry, &action_tx);

        // Hotkeys are unregistered when the listener drops.
        drop(registry);
    });

    let (thread_id, failures) = ready_rx
        .recv()
        .map_err(|_| -> Box<dyn std::error::Error> {
            "hotkey loop thread exited unexpectedly".into()
        })?;

    Ok(EventLoopHandle {
        thread_id,
        handle,
        failures,
    })
}

/// Handle for controlling the hotkey loop from the daemon.
pub struct EventLoopHandle {
    thread_id: u32,
    handle: thread::JoinHandle<()>,
    failures: Vec<String>,
}

impl EventLoopHandle {
    /// Registration failures collected during startup, for surfacing
    /// to the user. Failures never abort the remaining bindings.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Signals the loop to stop and waits for the thread to finish.
    pub fn stop(self) {
        // SAFETY: PostThreadMessageW enqueues WM_QUIT on the loop's
        // message queue, ending GetMessageW.
        unsafe {
            let _ = PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
        }
        let _ = self.handle.join();
    }
}

/// The Win32 message pump. Resolves hotkey messages and blocks until
/// WM_QUIT is received.
fn run_message_pump(registry: &HotkeyRegistry<Win32Listener>, actions: &Sender<Action>) {
    let mut msg = MSG::default();

    // SAFETY: GetMessageW blocks until a message arrives and returns
    // false on WM_QUIT.
    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        if msg.message == WM_HOTKEY {
            let slot = msg.wParam.0 as i32;
            let action = registry
                .listener()
                .hotkey_for(slot)
                .and_then(|id| registry.action_for(id));
            if let Some(action) = action {
                let _ = actions.send(action.clone());
            }
            continue;
        }

        // SAFETY: standard message dispatching.
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}
