//! The system-tray icon, on its own thread with its own message pump.
//!
//! The menu is fixed: Restore and Exit. Menu picks are forwarded over
//! a channel to the daemon; the thread itself never touches windows or
//! settings. The handle joins on stop so no tray thread can outlive
//! the process.

use std::sync::mpsc::{self, Sender};
use std::thread;

use encaje_core::OsResult;
use tray_icon::menu::{Menu, MenuEvent, MenuId, MenuItem};
use tray_icon::{Icon, TrayIconBuilder};
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, MSG, PostThreadMessageW, TranslateMessage, WM_QUIT,
};

/// A menu pick forwarded to the daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayCommand {
    /// Open the settings file for editing.
    Restore,
    /// Shut the daemon down.
    Exit,
}

/// Handle for controlling the tray thread from the daemon.
pub struct TrayHandle {
    thread_id: u32,
    handle: thread::JoinHandle<()>,
}

impl TrayHandle {
    /// Signals the tray loop to stop and joins the thread.
    ///
    /// Must run before the daemon thread is torn down; the icon is
    /// removed when the tray object drops inside the thread.
    pub fn stop(self) {
        // SAFETY: PostThreadMessageW enqueues WM_QUIT on the tray
        // thread's message queue.
        unsafe {
            let _ = PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
        }
        let _ = self.handle.join();
    }
}

/// Starts the tray thread and shows the icon.
pub fn start(tx: Sender<TrayCommand>) -> OsResult<TrayHandle> {
    let (ready_tx, ready_rx) = mpsc::channel::<Result<u32, String>>();

    let handle = thread::spawn(move || {
        // SAFETY: GetCurrentThreadId takes no arguments.
        let thread_id = unsafe { windows::Win32::System::Threading::GetCurrentThreadId() };

        let menu = Menu::new();
        let restore = MenuItem::new("Restore", true, None);
        let exit = MenuItem::new("Exit", true, None);
        if let Err(e) = menu.append_items(&[&restore, &exit]) {
            let _ = ready_tx.send(Err(format!("could not build tray menu: {e}")));
            return;
        }
        let (restore_id, exit_id) = (restore.id().clone(), exit.id().clone());

        let tray = TrayIconBuilder::new()
            .with_tooltip("Encaje")
            .with_menu(Box::new(menu))
            .with_icon(placeholder_icon())
            .build();
        let tray = match tray {
            Ok(t) => t,
            Err(e) => {
                let _ = ready_tx.send(Err(format!("could not create tray icon: {e}")));
                return;
            }
        };

        let _ = ready_tx.send(Ok(thread_id));

        run_message_pump(&tx, &restore_id, &exit_id);

        // Dropping the tray removes the icon from the notification area.
        drop(tray);
    });

    let thread_id = ready_rx
        .recv()
        .map_err(|_| -> Box<dyn std::error::Error> { "tray thread exited unexpectedly".into() })?
        .map_err(|e| -> Box<dyn std::error::Error> { e.into() })?;

    Ok(TrayHandle { thread_id, handle })
}

/// A solid 32x32 icon.
fn placeholder_icon() -> Icon {
    const SIZE: u32 = 32;
    let mut rgba = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    for _ in 0..SIZE * SIZE {
        rgba.extend_from_slice(&[0x00, 0xB4, 0xD8, 0xFF]);
    }
    // A well-formed buffer of SIZE*SIZE RGBA pixels cannot be rejected.
    Icon::from_rgba(rgba, SIZE, SIZE).expect("valid RGBA buffer")
}

/// Blocks dispatching messages until WM_QUIT arrives.
///
/// Menu picks land on the menu-event channel while the pump
/// dispatches tray messages; the channel is drained after every
/// message so a pick is forwarded as soon as the interaction ends.
fn run_message_pump(tx: &Sender<TrayCommand>, restore_id: &MenuId, exit_id: &MenuId) {
    let mut msg = MSG::default();
    // SAFETY: standard message pump; GetMessageW returns false on
    // WM_QUIT.
    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        while let Ok(event) = MenuEvent::receiver().try_recv() {
            let command = if event.id() == restore_id {
                Some(TrayCommand::Restore)
            } else if event.id() == exit_id {
                Some(TrayCommand::Exit)
            } else {
                None
            };
            if let Some(command) = command {
                let _ = tx.send(command);
            }
        }
    }
}
