pub mod autostart;
pub mod ctrl_c;
pub mod daemon;
pub mod engine;
pub mod enumerate;
pub mod event_loop;
pub mod ipc;
pub mod keys;
pub mod listener;
pub mod monitor;
pub mod notify;
pub mod process;
pub mod settings_watcher;
pub mod tray;
pub mod window;

pub use monitor::Monitor;
pub use window::Window;
