pub mod action;
pub mod bindings;
pub mod geometry;
pub mod hotkey;
pub mod ipc;
pub mod log;
pub mod pid;
pub mod rect;
pub mod registry;
pub mod sequence;
pub mod settings;

pub use action::Action;
pub use ipc::{Command, PIPE_NAME, Response};
pub use rect::Rect;
pub use registry::{Binding, HotkeyListener, HotkeyRegistry};
pub use sequence::{FireOutcome, MinimizeSequence};
pub use settings::Settings;

/// A boxed error type for OS-facing operations.
///
/// Any error that implements the `Error` trait can be boxed into this;
/// the platform crate propagates Win32 failures through it with `?`.
pub type OsResult<T> = Result<T, Box<dyn std::error::Error>>;
