use serde::{Deserialize, Serialize};

/// An action that can be triggered by a hotkey or CLI command.
///
/// Every registered hotkey resolves to one of these variants; a single
/// handler in the daemon dispatches them. Actions operate on whatever
/// window holds keyboard focus at the moment they fire, except the two
/// sequence variants which drive the minimize-all gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Resize the focused window to a fraction of the monitor work area.
    ///
    /// A scale of 1.0 fills the work area ("fullscreen" without
    /// changing the window style).
    Resize { scale: f64 },
    /// Center the focused window without changing its size.
    Center,
    /// Resize using a user-defined percentage of the work area.
    CustomResize { percentage: f64 },
    /// Arm the minimize-all sequence.
    ArmSequence,
    /// Confirm the minimize-all sequence.
    FireSequence,
}
