//! The action handler: every hotkey and CLI action goes through
//! [`Engine::handle`].
//!
//! Geometry actions operate on the foreground window and silently
//! degrade to a no-op when there is none. The monitor is re-queried
//! for every action so display changes never go stale.

use std::time::Instant;

use encaje_core::{Action, FireOutcome, MinimizeSequence, geometry};

use crate::enumerate;
use crate::monitor;
use crate::window::Window;

/// Dispatches actions and carries the minimize-sequence state.
pub struct Engine {
    sequence: MinimizeSequence,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            sequence: MinimizeSequence::new(),
        }
    }

    pub fn handle(&mut self, action: &Action) {
        match action {
            Action::Resize { scale } => resize_foreground(*scale),
            Action::CustomResize { percentage } => resize_foreground(percentage / 100.0),
            Action::Center => center_foreground(),
            Action::ArmSequence => {
                self.sequence.arm(Instant::now());
                encaje_core::log_info!("Minimize sequence started");
            }
            Action::FireSequence => self.confirm_sequence(),
        }
    }

    fn confirm_sequence(&mut self) {
        match self.sequence.fire(Instant::now()) {
            FireOutcome::Fire => {
                minimize_monitor_under_cursor();
                encaje_core::log_info!("Minimize sequence completed");
            }
            FireOutcome::TimedOut => encaje_core::log_info!("Minimize sequence timed out"),
            FireOutcome::NotArmed => encaje_core::log_info!("Minimize sequence not started"),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Resizes the foreground window to a fraction of its monitor's work
/// area, centered. No-op when no window has focus.
fn resize_foreground(scale: f64) {
    let Some(window) = Window::foreground() else {
        return;
    };
    let monitor = match monitor::for_window(window.hwnd()) {
        Ok(m) => m,
        Err(e) => {
            encaje_core::log_warn!("Could not resolve monitor: {e}");
            return;
        }
    };

    let target = geometry::scaled_rect(&monitor.work_area, scale);
    match window.set_rect(&target) {
        Ok(()) => encaje_core::log_info!(
            "Resized {:?} to {}x{} at ({}, {})",
            window.title(),
            target.width(),
            target.height(),
            target.left,
            target.top
        ),
        Err(e) => encaje_core::log_warn!("Could not resize window: {e}"),
    }
}

/// Centers the foreground window in its monitor's work area without
/// changing its size.
fn center_foreground() {
    let Some(window) = Window::foreground() else {
        return;
    };
    let current = match window.rect() {
        Ok(r) => r,
        Err(e) => {
            encaje_core::log_warn!("Could not read window rect: {e}");
            return;
        }
    };
    let monitor = match monitor::for_window(window.hwnd()) {
        Ok(m) => m,
        Err(e) => {
            encaje_core::log_warn!("Could not resolve monitor: {e}");
            return;
        }
    };

    let target = geometry::centered_rect(&monitor.work_area, current.width(), current.height());
    match window.set_rect(&target) {
        Ok(()) => encaje_core::log_info!(
            "Centered {:?} at ({}, {})",
            window.title(),
            target.left,
            target.top
        ),
        Err(e) => encaje_core::log_warn!("Could not center window: {e}"),
    }
}

/// Minimizes every qualifying window on the monitor under the cursor.
///
/// Qualifying: visible, not owned by this process, and its visible
/// rect shares interior area with the monitor's *full* bounds (the
/// taskbar region counts; the open-interval test excludes windows that
/// only touch the monitor edge). Fire-and-forget per window — one that
/// closes mid-batch is skipped, never aborting the rest.
fn minimize_monitor_under_cursor() {
    let monitor = match monitor::under_cursor() {
        Ok(m) => m,
        Err(e) => {
            encaje_core::log_warn!("Could not resolve monitor under cursor: {e}");
            return;
        }
    };
    let windows = match enumerate::top_level_windows() {
        Ok(w) => w,
        Err(e) => {
            encaje_core::log_warn!("Could not enumerate windows: {e}");
            return;
        }
    };

    let own_pid = std::process::id();
    let mut minimized = 0;

    for window in windows {
        if !window.is_visible() {
            continue;
        }
        if window.process_id() == own_pid {
            continue;
        }
        let Ok(rect) = window.rect() else {
            continue;
        };
        if rect.intersects(&monitor.bounds) {
            window.minimize();
            minimized += 1;
        }
    }

    encaje_core::log_info!("Minimized {minimized} windows on monitor 0x{:X}", monitor.handle);
}
