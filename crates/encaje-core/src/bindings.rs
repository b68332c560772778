//! Builds the full binding list from settings.
//!
//! The list always holds the four fixed shortcuts (possibly with empty
//! identifiers, which the registry skips), every valid custom preset,
//! and the two fixed minimize-sequence hotkeys, in that order.

use crate::registry::Binding;
use crate::settings::Settings;
use crate::Action;

/// Arms the minimize-all sequence.
pub const ARM_HOTKEY: &str = "ctrl+shift+h";
/// Confirms the minimize-all sequence.
pub const FIRE_HOTKEY: &str = "ctrl+shift+m";

/// Maps settings onto the binding list handed to the registry.
pub fn from_settings(settings: &Settings) -> Vec<Binding> {
    let mut bindings = vec![
        Binding::new(settings.resize_80.clone(), Action::Resize { scale: 0.8 }),
        Binding::new(settings.fullscreen.clone(), Action::Resize { scale: 1.0 }),
        Binding::new(settings.center.clone(), Action::Center),
        Binding::new(settings.resize_60.clone(), Action::Resize { scale: 0.6 }),
    ];

    for custom in &settings.custom_actions {
        match parse_percentage(&custom.percentage) {
            Some(percentage) => bindings.push(Binding::new(
                custom.hotkey.clone(),
                Action::CustomResize { percentage },
            )),
            None => crate::log_warn!(
                "Invalid percentage {:?} for hotkey {:?}; skipping",
                custom.percentage,
                custom.hotkey
            ),
        }
    }

    bindings.push(Binding::new(ARM_HOTKEY, Action::ArmSequence));
    bindings.push(Binding::new(FIRE_HOTKEY, Action::FireSequence));
    bindings
}

/// Validates a preset percentage: digits only, positive.
///
/// Values above 100 are allowed on purpose — an oversized preset
/// centers the window beyond the work area.
fn parse_percentage(raw: &str) -> Option<f64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = raw.parse().ok()?;
    (value > 0).then_some(f64::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::CustomAction;

    fn settings() -> Settings {
        Settings {
            resize_80: "ctrl+alt+8".into(),
            fullscreen: "ctrl+alt+f".into(),
            center: "ctrl+alt+c".into(),
            resize_60: "ctrl+alt+6".into(),
            startup: false,
            custom_actions: Vec::new(),
        }
    }

    #[test]
    fn fixed_shortcuts_map_to_their_actions() {
        let bindings = from_settings(&settings());

        assert_eq!(bindings[0].hotkey, "ctrl+alt+8");
        assert_eq!(bindings[0].action, Action::Resize { scale: 0.8 });
        assert_eq!(bindings[1].action, Action::Resize { scale: 1.0 });
        assert_eq!(bindings[2].action, Action::Center);
        assert_eq!(bindings[3].action, Action::Resize { scale: 0.6 });
    }

    #[test]
    fn sequence_hotkeys_are_always_present() {
        let bindings = from_settings(&Settings::default());

        let arm = bindings.iter().find(|b| b.hotkey == ARM_HOTKEY).unwrap();
        let fire = bindings.iter().find(|b| b.hotkey == FIRE_HOTKEY).unwrap();
        assert_eq!(arm.action, Action::ArmSequence);
        assert_eq!(fire.action, Action::FireSequence);
    }

    #[test]
    fn unassigned_shortcuts_keep_empty_identifiers() {
        // The registry skips empty identifiers with a warning; the
        // list itself still carries all four fixed slots.
        let bindings = from_settings(&Settings::default());
        assert_eq!(bindings.len(), 6);
        assert!(bindings[..4].iter().all(|b| b.hotkey.is_empty()));
    }

    #[test]
    fn valid_custom_actions_become_bindings() {
        let mut s = settings();
        s.custom_actions.push(CustomAction {
            percentage: "75".into(),
            hotkey: "ctrl+alt+5".into(),
        });

        let bindings = from_settings(&s);
        let custom = bindings.iter().find(|b| b.hotkey == "ctrl+alt+5").unwrap();
        assert_eq!(custom.action, Action::CustomResize { percentage: 75.0 });
    }

    #[test]
    fn oversized_percentages_are_allowed() {
        let mut s = settings();
        s.custom_actions.push(CustomAction {
            percentage: "150".into(),
            hotkey: "ctrl+alt+9".into(),
        });

        let bindings = from_settings(&s);
        let custom = bindings.iter().find(|b| b.hotkey == "ctrl+alt+9").unwrap();
        assert_eq!(custom.action, Action::CustomResize { percentage: 150.0 });
    }

    #[test]
    fn invalid_percentages_are_skipped() {
        let mut s = settings();
        for bad in ["", "abc", "0", "12.5", "-5", "5%"] {
            s.custom_actions.push(CustomAction {
                percentage: bad.into(),
                hotkey: format!("ctrl+{bad}"),
            });
        }

        let bindings = from_settings(&s);

        // Only the four fixed slots and the two sequence hotkeys remain.
        assert_eq!(bindings.len(), 6);
    }
}
