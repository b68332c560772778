//! The global-hotkey registry.
//!
//! The registry owns the list of live bindings and talks to the OS
//! listener through [`HotkeyListener`]. The live set is never diffed:
//! whenever configuration changes, [`HotkeyRegistry::rebuild_all`]
//! tears everything down and registers the new list from scratch, so
//! no stale binding can survive a settings edit.

use crate::Action;

/// Seam to the OS-level global hotkey listener.
///
/// The platform crate implements this over `RegisterHotKey`; tests use
/// an in-memory mock. `bind` may fail (malformed combination, or the
/// combination is owned by another process); `unbind` never does.
pub trait HotkeyListener {
    fn bind(&mut self, id: &str) -> Result<(), String>;
    fn unbind(&mut self, id: &str);
}

/// A hotkey identifier bound to an action.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub hotkey: String,
    pub action: Action,
}

impl Binding {
    pub fn new(hotkey: impl Into<String>, action: Action) -> Self {
        Self {
            hotkey: hotkey.into(),
            action,
        }
    }
}

/// Maps hotkey identifiers to actions, mirroring every live binding
/// into the OS listener.
pub struct HotkeyRegistry<L> {
    listener: L,
    bindings: Vec<Binding>,
}

impl<L: HotkeyListener> HotkeyRegistry<L> {
    pub fn new(listener: L) -> Self {
        Self {
            listener,
            bindings: Vec::new(),
        }
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Registers a single binding.
    ///
    /// Empty or whitespace-only identifiers are skipped with a warning
    /// (unassigned shortcuts are stored as empty strings). A listener
    /// failure is logged and returned so the caller can surface it;
    /// the registry itself is left unchanged by a failed registration.
    pub fn register(&mut self, hotkey: &str, action: Action) -> Result<(), String> {
        if hotkey.trim().is_empty() {
            crate::log_warn!("Empty hotkey provided; skipping registration");
            return Ok(());
        }

        match self.listener.bind(hotkey) {
            Ok(()) => {
                self.bindings.push(Binding::new(hotkey, action));
                crate::log_info!("Registered hotkey: {hotkey}");
                Ok(())
            }
            Err(e) => {
                crate::log_error!("Failed to register hotkey {hotkey:?}: {e}");
                Err(e)
            }
        }
    }

    /// Unregisters a binding. Unknown identifiers are silently ignored.
    pub fn unregister(&mut self, hotkey: &str) {
        if let Some(pos) = self.bindings.iter().position(|b| b.hotkey == hotkey) {
            self.bindings.remove(pos);
            self.listener.unbind(hotkey);
            crate::log_info!("Unregistered hotkey: {hotkey}");
        }
    }

    /// Replaces the entire active set with `bindings`, in list order.
    ///
    /// Returns the failure messages of bindings that could not be
    /// registered; one failure never aborts the rest.
    pub fn rebuild_all(&mut self, bindings: &[Binding]) -> Vec<String> {
        while let Some(binding) = self.bindings.pop() {
            self.listener.unbind(&binding.hotkey);
        }

        let mut failures = Vec::new();
        for binding in bindings {
            if let Err(e) = self.register(&binding.hotkey, binding.action.clone()) {
                failures.push(e);
            }
        }
        failures
    }

    /// Looks up the action bound to a hotkey identifier.
    pub fn action_for(&self, hotkey: &str) -> Option<&Action> {
        self.bindings
            .iter()
            .find(|b| b.hotkey == hotkey)
            .map(|b| &b.action)
    }

    /// The identifiers currently held, in registration order.
    pub fn active_hotkeys(&self) -> Vec<&str> {
        self.bindings.iter().map(|b| b.hotkey.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records bind/unbind calls; can be told to reject one identifier.
    #[derive(Default)]
    struct MockListener {
        bound: Vec<String>,
        reject: Option<String>,
    }

    impl HotkeyListener for MockListener {
        fn bind(&mut self, id: &str) -> Result<(), String> {
            if self.reject.as_deref() == Some(id) {
                return Err(format!("combination {id:?} unavailable"));
            }
            self.bound.push(id.to_string());
            Ok(())
        }

        fn unbind(&mut self, id: &str) {
            self.bound.retain(|b| b != id);
        }
    }

    fn binding(hotkey: &str) -> Binding {
        Binding::new(hotkey, Action::Center)
    }

    #[test]
    fn register_makes_the_action_resolvable() {
        let mut registry = HotkeyRegistry::new(MockListener::default());
        registry
            .register("ctrl+alt+c", Action::Resize { scale: 0.8 })
            .unwrap();

        assert_eq!(
            registry.action_for("ctrl+alt+c"),
            Some(&Action::Resize { scale: 0.8 })
        );
        assert_eq!(registry.listener().bound, vec!["ctrl+alt+c"]);
    }

    #[test]
    fn empty_hotkey_is_skipped_without_error() {
        let mut registry = HotkeyRegistry::new(MockListener::default());
        assert!(registry.register("", Action::Center).is_ok());
        assert!(registry.register("   ", Action::Center).is_ok());
        assert!(registry.is_empty());
        assert!(registry.listener().bound.is_empty());
    }

    #[test]
    fn unregister_unknown_id_leaves_the_set_unchanged() {
        let mut registry = HotkeyRegistry::new(MockListener::default());
        registry.register("ctrl+x", Action::Center).unwrap();

        registry.unregister("ctrl+never+bound");

        assert_eq!(registry.active_hotkeys(), vec!["ctrl+x"]);
        assert_eq!(registry.listener().bound, vec!["ctrl+x"]);
    }

    #[test]
    fn unregister_removes_the_os_binding() {
        let mut registry = HotkeyRegistry::new(MockListener::default());
        registry.register("ctrl+x", Action::Center).unwrap();

        registry.unregister("ctrl+x");

        assert!(registry.is_empty());
        assert!(registry.listener().bound.is_empty());
        assert_eq!(registry.action_for("ctrl+x"), None);
    }

    #[test]
    fn rebuild_replaces_the_previous_set() {
        let mut registry = HotkeyRegistry::new(MockListener::default());
        registry.rebuild_all(&[binding("ctrl+a"), binding("ctrl+b")]);

        registry.rebuild_all(&[binding("ctrl+c")]);

        assert_eq!(registry.active_hotkeys(), vec!["ctrl+c"]);
        assert_eq!(registry.listener().bound, vec!["ctrl+c"]);
    }

    #[test]
    fn rebuild_twice_with_the_same_list_is_idempotent() {
        let list = [binding("ctrl+a"), binding("ctrl+b"), binding("ctrl+c")];
        let mut registry = HotkeyRegistry::new(MockListener::default());

        registry.rebuild_all(&list);
        let first = registry
            .active_hotkeys()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();

        registry.rebuild_all(&list);

        assert_eq!(registry.active_hotkeys(), first);
        assert_eq!(registry.listener().bound, first);
    }

    #[test]
    fn one_failure_does_not_abort_the_rest() {
        let listener = MockListener {
            reject: Some("ctrl+b".into()),
            ..Default::default()
        };
        let mut registry = HotkeyRegistry::new(listener);

        let failures =
            registry.rebuild_all(&[binding("ctrl+a"), binding("ctrl+b"), binding("ctrl+c")]);

        assert_eq!(failures.len(), 1);
        assert_eq!(registry.active_hotkeys(), vec!["ctrl+a", "ctrl+c"]);
    }

    #[test]
    fn registration_order_is_preserved() {
        let mut registry = HotkeyRegistry::new(MockListener::default());
        registry.rebuild_all(&[binding("ctrl+z"), binding("ctrl+a"), binding("ctrl+m")]);

        assert_eq!(registry.active_hotkeys(), vec!["ctrl+z", "ctrl+a", "ctrl+m"]);
    }
}
