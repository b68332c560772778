use encaje_core::{HotkeyListener, hotkey};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    MOD_NOREPEAT, RegisterHotKey, UnregisterHotKey,
};

use crate::keys;

/// One OS registration: the Win32 slot id plus the identifier it
/// was registered under.
struct Slot {
    id: i32,
    hotkey: String,
}

/// The OS-level hotkey listener, backed by `RegisterHotKey`.
///
/// Registrations land on the current thread's message queue, so this
/// must live on the thread running the message pump. `WM_HOTKEY`
/// messages carry the slot id, which [`Win32Listener::hotkey_for`]
/// maps back to the identifier.
pub struct Win32Listener {
    slots: Vec<Slot>,
    next_id: i32,
}

impl Win32Listener {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_id: 1,
        }
    }

    /// Maps a `WM_HOTKEY` slot id back to its hotkey identifier.
    pub fn hotkey_for(&self, id: i32) -> Option<&str> {
        self.slots
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.hotkey.as_str())
    }
}

impl Default for Win32Listener {
    fn default() -> Self {
        Self::new()
    }
}

impl HotkeyListener for Win32Listener {
    fn bind(&mut self, id: &str) -> Result<(), String> {
        let combo = hotkey::parse(id)?;
        let vk = keys::vk_from_name(&combo.key)
            .ok_or_else(|| format!("unknown key name {:?}", combo.key))?;

        let mut modifiers = MOD_NOREPEAT;
        for m in combo.modifiers {
            modifiers |= keys::modifier_flag(m);
        }

        let slot = self.next_id;
        // SAFETY: RegisterHotKey registers a system-wide hotkey on the
        // current thread's message queue; slot ids are unique per
        // listener. Fails when another process owns the combination.
        let result = unsafe { RegisterHotKey(None, slot, modifiers, vk) };
        result.map_err(|e| format!("could not register {id:?}: {e}"))?;

        self.next_id += 1;
        self.slots.push(Slot {
            id: slot,
            hotkey: id.to_string(),
        });
        Ok(())
    }

    fn unbind(&mut self, id: &str) {
        if let Some(pos) = self.slots.iter().position(|s| s.hotkey == id) {
            let slot = self.slots.remove(pos);
            // SAFETY: UnregisterHotKey removes the registration made
            // on this thread.
            unsafe {
                let _ = UnregisterHotKey(None, slot.id);
            }
        }
    }
}

impl Drop for Win32Listener {
    fn drop(&mut self) {
        // The event-loop thread tears the listener down with its
        // registry; nothing may outlive it at the OS level.
        for slot in &self.slots {
            // SAFETY: UnregisterHotKey is safe for any id we registered.
            unsafe {
                let _ = UnregisterHotKey(None, slot.id);
            }
        }
    }
}
