use encaje_core::hotkey::Modifier;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    HOT_KEY_MODIFIERS, MOD_ALT, MOD_CONTROL, MOD_SHIFT, MOD_WIN,
};

/// Converts a key name to a Windows virtual key code.
///
/// Supports letters (A–Z), digits (0–9), function keys (F1–F12), and
/// the named keys that hotkey normalization produces (comma, period,
/// lbracket, …). Matching is case-insensitive.
pub fn vk_from_name(name: &str) -> Option<u32> {
    let upper = name.to_ascii_uppercase();

    // Single letter A–Z or digit 0–9: the VK code is the ASCII code.
    if upper.len() == 1 {
        let ch = upper.as_bytes()[0];
        if ch.is_ascii_uppercase() || ch.is_ascii_digit() {
            return Some(u32::from(ch));
        }
    }

    // Function keys F1–F12
    if let Some(rest) = upper.strip_prefix('F')
        && let Ok(n) = rest.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(0x70 + n - 1); // VK_F1 = 0x70
    }

    match upper.as_str() {
        // Navigation
        "ENTER" | "RETURN" => Some(0x0D),
        "TAB" => Some(0x09),
        "ESCAPE" | "ESC" => Some(0x1B),
        "SPACE" => Some(0x20),
        "BACKSPACE" => Some(0x08),
        "DELETE" | "DEL" => Some(0x2E),
        "INSERT" | "INS" => Some(0x2D),
        "HOME" => Some(0x24),
        "END" => Some(0x23),
        "PAGEUP" | "PGUP" => Some(0x21),
        "PAGEDOWN" | "PGDN" => Some(0x22),

        // Arrow keys
        "LEFT" => Some(0x25),
        "UP" => Some(0x26),
        "RIGHT" => Some(0x27),
        "DOWN" => Some(0x28),

        // Punctuation / OEM keys — the names normalization emits
        "MINUS" => Some(0xBD),
        "PLUS" | "EQUALS" => Some(0xBB),
        "COMMA" => Some(0xBC),
        "PERIOD" | "DOT" => Some(0xBE),
        "SLASH" => Some(0xBF),
        "SEMICOLON" => Some(0xBA),
        "BACKSLASH" => Some(0xDC),
        "LBRACKET" => Some(0xDB),
        "RBRACKET" => Some(0xDD),
        "QUOTE" | "APOSTROPHE" => Some(0xDE),
        "GRAVE" | "BACKTICK" => Some(0xC0),

        _ => None,
    }
}

/// Converts a parsed modifier to its Win32 hotkey flag.
pub fn modifier_flag(modifier: Modifier) -> HOT_KEY_MODIFIERS {
    match modifier {
        Modifier::Alt => MOD_ALT,
        Modifier::Shift => MOD_SHIFT,
        Modifier::Ctrl => MOD_CONTROL,
        Modifier::Win => MOD_WIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_case_insensitive() {
        assert_eq!(vk_from_name("h"), Some(0x48));
        assert_eq!(vk_from_name("H"), Some(0x48));
        assert_eq!(vk_from_name("a"), Some(0x41));
        assert_eq!(vk_from_name("Z"), Some(0x5A));
    }

    #[test]
    fn digits_return_vk_codes() {
        assert_eq!(vk_from_name("0"), Some(0x30));
        assert_eq!(vk_from_name("9"), Some(0x39));
    }

    #[test]
    fn function_keys() {
        assert_eq!(vk_from_name("F1"), Some(0x70));
        assert_eq!(vk_from_name("f12"), Some(0x7B));
    }

    #[test]
    fn normalized_punctuation_names_resolve() {
        assert_eq!(vk_from_name("comma"), Some(0xBC));
        assert_eq!(vk_from_name("lbracket"), Some(0xDB));
        assert_eq!(vk_from_name("rbracket"), Some(0xDD));
        assert_eq!(vk_from_name("quote"), Some(0xDE));
        assert_eq!(vk_from_name("equals"), Some(0xBB));
        assert_eq!(vk_from_name("grave"), Some(0xC0));
        assert_eq!(vk_from_name("space"), Some(0x20));
    }

    #[test]
    fn unknown_returns_none() {
        assert_eq!(vk_from_name("INVALID"), None);
        assert_eq!(vk_from_name(""), None);
        assert_eq!(vk_from_name("F13"), None);
    }
}
