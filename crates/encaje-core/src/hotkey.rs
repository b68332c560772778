//! Hotkey-identifier parsing.
//!
//! Identifiers are `+`-joined lowercase tokens, e.g. `"ctrl+shift+h"`.
//! The last token names the key; every preceding token must be a
//! modifier. Key names are resolved to virtual-key codes by the
//! platform crate, so an identifier that parses here can still fail to
//! register if the key name is unknown.

use serde::{Deserialize, Serialize};

/// Keyboard modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Ctrl,
    Shift,
    Alt,
    Win,
}

impl Modifier {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "ctrl" | "control" => Some(Self::Ctrl),
            "shift" => Some(Self::Shift),
            "alt" => Some(Self::Alt),
            "win" | "windows" => Some(Self::Win),
            _ => None,
        }
    }
}

/// A parsed hotkey combination: zero or more modifiers plus a key name.
#[derive(Debug, Clone, PartialEq)]
pub struct Combo {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

/// Parses a hotkey identifier into a [`Combo`].
///
/// Matching is case-insensitive; surrounding whitespace per token is
/// ignored (`"ctrl + h"` parses like `"ctrl+h"`).
pub fn parse(id: &str) -> Result<Combo, String> {
    let tokens: Vec<String> = id
        .split('+')
        .map(|t| t.trim().to_ascii_lowercase())
        .collect();

    let Some((key, modifier_tokens)) = tokens.split_last() else {
        return Err(format!("empty hotkey {id:?}"));
    };
    if key.is_empty() {
        return Err(format!("missing key name in {id:?}"));
    }

    let mut modifiers = Vec::with_capacity(modifier_tokens.len());
    for token in modifier_tokens {
        let Some(modifier) = Modifier::parse(token) else {
            return Err(format!("unknown modifier {token:?} in {id:?}"));
        };
        modifiers.push(modifier);
    }

    Ok(Combo {
        modifiers,
        key: key.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_and_key() {
        let combo = parse("ctrl+shift+h").unwrap();
        assert_eq!(combo.modifiers, vec![Modifier::Ctrl, Modifier::Shift]);
        assert_eq!(combo.key, "h");
    }

    #[test]
    fn bare_key_has_no_modifiers() {
        let combo = parse("f5").unwrap();
        assert!(combo.modifiers.is_empty());
        assert_eq!(combo.key, "f5");
    }

    #[test]
    fn case_and_spacing_are_normalized() {
        let combo = parse("Ctrl + Alt + Comma").unwrap();
        assert_eq!(combo.modifiers, vec![Modifier::Ctrl, Modifier::Alt]);
        assert_eq!(combo.key, "comma");
    }

    #[test]
    fn control_and_windows_aliases() {
        let combo = parse("control+windows+x").unwrap();
        assert_eq!(combo.modifiers, vec![Modifier::Ctrl, Modifier::Win]);
    }

    #[test]
    fn unknown_modifier_is_rejected() {
        assert!(parse("hyper+x").is_err());
    }

    #[test]
    fn trailing_plus_is_rejected() {
        assert!(parse("ctrl+").is_err());
    }

    #[test]
    fn empty_identifier_is_rejected() {
        assert!(parse("").is_err());
    }
}
