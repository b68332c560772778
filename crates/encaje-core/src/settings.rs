//! Persisted user settings.
//!
//! Stored as JSON at `~/.config/encaje/settings.json`. A missing or
//! malformed file falls back to empty defaults; load failures are
//! logged but never surfaced to the user.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The fixed mapping from punctuation characters to the key names the
/// hotkey listener understands. Applied token-wise on load; normalized
/// identifiers pass through unchanged, so normalization is stable
/// under repeated application.
const KEY_NAMES: [(&str, &str); 12] = [
    (",", "comma"),
    (".", "period"),
    ("/", "slash"),
    ("\\", "backslash"),
    (";", "semicolon"),
    ("'", "quote"),
    ("-", "minus"),
    ("=", "equals"),
    ("`", "grave"),
    ("[", "lbracket"),
    ("]", "rbracket"),
    (" ", "space"),
];

/// A user-defined resize preset.
///
/// `percentage` is kept as the string the user entered; it is
/// validated (digits only, positive) when the binding list is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomAction {
    pub percentage: String,
    pub hotkey: String,
}

/// Top-level settings for Encaje.
///
/// The four fixed shortcut fields hold hotkey identifiers (empty when
/// unassigned). Missing fields fall back to defaults thanks to
/// `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Shortcut for resizing the focused window to 80%.
    pub resize_80: String,
    /// Shortcut for filling the work area.
    pub fullscreen: String,
    /// Shortcut for centering the focused window.
    pub center: String,
    /// Shortcut for resizing the focused window to 60%.
    pub resize_60: String,
    /// Whether Encaje starts on Windows logon.
    pub startup: bool,
    /// User-defined resize presets, unbounded.
    pub custom_actions: Vec<CustomAction>,
}

impl Settings {
    /// Returns a copy with every hotkey identifier normalized.
    fn normalized(mut self) -> Self {
        self.resize_80 = normalize_hotkey(&self.resize_80);
        self.fullscreen = normalize_hotkey(&self.fullscreen);
        self.center = normalize_hotkey(&self.center);
        self.resize_60 = normalize_hotkey(&self.resize_60);
        for custom in &mut self.custom_actions {
            custom.hotkey = normalize_hotkey(&custom.hotkey);
        }
        self
    }
}

/// Rewrites punctuation in a hotkey identifier to named-key tokens,
/// e.g. `"ctrl+,"` becomes `"ctrl+comma"`.
pub fn normalize_hotkey(id: &str) -> String {
    if id.trim().is_empty() {
        return String::new();
    }
    id.split('+')
        .map(normalize_token)
        .collect::<Vec<_>>()
        .join("+")
}

fn normalize_token(token: &str) -> String {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        // A blank token between separators is the space bar.
        return if token.contains(' ') {
            "space".into()
        } else {
            String::new()
        };
    }
    for (symbol, name) in KEY_NAMES {
        if trimmed == symbol {
            return name.into();
        }
    }
    trimmed.to_ascii_lowercase()
}

/// Returns the config directory: `~/.config/encaje/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("encaje"))
}

/// Returns the settings file path: `~/.config/encaje/settings.json`.
pub fn settings_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("settings.json"))
}

/// Parses and normalizes a settings JSON document.
pub fn parse(json: &str) -> Result<Settings, String> {
    let settings: Settings = serde_json::from_str(json).map_err(|e| e.to_string())?;
    Ok(settings.normalized())
}

/// Tries to load and parse the settings file.
///
/// Returns an error string describing what went wrong (IO error,
/// parse error, etc.).
pub fn try_load() -> Result<Settings, String> {
    let path = settings_path().ok_or("could not determine settings path")?;
    let content = fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    parse(&content).map_err(|e| format!("{}: {e}", path.display()))
}

/// Loads settings from disk, falling back to empty defaults.
pub fn load() -> Settings {
    let Some(path) = settings_path() else {
        return Settings::default();
    };
    if !path.exists() {
        crate::log_info!("Settings file not found; using defaults");
        return Settings::default();
    }
    match try_load() {
        Ok(settings) => settings,
        Err(e) => {
            crate::log_warn!("Could not load settings, using defaults: {e}");
            Settings::default()
        }
    }
}

/// Writes settings to disk as pretty-printed JSON, creating the
/// config directory if needed. Hotkeys are expected to be normalized
/// already (they always are after a load).
pub fn save(settings: &Settings) -> Result<(), String> {
    let path = settings_path().ok_or("could not determine settings path")?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| format!("{}: {e}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(settings).map_err(|e| e.to_string())?;
    fs::write(&path, json).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_all_fields() {
        let json = r#"{
            "resize_80": "ctrl+alt+8",
            "fullscreen": "ctrl+alt+f",
            "center": "ctrl+alt+c",
            "resize_60": "ctrl+alt+6",
            "startup": true,
            "custom_actions": [{"percentage": "75", "hotkey": "ctrl+alt+5"}]
        }"#;

        let settings = parse(json).unwrap();

        assert_eq!(settings.resize_80, "ctrl+alt+8");
        assert_eq!(settings.fullscreen, "ctrl+alt+f");
        assert_eq!(settings.center, "ctrl+alt+c");
        assert_eq!(settings.resize_60, "ctrl+alt+6");
        assert!(settings.startup);
        assert_eq!(settings.custom_actions.len(), 1);
        assert_eq!(settings.custom_actions[0].percentage, "75");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings = parse("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.resize_80.is_empty());
        assert!(!settings.startup);
        assert!(settings.custom_actions.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse("{ not json").is_err());
        assert!(parse(r#"{"startup": "yes"}"#).is_err());
    }

    #[test]
    fn punctuation_keys_are_rewritten_on_parse() {
        let json = r#"{
            "center": "ctrl+,",
            "custom_actions": [{"percentage": "50", "hotkey": "alt+["}]
        }"#;

        let settings = parse(json).unwrap();

        assert_eq!(settings.center, "ctrl+comma");
        assert_eq!(settings.custom_actions[0].hotkey, "alt+lbracket");
    }

    #[test]
    fn normalization_covers_the_whole_table() {
        for (symbol, name) in KEY_NAMES {
            let id = format!("ctrl+{symbol}");
            assert_eq!(normalize_hotkey(&id), format!("ctrl+{name}"));
        }
    }

    #[test]
    fn normalization_is_stable_under_repeated_application() {
        for id in [
            "ctrl+,",
            "ctrl+comma",
            "alt+[",
            "ctrl+shift+ ",
            "Ctrl+Alt+H",
            "",
            "   ",
        ] {
            let once = normalize_hotkey(id);
            assert_eq!(normalize_hotkey(&once), once, "input {id:?}");
        }
    }

    #[test]
    fn serialize_then_parse_round_trips() {
        let settings = Settings {
            resize_80: "ctrl+alt+8".into(),
            fullscreen: "ctrl+alt+f".into(),
            center: "ctrl+comma".into(),
            resize_60: String::new(),
            startup: true,
            custom_actions: vec![CustomAction {
                percentage: "150".into(),
                hotkey: "ctrl+alt+lbracket".into(),
            }],
        };

        let json = serde_json::to_string_pretty(&settings).unwrap();
        let reloaded = parse(&json).unwrap();

        assert_eq!(reloaded, settings);
    }
}
