use encaje_core::Settings;
use encaje_core::settings;

/// Creates the default settings file at `~/.config/encaje/settings.json`.
///
/// An existing file is never overwritten.
pub fn execute() {
    let Some(path) = settings::settings_path() else {
        eprintln!("Error: could not determine home directory.");
        std::process::exit(1);
    };

    if path.exists() {
        println!("Already exists: {}", path.display());
        return;
    }

    match settings::save(&Settings::default()) {
        Ok(()) => {
            println!("Created {}", path.display());
            println!();
            println!("Fill in the shortcut fields (e.g. \"ctrl+alt+8\") and add custom");
            println!("resize presets; a running daemon picks up saved changes on its own.");
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
