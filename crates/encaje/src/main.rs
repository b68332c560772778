mod commands;

use clap::{Parser, Subcommand};

use encaje_core::Action;

#[derive(Parser)]
#[command(
    name = "encaje",
    version,
    about = "Hotkey-driven window placement for Windows"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default settings file
    Init,
    /// Start the background daemon
    Start,
    /// Stop the background daemon
    Stop,
    /// Show whether the daemon is running
    Status,
    /// Apply an action to the focused window via the running daemon
    Action {
        #[command(subcommand)]
        action: ActionCommands,
    },
    /// Run the daemon (internal — not for direct use)
    #[command(hide = true)]
    Daemon,
}

#[derive(Subcommand)]
enum ActionCommands {
    /// Resize the focused window to a percentage of the work area
    Resize {
        /// Percentage of the work area (values above 100 are allowed)
        percent: u32,
    },
    /// Resize the focused window to fill the work area
    Fullscreen,
    /// Center the focused window without resizing
    Center,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Start => commands::start::execute(),
        Commands::Stop => commands::stop::execute(),
        Commands::Status => commands::status::execute(),
        Commands::Daemon => commands::daemon::execute(),
        Commands::Action { action } => {
            let action = match action {
                ActionCommands::Resize { percent } => Action::CustomResize {
                    percentage: f64::from(percent),
                },
                ActionCommands::Fullscreen => Action::Resize { scale: 1.0 },
                ActionCommands::Center => Action::Center,
            };
            commands::action::execute(action);
        }
    }
}
