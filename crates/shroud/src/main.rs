mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "shroud",
    version,
    about = "Toggle the visibility of a process's windows with a global hotkey"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// List running processes and their PIDs
    List,
    /// Hide all top-level windows of a process
    Hide {
        /// PID of the target process
        pid: u32,
    },
    /// Show all top-level windows of a process
    Show {
        /// PID of the target process
        pid: u32,
    },
    /// Watch the hotkey and toggle the target's windows on each press
    Watch(commands::watch::WatchArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::List => commands::list::execute(),
        Commands::Hide { pid } => commands::visibility::execute(pid, commands::visibility::Hide),
        Commands::Show { pid } => commands::visibility::execute(pid, commands::visibility::Show),
        Commands::Watch(args) => commands::watch::execute(&args),
    }
}
