mod advice;
mod calc;
mod cmd;
mod dashboard;
mod data;
mod logging;
mod ui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "playercard", about = "a player card page for the terminal")]
struct Cli {
    /// Path to the data directory containing config.yaml (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    /// Log file (default: <data-dir>/playercard.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config.yaml
    Init,
    /// List the genre options and whether each is approved
    Genres,
    /// Validate a sign-up without opening the page
    Check {
        /// Nickname to submit
        #[arg(short, long, default_value = "")]
        nickname: String,
        /// Favourite genre
        #[arg(short, long)]
        genre: String,
    },
    /// Fetch one piece of advice and print it
    Advice,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir.clone());

    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(|| data_dir.join("playercard.log"));
    logging::init(&log_file)?;

    // Auto-init when the data directory is missing or empty and the user did not
    // explicitly invoke the `init` subcommand.
    let is_init_command = matches!(cli.command, Some(Commands::Init));
    if !is_init_command && dir_needs_init(&data_dir) {
        eprintln!(
            "Data directory '{}' is missing or empty, running init...",
            data_dir.display()
        );
        cmd::init::run()?;
    }

    match cli.command {
        None => cmd::root::run(),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Genres) => cmd::genres::run(),
        Some(Commands::Check { nickname, genre }) => cmd::check::run(&nickname, &genre),
        Some(Commands::Advice) => cmd::advice::run(),
    }
}

/// Returns true when `dir` has no config.yaml yet.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    !dir.join("config.yaml").exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dir_needs_init_nonexistent() {
        let tmp = TempDir::new().unwrap();
        assert!(dir_needs_init(&tmp.path().join("does_not_exist")));
    }

    #[test]
    fn test_dir_needs_init_dir_with_only_log() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("playercard.log"), "").unwrap();
        assert!(dir_needs_init(tmp.path()));
    }

    #[test]
    fn test_dir_needs_init_with_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.yaml"), "settings: {}").unwrap();
        assert!(!dir_needs_init(tmp.path()));
    }

    #[test]
    fn test_cli_parses_check() {
        let cli = Cli::try_parse_from(["playercard", "check", "-n", "Alex", "-g", "rpg"]).unwrap();
        match cli.command {
            Some(Commands::Check { nickname, genre }) => {
                assert_eq!(nickname, "Alex");
                assert_eq!(genre, "rpg");
            }
            _ => panic!("expected check"),
        }
    }
}
