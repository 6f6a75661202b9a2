//! CLI entry point for ticklist.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use ticklist_app::{Config, TaskBook};
use ticklist_core::{StatusFilter, TaskId};
use ticklist_store::JsonStore;

mod commands;
mod tui;

/// Terminal task list persisted as JSON in the local data directory.
#[derive(Parser, Debug)]
#[command(
    name = "ticklist",
    version,
    about = "ticklist: add, filter, and tick off short tasks from the terminal"
)]
struct Cli {
    /// Storage directory (defaults to the platform data dir).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new task. Blank text is ignored.
    Add {
        /// Task text; multiple words are joined with spaces.
        text: Vec<String>,
    },

    /// List tasks with counts and completion progress.
    Ls {
        /// Show all, pending, or completed tasks.
        #[arg(long, default_value_t = StatusFilter::All)]
        filter: StatusFilter,
        /// Case-insensitive substring to search for.
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Flip completion of a task.
    Toggle {
        /// Identifier printed by `ls`.
        id: TaskId,
    },

    /// Replace the text of a task. Empty text deletes the task.
    Edit {
        /// Identifier printed by `ls`.
        id: TaskId,
        /// Replacement text; multiple words are joined with spaces.
        text: Vec<String>,
    },

    /// Delete a task.
    Rm {
        /// Identifier printed by `ls`.
        id: TaskId,
    },

    /// Delete every completed task.
    Clear,

    /// Flip the persisted light/dark theme preference.
    Theme,

    /// Launch the interactive terminal UI (the default).
    Tui,
}

fn main() -> Result<()> {
    let Cli { data_dir, cmd } = Cli::parse();
    install_tracing();

    let config = Config::load()?;
    let root = config.resolve_data_dir(data_dir)?;
    let store = JsonStore::open(root);
    let book = TaskBook::load(store)?;

    match cmd.unwrap_or(Command::Tui) {
        Command::Tui => tui::run(book),
        other => commands::run(&other, book),
    }
}

fn install_tracing() {
    // RUST_LOG overrides the default WARN level.
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_add_command_joins_words() {
        let cli = Cli::parse_from(["ticklist", "add", "Buy", "milk"]);
        match cli.cmd {
            Some(Command::Add { text }) => assert_eq!(text, vec!["Buy", "milk"]),
            other => panic!("expected add command, got {other:?}"),
        }
    }

    #[test]
    fn parse_ls_command_with_filter_and_search() {
        let cli = Cli::parse_from(["ticklist", "ls", "--filter", "pending", "--search", "milk"]);
        match cli.cmd {
            Some(Command::Ls { filter, search }) => {
                assert_eq!(filter, StatusFilter::Pending);
                assert_eq!(search, "milk");
            }
            other => panic!("expected ls command, got {other:?}"),
        }
    }

    #[test]
    fn ls_defaults_to_all_and_empty_search() {
        let cli = Cli::parse_from(["ticklist", "ls"]);
        match cli.cmd {
            Some(Command::Ls { filter, search }) => {
                assert_eq!(filter, StatusFilter::All);
                assert!(search.is_empty());
            }
            other => panic!("expected ls command, got {other:?}"),
        }
    }

    #[test]
    fn unknown_filter_is_rejected() {
        assert!(Cli::try_parse_from(["ticklist", "ls", "--filter", "done"]).is_err());
    }

    #[test]
    fn parse_toggle_command_with_numeric_id() {
        let cli = Cli::parse_from(["ticklist", "toggle", "1700000000000"]);
        match cli.cmd {
            Some(Command::Toggle { id }) => assert_eq!(id, TaskId(1_700_000_000_000)),
            other => panic!("expected toggle command, got {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::parse_from(["ticklist"]);
        assert!(cli.cmd.is_none());
    }

    #[test]
    fn data_dir_flag_is_global() {
        let cli = Cli::parse_from(["ticklist", "--data-dir", "/tmp/lists", "clear"]);
        assert_eq!(cli.data_dir.as_deref(), Some(std::path::Path::new("/tmp/lists")));
        assert!(matches!(cli.cmd, Some(Command::Clear)));
    }
}
