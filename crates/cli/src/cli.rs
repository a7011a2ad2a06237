use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};
use quickcd_core::{DEFAULT_SEARCH_DEPTH, Engine};
use std::path::PathBuf;

use crate::commands::{
    Context, cd_command, extract_command, open_command, project_command, project_path_command,
    resolve_command, reveal_command, roots_command, terminal_command,
};

#[derive(Parser, Debug)]
#[command(name = "quickcd")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging\n    QUICKCD_CONFIG    Configuration file to use"
)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .quickcd.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Active terminal name; its root is tried before the others
    #[arg(long, global = true)]
    pub context: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the text to resolve comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Text to resolve, used verbatim
    #[arg(conflicts_with_all = ["line", "at"])]
    pub token: Option<String>,

    /// Line of text holding the cursor
    #[arg(long, conflicts_with = "at")]
    pub line: Option<String>,

    /// Cursor column in --line (character offset)
    #[arg(long, default_value_t = 0)]
    pub column: usize,

    /// End column of a selection in --line
    #[arg(long)]
    pub end: Option<usize>,

    /// Read the cursor line from a file (1-based line and column)
    #[arg(long, value_name = "FILE:LINE[:COLUMN]")]
    pub at: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the path-like token under the cursor
    Extract {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Resolve the selection to an existing path
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Print token and path as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a `cd` command for the selection's directory
    Cd {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Print the file to open; directories are rejected
    #[command(visible_alias = "o")]
    Open {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Show the selection's directory in the platform file browser
    Reveal {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Print the directory instead of opening it
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Find the build-project file that owns the selection
    #[command(visible_alias = "p")]
    Project {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Parent directories to search
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_DEPTH)]
        depth: usize,

        /// Print the terminal lines that open the project
        #[arg(long)]
        launch: bool,
    },
    /// Print the project file relative to the active root
    ProjectPath {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Parent directories to search
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_DEPTH)]
        depth: usize,
    },
    /// List configured roots
    Roots {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the bootstrap command for a root's terminal
    Terminal {
        /// Root name (defaults to the first existing root)
        name: Option<String>,
    },
}

impl Cli {
    /// Load configuration and run the selected command
    pub async fn execute(self) -> Result<()> {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        let engine = Engine::discover(self.config.as_deref(), &cwd)?;
        let ctx = Context::new(engine, self.context);

        match self.command {
            Commands::Extract { selection } => extract_command(&selection),
            Commands::Resolve { selection, json } => resolve_command(&ctx, &selection, json).await,
            Commands::Cd { selection } => cd_command(&ctx, &selection).await,
            Commands::Open { selection } => open_command(&ctx, &selection).await,
            Commands::Reveal { selection, dry_run } => {
                reveal_command(&ctx, &selection, dry_run).await
            }
            Commands::Project {
                selection,
                depth,
                launch,
            } => project_command(&ctx, &selection, depth, launch).await,
            Commands::ProjectPath { selection, depth } => {
                project_path_command(&ctx, &selection, depth).await
            }
            Commands::Roots { json } => roots_command(&ctx, json).await,
            Commands::Terminal { name } => terminal_command(&ctx, name.as_deref()).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cursor_selection() {
        let cli = Cli::parse_from([
            "quickcd",
            "--context",
            "Exchange",
            "resolve",
            "--line",
            "see a/b.txt",
            "--column",
            "5",
        ]);

        assert_eq!(cli.context.as_deref(), Some("Exchange"));
        match cli.command {
            Commands::Resolve { selection, json } => {
                assert!(!json);
                assert_eq!(selection.line.as_deref(), Some("see a/b.txt"));
                assert_eq!(selection.column, 5);
                assert_eq!(selection.token, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_project_depth_defaults() {
        let cli = Cli::parse_from(["quickcd", "p", "src/a.cs"]);
        match cli.command {
            Commands::Project { depth, launch, .. } => {
                assert_eq!(depth, DEFAULT_SEARCH_DEPTH);
                assert!(!launch);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_token_conflicts_with_line() {
        assert!(
            Cli::try_parse_from(["quickcd", "resolve", "a.txt", "--line", "x"]).is_err()
        );
    }
}
