//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Build trees from child → parent edge files and render them
#[derive(Parser, Debug)]
#[command(name = "rstree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file, layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tree as a graphviz digraph
    Graphviz {
        /// Edge file: one `child parent` pair per line
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Show the tree in the terminal
    Tree {
        /// Edge file: one `child parent` pair per line
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Show size, depth and leaf count
    Info {
        /// Edge file: one `child parent` pair per line
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// List leaf keys
    Leaves {
        /// Edge file: one `child parent` pair per line
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
