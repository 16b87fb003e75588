use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::Tree;
use crate::parser::EdgeParser;
use crate::tree_traits::{dismantle, graphviz_with, TreeConvert};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Graphviz { file }) => _graphviz(file, cli.config.as_deref()),
        Some(Commands::Tree { file }) => _tree(file),
        Some(Commands::Info { file }) => _info(file),
        Some(Commands::Leaves { file }) => _leaves(file),
        Some(Commands::Completion { shell }) => {
            _completion(*shell);
            Ok(())
        }
        None => Err(CliError::Usage("no command given, see --help".into())),
    }
}

/// Reads an edge file and rebuilds the tree it describes.
#[instrument(level = "debug")]
pub fn load_tree(path: &Path) -> CliResult<Tree<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    let edges = EdgeParser::new()
        .parse(&content)
        .map_err(|source| CliError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(edges = edges.len(), "parsed edge file");
    Ok(Tree::from_map(edges)?)
}

#[instrument]
fn _graphviz(file: &Path, config: Option<&Path>) -> CliResult<()> {
    let settings = Settings::load(config)?;
    let tree = load_tree(file)?;
    print!("{}", graphviz_with(&tree, &settings.render));
    Ok(())
}

#[instrument]
fn _tree(file: &Path) -> CliResult<()> {
    let tree = load_tree(file)?;
    let text = tree.to_tree_string();
    output::info(&text);
    dismantle(text);
    Ok(())
}

#[instrument]
fn _info(file: &Path) -> CliResult<()> {
    let tree = load_tree(file)?;
    output::header(&file.display());
    output::detail(&format!("root:   {}", tree.root().value()));
    output::detail(&format!("size:   {}", tree.size()));
    output::detail(&format!("depth:  {}", tree.depth()));
    output::detail(&format!("leaves: {}", tree.leaf_nodes().len()));
    Ok(())
}

#[instrument]
fn _leaves(file: &Path) -> CliResult<()> {
    let tree = load_tree(file)?;
    let leaves = tree
        .leaf_nodes()
        .into_iter()
        .filter_map(|node| tree.get(node))
        .join("\n");
    output::info(&leaves);
    Ok(())
}

fn _completion(shell: Shell) {
    let mut cmd = Cli::command();
    eprintln!("Generating completion file for {shell:?}...");
    generate(shell, &mut cmd, "rstree", &mut io::stdout());
}
