use std::io::Write;

use tracing::{debug, instrument};

use crate::application::run_search;
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::{sample_tree, TreeRender};

/// Loads settings, applies flags on top and runs the search into `out`.
pub fn execute_command(cli: &Cli, out: &mut impl Write) -> CliResult<()> {
    let settings = apply_flags(Settings::load()?, cli);
    run(&settings, out)
}

/// Command line flags win over every configured value.
pub fn apply_flags(mut settings: Settings, cli: &Cli) -> Settings {
    if let Some(strategy) = cli.strategy {
        settings.strategy = strategy.into();
    }
    if cli.tree {
        settings.show_tree = true;
    }
    settings
}

#[instrument(level = "debug", skip(out))]
pub fn run(settings: &Settings, out: &mut impl Write) -> CliResult<()> {
    let tree = sample_tree()?;
    debug!(nodes = tree.len(), depth = tree.depth(), "tree ready");

    run_search(&tree, settings.strategy, &mut *out)
        .map_err(|e| CliError::io("write search output", e))?;

    if settings.show_tree {
        write!(out, "{}", tree.to_tree_string())
            .map_err(|e| CliError::io("write tree", e))?;
    }
    Ok(())
}
