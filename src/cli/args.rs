//! CLI argument definitions using clap

use clap::{ArgAction, Parser, ValueEnum};

use crate::domain::Strategy;

/// Depth-first (pre-order) traversal of a fixed binary tree
#[derive(Parser, Debug)]
#[command(name = "treewalk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Traversal strategy, overrides configuration
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Print the tree shape after the search
    #[arg(short, long)]
    pub tree: bool,

    /// Generate shell completions and exit
    #[arg(long = "completions", value_enum)]
    pub generator: Option<clap_complete::Shell>,
}

/// Command line spelling of [`Strategy`].
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    /// Plain recursion; call-stack depth equals tree height
    Recursive,
    /// Explicit stack on the heap, for deep or degenerate trees
    Iterative,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Recursive => Strategy::Recursive,
            StrategyArg::Iterative => Strategy::Iterative,
        }
    }
}
