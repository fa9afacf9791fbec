//! The depth first search as seen on the console.

use std::io::{self, Write};

use tracing::{debug, instrument};

use crate::domain::{traverse, BinaryTree, NodeData, Strategy, Visit};

pub const BEGIN_LINE: &str = "beginning depth first search";
pub const END_LINE: &str = "finished depth first search";

/// Visitor writing one `visiting node '<name>'` line per node.
///
/// `Visit` cannot fail, so the first write error is kept and reported by
/// [`Printer::finish`]; nothing is written after it.
pub struct Printer<W: Write> {
    out: W,
    visited: usize,
    error: Option<io::Error>,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            visited: 0,
            error: None,
        }
    }

    /// Number of nodes visited so far.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Returns the writer, or the first write error.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }
}

impl<W: Write> Visit for Printer<W> {
    fn visit(&mut self, node: &NodeData) {
        self.visited += 1;
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "visiting node '{}'", node.name) {
            self.error = Some(e);
        }
    }
}

/// Prints the framed search over `tree`, starting at its root.
#[instrument(level = "debug", skip(tree, out))]
pub fn run_search<W: Write>(tree: &BinaryTree, strategy: Strategy, mut out: W) -> io::Result<()> {
    writeln!(out, "{}", BEGIN_LINE)?;

    let mut printer = Printer::new(&mut out);
    traverse(tree, tree.root(), strategy, &mut printer);
    let visited = printer.visited();
    printer.finish()?;
    debug!(visited, "traversal done");

    writeln!(out, "{}", END_LINE)?;
    out.flush()
}
