//! Application layer: drives domain traversal and produces console output

pub mod search;

pub use search::{run_search, Printer, BEGIN_LINE, END_LINE};
