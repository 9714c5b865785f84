//! Directory tree traversal
//!
//! Resolves the traversal root and walks it depth-first, pruning excluded
//! directories before they are opened.

pub mod path;
pub mod walker;
