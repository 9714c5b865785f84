//! Licensify: License Header Stamping
//!
//! Walks a directory tree and prepends a license header comment to every source
//! file whose full extension maps to a known comment prefix. Excluded directories
//! are pruned before descent, and files that already carry the header are left
//! alone unless a forced re-stamp is requested.

pub mod cli;
pub mod config;
pub mod error;
pub mod header;
pub mod logging;
pub mod stamper;
pub mod style;
pub mod tree;

pub use error::StampError;
pub use header::HeaderBlock;
pub use stamper::{ExistingHeaderPolicy, RunMode, StampConfig, StampReport, Stamper};
pub use style::{StyleEntry, StyleTable};
