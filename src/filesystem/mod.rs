//! In-memory hierarchical file store.
//!
//! A [`Store`] owns a tree of [`Directory`] nodes, each holding [`File`]s and
//! subdirectories in separate namespaces, plus a path stack that identifies the
//! current directory. Nothing is written to disk and nothing is ever deleted.

mod error;
mod seed;
mod store;
mod tree;

pub use error::StoreError;
pub use store::Store;
pub use tree::{Directory, File};
