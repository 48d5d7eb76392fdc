//! Error types for the mapper.

use codex_topology::NodeId;
use thiserror::Error;

/// Result type for mapper operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur building maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A requested node id has no backing record in the store.
    #[error("no record for {0}")]
    MissingNode(NodeId),

    /// The node store holds no records at all.
    #[error("node store is empty")]
    EmptyDataset,
}
