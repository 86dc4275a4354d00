use crate::node::NodeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrellisError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Duplicate child id: {0}")]
    DuplicateChildId(NodeId),

    #[error("Renderer rejected update: {0}")]
    Renderer(String),

    #[error("Invariant violation: {0}")]
    Invariant(String),
}
