use crate::node::{Node, NodeId, Props};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    High,
    Low,
}

/// One atomic mutation instruction. The queue applies these in enqueue
/// order; `priority` is metadata for schedulers layered on top.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Update {
    ReplaceChild { old: Node, new: Node },
    UpdateProps { id: NodeId, props: Props },
    AddChild { child: Node },
    RemoveChild { child: Node },
    Mount { node: Node },
    UpdateLifecycle { node: Node },
    Unmount { node: Node },
}

impl Update {
    pub fn priority(&self) -> Priority {
        match self {
            Update::Mount { .. } => Priority::High,
            _ => Priority::Low,
        }
    }
}
