use crate::error::TrellisError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub type NodeId = u64;

/// Closed union of supported prop values. Anything else is unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Map(HashMap<String, PropValue>),
}

pub type Props = HashMap<String, PropValue>;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Lifecycle {
    pub mounted: bool,
    pub updated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub props: Props,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default)]
    pub lifecycle: Lifecycle,
}

impl Node {
    pub fn new(id: NodeId, ty: &str) -> Self {
        Self {
            id,
            ty: ty.to_string(),
            props: Props::new(),
            children: Vec::new(),
            lifecycle: Lifecycle::default(),
        }
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    pub fn with_prop(mut self, key: &str, value: PropValue) -> Self {
        self.props.insert(key.to_string(), value);
        self
    }

    /// Rejects duplicate ids among the immediate children. A tree with
    /// duplicate child ids is an authoring bug and must not reach the
    /// diff engine.
    pub fn with_children(mut self, children: Vec<Node>) -> Result<Self, TrellisError> {
        let mut seen = HashSet::new();
        for child in &children {
            if !seen.insert(child.id) {
                return Err(TrellisError::DuplicateChildId(child.id));
            }
        }
        self.children = children;
        Ok(self)
    }

    pub fn mounted(mut self) -> Self {
        self.lifecycle.mounted = true;
        self
    }

    pub fn updated(mut self) -> Self {
        self.lifecycle.updated = true;
        self
    }

    /// Recursive duplicate-child-id check for trees that arrive from
    /// outside the builder path (e.g. deserialized snapshot files).
    pub fn validate(&self) -> Result<(), TrellisError> {
        let mut seen = HashSet::new();
        for child in &self.children {
            if !seen.insert(child.id) {
                return Err(TrellisError::DuplicateChildId(child.id));
            }
            child.validate()?;
        }
        Ok(())
    }

    pub fn child_ids(&self) -> Vec<NodeId> {
        self.children.iter().map(|c| c.id).collect()
    }
}
