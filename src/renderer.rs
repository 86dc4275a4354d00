use crate::error::TrellisError;
use crate::node::{Node, NodeId, PropValue, Props};
use crate::queue::UpdateApplier;
use crate::registry::WidgetRegistry;
use crate::update::Update;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

/// The native rendering surface. Payload strings are JSON produced by
/// the encoders in this module; the surface owns their interpretation.
pub trait RendererSink: Send + Sync {
    fn set_element(&self, element: &str) -> Result<(), TrellisError>;
    fn set_children(&self, parent_id: NodeId, children: &str) -> Result<(), TrellisError>;
    fn element_op(&self, id: NodeId, op: &str) -> Result<(), TrellisError>;
}

/// Per-widget operations, tagged with an `op` field on the wire.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum WidgetOp {
    SetValue { value: String },
    SetSelectedIndex { index: u32 },
    ResetData,
    SetData { data: Vec<Value> },
    AppendData { data: Vec<Value> },
    #[serde(rename = "appendData")]
    AppendDataToPlotLine { x: f64, y: f64 },
    SetAxesDecimalDigits { x: f64, y: f64 },
    SetAxesAutoFit { enabled: bool },
}

fn prop_to_json(value: &PropValue) -> Value {
    match value {
        PropValue::Null => Value::Null,
        PropValue::Bool(b) => Value::Bool(*b),
        PropValue::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        PropValue::Str(s) => Value::String(s.clone()),
        PropValue::Map(map) => {
            let mut out = Map::new();
            for (k, v) in map {
                out.insert(k.clone(), prop_to_json(v));
            }
            Value::Object(out)
        }
    }
}

/// Element description: the node's props flattened into one object with
/// `id` and `type` alongside them.
pub fn encode_element(node: &Node) -> Result<String, TrellisError> {
    let mut object = Map::new();
    for (key, value) in &node.props {
        object.insert(key.clone(), prop_to_json(value));
    }
    object.insert("id".to_string(), Value::from(node.id));
    object.insert("type".to_string(), Value::String(node.ty.clone()));
    Ok(serde_json::to_string(&Value::Object(object))?)
}

pub fn encode_children(children: &[NodeId]) -> Result<String, TrellisError> {
    Ok(serde_json::to_string(children)?)
}

pub fn encode_op(op: &WidgetOp) -> Result<String, TrellisError> {
    Ok(serde_json::to_string(op)?)
}

/// Translates each update variant into renderer-sink calls and keeps
/// the widget registry in step with what the surface has been told.
pub struct RendererApplier {
    registry: Arc<WidgetRegistry>,
    sink: Arc<dyn RendererSink>,
}

impl RendererApplier {
    pub fn new(registry: Arc<WidgetRegistry>, sink: Arc<dyn RendererSink>) -> Self {
        Self { registry, sink }
    }

    fn push_element(&self, node: &Node) -> Result<(), TrellisError> {
        self.sink.set_element(&encode_element(node)?)?;
        self.registry.register(node.id, node.clone());
        Ok(())
    }

    fn push_children(&self, node: &Node) -> Result<(), TrellisError> {
        self.sink
            .set_children(node.id, &encode_children(&node.child_ids())?)
    }

    fn apply_props(&self, id: NodeId, patch: Props) -> Result<(), TrellisError> {
        match self.registry.get_by_id(id) {
            Some(mut node) => {
                for (key, value) in patch {
                    match value {
                        PropValue::Null => {
                            node.props.remove(&key);
                        }
                        value => {
                            node.props.insert(key, value);
                        }
                    }
                }
                self.push_element(&node)
            }
            None => {
                // Unregistered id: forward the patch addressed by id
                // alone. Not found is not an error here.
                let patched = Node::new(id, "").with_props(patch);
                self.sink.set_element(&encode_element(&patched)?)
            }
        }
    }

    pub fn set_input_text(&self, id: NodeId, value: &str) -> Result<(), TrellisError> {
        self.element_op(
            id,
            &WidgetOp::SetValue {
                value: value.to_string(),
            },
        )
    }

    pub fn set_combo_selected_index(&self, id: NodeId, index: u32) -> Result<(), TrellisError> {
        self.element_op(id, &WidgetOp::SetSelectedIndex { index })
    }

    pub fn set_data(&self, id: NodeId, data: Vec<Value>) -> Result<(), TrellisError> {
        self.element_op(id, &WidgetOp::SetData { data })
    }

    pub fn append_data(&self, id: NodeId, data: Vec<Value>) -> Result<(), TrellisError> {
        self.element_op(id, &WidgetOp::AppendData { data })
    }

    pub fn reset_data(&self, id: NodeId) -> Result<(), TrellisError> {
        self.element_op(id, &WidgetOp::ResetData)
    }

    pub fn append_data_to_plot_line(&self, id: NodeId, x: f64, y: f64) -> Result<(), TrellisError> {
        self.element_op(id, &WidgetOp::AppendDataToPlotLine { x, y })
    }

    pub fn set_axes_decimal_digits(&self, id: NodeId, x: f64, y: f64) -> Result<(), TrellisError> {
        self.element_op(id, &WidgetOp::SetAxesDecimalDigits { x, y })
    }

    pub fn set_axes_auto_fit(&self, id: NodeId, enabled: bool) -> Result<(), TrellisError> {
        self.element_op(id, &WidgetOp::SetAxesAutoFit { enabled })
    }

    fn element_op(&self, id: NodeId, op: &WidgetOp) -> Result<(), TrellisError> {
        self.sink.element_op(id, &encode_op(op)?)
    }
}

impl UpdateApplier for RendererApplier {
    fn apply(&self, update: Update) -> Result<(), TrellisError> {
        match update {
            Update::ReplaceChild { old, new } => {
                // Replace-and-remount: the old entry and its click
                // handler go away, the new subtree is announced.
                self.registry.remove(old.id);
                self.push_element(&new)?;
                self.push_children(&new)
            }
            Update::UpdateProps { id, props } => self.apply_props(id, props),
            Update::AddChild { child } => self.push_element(&child),
            Update::RemoveChild { child } => {
                self.registry.remove(child.id);
                Ok(())
            }
            Update::Mount { node } => {
                self.push_element(&node)?;
                self.push_children(&node)
            }
            Update::UpdateLifecycle { node } => {
                self.registry.register(node.id, node);
                Ok(())
            }
            Update::Unmount { node } => {
                self.registry.remove(node.id);
                Ok(())
            }
        }
    }
}
