use crate::node::NodeId;
use crate::registry::WidgetRegistry;
use std::sync::Arc;

/// Discrete events reported by the rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Init,
    TextChanged { id: NodeId, text: String },
    ComboChanged { id: NodeId, index: u32 },
    NumericChanged { id: NodeId, value: f64 },
    BooleanChanged { id: NodeId, value: bool },
    MultiNumericChanged { id: NodeId, values: Vec<f64> },
    Click { id: NodeId },
}

/// Application-side event sink. Every method defaults to a no-op so
/// handlers override only what they care about.
#[allow(unused_variables)]
pub trait EventHandler: Send + Sync {
    fn on_init(&self) {}
    fn on_text_changed(&self, id: NodeId, text: &str) {}
    fn on_combo_changed(&self, id: NodeId, index: u32) {}
    fn on_numeric_changed(&self, id: NodeId, value: f64) {}
    fn on_boolean_changed(&self, id: NodeId, value: bool) {}
    fn on_multi_numeric_changed(&self, id: NodeId, values: &[f64]) {}
    fn on_click(&self, id: NodeId) {}
}

/// Routes surface events. Clicks go through the registry's dispatch
/// table first, then every event is forwarded to the application
/// handler. Unknown ids are no-ops.
pub struct EventRouter {
    registry: Arc<WidgetRegistry>,
    handler: Arc<dyn EventHandler>,
}

impl EventRouter {
    pub fn new(registry: Arc<WidgetRegistry>, handler: Arc<dyn EventHandler>) -> Self {
        Self { registry, handler }
    }

    pub fn route(&self, event: UiEvent) {
        match event {
            UiEvent::Init => self.handler.on_init(),
            UiEvent::TextChanged { id, text } => self.handler.on_text_changed(id, &text),
            UiEvent::ComboChanged { id, index } => self.handler.on_combo_changed(id, index),
            UiEvent::NumericChanged { id, value } => self.handler.on_numeric_changed(id, value),
            UiEvent::BooleanChanged { id, value } => self.handler.on_boolean_changed(id, value),
            UiEvent::MultiNumericChanged { id, values } => {
                self.handler.on_multi_numeric_changed(id, &values)
            }
            UiEvent::Click { id } => {
                self.registry.dispatch_click(id);
                self.handler.on_click(id);
            }
        }
    }
}
