use crate::error::TrellisError;
use crate::node::{Node, NodeId};
use crate::queue::UpdateQueue;
use crate::reconcile::reconcile;
use crate::registry::WidgetRegistry;
use crate::renderer::{RendererApplier, RendererSink};
use crate::update::Update;
use serde_json::Value;
use std::sync::Arc;

/// Explicit context object wiring the registry, queue, and renderer
/// handle together. Constructed once at process start and passed by
/// reference to every collaborator; there is no global state.
pub struct Bridge {
    registry: Arc<WidgetRegistry>,
    queue: UpdateQueue,
    applier: RendererApplier,
}

impl Bridge {
    pub fn new(sink: Arc<dyn RendererSink>) -> Self {
        let registry = Arc::new(WidgetRegistry::new());
        let applier = RendererApplier::new(registry.clone(), sink);
        Self {
            registry,
            queue: UpdateQueue::new(),
            applier,
        }
    }

    pub fn registry(&self) -> &Arc<WidgetRegistry> {
        &self.registry
    }

    pub fn pending_updates(&self) -> usize {
        self.queue.len()
    }

    /// Reconcile two snapshots and buffer the resulting updates.
    pub fn submit(&self, old: &Node, new: &Node) {
        for update in reconcile(old, new) {
            self.queue.enqueue(update);
        }
    }

    /// Drain and apply everything currently buffered.
    pub fn flush(&self) -> Result<(), TrellisError> {
        self.queue.flush(&self.applier)
    }

    /// Reconcile, buffer, and flush in one pass.
    pub fn render(&self, old: &Node, new: &Node) -> Result<(), TrellisError> {
        self.submit(old, new);
        self.flush()
    }

    /// Announce a first tree to the surface, as the init callback does.
    pub fn mount_root(&self, root: &Node) -> Result<(), TrellisError> {
        self.queue.enqueue(Update::Mount { node: root.clone() });
        self.flush()
    }

    pub fn set_input_text(&self, id: NodeId, value: &str) -> Result<(), TrellisError> {
        self.applier.set_input_text(id, value)
    }

    pub fn set_combo_selected_index(&self, id: NodeId, index: u32) -> Result<(), TrellisError> {
        self.applier.set_combo_selected_index(id, index)
    }

    pub fn set_data(&self, id: NodeId, data: Vec<Value>) -> Result<(), TrellisError> {
        self.applier.set_data(id, data)
    }

    pub fn append_data(&self, id: NodeId, data: Vec<Value>) -> Result<(), TrellisError> {
        self.applier.append_data(id, data)
    }

    pub fn reset_data(&self, id: NodeId) -> Result<(), TrellisError> {
        self.applier.reset_data(id)
    }

    pub fn append_data_to_plot_line(&self, id: NodeId, x: f64, y: f64) -> Result<(), TrellisError> {
        self.applier.append_data_to_plot_line(id, x, y)
    }

    pub fn set_axes_decimal_digits(&self, id: NodeId, x: f64, y: f64) -> Result<(), TrellisError> {
        self.applier.set_axes_decimal_digits(id, x, y)
    }

    pub fn set_axes_auto_fit(&self, id: NodeId, enabled: bool) -> Result<(), TrellisError> {
        self.applier.set_axes_auto_fit(id, enabled)
    }
}
