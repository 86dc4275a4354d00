use crate::node::{Node, NodeId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

type ClickHandler = Arc<dyn Fn() + Send + Sync>;

/// Single source of truth for live widget ids, their current node
/// snapshot, and click-event routing. The authoring pass and the
/// renderer callback thread both touch this, so every map lives behind
/// a mutex and id allocation is atomic.
pub struct WidgetRegistry {
    next_id: AtomicU64,
    widgets: Mutex<HashMap<NodeId, Node>>,
    click_handlers: Mutex<HashMap<NodeId, ClickHandler>>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(0),
            widgets: Mutex::new(HashMap::new()),
            click_handlers: Mutex::new(HashMap::new()),
        }
    }

    /// Monotonically increasing, unique across the registry's lifetime,
    /// safe under concurrent callers.
    pub fn next_id(&self) -> NodeId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Insert or overwrite. Re-registration on update is normal.
    pub fn register(&self, id: NodeId, node: Node) {
        self.widgets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, node);
    }

    /// Cloned snapshot of the current entry. Not found is not an error.
    pub fn get_by_id(&self, id: NodeId) -> Option<Node> {
        self.widgets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    /// Removes the entry and any click handler registered for it.
    pub fn remove(&self, id: NodeId) -> Option<Node> {
        self.click_handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
        self.widgets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
    }

    pub fn register_click_handler(&self, id: NodeId, handler: impl Fn() + Send + Sync + 'static) {
        self.click_handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::new(handler));
    }

    /// Invokes the handler synchronously on the calling thread. Returns
    /// false when no handler is registered; that is a no-op, not an
    /// error. The handler runs outside the lock so it may re-enter the
    /// registry.
    pub fn dispatch_click(&self, id: NodeId) -> bool {
        let handler = self
            .click_handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned();
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.widgets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
