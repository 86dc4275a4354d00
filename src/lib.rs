pub mod bridge;
pub mod error;
pub mod events;
pub mod node;
pub mod queue;
pub mod reconcile;
pub mod registry;
pub mod renderer;
pub mod update;

pub use bridge::Bridge;
pub use error::TrellisError;
pub use node::{Lifecycle, Node, NodeId, PropValue, Props};
pub use queue::{UpdateApplier, UpdateQueue};
pub use reconcile::{diff_children, diff_props, reconcile};
pub use registry::WidgetRegistry;
pub use renderer::{RendererApplier, RendererSink, WidgetOp};
pub use update::{Priority, Update};
