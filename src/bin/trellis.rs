use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::sync::Arc;
use trellis::node::Node;
use trellis::queue::UpdateQueue;
use trellis::reconcile::reconcile;
use trellis::registry::WidgetRegistry;
use trellis::renderer::{RendererApplier, RendererSink};
use trellis::TrellisError;

#[derive(Parser)]
#[command(name = "trellis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the edit script between two tree snapshots
    Diff {
        old: String,
        new: String,
    },
    /// Apply the edit script to a stdout renderer sink
    Apply {
        old: String,
        new: String,
    },
}

fn load_tree(path: &str) -> Result<Node> {
    let data =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    let node: Node = serde_json::from_str(&data)?;
    node.validate()
        .with_context(|| format!("Malformed tree in {}", path))?;
    Ok(node)
}

/// Prints every renderer call instead of drawing anything.
struct StdoutSink;

impl RendererSink for StdoutSink {
    fn set_element(&self, element: &str) -> Result<(), TrellisError> {
        println!("setElement {}", element);
        Ok(())
    }

    fn set_children(&self, parent_id: u64, children: &str) -> Result<(), TrellisError> {
        println!("setChildren {} {}", parent_id, children);
        Ok(())
    }

    fn element_op(&self, id: u64, op: &str) -> Result<(), TrellisError> {
        println!("elementOp {} {}", id, op);
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Diff { old, new } => {
            let old_tree = load_tree(&old)?;
            let new_tree = load_tree(&new)?;

            let updates = reconcile(&old_tree, &new_tree);
            println!("{}", serde_json::to_string_pretty(&updates)?);
        }
        Commands::Apply { old, new } => {
            let old_tree = load_tree(&old)?;
            let new_tree = load_tree(&new)?;

            let registry = Arc::new(WidgetRegistry::new());
            let applier = RendererApplier::new(registry.clone(), Arc::new(StdoutSink));
            let queue = UpdateQueue::new();

            let updates = reconcile(&old_tree, &new_tree);
            let count = updates.len();
            for update in updates {
                queue.enqueue(update);
            }
            queue.flush(&applier)?;

            println!("Applied {} updates, {} live widgets", count, registry.len());
        }
    }

    Ok(())
}
