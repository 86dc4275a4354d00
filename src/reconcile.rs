use crate::node::{Node, PropValue, Props};
use crate::update::Update;

/// Compute the update sequence that transforms `old` into `new`.
///
/// A changed id invalidates any finer-grained comparison, so the whole
/// subtree is replaced. Otherwise props are diffed, children are diffed
/// positionally (recursing into matched pairs), and at most one
/// lifecycle transition is emitted.
pub fn reconcile(old: &Node, new: &Node) -> Vec<Update> {
    let mut updates = Vec::new();

    if old.id != new.id {
        updates.push(Update::ReplaceChild {
            old: old.clone(),
            new: new.clone(),
        });
        return updates;
    }

    let prop_diff = diff_props(&old.props, &new.props);
    if !prop_diff.is_empty() {
        updates.push(Update::UpdateProps {
            id: new.id,
            props: prop_diff,
        });
    }

    updates.extend(diff_children(&old.children, &new.children));

    // Lifecycle transitions are mutually exclusive: the flag pair can
    // only cross one boundary per render pass, checked in this order.
    if !old.lifecycle.mounted && new.lifecycle.mounted {
        updates.push(Update::Mount { node: new.clone() });
    } else if old.lifecycle.mounted && new.lifecycle.updated {
        updates.push(Update::UpdateLifecycle { node: new.clone() });
    } else if old.lifecycle.mounted && !new.lifecycle.mounted {
        updates.push(Update::Unmount { node: old.clone() });
    }

    updates
}

/// Shallow key-by-key props diff. A key present in `old` but absent in
/// `new` maps to `Null` in the result, which the apply step treats as a
/// deletion.
pub fn diff_props(old: &Props, new: &Props) -> Props {
    let mut diff = Props::new();
    for (key, old_value) in old {
        match new.get(key) {
            Some(new_value) if new_value == old_value => {}
            Some(new_value) => {
                diff.insert(key.clone(), new_value.clone());
            }
            None => {
                diff.insert(key.clone(), PropValue::Null);
            }
        }
    }
    for (key, new_value) in new {
        if !old.contains_key(key) {
            diff.insert(key.clone(), new_value.clone());
        }
    }
    diff
}

/// Positional child diff, index-aligned up to the longer list. Matched
/// same-type pairs recurse through `reconcile`; an id change inside the
/// pair still surfaces as a replacement via the recursion's identity
/// check.
pub fn diff_children(old: &[Node], new: &[Node]) -> Vec<Update> {
    let mut updates = Vec::new();
    let max_len = old.len().max(new.len());

    for i in 0..max_len {
        match (old.get(i), new.get(i)) {
            (Some(old_child), Some(new_child)) => {
                if old_child.ty != new_child.ty {
                    updates.push(Update::ReplaceChild {
                        old: old_child.clone(),
                        new: new_child.clone(),
                    });
                } else {
                    updates.extend(reconcile(old_child, new_child));
                }
            }
            (None, Some(new_child)) => {
                updates.push(Update::AddChild {
                    child: new_child.clone(),
                });
            }
            (Some(old_child), None) => {
                updates.push(Update::RemoveChild {
                    child: old_child.clone(),
                });
            }
            (None, None) => {}
        }
    }

    updates
}
