use trellis::node::{Node, PropValue, Props};
use trellis::reconcile::{diff_children, diff_props, reconcile};
use trellis::update::{Priority, Update};

fn props(pairs: &[(&str, PropValue)]) -> Props {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn reconcile_identical_trees_is_empty() {
    let tree = Node::new(0, "node")
        .with_prop("root", PropValue::Bool(true))
        .with_children(vec![
            Node::new(1, "text").with_prop("text", PropValue::Str("hi".to_string())),
            Node::new(2, "button").with_prop("label", PropValue::Str("ok".to_string())),
        ])
        .unwrap();

    let updates = reconcile(&tree, &tree.clone());
    assert!(updates.is_empty());
}

#[test]
fn reconcile_id_change_is_a_single_replace() {
    let old = Node::new(1, "node").with_prop("a", PropValue::Number(1.0));
    let new = Node::new(2, "node").with_prop("b", PropValue::Number(2.0));

    let updates = reconcile(&old, &new);
    assert_eq!(updates.len(), 1);
    match &updates[0] {
        Update::ReplaceChild { old: o, new: n } => {
            assert_eq!(o.id, 1);
            assert_eq!(n.id, 2);
        }
        other => panic!("expected ReplaceChild, got {:?}", other),
    }
}

#[test]
fn reconcile_props_change_emits_update_props_with_diff() {
    let old = Node::new(0, "node").with_prop("style", PropValue::Str("red".to_string()));
    let new = Node::new(0, "node").with_prop("style", PropValue::Str("blue".to_string()));

    let updates = reconcile(&old, &new);
    assert_eq!(updates.len(), 1);
    match &updates[0] {
        Update::UpdateProps { id, props } => {
            assert_eq!(*id, 0);
            assert_eq!(
                props.get("style"),
                Some(&PropValue::Str("blue".to_string()))
            );
        }
        other => panic!("expected UpdateProps, got {:?}", other),
    }
}

#[test]
fn diff_props_table_cases() {
    // {} vs {} -> empty
    assert!(diff_props(&Props::new(), &Props::new()).is_empty());

    // {a:1} vs {a:1,b:2} -> {b:2}
    let old = props(&[("a", PropValue::Number(1.0))]);
    let new = props(&[("a", PropValue::Number(1.0)), ("b", PropValue::Number(2.0))]);
    let diff = diff_props(&old, &new);
    assert_eq!(diff.len(), 1);
    assert_eq!(diff.get("b"), Some(&PropValue::Number(2.0)));

    // {a:1,b:2} vs {a:1} -> {b:null}
    let old = props(&[("a", PropValue::Number(1.0)), ("b", PropValue::Number(2.0))]);
    let new = props(&[("a", PropValue::Number(1.0))]);
    let diff = diff_props(&old, &new);
    assert_eq!(diff.len(), 1);
    assert_eq!(diff.get("b"), Some(&PropValue::Null));
}

#[test]
fn diff_children_matching_children_is_empty() {
    let old = vec![Node::new(1, "node"), Node::new(2, "text")];
    let new = vec![Node::new(1, "node"), Node::new(2, "text")];
    assert!(diff_children(&old, &new).is_empty());
}

#[test]
fn diff_children_empty_lists() {
    assert!(diff_children(&[], &[]).is_empty());
}

#[test]
fn diff_children_trailing_removal() {
    let old = vec![
        Node::new(1, "node"),
        Node::new(2, "node"),
        Node::new(3, "text"),
    ];
    let new = vec![Node::new(1, "node"), Node::new(2, "node")];

    let updates = diff_children(&old, &new);
    assert_eq!(updates.len(), 1);
    assert!(matches!(&updates[0], Update::RemoveChild { child } if child.id == 3));
}

#[test]
fn diff_children_trailing_addition() {
    let old = vec![Node::new(1, "node"), Node::new(2, "node")];
    let new = vec![
        Node::new(1, "node"),
        Node::new(2, "node"),
        Node::new(3, "text"),
    ];

    let updates = diff_children(&old, &new);
    assert_eq!(updates.len(), 1);
    assert!(matches!(&updates[0], Update::AddChild { child } if child.id == 3));
}

#[test]
fn diff_children_type_change_replaces_regardless_of_props() {
    let old = vec![Node::new(1, "div").with_prop("style", PropValue::Str("x".to_string()))];
    let new = vec![Node::new(1, "span").with_prop("style", PropValue::Str("x".to_string()))];

    let updates = diff_children(&old, &new);
    assert_eq!(updates.len(), 1);
    match &updates[0] {
        Update::ReplaceChild { old: o, new: n } => {
            assert_eq!(o.ty, "div");
            assert_eq!(n.ty, "span");
        }
        other => panic!("expected ReplaceChild, got {:?}", other),
    }
}

#[test]
fn diff_children_props_change_updates_not_replaces() {
    let old = vec![Node::new(1, "div").with_prop("style", PropValue::Str("color:red".to_string()))];
    let new =
        vec![Node::new(1, "div").with_prop("style", PropValue::Str("color:blue".to_string()))];

    let updates = diff_children(&old, &new);
    assert_eq!(updates.len(), 1);
    match &updates[0] {
        Update::UpdateProps { id, props } => {
            assert_eq!(*id, 1);
            assert_eq!(
                props.get("style"),
                Some(&PropValue::Str("color:blue".to_string()))
            );
        }
        other => panic!("expected UpdateProps, got {:?}", other),
    }
}

#[test]
fn diff_children_recurses_into_grandchildren() {
    let old = vec![
        Node::new(1, "node")
            .with_children(vec![
                Node::new(2, "text").with_prop("text", PropValue::Str("hi".to_string())),
            ])
            .unwrap(),
    ];
    let new = vec![
        Node::new(1, "node")
            .with_children(vec![
                Node::new(2, "text").with_prop("text", PropValue::Str("bye".to_string())),
            ])
            .unwrap(),
    ];

    let updates = diff_children(&old, &new);
    assert_eq!(updates.len(), 1);
    match &updates[0] {
        Update::UpdateProps { id, props } => {
            assert_eq!(*id, 2);
            assert_eq!(props.get("text"), Some(&PropValue::Str("bye".to_string())));
        }
        other => panic!("expected UpdateProps, got {:?}", other),
    }
}

#[test]
fn lifecycle_mount_transition() {
    let old = Node::new(0, "node");
    let new = Node::new(0, "node").mounted();

    let updates = reconcile(&old, &new);
    assert_eq!(updates.len(), 1);
    assert!(matches!(&updates[0], Update::Mount { node } if node.id == 0));
    assert_eq!(updates[0].priority(), Priority::High);
}

#[test]
fn lifecycle_update_transition() {
    let old = Node::new(0, "node").mounted();
    let new = Node::new(0, "node").mounted().updated();

    let updates = reconcile(&old, &new);
    assert_eq!(updates.len(), 1);
    assert!(matches!(&updates[0], Update::UpdateLifecycle { node } if node.id == 0));
    assert_eq!(updates[0].priority(), Priority::Low);
}

#[test]
fn lifecycle_unmount_transition() {
    let old = Node::new(0, "node").mounted();
    let new = Node::new(0, "node");

    let updates = reconcile(&old, &new);
    assert_eq!(updates.len(), 1);
    assert!(matches!(&updates[0], Update::Unmount { node } if node.id == 0));
}

#[test]
fn lifecycle_transitions_are_mutually_exclusive() {
    // `updated` set while still mounted must not also produce Unmount,
    // even when the new node drops the mounted flag.
    let old = Node::new(0, "node").mounted();
    let new = Node::new(0, "node").updated();

    let updates = reconcile(&old, &new);
    assert_eq!(updates.len(), 1);
    assert!(matches!(&updates[0], Update::UpdateLifecycle { .. }));
}

#[test]
fn duplicate_child_ids_rejected_at_construction() {
    let result = Node::new(0, "node").with_children(vec![
        Node::new(1, "text"),
        Node::new(1, "button"),
    ]);
    assert!(result.is_err());
}

#[test]
fn end_to_end_child_text_change() {
    let old = Node::new(0, "node")
        .with_children(vec![
            Node::new(1, "text").with_prop("text", PropValue::Str("hi".to_string())),
        ])
        .unwrap();
    let new = Node::new(0, "node")
        .with_children(vec![
            Node::new(1, "text").with_prop("text", PropValue::Str("bye".to_string())),
        ])
        .unwrap();

    let updates = reconcile(&old, &new);
    assert_eq!(updates.len(), 1);
    match &updates[0] {
        Update::UpdateProps { id, props } => {
            assert_eq!(*id, 1);
            assert_eq!(props.len(), 1);
            assert_eq!(props.get("text"), Some(&PropValue::Str("bye".to_string())));
        }
        other => panic!("expected UpdateProps, got {:?}", other),
    }
}
