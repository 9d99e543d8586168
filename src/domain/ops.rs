//! Pure tree operations
//!
//! Every operation takes the current tree by reference and returns a new tree.
//! The target is located by depth-first pre-order search; only the path from the
//! root to the target is rebuilt, other subtrees are cloned as they are.
//! If ids are duplicated, the first pre-order match is the one acted on.

use tracing::{debug, trace};

use crate::domain::id::IdGenerator;
use crate::domain::node::{Node, NodeId, NodeUpdate};

/// Child-index path from `tree` to the first node with `id` (pre-order).
///
/// The root itself yields an empty path.
pub fn find_path(tree: &Node, id: &NodeId) -> Option<Vec<usize>> {
    if &tree.id == id {
        return Some(Vec::new());
    }
    tree.children.iter().enumerate().find_map(|(idx, child)| {
        find_path(child, id).map(|mut rest| {
            rest.insert(0, idx);
            rest
        })
    })
}

/// First node with `id` in pre-order.
pub fn find_node<'a>(tree: &'a Node, id: &NodeId) -> Option<&'a Node> {
    tree.iter().find(|node| &node.id == id)
}

pub fn contains(tree: &Node, id: &NodeId) -> bool {
    find_node(tree, id).is_some()
}

/// Node at a child-index path.
pub fn node_at<'a>(tree: &'a Node, path: &[usize]) -> Option<&'a Node> {
    path.iter()
        .try_fold(tree, |node, &idx| node.children.get(idx))
}

/// Resolve a dotted, 1-based position such as `2.1` (second child of the root,
/// then its first child). The empty string addresses the root.
pub fn resolve_position<'a>(tree: &'a Node, position: &str) -> Option<&'a Node> {
    if position.is_empty() {
        return Some(tree);
    }
    let path = position
        .split('.')
        .map(|part| part.parse::<usize>().ok()?.checked_sub(1))
        .collect::<Option<Vec<_>>>()?;
    node_at(tree, &path)
}

/// Dotted, 1-based position of `id`; the root maps to the empty string.
pub fn position_of(tree: &Node, id: &NodeId) -> Option<String> {
    find_path(tree, id).map(|path| format_position(&path))
}

pub(crate) fn format_position(path: &[usize]) -> String {
    path.iter()
        .map(|idx| (idx + 1).to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Append a fresh empty leaf to the children of `target`.
///
/// Missing target: returns an equal tree and consumes no id.
pub fn add_child(tree: &Node, target: &NodeId, ids: &dyn IdGenerator) -> Node {
    let Some(path) = find_path(tree, target) else {
        debug!("add_child: target {} not found", target);
        return tree.clone();
    };
    let child = Node::leaf(ids.next_id());
    trace!("add_child: {} -> {}", target, child.id);
    rebuild_at(tree, &path, move |parent| {
        let mut parent = parent.clone();
        parent.children.push(child);
        parent
    })
}

/// Remove `target` and its whole subtree.
///
/// Deleting the root and deleting a missing id both return an equal tree.
pub fn delete_by_id(tree: &Node, target: &NodeId) -> Node {
    let Some(path) = find_path(tree, target) else {
        debug!("delete_by_id: target {} not found", target);
        return tree.clone();
    };
    let Some((&last, parent_path)) = path.split_last() else {
        debug!("delete_by_id: refusing to delete root {}", target);
        return tree.clone();
    };
    trace!("delete_by_id: {}", target);
    rebuild_at(tree, parent_path, |parent| Node {
        id: parent.id.clone(),
        title: parent.title.clone(),
        text: parent.text.clone(),
        children: parent
            .children
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != last)
            .map(|(_, child)| child.clone())
            .collect(),
    })
}

/// Replace the body text of `target`.
pub fn update_text(tree: &Node, target: &NodeId, text: impl Into<String>) -> Node {
    update_fields(tree, target, &NodeUpdate::text(text))
}

/// Replace whichever of title/text the update supplies.
pub fn update_fields(tree: &Node, target: &NodeId, update: &NodeUpdate) -> Node {
    let Some(path) = find_path(tree, target) else {
        debug!("update_fields: target {} not found", target);
        return tree.clone();
    };
    trace!("update_fields: {} {:?}", target, update);
    rebuild_at(tree, &path, |node| update.apply_to(node))
}

/// Rebuild the nodes along `path`, replacing the node at its end with `edit(node)`.
fn rebuild_at(tree: &Node, path: &[usize], edit: impl FnOnce(&Node) -> Node) -> Node {
    let Some((&head, rest)) = path.split_first() else {
        return edit(tree);
    };
    let mut children = Vec::with_capacity(tree.children.len());
    children.extend(tree.children[..head].iter().cloned());
    children.push(rebuild_at(&tree.children[head], rest, edit));
    children.extend(tree.children[head + 1..].iter().cloned());
    Node {
        id: tree.id.clone(),
        title: tree.title.clone(),
        text: tree.text.clone(),
        children,
    }
}
