//! Mind-map node model
//!
//! A tree is an owned `Node` value; children are held by value in insertion order.

use std::fmt;

/// Reserved id of the root of a fresh tree.
pub const ROOT_ID: &str = "root";

/// Opaque node identifier, unique within one tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id of the root of a fresh tree.
    pub fn root() -> Self {
        Self(ROOT_ID.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Single entry of the mind map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Assigned at creation, never reassigned
    pub id: NodeId,
    /// Heading line; may be empty
    pub title: String,
    /// Body text; may be empty
    pub text: String,
    /// Ordered children, insertion order is display and export order
    pub children: Vec<Node>,
}

impl Default for Node {
    fn default() -> Self {
        Self::root()
    }
}

impl Node {
    /// Empty tree: root only, empty title and text.
    pub fn root() -> Self {
        Self::leaf(NodeId::root())
    }

    /// Empty node without children.
    pub fn leaf(id: NodeId) -> Self {
        Self {
            id,
            title: String::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Number of levels in this subtree; a lone node has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Node::depth).max().unwrap_or(0)
    }

    /// Depth-first pre-order traversal, children left to right.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }
}

/// Pre-order iterator over a subtree.
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        self.stack.extend(current.children.iter().rev());
        Some(current)
    }
}

/// Partial update of a node's fields; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeUpdate {
    pub title: Option<String>,
    pub text: Option<String>,
}

impl NodeUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            text: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            title: None,
            text: Some(text.into()),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Copy of `node` with the supplied fields replaced; id and children are kept.
    pub fn apply_to(&self, node: &Node) -> Node {
        Node {
            id: node.id.clone(),
            title: self.title.clone().unwrap_or_else(|| node.title.clone()),
            text: self.text.clone().unwrap_or_else(|| node.text.clone()),
            children: node.children.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::root()
            .with_child(
                Node::leaf("a".into())
                    .with_child(Node::leaf("a1".into()))
                    .with_child(Node::leaf("a2".into())),
            )
            .with_child(Node::leaf("b".into()))
    }

    #[test]
    fn given_fresh_root_when_inspecting_then_is_empty_leaf() {
        let root = Node::root();
        assert_eq!(root.id.as_str(), ROOT_ID);
        assert!(root.title.is_empty());
        assert!(root.text.is_empty());
        assert!(root.is_leaf());
        assert_eq!(root.node_count(), 1);
        assert_eq!(root.depth(), 1);
    }

    #[test]
    fn given_tree_when_iterating_then_visits_pre_order() {
        let tree = sample();
        let ids: Vec<&str> = tree.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["root", "a", "a1", "a2", "b"]);
    }

    #[test]
    fn given_tree_when_measuring_then_counts_nodes_and_levels() {
        let tree = sample();
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn given_partial_update_when_applied_then_only_supplied_fields_change() {
        let node = Node::leaf("x".into())
            .with_title("old title")
            .with_text("old text")
            .with_child(Node::leaf("y".into()));

        let updated = NodeUpdate::title("new title").apply_to(&node);

        assert_eq!(updated.id, node.id);
        assert_eq!(updated.title, "new title");
        assert_eq!(updated.text, "old text");
        assert_eq!(updated.children, node.children);
    }
}
