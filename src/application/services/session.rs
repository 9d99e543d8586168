//! Edit session: the single owner of the current tree
//!
//! Each edit replaces the held tree with the value returned by a pure domain
//! operation. Precondition violations that the pure operations would silently
//! ignore (unknown target, deleting the root) are reported as `DomainError`.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::{
    self, DomainError, DomainResult, IdGenerator, Node, NodeId, NodeUpdate, ROOT_ID,
};

pub struct EditSession {
    tree: Node,
    ids: Arc<dyn IdGenerator>,
}

impl EditSession {
    /// Start with an empty tree.
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self::with_tree(Node::root(), ids)
    }

    pub fn with_tree(tree: Node, ids: Arc<dyn IdGenerator>) -> Self {
        Self { tree, ids }
    }

    pub fn tree(&self) -> &Node {
        &self.tree
    }

    /// Discard the tree and start from a fresh root.
    pub fn reset(&mut self) {
        debug!("reset: discarding {} nodes", self.tree.node_count());
        self.tree = Node::root();
    }

    /// Map a user-supplied target to a node id.
    ///
    /// Accepts `root`, a dotted 1-based position (`2.1`), or an exact node id.
    /// A token that reads as a position is tried as one first, then as an id.
    pub fn resolve(&self, token: &str) -> DomainResult<NodeId> {
        if token == ROOT_ID {
            return Ok(self.tree.id.clone());
        }
        if is_position(token) {
            if let Some(node) = domain::resolve_position(&self.tree, token) {
                return Ok(node.id.clone());
            }
        }
        let id = NodeId::from(token);
        if domain::contains(&self.tree, &id) {
            Ok(id)
        } else if is_position(token) {
            Err(DomainError::InvalidPosition(token.to_string()))
        } else {
            Err(DomainError::NodeNotFound(id))
        }
    }

    /// Append an empty child to `target`; returns the new node's id.
    #[instrument(level = "debug", skip(self))]
    pub fn add_child(&mut self, target: &NodeId) -> DomainResult<NodeId> {
        self.ensure_exists(target)?;
        let tree = domain::add_child(&self.tree, target, self.ids.as_ref());
        let added = domain::find_node(&tree, target)
            .and_then(|parent| parent.children.last())
            .map(|child| child.id.clone())
            .ok_or_else(|| DomainError::NodeNotFound(target.clone()))?;
        self.tree = tree;
        Ok(added)
    }

    /// Remove `target` and its subtree; the root is rejected.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, target: &NodeId) -> DomainResult<()> {
        if target == &self.tree.id {
            return Err(DomainError::RootNotDeletable);
        }
        self.ensure_exists(target)?;
        self.tree = domain::delete_by_id(&self.tree, target);
        Ok(())
    }

    /// Set the title; surrounding whitespace is trimmed.
    pub fn set_title(&mut self, target: &NodeId, title: &str) -> DomainResult<()> {
        self.update(target, NodeUpdate::title(title.trim()))
    }

    /// Set the body text; surrounding whitespace is trimmed.
    pub fn set_text(&mut self, target: &NodeId, text: &str) -> DomainResult<()> {
        self.update(target, NodeUpdate::text(text.trim()))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn update(&mut self, target: &NodeId, update: NodeUpdate) -> DomainResult<()> {
        self.ensure_exists(target)?;
        self.tree = domain::update_fields(&self.tree, target, &update);
        Ok(())
    }

    fn ensure_exists(&self, target: &NodeId) -> DomainResult<()> {
        if domain::contains(&self.tree, target) {
            Ok(())
        } else {
            Err(DomainError::NodeNotFound(target.clone()))
        }
    }
}

fn is_position(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit() || c == '.')
}
