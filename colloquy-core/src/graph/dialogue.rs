//! Dialogue Container
//!
//! The container owns the node collection and coordinates every structural
//! mutation: creating and deleting nodes, linking and unlinking edges, and
//! resolving child identifiers back to nodes.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use super::node::{Node, NodeId, Vec2, NODE_WIDTH};

/// Horizontal spacing between a parent and a newly spawned child.
pub const CHILD_GAP: f32 = 20.0;

/// Errors surfaced by structural operations.
#[derive(Debug, Error)]
pub enum DialogueError {
    /// The referenced node is not present in this dialogue.
    #[error("no node with id {0} in this dialogue")]
    UnknownNode(NodeId),
}

/// An editable graph of dialogue nodes.
///
/// The creation-ordered node list is the single source of truth; the id
/// index is derived from it and rebuilt in full after every membership
/// change. The first node in the list is the root, and construction always
/// seeds one, so a freshly built dialogue is never empty.
///
/// Edges are unconstrained beyond direct-successor semantics: a node may
/// have several parents, and cycles are legal. Child identifiers that no
/// longer resolve are skipped during traversal rather than reported.
#[derive(Debug)]
pub struct Dialogue {
    /// Canonical node store, in creation order.
    nodes: Vec<Node>,

    /// Derived lookup from node id to slot in `nodes`.
    index: HashMap<NodeId, usize>,
}

impl Dialogue {
    /// Create a dialogue seeded with a single root node.
    pub fn new() -> Self {
        Self::from_nodes(Vec::new())
    }

    /// Rebuild a dialogue around a loaded node collection.
    ///
    /// An empty collection is seeded with a fresh root so the non-empty
    /// invariant holds from the start; the index is rebuilt either way.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        let mut dialogue = Self {
            nodes,
            index: HashMap::new(),
        };
        if dialogue.nodes.is_empty() {
            dialogue.nodes.push(Node::new());
        }
        dialogue.rebuild_index();
        dialogue
    }

    /// Recompute the id index from the node store.
    ///
    /// Called after every membership change; never patched piecemeal.
    fn rebuild_index(&mut self) {
        self.index.clear();
        for (slot, node) in self.nodes.iter().enumerate() {
            self.index.insert(node.id().clone(), slot);
        }
    }

    fn slot(&self, id: &NodeId) -> Result<usize, DialogueError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| DialogueError::UnknownNode(id.clone()))
    }

    /// The node collection, in creation order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes in the dialogue.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the dialogue holds no nodes.
    ///
    /// Only reachable by deleting every node; construction always seeds.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The entry node of the dialogue.
    ///
    /// # Panics
    ///
    /// Panics if the store is empty. Construction always seeds a root, so
    /// this can only happen after every node has been deleted.
    pub fn root(&self) -> &Node {
        self.nodes.first().expect("dialogue contains no nodes")
    }

    /// Look up a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).map(|&slot| &self.nodes[slot])
    }

    /// Look up a node by id for mutation.
    ///
    /// Content, position, scroll, and edge edits through the returned node
    /// do not change membership, so the index stays valid.
    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        match self.index.get(id) {
            Some(&slot) => Some(&mut self.nodes[slot]),
            None => None,
        }
    }

    /// Create a new unparented node and return it.
    pub fn create_node(&mut self) -> &Node {
        let node = Node::new();
        debug!(id = %node.id(), "created node");
        self.nodes.push(node);
        self.rebuild_index();
        &self.nodes[self.nodes.len() - 1]
    }

    /// Create a new node as a child of `parent` and return it.
    ///
    /// The new node is placed one body width (plus a gap) to the right of
    /// its parent, so spawned replies cascade rightward across the canvas.
    pub fn create_child(&mut self, parent: &NodeId) -> Result<&Node, DialogueError> {
        let parent_slot = self.slot(parent)?;
        let mut node = Node::new();
        node.set_position(self.nodes[parent_slot].position() + Vec2::new(NODE_WIDTH + CHILD_GAP, 0.0));
        debug!(id = %node.id(), parent = %parent, "created child node");

        self.nodes[parent_slot].add_child(node.id().clone());
        self.nodes.push(node);
        self.rebuild_index();
        Ok(&self.nodes[self.nodes.len() - 1])
    }

    /// Delete a node and scrub its id from every surviving children list.
    ///
    /// Returns whether a node was actually removed. Deleting the final node
    /// leaves the store empty; see [`Dialogue::root`].
    pub fn delete_node(&mut self, id: &NodeId) -> bool {
        let Ok(slot) = self.slot(id) else {
            return false;
        };
        self.nodes.remove(slot);
        self.rebuild_index();
        for node in &mut self.nodes {
            node.remove_child(id);
        }
        debug!(id = %id, "deleted node");
        true
    }

    /// Add an edge from `parent` to `child`.
    ///
    /// The child id is recorded as-is: it does not have to resolve, and a
    /// duplicate add is a no-op.
    pub fn link(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), DialogueError> {
        let slot = self.slot(parent)?;
        self.nodes[slot].add_child(child.clone());
        debug!(parent = %parent, child = %child, "linked nodes");
        Ok(())
    }

    /// Remove the edge from `parent` to `child`, if present.
    ///
    /// Returns whether an edge was actually removed.
    pub fn unlink(&mut self, parent: &NodeId, child: &NodeId) -> Result<bool, DialogueError> {
        let slot = self.slot(parent)?;
        let removed = self.nodes[slot].remove_child(child);
        if removed {
            debug!(parent = %parent, child = %child, "unlinked nodes");
        }
        Ok(removed)
    }

    /// Resolve a node's children, in children-list order.
    ///
    /// Identifiers with no current entry in the index are skipped.
    pub fn children<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Node> + 'a {
        node.children().iter().filter_map(move |id| self.node(id))
    }

    /// The first node in store order that lists `node` as a child.
    ///
    /// A node can structurally have several parents; this returns the
    /// primary one. Use [`Dialogue::parents`] for all of them.
    pub fn parent(&self, node: &Node) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|candidate| candidate.has_child(node.id()))
    }

    /// Every node that lists `node` as a child, in store order.
    pub fn parents<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes
            .iter()
            .filter(move |candidate| candidate.has_child(node.id()))
    }
}

impl Default for Dialogue {
    fn default() -> Self {
        Self::new()
    }
}
