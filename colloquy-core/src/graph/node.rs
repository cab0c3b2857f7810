//! Dialogue Nodes
//!
//! This module defines the node type that lives in a dialogue graph.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

/// Width of a node body on the canvas.
pub const NODE_WIDTH: f32 = 200.0;

/// Height of a node body on the canvas.
pub const NODE_HEIGHT: f32 = 100.0;

/// Side length of the square canvas nodes are placed on.
pub const CANVAS_SIZE: f32 = 5000.0;

/// Top edge of the placeable area. Keeps node bodies clear of the header
/// band drawn above them.
pub const CANVAS_TOP: f32 = 20.0;

/// Where a node lands when nothing chooses a position for it.
const DEFAULT_POSITION: Vec2 = Vec2 { x: 10.0, y: 50.0 };

/// Unique identifier for a node in a dialogue graph.
///
/// Assigned once when the node is created and immutable afterwards. Two
/// nodes are the same node exactly when their identifiers are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    /// Generate a new unique node ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A 2D point or offset on the editor canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A single dialogue unit in the graph.
///
/// A node owns its text and its outgoing edges; edges name the identifiers
/// of successor nodes and are resolved through the owning container's index.
/// Nodes never hold references back into the container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier, assigned at creation and never changed.
    id: NodeId,

    /// Free-form dialogue text.
    content: String,

    /// Identifiers of direct successors, in first-insertion order.
    children: SmallVec<[NodeId; 4]>,

    /// Top-left corner of the node body on the canvas.
    position: Vec2,

    /// Scroll offset of the node's content view.
    scroll: Vec2,
}

impl Node {
    /// Create a node with a fresh unique identifier.
    pub fn new() -> Self {
        Self::with_id(NodeId::new())
    }

    /// Create a node with a caller-supplied identifier.
    ///
    /// This is the reconstruction path for loaded records; nodes added to a
    /// live dialogue come from the container's creation operations, which
    /// generate the identifier themselves.
    pub fn with_id(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            content: String::new(),
            children: SmallVec::new(),
            position: DEFAULT_POSITION,
            scroll: Vec2::ZERO,
        }
    }

    /// The node's identifier.
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// The dialogue text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Identifiers of direct successors, in first-insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Top-left corner of the node body.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Scroll offset of the node's content view.
    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    /// Replace the dialogue text.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Move the node, clamping the position into the canvas bounds.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = Vec2::new(
            position.x.clamp(0.0, CANVAS_SIZE),
            position.y.clamp(CANVAS_TOP, CANVAS_SIZE),
        );
    }

    /// Store a new scroll offset.
    pub fn set_scroll(&mut self, scroll: Vec2) {
        self.scroll = scroll;
    }

    /// Record `id` as a direct successor.
    ///
    /// Adding an identifier that is already present is a no-op, so the list
    /// stays duplicate-free and keeps first-insertion order.
    pub fn add_child(&mut self, id: NodeId) {
        if !self.children.contains(&id) {
            self.children.push(id);
        }
    }

    /// Remove `id` from the successor list.
    ///
    /// Returns whether an edge was actually removed.
    pub fn remove_child(&mut self, id: &NodeId) -> bool {
        match self.children.iter().position(|child| child == id) {
            Some(slot) => {
                self.children.remove(slot);
                true
            }
            None => false,
        }
    }

    /// Check whether `id` is a direct successor.
    pub fn has_child(&self, id: &NodeId) -> bool {
        self.children.contains(id)
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}
