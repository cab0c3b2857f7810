//! Canvas Geometry
//!
//! Hit-test rectangles and connector endpoints, all derived from a node's
//! stored position and the fixed body extent. The presentation layer draws
//! with these same functions, so gestures and rendering can never disagree
//! about where an anchor sits.

use serde::{Deserialize, Serialize};

use crate::graph::{Dialogue, Node, NodeId, Vec2, NODE_HEIGHT, NODE_WIDTH};

/// Side length of the square input/output connector regions.
pub const CONNECTOR_SIZE: f32 = 25.0;

/// Height of the draggable header band above a node body.
pub const HEADER_HEIGHT: f32 = 38.0;

/// How far above the body's top edge the header band starts.
pub const HEADER_RISE: f32 = 25.0;

/// An axis-aligned rectangle on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Whether `point` lies inside the rectangle, edges included.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.w
            && point.y >= self.y
            && point.y <= self.y + self.h
    }
}

/// The interactive region of a node that a canvas point resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// The output connector on the node's right edge.
    Output(NodeId),
    /// The input connector on the node's left edge.
    Input(NodeId),
    /// The draggable header band above the node body.
    Header(NodeId),
}

impl Anchor {
    /// The node this anchor belongs to.
    pub fn node_id(&self) -> &NodeId {
        match self {
            Anchor::Output(id) | Anchor::Input(id) | Anchor::Header(id) => id,
        }
    }
}

/// The node's body rectangle.
pub fn body_rect(node: &Node) -> Rect {
    let p = node.position();
    Rect::new(p.x, p.y, NODE_WIDTH, NODE_HEIGHT)
}

/// The draggable header band above the body.
pub fn header_rect(node: &Node) -> Rect {
    let p = node.position();
    Rect::new(p.x, p.y - HEADER_RISE, NODE_WIDTH, HEADER_HEIGHT)
}

/// Hit region of the input connector on the body's left edge midline.
pub fn input_rect(node: &Node) -> Rect {
    let c = body_rect(node).center();
    Rect::new(
        c.x - NODE_WIDTH / 2.0 - CONNECTOR_SIZE / 4.0,
        c.y - CONNECTOR_SIZE / 2.0,
        CONNECTOR_SIZE,
        CONNECTOR_SIZE,
    )
}

/// Hit region of the output connector on the body's right edge midline.
pub fn output_rect(node: &Node) -> Rect {
    let c = body_rect(node).center();
    Rect::new(
        c.x + NODE_WIDTH / 2.0 - CONNECTOR_SIZE / 1.5,
        c.y - CONNECTOR_SIZE / 2.0,
        CONNECTOR_SIZE,
        CONNECTOR_SIZE,
    )
}

/// Where connector curves into this node terminate.
pub fn input_pos(node: &Node) -> Vec2 {
    let c = body_rect(node).center();
    Vec2::new(c.x - NODE_WIDTH / 2.0, c.y)
}

/// Where connector curves out of this node originate.
pub fn output_pos(node: &Node) -> Vec2 {
    let c = body_rect(node).center();
    Vec2::new(c.x + NODE_WIDTH / 2.0, c.y)
}

/// Resolve a canvas point to the anchor it lands on.
///
/// Output connectors are checked first, then inputs, then headers. Within a
/// pass the last matching node in store order wins, so nodes drawn later
/// shadow the ones beneath them.
pub fn hit_test(dialogue: &Dialogue, point: Vec2) -> Option<Anchor> {
    let mut hit = None;
    for node in dialogue.nodes() {
        if output_rect(node).contains(point) {
            hit = Some(Anchor::Output(node.id().clone()));
        }
    }
    if hit.is_some() {
        return hit;
    }
    for node in dialogue.nodes() {
        if input_rect(node).contains(point) {
            hit = Some(Anchor::Input(node.id().clone()));
        }
    }
    if hit.is_some() {
        return hit;
    }
    for node in dialogue.nodes() {
        if header_rect(node).contains(point) {
            hit = Some(Anchor::Header(node.id().clone()));
        }
    }
    hit
}
