//! Dialogue Graph
//!
//! This module implements the directed node graph that backs a dialogue
//! asset.
//!
//! # Overview
//!
//! - Nodes are dialogue units: a stable identifier, editable text, and
//!   layout state for the editor canvas
//! - Edges live on the parent as an ordered list of child identifiers,
//!   resolved through the container's index
//!
//! The shape is deliberately unconstrained: several parents may share one
//! child, and cycles are legal, so a conversation can loop back on itself.
//!
//! # Design Decisions
//!
//! 1. The creation-ordered node list is the single source of truth. The id
//!    index is derived from it and rebuilt in full after every membership
//!    change; rebuilding is cheap at editor scale and the two structures can
//!    never drift apart.
//!
//! 2. Edges name identifiers rather than holding references, so arbitrary
//!    shapes (sharing, cycles) flatten to a plain node list at the
//!    persistence boundary.
//!
//! 3. Traversal tolerates identifiers that no longer resolve: a dangling
//!    child id in a hand-edited asset is skipped, never an error.

mod dialogue;
mod node;

pub use dialogue::{Dialogue, DialogueError, CHILD_GAP};
pub use node::{Node, NodeId, Vec2, CANVAS_SIZE, CANVAS_TOP, NODE_HEIGHT, NODE_WIDTH};
