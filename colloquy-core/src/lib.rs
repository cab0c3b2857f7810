//! Colloquy Core
//!
//! This crate provides the core data model for the Colloquy dialogue
//! editor. It implements:
//!
//! - The dialogue graph: string-identified nodes with editable text,
//!   persistent layout state, and directed child edges
//! - Editing interactions: canvas hit-test geometry and the two-phase
//!   link/unlink/drag gesture protocol
//! - The persistence boundary: loading and saving the node list as JSON
//!
//! The crate is GUI-toolkit agnostic. A host editor window feeds pointer
//! events through [`editor::GestureTracker`], draws node bodies and
//! connector curves from the geometry in [`editor`], and persists assets
//! through [`persist`]. All state lives in the [`graph::Dialogue`]
//! container; the editor layer holds nothing but the gesture phase.
//!
//! # Architecture
//!
//! - `graph`: nodes and the owning dialogue container
//! - `editor`: canvas geometry, hit-testing, and gesture tracking
//! - `persist`: JSON load/save of dialogue assets
//!
//! # Example
//!
//! ```rust
//! use colloquy_core::graph::Dialogue;
//!
//! // A fresh dialogue always has a root node.
//! let mut dialogue = Dialogue::new();
//! let root = dialogue.root().id().clone();
//!
//! // Spawn a reply; it cascades rightward from its parent on the canvas.
//! let reply = dialogue.create_child(&root).unwrap().id().clone();
//! assert!(dialogue.root().has_child(&reply));
//!
//! dialogue.node_mut(&reply).unwrap().set_content("I was at the docks.");
//! ```

pub mod editor;
pub mod graph;
pub mod persist;
