//! Editor Interactions
//!
//! This module models the editing layer of the dialogue graph: the canvas
//! geometry a host window hit-tests against, and the two-phase gesture
//! protocol that turns pointer events into structural mutations.
//!
//! The host stays in charge of rendering and event delivery. On a pointer
//! event it resolves the canvas point with [`hit_test`], hands the resulting
//! [`Anchor`] to a [`GestureTracker`], and redraws from the graph state.
//! Every mutation a gesture can make goes through the dialogue container,
//! so the editor layer adds no state of its own beyond the gesture phase.

mod canvas;
mod gesture;

pub use canvas::{
    body_rect, header_rect, hit_test, input_pos, input_rect, output_pos, output_rect, Anchor,
    Rect, CONNECTOR_SIZE, HEADER_HEIGHT, HEADER_RISE,
};
pub use gesture::{GestureOutcome, GestureState, GestureTracker};
