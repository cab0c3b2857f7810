//! Gesture Tracking
//!
//! Edit gestures are two-phase: press on an anchor, drag, release. A link
//! gesture starts at an output connector and commits a new edge when it
//! lands on another node's input; an unlink gesture starts at an input
//! connector and detaches the node from whichever parent's output it lands
//! on; a header press moves the node while the pointer drags. Releasing
//! anywhere else abandons the gesture without touching the graph.
//!
//! The phases are an explicit state machine so that only one gesture can be
//! in flight at a time; there is no way to represent "linking and unlinking
//! at once".

use tracing::{debug, trace};

use super::canvas::Anchor;
use crate::graph::{Dialogue, NodeId, Vec2};

/// The current phase of an in-flight edit gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in flight.
    #[default]
    Idle,
    /// Dragging a new edge out of a node's output connector.
    Linking {
        /// The prospective parent.
        source: NodeId,
    },
    /// Dragging incoming edges away from a node's input connector.
    Unlinking {
        /// The node being detached from a parent.
        target: NodeId,
    },
    /// Moving a node by its header.
    Dragging {
        /// The node being moved.
        node: NodeId,
        /// Offset from the pointer to the node's corner at press time.
        grab: Vec2,
    },
}

/// What a finished gesture committed, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Released without a valid target; nothing changed.
    Abandoned,
    /// A new parent/child edge was added.
    Linked { parent: NodeId, child: NodeId },
    /// An existing parent/child edge was removed.
    Unlinked { parent: NodeId, child: NodeId },
    /// A node was moved to a new position.
    Moved { node: NodeId },
}

/// Drives the press/drag/release protocol against a dialogue.
///
/// The host resolves pointer events to anchors (via
/// [`hit_test`](super::hit_test)) and feeds them in; the tracker decides
/// what, if anything, to mutate.
#[derive(Debug, Default)]
pub struct GestureTracker {
    state: GestureState,

    /// Last pointer position seen. The presentation layer draws the
    /// in-flight connector curve out to this point.
    pointer: Vec2,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current gesture phase.
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Last pointer position fed to the tracker.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Whether no gesture is in flight.
    pub fn is_idle(&self) -> bool {
        self.state == GestureState::Idle
    }

    /// Begin a gesture from the given anchor.
    ///
    /// Presses while a gesture is already in flight are ignored, as are
    /// presses that land on no anchor.
    pub fn press(&mut self, dialogue: &Dialogue, anchor: Option<Anchor>, pointer: Vec2) {
        self.pointer = pointer;
        if self.state != GestureState::Idle {
            return;
        }
        let Some(anchor) = anchor else { return };

        self.state = match anchor {
            Anchor::Output(source) => GestureState::Linking { source },
            Anchor::Input(target) => GestureState::Unlinking { target },
            Anchor::Header(node) => {
                let grab = match dialogue.node(&node) {
                    Some(pressed) => pressed.position() - pointer,
                    None => return,
                };
                GestureState::Dragging { node, grab }
            }
        };
        trace!(state = ?self.state, "gesture started");
    }

    /// Advance an in-flight gesture to a new pointer position.
    ///
    /// A drag gesture commits clamped position writes as it goes; link and
    /// unlink gestures only move the curve endpoint.
    pub fn drag(&mut self, dialogue: &mut Dialogue, pointer: Vec2) {
        self.pointer = pointer;
        if let GestureState::Dragging { node, grab } = &self.state {
            if let Some(node) = dialogue.node_mut(node) {
                node.set_position(pointer + *grab);
            }
        }
    }

    /// Finish the gesture over whatever anchor the pointer was released on.
    ///
    /// Link and unlink gestures commit their single edge mutation here.
    /// The tracker returns to idle no matter the outcome.
    pub fn release(
        &mut self,
        dialogue: &mut Dialogue,
        anchor: Option<Anchor>,
        pointer: Vec2,
    ) -> GestureOutcome {
        self.pointer = pointer;
        let outcome = match std::mem::take(&mut self.state) {
            GestureState::Idle => GestureOutcome::Abandoned,

            GestureState::Linking { source } => match anchor {
                Some(Anchor::Input(child)) if child != source => {
                    match dialogue.link(&source, &child) {
                        Ok(()) => GestureOutcome::Linked {
                            parent: source,
                            child,
                        },
                        Err(_) => GestureOutcome::Abandoned,
                    }
                }
                _ => GestureOutcome::Abandoned,
            },

            GestureState::Unlinking { target } => match anchor {
                Some(Anchor::Output(parent)) => match dialogue.unlink(&parent, &target) {
                    Ok(true) => GestureOutcome::Unlinked {
                        parent,
                        child: target,
                    },
                    _ => GestureOutcome::Abandoned,
                },
                _ => GestureOutcome::Abandoned,
            },

            GestureState::Dragging { node, .. } => {
                if dialogue.node(&node).is_some() {
                    GestureOutcome::Moved { node }
                } else {
                    GestureOutcome::Abandoned
                }
            }
        };

        match &outcome {
            GestureOutcome::Abandoned => trace!("gesture abandoned"),
            committed => debug!(outcome = ?committed, "gesture committed"),
        }
        outcome
    }

    /// Abandon any in-flight gesture without mutating the graph.
    ///
    /// The editor calls this when it loses focus mid-gesture.
    pub fn cancel(&mut self) {
        if self.state != GestureState::Idle {
            trace!("gesture cancelled");
            self.state = GestureState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_node_dialogue() -> (Dialogue, NodeId, NodeId) {
        let mut dialogue = Dialogue::new();
        let a = dialogue.root().id().clone();
        let b = dialogue.create_node().id().clone();
        (dialogue, a, b)
    }

    #[test]
    fn link_gesture_commits_a_single_edge() {
        let (mut dialogue, a, b) = two_node_dialogue();
        let mut tracker = GestureTracker::new();

        tracker.press(&dialogue, Some(Anchor::Output(a.clone())), Vec2::ZERO);
        assert_eq!(tracker.state(), &GestureState::Linking { source: a.clone() });

        tracker.drag(&mut dialogue, Vec2::new(250.0, 80.0));
        let outcome = tracker.release(
            &mut dialogue,
            Some(Anchor::Input(b.clone())),
            Vec2::new(250.0, 80.0),
        );

        assert_eq!(
            outcome,
            GestureOutcome::Linked {
                parent: a.clone(),
                child: b.clone()
            }
        );
        assert!(dialogue.node(&a).unwrap().has_child(&b));
        assert!(tracker.is_idle());
    }

    #[test]
    fn link_released_off_target_is_abandoned() {
        let (mut dialogue, a, b) = two_node_dialogue();
        let mut tracker = GestureTracker::new();

        tracker.press(&dialogue, Some(Anchor::Output(a.clone())), Vec2::ZERO);
        let outcome = tracker.release(&mut dialogue, None, Vec2::new(400.0, 400.0));

        assert_eq!(outcome, GestureOutcome::Abandoned);
        assert!(!dialogue.node(&a).unwrap().has_child(&b));
    }

    #[test]
    fn link_released_on_own_input_is_abandoned() {
        let (mut dialogue, a, _) = two_node_dialogue();
        let mut tracker = GestureTracker::new();

        tracker.press(&dialogue, Some(Anchor::Output(a.clone())), Vec2::ZERO);
        let outcome = tracker.release(&mut dialogue, Some(Anchor::Input(a.clone())), Vec2::ZERO);

        assert_eq!(outcome, GestureOutcome::Abandoned);
        assert!(!dialogue.node(&a).unwrap().has_child(&a));
    }

    #[test]
    fn unlink_gesture_detaches_an_existing_edge() {
        let (mut dialogue, a, b) = two_node_dialogue();
        dialogue.link(&a, &b).unwrap();
        let mut tracker = GestureTracker::new();

        tracker.press(&dialogue, Some(Anchor::Input(b.clone())), Vec2::ZERO);
        let outcome = tracker.release(&mut dialogue, Some(Anchor::Output(a.clone())), Vec2::ZERO);

        assert_eq!(
            outcome,
            GestureOutcome::Unlinked {
                parent: a.clone(),
                child: b.clone()
            }
        );
        assert!(!dialogue.node(&a).unwrap().has_child(&b));
    }

    #[test]
    fn unlink_without_an_edge_is_abandoned() {
        let (mut dialogue, a, b) = two_node_dialogue();
        let mut tracker = GestureTracker::new();

        tracker.press(&dialogue, Some(Anchor::Input(b.clone())), Vec2::ZERO);
        let outcome = tracker.release(&mut dialogue, Some(Anchor::Output(a.clone())), Vec2::ZERO);

        assert_eq!(outcome, GestureOutcome::Abandoned);
    }

    #[test]
    fn drag_moves_the_node_with_the_grab_offset_preserved() {
        let (mut dialogue, a, _) = two_node_dialogue();
        let start = dialogue.node(&a).unwrap().position();
        let mut tracker = GestureTracker::new();

        let press_point = start + Vec2::new(15.0, -10.0);
        tracker.press(&dialogue, Some(Anchor::Header(a.clone())), press_point);

        tracker.drag(&mut dialogue, press_point + Vec2::new(100.0, 60.0));
        assert_eq!(
            dialogue.node(&a).unwrap().position(),
            start + Vec2::new(100.0, 60.0)
        );

        // Dragging far off-canvas clamps rather than escaping.
        tracker.drag(&mut dialogue, Vec2::new(-9000.0, -9000.0));
        assert_eq!(dialogue.node(&a).unwrap().position(), Vec2::new(0.0, 20.0));

        let outcome = tracker.release(&mut dialogue, None, Vec2::ZERO);
        assert_eq!(outcome, GestureOutcome::Moved { node: a });
    }

    #[test]
    fn presses_during_a_gesture_are_ignored() {
        let (mut dialogue, a, b) = two_node_dialogue();
        let mut tracker = GestureTracker::new();

        tracker.press(&dialogue, Some(Anchor::Output(a.clone())), Vec2::ZERO);
        tracker.press(&dialogue, Some(Anchor::Input(b.clone())), Vec2::ZERO);
        assert_eq!(tracker.state(), &GestureState::Linking { source: a });

        tracker.cancel();
        assert!(tracker.is_idle());
        let outcome = tracker.release(&mut dialogue, Some(Anchor::Input(b)), Vec2::ZERO);
        assert_eq!(outcome, GestureOutcome::Abandoned);
    }

    #[test]
    fn cancel_leaves_the_graph_untouched() {
        let (mut dialogue, a, b) = two_node_dialogue();
        let mut tracker = GestureTracker::new();

        tracker.press(&dialogue, Some(Anchor::Output(a.clone())), Vec2::ZERO);
        tracker.drag(&mut dialogue, Vec2::new(300.0, 300.0));
        tracker.cancel();

        assert!(tracker.is_idle());
        assert!(!dialogue.node(&a).unwrap().has_child(&b));
    }
}
