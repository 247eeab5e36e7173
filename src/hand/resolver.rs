//! Folds one frame of detections into directional control bits.

use tracing::debug;

use super::gesture::{GestureClassifier, GestureSet};
use super::landmark::{HandFrame, LANDMARK_COUNT};
use crate::game::ControlState;

/// Maps provider labels and geometric detections onto control bits
///
/// Resolution is pure per frame: the same frame always yields the same
/// bits, and nothing carries over between frames. Opposite bits can both
/// come out asserted; ranking them is the engine's job.
pub struct ControlResolver {
    classifier: GestureClassifier,
}

impl ControlResolver {
    pub fn new() -> Self {
        Self {
            classifier: GestureClassifier::new(),
        }
    }

    /// Union of the geometric detections across every complete hand in
    /// the frame. Hands with missing landmarks are skipped, not errors.
    pub fn detect_hands(&self, frame: &HandFrame) -> GestureSet {
        let mut detected = GestureSet::default();
        for hand in &frame.hands {
            if hand.len() < LANDMARK_COUNT {
                continue;
            }
            detected.merge(self.classifier.detect(hand));
        }
        detected
    }

    /// Union of every signal in the frame: recognized category labels
    /// first, then the geometric predicates over each complete hand.
    pub fn resolve(&self, frame: &HandFrame) -> ControlState {
        let mut controls = ControlState::default();

        for label in &frame.labels {
            if let Some(bits) = label_controls(&label.category) {
                controls.merge(bits);
            }
        }

        let detected = self.detect_hands(frame);
        controls.up |= detected.index_up;
        controls.down |= detected.middle_down || detected.thumb_down;
        controls.left |= detected.pointing_left || detected.open_palm || detected.swiping_left;
        controls.right |=
            detected.pointing_right || detected.closed_fist || detected.swiping_right;

        if !controls.is_neutral() {
            debug!(?controls, "controls resolved");
        }
        controls
    }
}

impl Default for ControlResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Control bits for a recognizer category label. Labels outside the canned
/// set map to nothing.
fn label_controls(category: &str) -> Option<ControlState> {
    use crate::game::Direction;

    match category {
        "Pointing_Up" => Some(ControlState::pressed(Direction::Up)),
        "Thumb_Down" => Some(ControlState::pressed(Direction::Down)),
        "Thumb_Left" | "Open_Palm" => Some(ControlState::pressed(Direction::Left)),
        "Thumb_Right" | "Closed_Fist" => Some(ControlState::pressed(Direction::Right)),
        _ => None,
    }
}
