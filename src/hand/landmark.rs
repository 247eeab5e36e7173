//! Hand landmark data model: 21-point skeletons in normalized image space.

use serde::{Deserialize, Serialize};

/// Number of landmarks in a complete hand skeleton
pub const LANDMARK_COUNT: usize = 21;

/// One landmark of a detected hand
///
/// Coordinates are normalized to the camera frame: x and y in [0, 1] with
/// the origin at the top-left, so y grows downward. Depth z is carried
/// through for completeness; the gesture predicates never read it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// The 21 hand landmarks, in provider index order
///
/// Discriminants match the positions used by camera hand-tracking stacks:
/// wrist first, then each finger base to tip, thumb through pinky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandLandmark {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

impl HandLandmark {
    /// Index of this landmark in a skeleton slice
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The four non-thumb fingertips, index finger through pinky
    pub fn fingertips() -> [HandLandmark; 4] {
        [
            Self::IndexTip,
            Self::MiddleTip,
            Self::RingTip,
            Self::PinkyTip,
        ]
    }

    /// Knuckle at the base of each non-thumb finger, same order as
    /// [`HandLandmark::fingertips`]
    pub fn knuckles() -> [HandLandmark; 4] {
        [
            Self::IndexMcp,
            Self::MiddleMcp,
            Self::RingMcp,
            Self::PinkyMcp,
        ]
    }
}

/// A categorical gesture label the provider attached to a hand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureLabel {
    /// Category name, e.g. "Pointing_Up" or "Closed_Fist"
    pub category: String,
    /// Provider confidence in [0, 1]; informational only
    #[serde(default)]
    pub confidence: f32,
}

/// One frame of provider output
///
/// A frame can carry any number of hands (usually zero, one, or two) and
/// any number of category labels. Empty frames are valid and mean "nothing
/// detected".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandFrame {
    /// Detected hands, each a landmark slice in provider index order
    #[serde(default)]
    pub hands: Vec<Vec<Landmark>>,
    /// Category labels, if the provider runs a canned recognizer
    #[serde(default)]
    pub labels: Vec<GestureLabel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_indices_follow_provider_order() {
        assert_eq!(HandLandmark::Wrist.index(), 0);
        assert_eq!(HandLandmark::ThumbCmc.index(), 1);
        assert_eq!(HandLandmark::ThumbTip.index(), 4);
        assert_eq!(HandLandmark::IndexMcp.index(), 5);
        assert_eq!(HandLandmark::IndexTip.index(), 8);
        assert_eq!(HandLandmark::MiddleTip.index(), 12);
        assert_eq!(HandLandmark::RingTip.index(), 16);
        assert_eq!(HandLandmark::PinkyTip.index(), 20);
    }

    #[test]
    fn test_fingertips_and_knuckles_pair_up() {
        let tips = HandLandmark::fingertips();
        let knuckles = HandLandmark::knuckles();
        assert_eq!(tips.len(), knuckles.len());
        // Tip sits three indices past its knuckle for every finger
        for (tip, knuckle) in tips.into_iter().zip(knuckles) {
            assert_eq!(tip.index(), knuckle.index() + 3);
        }
    }

    #[test]
    fn test_frame_parses_from_json() {
        let json = r#"{
            "hands": [[{"x": 0.5, "y": 0.5, "z": 0.0}]],
            "labels": [{"category": "Pointing_Up", "confidence": 0.92}]
        }"#;
        let frame: HandFrame = serde_json::from_str(json).unwrap();
        assert_eq!(frame.hands.len(), 1);
        assert_eq!(frame.hands[0].len(), 1);
        assert_eq!(frame.labels[0].category, "Pointing_Up");
    }

    #[test]
    fn test_frame_fields_default_when_absent() {
        let frame: HandFrame = serde_json::from_str("{}").unwrap();
        assert!(frame.hands.is_empty());
        assert!(frame.labels.is_empty());

        // z and confidence are optional on the wire
        let frame: HandFrame = serde_json::from_str(
            r#"{"hands": [[{"x": 0.1, "y": 0.2}]], "labels": [{"category": "Victory"}]}"#,
        )
        .unwrap();
        assert_eq!(frame.hands[0][0].z, 0.0);
        assert_eq!(frame.labels[0].confidence, 0.0);
    }
}
