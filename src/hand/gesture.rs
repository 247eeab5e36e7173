//! Geometric gesture predicates over a single hand's landmarks.
//!
//! Every predicate is a pure function of one 21-point skeleton slice and
//! fails closed: a slice shorter than a full hand matches nothing.
//! Thresholds are tolerances in normalized image space, tuned against
//! live camera output; y grows toward the bottom of the frame.

use super::landmark::{HandLandmark, LANDMARK_COUNT, Landmark};

/// Minimum y clearance between the signalling fingertip and every other tip
const FINGERTIP_CLEARANCE: f32 = 0.05;
/// How far past the wrist x the fingertips must sit for a sideways point
const POINT_OFFSET: f32 = 0.1;
/// How far past the wrist x the fingertips must sit for a swipe
const SWIPE_OFFSET: f32 = 0.15;
/// Extra y below the wrist that makes a thumb-down unambiguous
const THUMB_DROP: f32 = 0.1;
/// Fingertips within this mutual y distance count as aligned
const ALIGNMENT_TOLERANCE: f32 = 0.05;
/// Maximum x gap between neighboring fingertips of a fist
const FIST_CLUSTER: f32 = 0.1;
/// Minimum x gap between neighboring fingertips of a spread palm
const PALM_SPREAD: f32 = 0.02;

/// Result of running every predicate against one hand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureSet {
    pub index_up: bool,
    pub middle_down: bool,
    pub thumb_down: bool,
    pub pointing_left: bool,
    pub pointing_right: bool,
    pub closed_fist: bool,
    pub open_palm: bool,
    pub swiping_left: bool,
    pub swiping_right: bool,
}

impl GestureSet {
    /// Whether any predicate matched
    pub fn any(&self) -> bool {
        self.index_up
            || self.middle_down
            || self.thumb_down
            || self.pointing_left
            || self.pointing_right
            || self.closed_fist
            || self.open_palm
            || self.swiping_left
            || self.swiping_right
    }

    /// OR another set's bits into this one
    pub fn merge(&mut self, other: GestureSet) {
        self.index_up |= other.index_up;
        self.middle_down |= other.middle_down;
        self.thumb_down |= other.thumb_down;
        self.pointing_left |= other.pointing_left;
        self.pointing_right |= other.pointing_right;
        self.closed_fist |= other.closed_fist;
        self.open_palm |= other.open_palm;
        self.swiping_left |= other.swiping_left;
        self.swiping_right |= other.swiping_right;
    }

    /// Names of the matched gestures, for display
    pub fn active_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.index_up {
            names.push("index-up");
        }
        if self.middle_down {
            names.push("middle-down");
        }
        if self.thumb_down {
            names.push("thumb-down");
        }
        if self.pointing_left {
            names.push("pointing-left");
        }
        if self.pointing_right {
            names.push("pointing-right");
        }
        if self.closed_fist {
            names.push("closed-fist");
        }
        if self.open_palm {
            names.push("open-palm");
        }
        if self.swiping_left {
            names.push("swiping-left");
        }
        if self.swiping_right {
            names.push("swiping-right");
        }
        names
    }
}

/// Stateless classifier over single-hand landmark slices
///
/// Predicates are independent; one hand can match several at once (a fist
/// with aligned knuckles, a point that is also a swipe). Callers decide
/// what the combinations mean.
#[derive(Debug, Default)]
pub struct GestureClassifier;

impl GestureClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Index finger extended straight up, clear above every other fingertip
    pub fn is_index_up(&self, hand: &[Landmark]) -> bool {
        if hand.len() < LANDMARK_COUNT {
            return false;
        }
        let wrist = at(hand, HandLandmark::Wrist);
        let mcp = at(hand, HandLandmark::IndexMcp);
        let pip = at(hand, HandLandmark::IndexPip);
        let tip = at(hand, HandLandmark::IndexTip);

        let extended_up = tip.y < pip.y && pip.y < mcp.y && mcp.y < wrist.y;

        let middle = at(hand, HandLandmark::MiddleTip);
        let ring = at(hand, HandLandmark::RingTip);
        let pinky = at(hand, HandLandmark::PinkyTip);
        let clear_of_others = tip.y < middle.y - FINGERTIP_CLEARANCE
            && tip.y < ring.y - FINGERTIP_CLEARANCE
            && tip.y < pinky.y - FINGERTIP_CLEARANCE;

        extended_up && clear_of_others
    }

    /// Middle finger dropped straight down, clear below every other tip
    pub fn is_middle_down(&self, hand: &[Landmark]) -> bool {
        if hand.len() < LANDMARK_COUNT {
            return false;
        }
        let wrist = at(hand, HandLandmark::Wrist);
        let mcp = at(hand, HandLandmark::MiddleMcp);
        let pip = at(hand, HandLandmark::MiddlePip);
        let tip = at(hand, HandLandmark::MiddleTip);

        let dropped_down = tip.y > pip.y && pip.y > mcp.y && mcp.y > wrist.y;

        let index = at(hand, HandLandmark::IndexTip);
        let ring = at(hand, HandLandmark::RingTip);
        let pinky = at(hand, HandLandmark::PinkyTip);
        let clear_of_others = tip.y > index.y + FINGERTIP_CLEARANCE
            && tip.y > ring.y + FINGERTIP_CLEARANCE
            && tip.y > pinky.y + FINGERTIP_CLEARANCE;

        dropped_down && clear_of_others
    }

    /// Thumb hanging below the wrist with the rest of the hand closed or
    /// the drop pronounced
    pub fn is_thumb_down(&self, hand: &[Landmark]) -> bool {
        if hand.len() < LANDMARK_COUNT {
            return false;
        }
        let wrist = at(hand, HandLandmark::Wrist);
        let cmc = at(hand, HandLandmark::ThumbCmc);
        let mcp = at(hand, HandLandmark::ThumbMcp);
        let ip = at(hand, HandLandmark::ThumbIp);
        let tip = at(hand, HandLandmark::ThumbTip);

        // Whole thumb chain descending below the wrist
        let chain_down = tip.y > ip.y && ip.y > mcp.y && mcp.y > cmc.y && cmc.y > wrist.y;

        // A curled fist or a clear drop separates this from a resting thumb
        chain_down && (fingers_curled(hand) || tip.y > wrist.y + THUMB_DROP)
    }

    /// Fingertips held out past the left of the wrist
    pub fn is_pointing_left(&self, hand: &[Landmark]) -> bool {
        if hand.len() < LANDMARK_COUNT {
            return false;
        }
        let limit = at(hand, HandLandmark::Wrist).x - POINT_OFFSET;
        let clearly_sideways = HandLandmark::fingertips()
            .into_iter()
            .all(|tip| at(hand, tip).x < limit);

        clearly_sideways || (fingertips_aligned(hand) && mean_fingertip_x(hand) < limit)
    }

    /// Fingertips held out past the right of the wrist
    pub fn is_pointing_right(&self, hand: &[Landmark]) -> bool {
        if hand.len() < LANDMARK_COUNT {
            return false;
        }
        let limit = at(hand, HandLandmark::Wrist).x + POINT_OFFSET;
        let clearly_sideways = HandLandmark::fingertips()
            .into_iter()
            .all(|tip| at(hand, tip).x > limit);

        clearly_sideways || (fingertips_aligned(hand) && mean_fingertip_x(hand) > limit)
    }

    /// All fingers curled with the fingertips bunched together
    pub fn is_closed_fist(&self, hand: &[Landmark]) -> bool {
        if hand.len() < LANDMARK_COUNT {
            return false;
        }
        fingers_curled(hand)
            && fingertip_x_gaps(hand)
                .into_iter()
                .all(|gap| gap < FIST_CLUSTER)
    }

    /// All fingers extended with daylight between the fingertips
    pub fn is_open_palm(&self, hand: &[Landmark]) -> bool {
        if hand.len() < LANDMARK_COUNT {
            return false;
        }
        fingers_extended(hand)
            && fingertip_x_gaps(hand)
                .into_iter()
                .all(|gap| gap > PALM_SPREAD)
    }

    /// A flat hand pushed well out to the left of the wrist
    pub fn is_swiping_left(&self, hand: &[Landmark]) -> bool {
        if hand.len() < LANDMARK_COUNT {
            return false;
        }
        let limit = at(hand, HandLandmark::Wrist).x - SWIPE_OFFSET;
        fingertips_aligned(hand)
            && HandLandmark::fingertips()
                .into_iter()
                .all(|tip| at(hand, tip).x < limit)
    }

    /// A flat hand pushed well out to the right of the wrist
    pub fn is_swiping_right(&self, hand: &[Landmark]) -> bool {
        if hand.len() < LANDMARK_COUNT {
            return false;
        }
        let limit = at(hand, HandLandmark::Wrist).x + SWIPE_OFFSET;
        fingertips_aligned(hand)
            && HandLandmark::fingertips()
                .into_iter()
                .all(|tip| at(hand, tip).x > limit)
    }

    /// Run every predicate against one hand
    pub fn detect(&self, hand: &[Landmark]) -> GestureSet {
        GestureSet {
            index_up: self.is_index_up(hand),
            middle_down: self.is_middle_down(hand),
            thumb_down: self.is_thumb_down(hand),
            pointing_left: self.is_pointing_left(hand),
            pointing_right: self.is_pointing_right(hand),
            closed_fist: self.is_closed_fist(hand),
            open_palm: self.is_open_palm(hand),
            swiping_left: self.is_swiping_left(hand),
            swiping_right: self.is_swiping_right(hand),
        }
    }
}

fn at(hand: &[Landmark], which: HandLandmark) -> Landmark {
    hand[which.index()]
}

/// All four non-thumb fingertips sit below their knuckles
fn fingers_curled(hand: &[Landmark]) -> bool {
    HandLandmark::fingertips()
        .into_iter()
        .zip(HandLandmark::knuckles())
        .all(|(tip, knuckle)| at(hand, tip).y > at(hand, knuckle).y)
}

/// All four non-thumb fingertips sit above their knuckles
fn fingers_extended(hand: &[Landmark]) -> bool {
    HandLandmark::fingertips()
        .into_iter()
        .zip(HandLandmark::knuckles())
        .all(|(tip, knuckle)| at(hand, tip).y < at(hand, knuckle).y)
}

/// Neighboring fingertips held at nearly the same height
fn fingertips_aligned(hand: &[Landmark]) -> bool {
    let index = at(hand, HandLandmark::IndexTip);
    let middle = at(hand, HandLandmark::MiddleTip);
    let ring = at(hand, HandLandmark::RingTip);
    let pinky = at(hand, HandLandmark::PinkyTip);
    (index.y - middle.y).abs() < ALIGNMENT_TOLERANCE
        && (middle.y - ring.y).abs() < ALIGNMENT_TOLERANCE
        && (ring.y - pinky.y).abs() < ALIGNMENT_TOLERANCE
}

/// Horizontal gaps between neighboring non-thumb fingertips
fn fingertip_x_gaps(hand: &[Landmark]) -> [f32; 3] {
    let index = at(hand, HandLandmark::IndexTip).x;
    let middle = at(hand, HandLandmark::MiddleTip).x;
    let ring = at(hand, HandLandmark::RingTip).x;
    let pinky = at(hand, HandLandmark::PinkyTip).x;
    [
        (index - middle).abs(),
        (middle - ring).abs(),
        (ring - pinky).abs(),
    ]
}

fn mean_fingertip_x(hand: &[Landmark]) -> f32 {
    let sum: f32 = HandLandmark::fingertips()
        .into_iter()
        .map(|tip| at(hand, tip).x)
        .sum();
    sum / HandLandmark::fingertips().len() as f32
}

// Test helpers

/// A relaxed upright hand that matches no predicate: index and middle
/// extended to similar heights, ring and pinky loosely curled.
#[cfg(test)]
fn make_hand() -> Vec<Landmark> {
    let mut hand = vec![Landmark::default(); LANDMARK_COUNT];
    let points = [
        (HandLandmark::Wrist, 0.50, 0.90),
        (HandLandmark::ThumbCmc, 0.38, 0.82),
        (HandLandmark::ThumbMcp, 0.34, 0.74),
        (HandLandmark::ThumbIp, 0.32, 0.68),
        (HandLandmark::ThumbTip, 0.31, 0.62),
        (HandLandmark::IndexMcp, 0.42, 0.62),
        (HandLandmark::IndexPip, 0.41, 0.48),
        (HandLandmark::IndexDip, 0.41, 0.40),
        (HandLandmark::IndexTip, 0.40, 0.34),
        (HandLandmark::MiddleMcp, 0.50, 0.60),
        (HandLandmark::MiddlePip, 0.50, 0.45),
        (HandLandmark::MiddleDip, 0.50, 0.38),
        (HandLandmark::MiddleTip, 0.50, 0.31),
        (HandLandmark::RingMcp, 0.58, 0.62),
        (HandLandmark::RingPip, 0.59, 0.52),
        (HandLandmark::RingDip, 0.60, 0.60),
        (HandLandmark::RingTip, 0.61, 0.66),
        (HandLandmark::PinkyMcp, 0.65, 0.65),
        (HandLandmark::PinkyPip, 0.66, 0.58),
        (HandLandmark::PinkyDip, 0.67, 0.64),
        (HandLandmark::PinkyTip, 0.68, 0.70),
    ];
    for (which, x, y) in points {
        hand[which.index()] = Landmark::new(x, y);
    }
    hand
}

#[cfg(test)]
fn set(hand: &mut [Landmark], which: HandLandmark, x: f32, y: f32) {
    hand[which.index()] = Landmark::new(x, y);
}
