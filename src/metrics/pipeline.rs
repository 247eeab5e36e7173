use crate::hand::{HandFrame, LANDMARK_COUNT};

/// Counters for the landmark pipeline, shown in the gesture HUD
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Frames consumed from the source
    pub frames: u64,
    /// Complete hands seen across all frames
    pub hands: u64,
    /// Hands dropped for missing landmarks
    pub incomplete_hands: u64,
    /// Lines that failed to parse
    pub parse_errors: u64,
}

impl PipelineStats {
    /// Account for one successfully parsed frame
    pub fn record_frame(&mut self, frame: &HandFrame) {
        self.frames += 1;
        for hand in &frame.hands {
            if hand.len() < LANDMARK_COUNT {
                self.incomplete_hands += 1;
            } else {
                self.hands += 1;
            }
        }
    }

    pub fn record_parse_error(&mut self) {
        self.parse_errors += 1;
    }
}
