//! Hand tracking input: landmark frames, gesture predicates, and the
//! mapping from detections to game controls.
//!
//! Data flows one way: a [`FrameSource`] yields [`HandFrame`]s, the
//! [`ControlResolver`] (backed by the [`GestureClassifier`]) folds each
//! frame into a [`crate::game::ControlState`], and the game side consumes
//! the bits without ever learning where they came from.

pub mod gesture;
pub mod landmark;
pub mod resolver;
pub mod source;

// Re-export commonly used types
pub use gesture::{GestureClassifier, GestureSet};
pub use landmark::{GestureLabel, HandFrame, HandLandmark, LANDMARK_COUNT, Landmark};
pub use resolver::ControlResolver;
pub use source::FrameSource;
