pub mod gesture;
pub mod play;

pub use gesture::{FrameInput, GestureMode};
pub use play::PlayMode;
