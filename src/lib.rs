//! Gesture Snake - a Snake game steered by hand gestures
//!
//! This library provides:
//! - Core game logic (game module)
//! - Landmark frame parsing and gesture classification (hand module)
//! - TUI rendering (render module)
//! - Keyboard handling (input module)
//! - Session and pipeline counters (metrics module)
//! - Execution modes (play, gesture)

pub mod game;
pub mod hand;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
