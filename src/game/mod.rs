//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering
//! dependencies. Control bits flow in, state snapshots flow out; where the
//! bits come from (gestures, keys) is someone else's business.

pub mod config;
pub mod controls;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use controls::{ControlState, Direction};
pub use engine::{GameEngine, TickOutcome};
pub use state::{Cell, CollisionKind, GameState, GameStatus, Snake};
