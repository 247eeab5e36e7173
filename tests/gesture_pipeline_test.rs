//! Integration tests for the gesture control pipeline
//!
//! These tests drive the public API end to end:
//! Landmark frames -> Control resolution -> Game engine ticks

use gesture_snake::game::{CollisionKind, GameConfig, GameEngine, GameStatus};
use gesture_snake::hand::{
    ControlResolver, FrameSource, GestureLabel, HandFrame, HandLandmark, LANDMARK_COUNT, Landmark,
};
use std::io::Cursor;
use tokio::io::BufReader;

/// Create a frame carrying only a category label
fn label_frame(category: &str) -> HandFrame {
    HandFrame {
        hands: vec![],
        labels: vec![GestureLabel {
            category: category.to_string(),
            confidence: 1.0,
        }],
    }
}

fn set(hand: &mut [Landmark], which: HandLandmark, x: f32, y: f32) {
    hand[which.index()] = Landmark::new(x, y);
}

/// Create a skeleton with every joint at a neutral spot and the index
/// finger raised well clear of the other fingertips
fn index_up_hand() -> Vec<Landmark> {
    let mut hand = vec![Landmark::new(0.5, 0.6); LANDMARK_COUNT];
    set(&mut hand, HandLandmark::Wrist, 0.5, 0.9);
    set(&mut hand, HandLandmark::IndexMcp, 0.45, 0.6);
    set(&mut hand, HandLandmark::IndexPip, 0.45, 0.45);
    set(&mut hand, HandLandmark::IndexTip, 0.45, 0.3);
    set(&mut hand, HandLandmark::MiddleTip, 0.5, 0.7);
    set(&mut hand, HandLandmark::RingTip, 0.55, 0.7);
    set(&mut hand, HandLandmark::PinkyTip, 0.6, 0.7);
    hand
}

/// Create a running engine on the default 30x20 board
fn running_engine() -> GameEngine {
    let mut engine = GameEngine::new(GameConfig::default());
    engine.start();
    engine
}

#[test]
fn test_label_frame_steers_the_snake() {
    let resolver = ControlResolver::new();
    let mut engine = running_engine();
    let head_before = engine.snapshot().snake.head();

    // A new game heads right; Pointing_Up turns it upward
    let controls = resolver.resolve(&label_frame("Pointing_Up"));
    engine.set_controls(controls);
    engine.tick();

    let head_after = engine.snapshot().snake.head();
    assert_eq!(head_after.col, head_before.col);
    assert_eq!(head_after.row, head_before.row - 1);
}

#[test]
fn test_geometric_hand_steers_the_snake() {
    let resolver = ControlResolver::new();
    let mut engine = running_engine();
    let head_before = engine.snapshot().snake.head();

    let frame = HandFrame {
        hands: vec![index_up_hand()],
        labels: vec![],
    };
    let controls = resolver.resolve(&frame);
    assert!(controls.up);

    engine.set_controls(controls);
    engine.tick();

    let head_after = engine.snapshot().snake.head();
    assert_eq!(head_after.row, head_before.row - 1);
}

#[test]
fn test_reversal_is_rejected_without_fallback() {
    let resolver = ControlResolver::new();
    let mut engine = running_engine();
    let head_before = engine.snapshot().snake.head();

    // Open_Palm maps to left, the exact opposite of the starting direction
    let controls = resolver.resolve(&label_frame("Open_Palm"));
    assert!(controls.left);
    engine.set_controls(controls);
    engine.tick();

    // Still heading right
    let head_after = engine.snapshot().snake.head();
    assert_eq!(head_after.col, head_before.col + 1);
    assert_eq!(head_after.row, head_before.row);
}

#[test]
fn test_highest_priority_control_wins() {
    let resolver = ControlResolver::new();
    let mut engine = running_engine();
    let head_before = engine.snapshot().snake.head();

    // Two simultaneous gestures: up outranks left
    let frame = HandFrame {
        hands: vec![],
        labels: vec![
            GestureLabel {
                category: "Pointing_Up".to_string(),
                confidence: 0.9,
            },
            GestureLabel {
                category: "Open_Palm".to_string(),
                confidence: 0.9,
            },
        ],
    };
    engine.set_controls(resolver.resolve(&frame));
    engine.tick();

    let head_after = engine.snapshot().snake.head();
    assert_eq!(head_after.row, head_before.row - 1);
    assert_eq!(head_after.col, head_before.col);
}

#[test]
fn test_neutral_frame_keeps_the_snake_on_course() {
    let resolver = ControlResolver::new();
    let mut engine = running_engine();
    let head_before = engine.snapshot().snake.head();

    let controls = resolver.resolve(&HandFrame::default());
    assert!(controls.is_neutral());
    engine.set_controls(controls);
    engine.tick();

    let head_after = engine.snapshot().snake.head();
    assert_eq!(head_after.col, head_before.col + 1);
}

#[test]
fn test_incomplete_hand_is_ignored_in_a_mixed_frame() {
    let resolver = ControlResolver::new();

    let frame = HandFrame {
        hands: vec![vec![Landmark::new(0.5, 0.5); 5], index_up_hand()],
        labels: vec![],
    };
    let controls = resolver.resolve(&frame);

    assert!(controls.up);
    assert!(!controls.down);
    assert!(!controls.left);
    assert!(!controls.right);
}

#[test]
fn test_wall_collision_ends_the_game() {
    // 100x100 canvas with 20px cells: a 5x5 grid, head starting at (2, 2)
    let mut engine = GameEngine::new(GameConfig::new(100, 100, 20));
    engine.start();

    engine.tick();
    engine.tick();
    assert_eq!(engine.status(), GameStatus::Running);

    // Third step would land on column 5, one past the edge
    engine.tick();
    assert_eq!(engine.status(), GameStatus::GameOver);
    assert_eq!(engine.snapshot().collision, Some(CollisionKind::Wall));
}

#[tokio::test]
async fn test_recorded_frames_replay_through_the_source() {
    let frame = HandFrame {
        hands: vec![index_up_hand()],
        labels: vec![],
    };
    let line = serde_json::to_string(&frame).unwrap();
    let recording = format!("{line}\n");

    let mut source = FrameSource::from_reader(BufReader::new(Cursor::new(recording.into_bytes())));
    let replayed = source.next_frame().await.unwrap().unwrap();
    assert_eq!(replayed, frame);

    let controls = ControlResolver::new().resolve(&replayed);
    assert!(controls.up);
    assert!(!controls.down && !controls.left && !controls.right);

    assert!(source.next_frame().await.unwrap().is_none());
}
