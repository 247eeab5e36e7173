/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// One frame's worth of directional control bits.
///
/// The bits are independent: a single frame can assert several at once
/// (two hands on screen, or one hand matching more than one heuristic).
/// Conflicts are settled by [`ControlState::candidate`], not here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl ControlState {
    /// State with a single direction asserted
    pub fn pressed(direction: Direction) -> Self {
        let mut state = Self::default();
        match direction {
            Direction::Up => state.up = true,
            Direction::Down => state.down = true,
            Direction::Left => state.left = true,
            Direction::Right => state.right = true,
        }
        state
    }

    /// Returns true if no direction is asserted
    pub fn is_neutral(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }

    /// OR the other state's bits into this one
    pub fn merge(&mut self, other: ControlState) {
        self.up |= other.up;
        self.down |= other.down;
        self.left |= other.left;
        self.right |= other.right;
    }

    /// The single direction these bits ask for, in fixed priority order
    /// up, down, left, right. Lower-priority bits are never consulted as a
    /// fallback: if the winning bit is unusable (a 180-degree turn), the
    /// whole frame yields nothing.
    pub fn candidate(&self) -> Option<Direction> {
        if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_neutral_state() {
        let state = ControlState::default();
        assert!(state.is_neutral());
        assert_eq!(state.candidate(), None);
    }

    #[test]
    fn test_pressed_single_direction() {
        let state = ControlState::pressed(Direction::Left);
        assert!(!state.is_neutral());
        assert!(state.left);
        assert!(!state.up && !state.down && !state.right);
        assert_eq!(state.candidate(), Some(Direction::Left));
    }

    #[test]
    fn test_candidate_priority_order() {
        let all = ControlState {
            up: true,
            down: true,
            left: true,
            right: true,
        };
        assert_eq!(all.candidate(), Some(Direction::Up));

        let no_up = ControlState {
            up: false,
            down: true,
            left: true,
            right: true,
        };
        assert_eq!(no_up.candidate(), Some(Direction::Down));

        let sideways = ControlState {
            up: false,
            down: false,
            left: true,
            right: true,
        };
        assert_eq!(sideways.candidate(), Some(Direction::Left));

        let right_only = ControlState {
            up: false,
            down: false,
            left: false,
            right: true,
        };
        assert_eq!(right_only.candidate(), Some(Direction::Right));
    }

    #[test]
    fn test_merge_unions_bits() {
        let mut state = ControlState::pressed(Direction::Up);
        state.merge(ControlState::pressed(Direction::Right));
        assert!(state.up && state.right);
        assert!(!state.down && !state.left);
        // Priority still resolves to up
        assert_eq!(state.candidate(), Some(Direction::Up));
    }
}
