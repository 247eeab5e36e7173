use super::controls::Direction;

/// A cell on the game grid, addressed as (column, row) from the top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Cell offset by a delta
    pub fn offset(&self, dcol: i32, drow: i32) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }

    /// Adjacent cell in a direction
    pub fn neighbor(&self, direction: Direction) -> Self {
        let (dcol, drow) = direction.delta();
        self.offset(dcol, drow)
    }
}

/// The snake: ordered body cells with the head at index 0
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub body: Vec<Cell>,
}

impl Snake {
    /// Create a snake with its body trailing opposite to the travel direction
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        let (dcol, drow) = direction.delta();
        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.offset(-dcol, -drow));
        }

        Self { body }
    }

    /// Get the head cell
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Check whether any body segment, head included, occupies the cell
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Advance to a new head cell, keeping the tail when growing
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake has no segments (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfHit,
}

impl CollisionKind {
    /// Short message shown to the player
    pub fn message(&self) -> &'static str {
        match self {
            CollisionKind::Wall => "You hit the wall!",
            CollisionKind::SelfHit => "You hit yourself!",
        }
    }
}

/// Lifecycle status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Created but not yet started; ticks do nothing
    Idle,
    /// Ticks advance the snake
    Running,
    /// Frozen mid-game; state is kept, ticks do nothing
    Paused,
    /// Ended by a collision; only a reset leaves this state
    GameOver,
}

/// Complete game state
///
/// The engine owns the live copy and hands out clones through
/// `GameEngine::snapshot`, so readers never observe a half-applied tick.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub direction: Direction,
    pub score: u32,
    pub status: GameStatus,
    /// What ended the game, once status is GameOver
    pub collision: Option<CollisionKind>,
    pub grid_width: usize,
    pub grid_height: usize,
}

impl GameState {
    /// Check if a cell is within the grid bounds
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.col < self.grid_width as i32
            && cell.row >= 0
            && cell.row < self.grid_height as i32
    }
}
