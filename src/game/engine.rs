use super::{
    config::GameConfig,
    controls::{ControlState, Direction},
    state::{Cell, CollisionKind, GameState, GameStatus, Snake},
};
use rand::Rng;
use tracing::debug;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the snake advanced this tick
    pub moved: bool,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Collision that ended the game this tick, if any
    pub collision: Option<CollisionKind>,
}

impl TickOutcome {
    fn skipped() -> Self {
        Self {
            moved: false,
            ate_food: false,
            collision: None,
        }
    }
}

/// The game engine: owns the authoritative state and all game logic
///
/// Control bits arrive at whatever rate the input side produces them, via
/// [`GameEngine::set_controls`]; movement happens only in
/// [`GameEngine::tick`]. The engine never throttles ticks itself, the
/// caller drives them on a fixed interval.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    controls: ControlState,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create an engine holding a fresh idle game
    pub fn new(config: GameConfig) -> Self {
        let mut rng = rand::thread_rng();
        let state = Self::initial_state(&config, &mut rng);
        Self {
            config,
            state,
            controls: ControlState::default(),
            rng,
        }
    }

    /// Game configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Latest control bits the engine was given
    pub fn controls(&self) -> ControlState {
        self.controls
    }

    /// Current lifecycle status
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Clone of the current state, for rendering and inspection
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Begin the game. Only an idle game starts; a finished one must be
    /// reset first.
    pub fn start(&mut self) {
        if self.state.status == GameStatus::Idle {
            self.state.status = GameStatus::Running;
            debug!("game started");
            self.steer();
        }
    }

    /// Freeze a running game
    pub fn pause(&mut self) {
        if self.state.status == GameStatus::Running {
            self.state.status = GameStatus::Paused;
            debug!("game paused");
        }
    }

    /// Continue a paused game
    pub fn resume(&mut self) {
        if self.state.status == GameStatus::Paused {
            self.state.status = GameStatus::Running;
            debug!("game resumed");
            self.steer();
        }
    }

    /// Discard the current game and return to a fresh idle state
    pub fn reset(&mut self) {
        self.state = Self::initial_state(&self.config, &mut self.rng);
        self.controls = ControlState::default();
        debug!("game reset");
    }

    /// Replace the control bits. Steering applies immediately while the
    /// game is running; otherwise the bits wait for the next start or
    /// resume.
    pub fn set_controls(&mut self, controls: ControlState) {
        self.controls = controls;
        self.steer();
    }

    /// Advance the game by one tick. Does nothing unless running.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.status != GameStatus::Running {
            return TickOutcome::skipped();
        }

        let new_head = self.state.snake.head().neighbor(self.state.direction);

        if !self.state.in_bounds(new_head) {
            return self.end_game(CollisionKind::Wall);
        }
        // The pre-move body decides, tail cell included
        if self.state.snake.occupies(new_head) {
            return self.end_game(CollisionKind::SelfHit);
        }

        let ate_food = new_head == self.state.food;
        self.state.snake.advance(new_head, ate_food);

        if ate_food {
            self.state.score += self.config.food_points;
            if let Some(food) = Self::place_food(
                &self.state.snake,
                self.state.grid_width,
                self.state.grid_height,
                &mut self.rng,
            ) {
                self.state.food = food;
            }
            debug!(
                score = self.state.score,
                length = self.state.snake.len(),
                "food eaten"
            );
        }

        TickOutcome {
            moved: true,
            ate_food,
            collision: None,
        }
    }

    /// Apply the winning control bit to the travel direction. A 180-degree
    /// turn is rejected outright; lower-priority bits are not consulted.
    fn steer(&mut self) {
        if self.state.status != GameStatus::Running {
            return;
        }
        if let Some(candidate) = self.controls.candidate() {
            if candidate != self.state.direction && !candidate.is_opposite(self.state.direction) {
                debug!(from = ?self.state.direction, to = ?candidate, "direction change");
                self.state.direction = candidate;
            }
        }
    }

    fn end_game(&mut self, collision: CollisionKind) -> TickOutcome {
        self.state.status = GameStatus::GameOver;
        self.state.collision = Some(collision);
        debug!(?collision, score = self.state.score, "game over");
        TickOutcome {
            moved: false,
            ate_food: false,
            collision: Some(collision),
        }
    }

    fn initial_state(config: &GameConfig, rng: &mut rand::rngs::ThreadRng) -> GameState {
        let grid_width = config.grid_width();
        let grid_height = config.grid_height();

        let head = Cell::new((grid_width / 2) as i32, (grid_height / 2) as i32);
        let snake = Snake::new(head, Direction::Right, config.initial_snake_length);
        let food = Self::place_food(&snake, grid_width, grid_height, rng).unwrap_or(head);

        GameState {
            snake,
            food,
            direction: Direction::Right,
            score: 0,
            status: GameStatus::Idle,
            collision: None,
            grid_width,
            grid_height,
        }
    }

    /// Pick a random cell the snake does not occupy. Rejection sampling
    /// first, then a linear scan for near-full boards. None means the
    /// board is completely covered.
    fn place_food(
        snake: &Snake,
        grid_width: usize,
        grid_height: usize,
        rng: &mut rand::rngs::ThreadRng,
    ) -> Option<Cell> {
        if grid_width == 0 || grid_height == 0 {
            return None;
        }

        let attempts = grid_width * grid_height * 10;
        for _ in 0..attempts {
            let cell = Cell::new(
                rng.gen_range(0..grid_width) as i32,
                rng.gen_range(0..grid_height) as i32,
            );
            if !snake.occupies(cell) {
                return Some(cell);
            }
        }

        for row in 0..grid_height as i32 {
            for col in 0..grid_width as i32 {
                let cell = Cell::new(col, row);
                if !snake.occupies(cell) {
                    return Some(cell);
                }
            }
        }

        None
    }
}
