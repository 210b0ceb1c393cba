use super::{
    config::GameConfig,
    direction::{Direction, Velocity},
    state::{CollisionType, GameState, GameStatus, Position, Snake},
};
use anyhow::{Context, Result};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

/// Result of a game step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Status after the step
    pub status: GameStatus,
}

impl StepResult {
    /// Reason the game ended, if it did
    pub fn collision(&self) -> Option<CollisionType> {
        match self.status {
            GameStatus::Running => None,
            GameStatus::Over(reason) => Some(reason),
        }
    }

    pub fn terminated(&self) -> bool {
        self.collision().is_some()
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    tile_count_x: i32,
    tile_count_y: i32,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine, rejecting configurations the board
    /// arithmetic cannot represent
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate().context("Invalid game configuration")?;
        let tile_count_x =
            i32::try_from(config.tile_count_x()).context("Board too wide")?;
        let tile_count_y =
            i32::try_from(config.tile_count_y()).context("Board too tall")?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            tile_count_x,
            tile_count_y,
            rng,
        })
    }

    /// Start a session: one segment in the middle of the board, moving right
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(Position::new(self.tile_count_x / 2, self.tile_count_y / 2));
        let food = self.place_food(&snake);
        let velocity = Velocity::towards(Direction::Right, self.config.speed);

        GameState::new(
            snake,
            food,
            velocity,
            self.config.tile_count_x(),
            self.config.tile_count_y(),
        )
    }

    /// Execute one tick: advance, eat or trim, then check walls and self
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if !state.is_running() {
            return StepResult {
                ate_food: false,
                status: state.status,
            };
        }

        let new_head = state.snake.head().advanced_by(state.velocity);
        state.snake.push_head(new_head);

        let ate_food = new_head == state.food;
        if ate_food {
            state.food = self.place_food(&state.snake);
            debug!(
                length = state.snake.len(),
                food_x = state.food.x,
                food_y = state.food.y,
                "Food eaten"
            );
        } else {
            state.snake.drop_tail();
        }

        state.steps += 1;

        if !state.is_in_bounds(new_head) {
            state.status = GameStatus::Over(CollisionType::Wall);
        } else if state.snake.collides_with_body(new_head) {
            state.status = GameStatus::Over(CollisionType::SelfCollision);
        }

        StepResult {
            ate_food,
            status: state.status,
        }
    }

    /// Apply a steering intent subject to the axis-lock rule.
    ///
    /// Returns true if the velocity changed. Intents are ignored once the
    /// game is over.
    pub fn handle_direction(&self, state: &mut GameState, direction: Direction) -> bool {
        if !state.is_running() {
            return false;
        }

        let changed = state.velocity.steer(direction, self.config.speed);
        if changed {
            debug!(?direction, vx = state.velocity.vx, vy = state.velocity.vy, "Velocity changed");
        }
        changed
    }

    /// Pick a uniformly random free cell for the food.
    ///
    /// Rejection sampling without a retry cap: this never returns if the
    /// snake fills the whole board.
    pub fn place_food(&mut self, snake: &Snake) -> Position {
        loop {
            let pos = Position::new(
                self.rng.gen_range(0..self.tile_count_x),
                self.rng.gen_range(0..self.tile_count_y),
            );

            if !snake.occupies(pos) {
                return pos;
            }
        }
    }
}
