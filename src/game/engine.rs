use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use super::{
    action::Direction,
    config::GameConfig,
    food::Food,
    grid::Grid,
    state::{Advance, CollisionType, GameState, Phase, Snake, Snapshot},
};

/// The game engine that owns a single game and all of its rules.
///
/// Nothing here schedules itself: a caller drives [`GameEngine::tick`] at a
/// fixed rate and stops doing so once the returned snapshot reports
/// [`Phase::GameOver`]. No operation fails; illegal input is ignored.
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    state: GameState,
    last_collision: Option<CollisionType>,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Same as [`GameEngine::new`], with reproducible food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Resume from an existing state, e.g. a hand-built position
    pub fn with_state(config: GameConfig, state: GameState, seed: u64) -> Self {
        Self {
            grid: config.grid(),
            config,
            state,
            last_collision: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let state = Self::fresh_state(&config);
        Self {
            grid: config.grid(),
            config,
            state,
            last_collision: None,
            rng,
        }
    }

    fn fresh_state(config: &GameConfig) -> GameState {
        let snake = Snake::new(
            config.start_head,
            config.start_direction,
            config.initial_snake_length,
        );
        GameState::new(snake, Food::new(config.initial_food))
    }

    /// Advance the game by one step and return the resulting view.
    ///
    /// A collision freezes the game in its pre-tick shape and flips the phase to
    /// [`Phase::GameOver`]. Ticking a finished game changes nothing.
    pub fn tick(&mut self) -> Snapshot {
        if !self.state.is_running() {
            return self.snapshot();
        }

        let food = self.state.food.position();
        match self.state.snake.advance(&self.grid, food) {
            Advance::Moved { ate_food, .. } => {
                if ate_food {
                    self.state.score += 1;
                    self.state.food.relocate(&self.grid, &mut self.rng);
                }
                self.state.ticks += 1;
            }
            Advance::Blocked(collision) => {
                let at = self.state.snake.compute_next_head();
                info!(
                    "Game over after {} ticks: {:?} at ({}, {}), score {}",
                    self.state.ticks, collision, at.x, at.y, self.state.score
                );
                self.last_collision = Some(collision);
                self.state.phase = Phase::GameOver;
            }
        }

        self.snapshot()
    }

    /// Queue a turn for the next tick. Returns whether the turn was accepted;
    /// reversals and input after game over are dropped.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if !self.state.is_running() {
            return false;
        }

        let accepted = self.state.snake.request_direction(direction);
        if !accepted {
            debug!(
                "Ignored reversal from {:?} to {:?}",
                self.state.snake.direction(),
                direction
            );
        }
        accepted
    }

    /// Throw the current game away and start a fresh one
    pub fn restart(&mut self) {
        info!("Restarting game (previous score {})", self.state.score);
        self.state = Self::fresh_state(&self.config);
        self.last_collision = None;
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// What ended the last game, if the current one is over
    pub fn last_collision(&self) -> Option<CollisionType> {
        self.last_collision
    }
}
