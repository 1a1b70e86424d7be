use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use super::{
    action::Action,
    config::GameConfig,
    error::GameError,
    food::FoodPool,
    snake::{Meal, Snake, START_POSITION},
    state::GameState,
};

/// Information about a step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Food eaten this step, if any
    pub meal: Option<Meal>,
    /// Segments lost to a self-collision this step
    pub trimmed: usize,
    /// Whether the head crossed an edge of the playfield
    pub wrapped: bool,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has been won; the driver stops simulating once set
    pub won: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose food placement and timers are reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a new game
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(START_POSITION);
        let food = FoodPool::new(&self.config, &mut self.rng);
        GameState::new(snake, food, &self.config)
    }

    /// Simulate one frame.
    ///
    /// The order is fixed: turn, move, wrap, self-collision trim, body
    /// shift and eating, score settle and win check, then food upkeep.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> Result<StepResult, GameError> {
        if state.won {
            return Ok(StepResult {
                won: true,
                info: StepInfo::default(),
            });
        }

        if let Action::Move(direction) = action {
            state.snake.change_direction(direction);
        }

        state.snake.advance();
        let wrapped = state
            .snake
            .wrap_borders(state.screen_width, state.screen_height);
        let trimmed = state.snake.trim_self_collision(&mut state.score);
        let meal = state
            .snake
            .grow_and_shift(&mut state.food, &mut state.score)?;

        state.score.clamp();
        state.frames += 1;

        let info = StepInfo {
            meal,
            trimmed,
            wrapped,
        };

        if state.check_win() {
            info!(score = state.score(), frames = state.frames, "game won");
            return Ok(StepResult { won: true, info });
        }

        state
            .food
            .tick(&mut self.rng, state.screen_width, state.screen_height);

        Ok(StepResult { won: false, info })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, FoodKind, Position};

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 1);
        let state = engine.reset();

        assert!(!state.won);
        assert_eq!(state.score(), 0);
        assert_eq!(state.frames, 0);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position::new(100, 50));
        assert_eq!(state.food.ordinary.count(), 1);
        assert_eq!(state.food.special.count(), 0);
    }

    #[test]
    fn test_snake_waits_for_first_direction() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 2);
        let mut state = engine.reset();

        for _ in 0..3 {
            engine.step(&mut state, Action::Continue).unwrap();
        }
        assert_eq!(state.snake.head(), Position::new(100, 50));
        assert_eq!(state.frames, 3);

        engine.step(&mut state, Action::Move(Direction::Up)).unwrap();
        assert_eq!(state.snake.head(), Position::new(100, 40));
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 3);
        let mut state = engine.reset();
        state.food = FoodPool::empty();
        state.food.ordinary.place(Position::new(110, 50));

        let result = engine.step(&mut state, Action::Move(Direction::Right)).unwrap();

        assert_eq!(result.info.meal.map(|m| m.kind), Some(FoodKind::Ordinary));
        assert_eq!(state.score(), 1);
        // Eaten food is replaced in the same frame
        assert_eq!(state.food.ordinary.count(), 1);
    }

    #[test]
    fn test_wrap_reported() {
        let mut engine = GameEngine::with_seed(GameConfig::small(), 4);
        let mut state = engine.reset();
        state.food = FoodPool::empty();

        let mut wrapped_at = None;
        for frame in 0..10 {
            let result = engine.step(&mut state, Action::Move(Direction::Up)).unwrap();
            if result.info.wrapped {
                wrapped_at = Some(frame);
                break;
            }
        }

        // 50 -> 40 -> ... -> 0 -> -10, wrapped to the bottom edge
        assert_eq!(wrapped_at, Some(5));
        assert_eq!(state.snake.head(), Position::new(100, 100));
    }

    #[test]
    fn test_won_game_stops_simulating() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 5);
        let mut state = engine.reset();
        state.score.add(99);
        state.food = FoodPool::empty();
        state.food.ordinary.place(Position::new(110, 50));

        let result = engine.step(&mut state, Action::Move(Direction::Right)).unwrap();
        assert!(result.won);
        assert!(state.won);
        assert_eq!(state.score(), 100);

        let head = state.snake.head();
        let result = engine.step(&mut state, Action::Continue).unwrap();
        assert!(result.won);
        assert_eq!(state.snake.head(), head);
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = GameEngine::with_seed(GameConfig::default(), 42);
        let mut b = GameEngine::with_seed(GameConfig::default(), 42);
        let mut state_a = a.reset();
        let mut state_b = b.reset();

        for _ in 0..50 {
            a.step(&mut state_a, Action::Move(Direction::Down)).unwrap();
            b.step(&mut state_b, Action::Move(Direction::Down)).unwrap();
        }
        assert_eq!(state_a, state_b);
    }
}
