use super::config::GameConfig;
use super::food::FoodPool;
use super::snake::Snake;

/// Side length of one grid cell in units
pub const CELL_SIZE: i32 = 10;

/// A grid-aligned position on the playfield, in units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn is_grid_aligned(&self) -> bool {
        self.x % CELL_SIZE == 0 && self.y % CELL_SIZE == 0
    }

    /// Column and row of the cell this position starts
    pub fn cell(&self) -> (i32, i32) {
        (self.x / CELL_SIZE, self.y / CELL_SIZE)
    }
}

/// Player score for the session.
///
/// The stored value may dip below zero while a frame is being simulated;
/// [`Score::clamp`] runs once per frame and [`Score::value`] never reports
/// a negative number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    raw: i64,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, points: u32) {
        self.raw += i64::from(points);
    }

    pub fn deduct(&mut self, points: usize) {
        self.raw -= points as i64;
    }

    /// Floor the stored score at zero
    pub fn clamp(&mut self) {
        self.raw = self.raw.max(0);
    }

    pub fn value(&self) -> u32 {
        self.raw.clamp(0, i64::from(u32::MAX)) as u32
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: FoodPool,
    pub score: Score,
    pub screen_width: i32,
    pub screen_height: i32,
    pub win_score: u32,
    pub frames: u64,
    pub won: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: FoodPool, config: &GameConfig) -> Self {
        Self {
            snake,
            food,
            score: Score::new(),
            screen_width: config.screen_width,
            screen_height: config.screen_height,
            win_score: config.win_score,
            frames: 0,
            won: false,
        }
    }

    /// Current non-negative score
    pub fn score(&self) -> u32 {
        self.score.value()
    }

    /// Check if a position is within the playfield
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.screen_width && pos.y >= 0 && pos.y < self.screen_height
    }

    /// Latch the win flag once the score reaches the threshold
    pub fn check_win(&mut self) -> bool {
        if self.score() >= self.win_score {
            self.won = true;
        }
        self.won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(50, 50);
        assert_eq!(pos.moved_by(10, 0), Position::new(60, 50));
        assert_eq!(pos.moved_by(-10, 0), Position::new(40, 50));
        assert_eq!(pos.moved_by(0, 10), Position::new(50, 60));
        assert_eq!(pos.moved_by(0, -10), Position::new(50, 40));
    }

    #[test]
    fn test_grid_alignment() {
        assert!(Position::new(0, 0).is_grid_aligned());
        assert!(Position::new(710, 450).is_grid_aligned());
        assert!(!Position::new(15, 20).is_grid_aligned());
        assert_eq!(Position::new(120, 40).cell(), (12, 4));
    }

    #[test]
    fn test_score_never_reports_negative() {
        let mut score = Score::new();
        score.add(2);
        score.deduct(5);
        assert_eq!(score.value(), 0);

        // Unclamped within a frame, so later points net against the deficit
        score.add(1);
        assert_eq!(score.value(), 0);

        score.clamp();
        score.add(1);
        assert_eq!(score.value(), 1);
    }

    #[test]
    fn test_bounds_checking() {
        let config = GameConfig::new(200, 100);
        let state = GameState::new(
            Snake::new(Position::new(50, 50)),
            FoodPool::empty(),
            &config,
        );

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(190, 90)));
        assert!(!state.is_in_bounds(Position::new(-10, 0)));
        assert!(!state.is_in_bounds(Position::new(200, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 100)));
    }

    #[test]
    fn test_win_flag_latches() {
        let config = GameConfig::default();
        let mut state = GameState::new(
            Snake::new(Position::new(100, 50)),
            FoodPool::empty(),
            &config,
        );

        assert!(!state.check_win());
        state.score.add(100);
        assert!(state.check_win());

        state.score.deduct(50);
        assert!(state.check_win());
        assert!(state.won);
    }
}
