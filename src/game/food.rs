//! Food items and the spawn policy that keeps the playfield stocked.
//!
//! There is one [`Food`] type. Its [`FoodKind`] decides the point value
//! and whether it cycles its display color.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use super::color::Rgb;
use super::config::GameConfig;
use super::error::GameError;
use super::state::{Position, CELL_SIZE};

/// Points for ordinary food
pub const ORDINARY_POINTS: u32 = 1;
/// Inclusive range of points for special food, rolled once per item
pub const SPECIAL_POINTS: (u32, u32) = (5, 11);
/// Frames between special food color changes
pub const COLOR_CHANGE_LIMIT: i32 = 2;
/// Seconds before the first special food appears
pub const FIRST_SPECIAL_DELAY_SECS: u64 = 30;
/// Inclusive range of seconds between later special food appearances
pub const SPECIAL_RESPAWN_SECS: (u64, u64) = (30, 100);

const SPECIAL_PALETTE: [Rgb; 4] = [Rgb::DARK_BLUE, Rgb::INDIAN_RED, Rgb::CHOCOLATE, Rgb::DARK_MAGENTA];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodKind {
    Ordinary,
    Special,
}

/// Countdown driving the special food's color changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCycle {
    countdown: i32,
}

impl ColorCycle {
    pub fn new() -> Self {
        Self {
            countdown: COLOR_CHANGE_LIMIT,
        }
    }

    /// Advance one frame, returning a new color when the countdown has run out.
    /// The reset is relative so a late frame does not stretch the period.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Rgb> {
        let color = if self.countdown <= 0 {
            self.countdown += COLOR_CHANGE_LIMIT;
            Some(Rgb::random(rng))
        } else {
            None
        };
        self.countdown -= 1;
        color
    }
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new()
    }
}

/// A food item: every live position of one kind of food
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    kind: FoodKind,
    positions: Vec<Position>,
    points: u32,
    color: Rgb,
    cycle: Option<ColorCycle>,
}

impl Food {
    pub fn ordinary() -> Self {
        Self {
            kind: FoodKind::Ordinary,
            positions: Vec::new(),
            points: ORDINARY_POINTS,
            color: Rgb::INDIAN_RED,
            cycle: None,
        }
    }

    pub fn special(points: u32, color: Rgb) -> Self {
        Self {
            kind: FoodKind::Special,
            positions: Vec::new(),
            points,
            color,
            cycle: Some(ColorCycle::new()),
        }
    }

    /// Special food with randomly rolled points and a starting color from the palette
    pub fn random_special<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let points = rng.gen_range(SPECIAL_POINTS.0..=SPECIAL_POINTS.1);
        let color = *SPECIAL_PALETTE.choose(rng).unwrap_or(&Rgb::DARK_BLUE);
        Self::special(points, color)
    }

    pub fn kind(&self) -> FoodKind {
        self.kind
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of live positions
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Place one unit of this food on a random grid cell, excluding the
    /// outermost column and row at the origin side. Overlap with the snake
    /// or other food is allowed.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, width: i32, height: i32) -> Position {
        let max_col = ((width - CELL_SIZE) / CELL_SIZE).max(1);
        let max_row = ((height - CELL_SIZE) / CELL_SIZE).max(1);
        let pos = Position::new(
            rng.gen_range(1..=max_col) * CELL_SIZE,
            rng.gen_range(1..=max_row) * CELL_SIZE,
        );
        self.positions.push(pos);
        debug!(kind = ?self.kind, x = pos.x, y = pos.y, "food spawned");
        pos
    }

    /// Place one unit at a known position
    pub fn place(&mut self, pos: Position) {
        self.positions.push(pos);
    }

    /// Remove exactly one occurrence of `pos`
    pub fn remove(&mut self, pos: Position) -> Result<(), GameError> {
        let index = self
            .positions
            .iter()
            .position(|p| *p == pos)
            .ok_or(GameError::InvalidRemoval { position: pos })?;
        self.positions.remove(index);
        Ok(())
    }

    /// Step the color cycle, if this food has one
    pub fn cycle_color<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(color) = self.cycle.as_mut().and_then(|cycle| cycle.tick(rng)) {
            self.color = color;
        }
    }
}

/// Frame countdown until the next special food appears
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnTimer {
    remaining: u64,
    fps: u64,
}

impl SpawnTimer {
    pub fn new(frames_per_second: u32) -> Self {
        let fps = u64::from(frames_per_second);
        Self {
            remaining: FIRST_SPECIAL_DELAY_SECS * fps,
            fps,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Advance one frame. Returns true on the frame the countdown is at zero,
    /// at which point it is re-armed with a random delay.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let fired = self.remaining == 0;
        if fired {
            self.remaining +=
                rng.gen_range(SPECIAL_RESPAWN_SECS.0 * self.fps..=SPECIAL_RESPAWN_SECS.1 * self.fps);
        }
        self.remaining = self.remaining.saturating_sub(1);
        fired
    }
}

/// All food on the playfield
#[derive(Debug, Clone, PartialEq)]
pub struct FoodPool {
    pub ordinary: Food,
    pub special: Food,
    pub special_timer: SpawnTimer,
}

impl FoodPool {
    /// Food for a new game, with the configured starting amounts spawned
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let mut pool = Self {
            ordinary: Food::ordinary(),
            special: Food::random_special(rng),
            special_timer: SpawnTimer::new(config.frames_per_second),
        };
        for _ in 0..config.initial_food {
            pool.ordinary.spawn(rng, config.screen_width, config.screen_height);
        }
        for _ in 0..config.initial_special_food {
            pool.special.spawn(rng, config.screen_width, config.screen_height);
        }
        pool
    }

    /// A pool with nothing on the board
    pub fn empty() -> Self {
        Self {
            ordinary: Food::ordinary(),
            special: Food::special(SPECIAL_POINTS.0, Rgb::DARK_BLUE),
            special_timer: SpawnTimer::new(GameConfig::default().frames_per_second),
        }
    }

    /// Food items in consumption order
    pub fn items(&self) -> [&Food; 2] {
        [&self.ordinary, &self.special]
    }

    pub fn items_mut(&mut self) -> [&mut Food; 2] {
        [&mut self.ordinary, &mut self.special]
    }

    /// Per-frame upkeep: cycle the special food color, replace eaten
    /// ordinary food, and run the special food timer
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R, width: i32, height: i32) {
        self.special.cycle_color(rng);

        if self.ordinary.count() == 0 {
            self.ordinary.spawn(rng, width, height);
        }

        if self.special_timer.tick(rng) {
            let pos = self.special.spawn(rng, width, height);
            info!(
                x = pos.x,
                y = pos.y,
                points = self.special.points(),
                next_in_frames = self.special_timer.remaining(),
                "special food spawned"
            );
        }
    }
}
