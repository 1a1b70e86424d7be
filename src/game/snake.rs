use tracing::{debug, info};

use super::action::Direction;
use super::error::GameError;
use super::food::{FoodKind, FoodPool};
use super::state::{Position, Score, CELL_SIZE};

/// Where a new snake's head starts
pub const START_POSITION: Position = Position { x: 100, y: 50 };

/// Food eaten on a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meal {
    pub kind: FoodKind,
    pub points: u32,
    pub position: Position,
}

/// The player's snake
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    head: Position,
    /// Body segments, head first. Entries are copies, never aliases of `head`.
    body: Vec<Position>,
    /// `None` until the first direction key, while the snake sits still
    direction: Option<Direction>,
    target_length: usize,
}

impl Snake {
    /// A one-segment snake that has not started moving
    pub fn new(head: Position) -> Self {
        Self {
            head,
            body: vec![head],
            direction: None,
            target_length: 1,
        }
    }

    /// Build a snake mid-frame: `body` is the segment list from the previous
    /// frame and `head` may already have moved away from `body[0]`.
    pub fn from_parts(head: Position, mut body: Vec<Position>, direction: Option<Direction>) -> Self {
        if body.is_empty() {
            body.push(head);
        }
        let target_length = body.len();
        Self {
            head,
            body,
            direction,
            target_length,
        }
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Turn towards `requested` unless it reverses the current direction.
    /// Returns whether the direction was accepted.
    pub fn change_direction(&mut self, requested: Direction) -> bool {
        if self.direction.is_some_and(|current| current.is_opposite(requested)) {
            return false;
        }
        self.direction = Some(requested);
        true
    }

    /// Move the head one cell in the current direction
    pub fn advance(&mut self) {
        if let Some(direction) = self.direction {
            let (dx, dy) = direction.delta();
            self.head = self.head.moved_by(dx * CELL_SIZE, dy * CELL_SIZE);
        }
    }

    /// Carry a head that left the playfield over to the opposite edge.
    ///
    /// Only the first matching edge is handled per call, so a head that is
    /// out on both axes only has `x` fixed this frame.
    pub fn wrap_borders(&mut self, width: i32, height: i32) -> bool {
        let head = &mut self.head;
        if head.x >= width {
            head.x = 0;
        } else if head.x < 0 {
            head.x = width;
        } else if head.y >= height {
            head.y = 0;
        } else if head.y < 0 {
            head.y = height;
        } else {
            return false;
        }
        true
    }

    /// Cut the snake where the head lands on its own body.
    ///
    /// The nearest matching segment behind the head wins; it and everything
    /// in front of it are kept. Each discarded segment costs one point.
    /// Returns the number of discarded segments.
    pub fn trim_self_collision(&mut self, score: &mut Score) -> usize {
        let hit = self
            .body
            .iter()
            .skip(1)
            .position(|segment| *segment == self.head);

        let Some(offset) = hit else {
            return 0;
        };

        let keep = offset + 2;
        let discarded = self.body.len() - keep;
        self.body.truncate(keep);
        self.target_length = keep;
        score.deduct(discarded);

        info!(
            x = self.head.x,
            y = self.head.y,
            kept = keep,
            discarded,
            "snake bit itself"
        );
        discarded
    }

    /// Push the head onto the body and drop the tail once the body has
    /// caught up with the target length, then eat whatever is under the head.
    pub fn grow_and_shift(
        &mut self,
        food: &mut FoodPool,
        score: &mut Score,
    ) -> Result<Option<Meal>, GameError> {
        self.shift_body();
        self.consume_food(food, score)
    }

    fn shift_body(&mut self) {
        self.body.insert(0, self.head);
        if self.body.len() >= self.target_length {
            self.body.pop();
        }
        if self.target_length <= self.body.len() {
            self.target_length += 1;
        }
    }

    /// Eat at most one unit of food under the head, crediting its points to
    /// both the target length and the score.
    pub fn consume_food(
        &mut self,
        food: &mut FoodPool,
        score: &mut Score,
    ) -> Result<Option<Meal>, GameError> {
        for item in food.items_mut() {
            if !item.contains(self.head) {
                continue;
            }

            item.remove(self.head)?;
            let points = item.points();
            self.target_length += points as usize;
            score.add(points);

            debug!(kind = ?item.kind(), points, x = self.head.x, y = self.head.y, "food eaten");
            return Ok(Some(Meal {
                kind: item.kind(),
                points,
                position: self.head,
            }));
        }

        Ok(None)
    }
}
