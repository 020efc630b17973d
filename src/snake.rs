use std::collections::VecDeque;

use crate::point::{Direction, Point};

/// The player's segment chain: the head cell plus the ordered history of
/// cells still covered behind it. The history runs oldest-first and its
/// newest entry is always the cell the head just left.
#[derive(Debug, Clone)]
pub struct Snake {
    head: Point,
    body: VecDeque<Point>,
}

impl Snake {
    /// One-segment snake heading in `direction`, trailing the cell it just
    /// left.
    pub fn new(head: Point, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_back(head.step(direction.opposite()));
        Snake { head, body }
    }

    /// Snake with an explicit history, oldest cell first.
    pub fn from_segments(head: Point, history: Vec<Point>) -> Self {
        Snake { head, body: VecDeque::from(history) }
    }

    pub fn head(&self) -> Point {
        self.head
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    /// Segment count; the score shown to the player is `len() - 1`.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Every cell the snake covers right now, history plus head.
    pub fn occupied(&self) -> Vec<Point> {
        let mut cells: Vec<Point> = self.body.iter().copied().collect();
        cells.push(self.head);
        cells
    }

    /// Moves one cell in `direction` and reports whether the new head landed
    /// on `food`. On a growth tick the oldest history cell is kept, so the
    /// chain gets one cell longer; otherwise it is trimmed and the chain
    /// just slides forward.
    pub fn advance(&mut self, direction: Direction, food: Point) -> bool {
        self.body.push_back(self.head);
        let new_head = self.head.step(direction);

        let ate = new_head == food;
        if !ate {
            self.body.pop_front();
        }

        self.head = new_head;
        ate
    }

    pub fn is_out_of_bounds(&self, width: i32, height: i32) -> bool {
        !self.head.in_bounds(width, height)
    }

    /// True when the head sits on any history cell. Evaluated after
    /// `advance`, so on a non-growth tick the cell the tail just vacated is
    /// already free again, while the head's immediately-prior cell is still
    /// present (and can never equal the new head).
    pub fn is_self_collision(&self) -> bool {
        self.body.contains(&self.head)
    }
}
