use std::collections::VecDeque;

use log::error;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::input::InputQueue;
use crate::point::{Direction, Point};
use crate::snake::Snake;
use crate::spawn::pick_spot;

/// Whether the game is still accepting ticks. `Lost` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Lost,
}

/// What a single tick produced, for the audio collaborator.
#[derive(Debug, Default, Clone, Copy)]
pub struct TickEvents {
    pub ate: bool,
}

/// Read-only view of one tick's outcome, handed to the rendering
/// collaborator.
pub struct Frame<'a> {
    pub head: Point,
    pub body: &'a VecDeque<Point>,
    pub food: Point,
    pub score: usize,
    pub width: i32,
    pub height: i32,
}

/// All mutable game state, owned by the loop that ticks it. Rendering and
/// audio only ever observe it, through [`Frame`] and [`TickEvents`].
pub struct GameState {
    width: i32,
    height: i32,
    pub snake: Snake,
    pub food: Point,
    pub status: Status,
    inputs: InputQueue,
    direction: Direction,
    rng: StdRng,
}

impl GameState {
    /// Fresh game with entropy-seeded food placement.
    pub fn new(config: &GameConfig) -> Self {
        Self::with_seed(config, rand::random())
    }

    /// Fresh game with a fixed seed, for reproducible runs and tests. The
    /// snake starts one cell in from the top-left corner, heading right.
    pub fn with_seed(config: &GameConfig, seed: u64) -> Self {
        let width = i32::from(config.width);
        let height = i32::from(config.height);
        let snake = Snake::new(Point::new(1, 0), Direction::Right);
        let mut rng = StdRng::seed_from_u64(seed);

        let mut status = Status::Running;
        let food = match pick_spot(width, height, &snake.occupied(), &mut rng) {
            Some(spot) => spot,
            None => {
                error!("no free cell for food on a {}x{} board", width, height);
                status = Status::Lost;
                Point::new(0, 0)
            }
        };

        GameState {
            width,
            height,
            snake,
            food,
            status,
            inputs: InputQueue::new(),
            direction: Direction::Right,
            rng,
        }
    }

    /// Buffers a directional intent for a future tick.
    pub fn queue_direction(&mut self, direction: Direction) {
        self.inputs.push(direction);
    }

    /// Advances the simulation by one step: consume one buffered input, move
    /// the snake, re-place eaten food, then check the termination
    /// conditions. Does nothing once the game is lost.
    pub fn tick(&mut self) -> TickEvents {
        let mut events = TickEvents::default();
        if self.status == Status::Lost {
            return events;
        }

        self.direction = self.inputs.pop_next(self.direction);
        events.ate = self.snake.advance(self.direction, self.food);

        if events.ate {
            match pick_spot(self.width, self.height, &self.snake.occupied(), &mut self.rng) {
                Some(spot) => self.food = spot,
                None => {
                    error!("board is full, no cell left for food");
                    self.status = Status::Lost;
                    return events;
                }
            }
        }

        if self.snake.is_out_of_bounds(self.width, self.height) || self.snake.is_self_collision()
        {
            self.status = Status::Lost;
        }

        events
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Derived from the body length, never stored separately.
    pub fn score(&self) -> usize {
        self.snake.len() - 1
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            head: self.snake.head(),
            body: self.snake.body(),
            food: self.food,
            score: self.score(),
            width: self.width,
            height: self.height,
        }
    }
}
