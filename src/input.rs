use std::collections::VecDeque;

use crate::point::Direction;

/// Directional intents buffered between ticks, drained at one per tick.
#[derive(Debug, Default)]
pub struct InputQueue {
    queue: VecDeque<Direction>,
}

impl InputQueue {
    pub fn new() -> Self {
        InputQueue { queue: VecDeque::new() }
    }

    /// Appends an intent; it takes effect next tick at the earliest.
    pub fn push(&mut self, direction: Direction) {
        self.queue.push_back(direction);
    }

    /// Consumes at most one buffered intent and returns the direction to
    /// apply this tick. An intent that would reverse straight into the neck
    /// is consumed but ignored, so one illegal press never delays the
    /// presses queued behind it. Purely direction algebra, never geometry.
    pub fn pop_next(&mut self, current: Direction) -> Direction {
        match self.queue.pop_front() {
            Some(next) if next != current.opposite() => next,
            _ => current,
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Direction::*;

    #[test]
    fn empty_queue_keeps_current_direction() {
        let mut queue = InputQueue::new();
        assert_eq!(queue.pop_next(Right), Right);
        assert!(queue.is_empty());
    }

    #[test]
    fn consumes_exactly_one_entry_per_call() {
        let mut queue = InputQueue::new();
        queue.push(Down);
        queue.push(Left);
        queue.push(Up);

        assert_eq!(queue.pop_next(Right), Down);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop_next(Down), Left);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop_next(Left), Up);
        assert!(queue.is_empty());
    }

    #[test]
    fn reversal_is_consumed_but_ignored() {
        for current in [Up, Down, Left, Right] {
            let mut queue = InputQueue::new();
            queue.push(current.opposite());

            assert_eq!(queue.pop_next(current), current);
            assert!(queue.is_empty());
        }
    }

    #[test]
    fn reversal_does_not_swallow_later_intents() {
        let mut queue = InputQueue::new();
        queue.push(Left);
        queue.push(Down);

        // Left is the reversal of Right: discarded, Down still queued
        assert_eq!(queue.pop_next(Right), Right);
        assert_eq!(queue.pop_next(Right), Down);
    }
}
