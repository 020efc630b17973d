use Direction::*;

/// A cell on the game grid. Collision is exact cell equality; movement is
/// always a unit step, so no tolerance comparison is ever needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// The neighboring cell one step away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Point { x: self.x + dx, y: self.y + dy }
    }

    /// True when the cell lies inside a `width` x `height` board.
    pub fn in_bounds(self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The unit vector this direction moves along.
    pub fn vector(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_one_cell() {
        let p = Point::new(3, 3);
        assert_eq!(p.step(Up), Point::new(3, 2));
        assert_eq!(p.step(Down), Point::new(3, 4));
        assert_eq!(p.step(Left), Point::new(2, 3));
        assert_eq!(p.step(Right), Point::new(4, 3));
    }

    #[test]
    fn opposite_is_an_involution() {
        for d in [Up, Down, Left, Right] {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn bounds_are_half_open() {
        assert!(Point::new(0, 0).in_bounds(1, 1));
        assert!(!Point::new(1, 0).in_bounds(1, 1));
        assert!(!Point::new(0, 1).in_bounds(1, 1));
        assert!(!Point::new(-1, 0).in_bounds(5, 5));
        assert!(!Point::new(2, -1).in_bounds(5, 5));
    }
}
