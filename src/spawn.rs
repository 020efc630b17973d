use rand::Rng;

use crate::point::Point;

/// Picks a uniformly random cell of the `width` x `height` board that is not
/// in `occupied`, by rejection sampling. `occupied` must not contain
/// duplicates. Returns `None` when every cell is occupied, so that callers
/// can terminate instead of sampling forever.
pub fn pick_spot<R: Rng>(
    width: i32,
    height: i32,
    occupied: &[Point],
    rng: &mut R,
) -> Option<Point> {
    if occupied.len() as i64 >= i64::from(width) * i64::from(height) {
        return None;
    }

    loop {
        let spot = Point::new(rng.gen_range(0..width), rng.gen_range(0..height));
        if !occupied.contains(&spot) {
            return Some(spot);
        }
    }
}
