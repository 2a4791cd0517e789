/// Index of a hole on the board, `0..HOLE_COUNT`
pub type HoleIndex = u8;

/// Number of holes the server spawns moles into
pub const HOLE_COUNT: usize = 9;

pub const fn is_valid_hole(index: i64) -> bool {
    index >= 0 && index < HOLE_COUNT as i64
}
