use serde::{Deserialize, Serialize};

/// A cell position on the game board
///
/// Coordinates are grid cells, not pixels. Origin is the top-left
/// corner of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
