use serde::{Deserialize, Serialize};
use std::fmt;

/// Travel direction of a snake on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        use Direction::*;
        match self {
            Up => "UP",
            Down => "DOWN",
            Left => "LEFT",
            Right => "RIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
