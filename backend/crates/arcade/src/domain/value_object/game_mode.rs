use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Game mode
///
/// `Passthrough` wraps the snake around board edges; `Walls` ends the
/// run on contact. Scores are ranked separately per mode when a filter
/// is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Passthrough,
    Walls,
}

impl GameMode {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        use GameMode::*;
        match self {
            Passthrough => "passthrough",
            Walls => "walls",
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use GameMode::*;
        match s {
            "passthrough" => Ok(Passthrough),
            "walls" => Ok(Walls),
            _ => Err(format!("Invalid game mode: {}", s)),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
