//! Value Object Module

pub mod direction;
pub mod game_mode;
pub mod position;
