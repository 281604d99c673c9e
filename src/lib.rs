//! Donut Counter - Terminal Donut Tally
//!
//! This module exposes the counter and achievement logic for testing and
//! external use.

pub mod achievements;
pub mod constants;
pub mod game_logic;
pub mod game_state;

// UI module is exposed so the binary can share a single compilation of it
pub mod ui;
