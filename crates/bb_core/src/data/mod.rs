pub mod demo;

pub use demo::{demo_game, demo_games};
