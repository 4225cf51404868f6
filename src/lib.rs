//! William's Wild Adventure
//!
//! A small educational platformer about a young woodpecker, plus a
//! flight-practice mini-game. The simulation (collision, entities, scene
//! state machine) is plain data and runs without a window; everything that
//! touches SDL2 is behind the `sdl` feature.

pub mod collision;
pub mod config;
pub mod error;
pub mod flight;
pub mod game;
pub mod gui;
pub mod input_system;
pub mod level;
pub mod logging;
pub mod nest;
pub mod peckable;
pub mod player;
pub mod snake;
pub mod text;

#[cfg(feature = "sdl")]
pub mod render;
#[cfg(feature = "sdl")]
pub mod ui;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{Game, Scene};
