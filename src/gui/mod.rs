//! Screen-Space GUI
//!
//! Buttons, the world map and the static text shown on non-gameplay screens.
//! Layout and hit-testing are plain data; drawing is compiled in with the
//! `sdl` feature.
//!
//! # Available Components
//!
//! - [`Button`] - labelled button carrying a typed [`ButtonAction`]
//! - [`WorldMap`] - zone selection screen
//! - [`content`] - story pages, instructions and educational tips

pub mod button;
pub mod content;
pub mod world_map;

pub use button::{Button, ButtonAction, buttons_for, clicked};
pub use world_map::WorldMap;
