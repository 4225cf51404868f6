//! In-Game HUD Components
//!
//! Stateless, procedurally rendered overlays drawn on top of a level:
//! created once and rendered every frame from the current [`Game`] state.
//!
//! [`Game`]: crate::game::Game
//!
//! # Available Components
//!
//! - [`Hud`] - health bar, counters, objective and educational tip

pub mod hud;

pub use hud::{Hud, HudStyle};
