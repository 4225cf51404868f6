//! Gameplay HUD
//!
//! Health bar, feather and score counters, the level objective and the
//! educational tip. Stateless: create once, call `render` every frame.

use crate::game::{Game, Scene};
use crate::gui::content;
use crate::player::MAX_HEALTH;
use crate::text::{draw_centered_text, draw_simple_text};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for HUD appearance
#[derive(Debug, Clone)]
pub struct HudStyle {
    /// Health bar width in pixels
    pub bar_width: u32,

    /// Health bar height in pixels
    pub bar_height: u32,

    /// Top-left corner of the HUD block
    pub origin: (i32, i32),

    /// Background bar color (shown where health is missing)
    pub background_color: Color,

    /// Fill color above the low-health threshold
    pub health_color: Color,

    /// Fill color below 30% health
    pub low_health_color: Color,

    pub text_color: Color,

    /// Color of the "level complete" banner
    pub banner_color: Color,
}

impl Default for HudStyle {
    fn default() -> Self {
        HudStyle {
            bar_width: 200,
            bar_height: 20,
            origin: (10, 10),
            background_color: Color::RGB(50, 50, 50),
            health_color: Color::RGB(0, 200, 0),
            low_health_color: Color::RGB(200, 0, 0),
            text_color: Color::RGB(0, 0, 0),
            banner_color: Color::RGB(255, 255, 0),
        }
    }
}

/// Fraction of a full health bar to fill
pub fn health_fraction(health: i32) -> f32 {
    (health as f32 / MAX_HEALTH as f32).clamp(0.0, 1.0)
}

pub struct Hud {
    style: HudStyle,
}

impl Hud {
    pub fn new() -> Self {
        Hud {
            style: HudStyle::default(),
        }
    }

    pub fn with_style(style: HudStyle) -> Self {
        Hud { style }
    }

    /// Renders the HUD for the current level
    ///
    /// # Returns
    ///
    /// - `Ok(())` on success
    /// - `Err(String)` if SDL2 rendering fails
    pub fn render(&self, canvas: &mut Canvas<Window>, game: &Game) -> Result<(), String> {
        let (x, y) = self.style.origin;

        if game.scene.is_platforming() {
            self.render_health_bar(canvas, x, y, health_fraction(game.player.health))?;
        }

        let counters = format!(
            "Feathers: {}   Score: {}",
            game.player.feathers(),
            game.progress.score
        );
        draw_simple_text(canvas, &counters, x, y + 30, self.style.text_color, 2)?;

        if let Some(objective) = content::objective(game.scene) {
            draw_simple_text(canvas, objective, x, y + 55, self.style.text_color, 2)?;
        }

        if game.scene == Scene::SnakeEncounter {
            let remaining = (game.config.rules.snake_survival_seconds - game.level_timer).max(0.0);
            let timer = format!("Time left: {}", remaining.ceil() as i32);
            draw_simple_text(canvas, &timer, x, y + 80, self.style.text_color, 2)?;
        }

        let height = game.config.window.height as i32;
        if let Some(tip) = content::tip(game.scene, game.current_zone) {
            draw_simple_text(canvas, tip, x, height - 30, Color::RGB(255, 255, 255), 1)?;
        }

        if game.settle_elapsed().is_some() {
            let center_x = game.config.window.width as i32 / 2;
            draw_centered_text(canvas, "Well done!", center_x, 150, self.style.banner_color, 4)?;
        }

        Ok(())
    }

    fn render_health_bar(
        &self,
        canvas: &mut Canvas<Window>,
        x: i32,
        y: i32,
        fraction: f32,
    ) -> Result<(), String> {
        let background = Rect::new(x, y, self.style.bar_width, self.style.bar_height);
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(background)?;

        let fill_width = (self.style.bar_width as f32 * fraction) as u32;
        if fill_width > 0 {
            let fill_color = if fraction < 0.3 {
                self.style.low_health_color
            } else {
                self.style.health_color
            };
            canvas.set_draw_color(fill_color);
            canvas.fill_rect(Rect::new(x, y, fill_width, self.style.bar_height))?;
        }

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.draw_rect(background)
    }

    pub fn style(&self) -> &HudStyle {
        &self.style
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_fraction_is_clamped() {
        assert_eq!(health_fraction(100), 1.0);
        assert_eq!(health_fraction(25), 0.25);
        assert_eq!(health_fraction(0), 0.0);
        assert_eq!(health_fraction(-10), 0.0);
    }

    #[test]
    fn test_custom_style() {
        let hud = Hud::with_style(HudStyle {
            bar_width: 64,
            ..Default::default()
        });
        assert_eq!(hud.style().bar_width, 64);
        assert_eq!(Hud::default().style().bar_height, 20);
    }
}
