//! Clickable Button Component
//!
//! Rectangular buttons with a label and a typed action. Each screen builds
//! its own button set with [`buttons_for`]; clicks are resolved by position.

use crate::collision::Rect;
use crate::game::Scene;

#[cfg(feature = "sdl")]
use crate::render::to_sdl_rect;
#[cfg(feature = "sdl")]
use crate::text::{draw_simple_text, text_width};
#[cfg(feature = "sdl")]
use sdl2::pixels::Color;
#[cfg(feature = "sdl")]
use sdl2::render::Canvas;
#[cfg(feature = "sdl")]
use sdl2::video::Window;

/// What happens when a button is clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    StartAdventure,
    Instructions,
    Quit,
    BackToMenu,
    FollowSunbird,
    StayAtHome,
}

#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    pub action: ButtonAction,
    pub hovered: bool,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: &'static str, action: ButtonAction) -> Self {
        Button {
            rect: Rect::new(x, y, width, height),
            label,
            action,
            hovered: false,
        }
    }

    pub fn update_hover(&mut self, px: f32, py: f32) {
        self.hovered = self.rect.contains_point(px, py);
    }

    /// Draws the button face, a 2px border and the centered label
    #[cfg(feature = "sdl")]
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let rect = to_sdl_rect(&self.rect);
        let face = if self.hovered {
            Color::RGB(150, 150, 150)
        } else {
            Color::RGB(200, 200, 200)
        };

        canvas.set_draw_color(face);
        canvas.fill_rect(rect)?;

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.draw_rect(rect)?;
        canvas.draw_rect(sdl2::rect::Rect::new(
            rect.x() + 1,
            rect.y() + 1,
            rect.width().saturating_sub(2),
            rect.height().saturating_sub(2),
        ))?;

        let scale = 2;
        let label_x = rect.x() + (rect.width() as i32 - text_width(self.label, scale) as i32) / 2;
        let label_y = rect.y() + (rect.height() as i32 - 7 * scale as i32) / 2;
        draw_simple_text(canvas, self.label, label_x, label_y, Color::RGB(0, 0, 0), scale)
    }
}

/// Builds the buttons shown on `scene`
///
/// # Arguments
/// * `scene` - Scene being entered
/// * `width`, `height` - Screen size in pixels
pub fn buttons_for(scene: Scene, width: f32, height: f32) -> Vec<Button> {
    let center_x = width / 2.0;

    match scene {
        Scene::Menu => vec![
            Button::new(center_x - 100.0, 250.0, 200.0, 50.0, "Start Adventure", ButtonAction::StartAdventure),
            Button::new(center_x - 100.0, 320.0, 200.0, 50.0, "Instructions", ButtonAction::Instructions),
            Button::new(center_x - 100.0, 390.0, 200.0, 50.0, "Quit", ButtonAction::Quit),
        ],
        Scene::Instructions => vec![Button::new(
            center_x - 100.0,
            height - 80.0,
            200.0,
            40.0,
            "Back to Menu",
            ButtonAction::BackToMenu,
        )],
        Scene::Decision => vec![
            Button::new(center_x - 200.0, 300.0, 180.0, 50.0, "Follow the Sunbird", ButtonAction::FollowSunbird),
            Button::new(center_x + 20.0, 300.0, 180.0, 50.0, "Stay at Home", ButtonAction::StayAtHome),
        ],
        _ => Vec::new(),
    }
}

/// Action of the first button under the pointer
pub fn clicked(buttons: &[Button], px: f32, py: f32) -> Option<ButtonAction> {
    buttons
        .iter()
        .find(|button| button.rect.contains_point(px, py))
        .map(|button| button.action)
}
