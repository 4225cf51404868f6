//! World Map Screen
//!
//! Zones are circles joined by paths in declaration order. Only unlocked
//! zones respond to clicks; a click selects the zone and reports it.

use crate::game::{Progress, Zone};

#[cfg(feature = "sdl")]
use crate::render::{draw_circle, fill_circle};
#[cfg(feature = "sdl")]
use crate::text::draw_centered_text;
#[cfg(feature = "sdl")]
use sdl2::pixels::Color;
#[cfg(feature = "sdl")]
use sdl2::render::Canvas;
#[cfg(feature = "sdl")]
use sdl2::video::Window;

pub const ZONE_RADIUS: f32 = 30.0;

/// Center of `zone` on the map
pub fn zone_position(zone: Zone) -> (f32, f32) {
    match zone {
        Zone::TreeTops => (200.0, 150.0),
        Zone::HomeForest => (300.0, 250.0),
        Zone::FlowerMeadow => (500.0, 200.0),
        Zone::Lake => (400.0, 350.0),
    }
}

#[derive(Debug, Default)]
pub struct WorldMap {
    selected: Option<Zone>,
}

impl WorldMap {
    pub fn new() -> Self {
        WorldMap { selected: None }
    }

    pub fn selected(&self) -> Option<Zone> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Selects the unlocked zone within [`ZONE_RADIUS`] of the click
    pub fn handle_click(&mut self, px: f32, py: f32, progress: &Progress) -> Option<Zone> {
        let zone = Zone::ALL.into_iter().find(|zone| {
            let (zx, zy) = zone_position(*zone);
            let distance = ((px - zx).powi(2) + (py - zy).powi(2)).sqrt();
            distance <= ZONE_RADIUS && progress.is_unlocked(*zone)
        })?;

        self.selected = Some(zone);
        Some(zone)
    }

    #[cfg(feature = "sdl")]
    pub fn render(&self, canvas: &mut Canvas<Window>, progress: &Progress, screen_width: u32) -> Result<(), String> {
        let black = Color::RGB(0, 0, 0);

        canvas.set_draw_color(Color::RGB(230, 230, 200));
        canvas.clear();

        draw_centered_text(canvas, "Choose Your Adventure", screen_width as i32 / 2, 50, black, 3)?;

        canvas.set_draw_color(black);
        for pair in Zone::ALL.windows(2) {
            let (ax, ay) = zone_position(pair[0]);
            let (bx, by) = zone_position(pair[1]);
            canvas.draw_line((ax as i32, ay as i32), (bx as i32, by as i32))?;
        }

        for zone in Zone::ALL {
            let (zx, zy) = zone_position(zone);
            let (cx, cy) = (zx as i32, zy as i32);
            let color = if progress.is_unlocked(zone) {
                zone_color(zone)
            } else {
                Color::RGB(150, 150, 150)
            };

            fill_circle(canvas, cx, cy, ZONE_RADIUS as i32, color)?;
            draw_circle(canvas, cx, cy, ZONE_RADIUS as i32, black)?;

            if self.selected == Some(zone) {
                draw_circle(canvas, cx, cy, ZONE_RADIUS as i32 + 5, Color::RGB(255, 255, 255))?;
            }

            draw_centered_text(canvas, zone.name(), cx, cy + 40, black, 1)?;
        }

        draw_centered_text(
            canvas,
            "Click a zone. Enter to go, Esc stays here.",
            screen_width as i32 / 2,
            540,
            black,
            2,
        )
    }
}

#[cfg(feature = "sdl")]
fn zone_color(zone: Zone) -> Color {
    match zone {
        Zone::TreeTops => Color::RGB(34, 139, 34),
        Zone::HomeForest => Color::RGB(139, 69, 19),
        Zone::FlowerMeadow => Color::RGB(255, 192, 203),
        Zone::Lake => Color::RGB(0, 0, 255),
    }
}
