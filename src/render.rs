//! Scene rendering
//!
//! Every entity is drawn procedurally with SDL2 primitives. Level entities
//! are wrapped in a `Renderable` and drawn back to front by layer, so the
//! player always ends up on top of the scenery regardless of list order.
//!
//! # Usage Example
//!
//! ```ignore
//! let hud = Hud::new();
//! render_game(&mut canvas, &game, &hud)?;
//! canvas.present();
//! ```

use crate::collision::Rect;
use crate::game::{Game, Scene};
use crate::gui::content;
use crate::level::{Obstacle, ObstacleRole};
use crate::nest::{NestPiece, PieceType};
use crate::peckable::{PeckableKind, PeckableObject};
use crate::player::Player;
use crate::snake::Snake;
use crate::text::{draw_centered_text, draw_lines};
use crate::ui::Hud;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

const SKY_BLUE: Color = Color::RGB(135, 206, 235);
const GREEN: Color = Color::RGB(34, 139, 34);
const BROWN: Color = Color::RGB(139, 69, 19);
const BLACK: Color = Color::RGB(0, 0, 0);
const WHITE: Color = Color::RGB(255, 255, 255);
const GOLD: Color = Color::RGB(255, 215, 0);

/// Converts a simulation rectangle to an SDL rectangle (truncating)
pub fn to_sdl_rect(rect: &Rect) -> sdl2::rect::Rect {
    sdl2::rect::Rect::new(
        rect.x as i32,
        rect.y as i32,
        rect.width.max(1.0) as u32,
        rect.height.max(1.0) as u32,
    )
}

/// Fills a circle one horizontal span per row
pub fn fill_circle(
    canvas: &mut Canvas<Window>,
    cx: i32,
    cy: i32,
    radius: i32,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);
    for dy in -radius..=radius {
        let half = ((radius * radius - dy * dy) as f32).sqrt() as i32;
        canvas.draw_line((cx - half, cy + dy), (cx + half, cy + dy))?;
    }
    Ok(())
}

/// Draws a one-pixel circle outline (midpoint algorithm)
pub fn draw_circle(
    canvas: &mut Canvas<Window>,
    cx: i32,
    cy: i32,
    radius: i32,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    let (mut x, mut y) = (radius, 0);
    let mut error = 1 - radius;
    while x >= y {
        for (px, py) in [
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ] {
            canvas.draw_point((cx + px, cy + py))?;
        }

        y += 1;
        if error < 0 {
            error += 2 * y + 1;
        } else {
            x -= 1;
            error += 2 * (y - x) + 1;
        }
    }
    Ok(())
}

/// Draw order of level entities, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Scenery,
    Props,
    Creatures,
    Player,
}

/// Wrapper enum for everything drawn inside a level
pub enum Renderable<'a> {
    Obstacle(&'a Obstacle),
    Peckable(&'a PeckableObject),
    Snake(&'a Snake),
    NestSlot(&'a Rect),
    NestPiece(&'a NestPiece),
    Player(&'a Player),
}

impl<'a> Renderable<'a> {
    pub fn layer(&self) -> Layer {
        match self {
            Renderable::Obstacle(_) | Renderable::NestSlot(_) => Layer::Scenery,
            Renderable::Peckable(_) | Renderable::NestPiece(_) => Layer::Props,
            Renderable::Snake(_) => Layer::Creatures,
            Renderable::Player(_) => Layer::Player,
        }
    }

    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        match self {
            Renderable::Obstacle(obstacle) => render_obstacle(canvas, obstacle),
            Renderable::Peckable(object) => render_peckable(canvas, object),
            Renderable::Snake(snake) => render_snake(canvas, snake),
            Renderable::NestSlot(slot) => {
                canvas.set_draw_color(BROWN);
                canvas.draw_rect(to_sdl_rect(slot))
            }
            Renderable::NestPiece(piece) => render_nest_piece(canvas, piece),
            Renderable::Player(player) => render_player(canvas, player),
        }
    }
}

fn render_obstacle(canvas: &mut Canvas<Window>, obstacle: &Obstacle) -> Result<(), String> {
    let color = match obstacle.role {
        ObstacleRole::Ground => GREEN,
        ObstacleRole::Platform => BROWN,
        ObstacleRole::Goal => GOLD,
    };
    canvas.set_draw_color(color);
    canvas.fill_rect(to_sdl_rect(&obstacle.rect))
}

fn render_peckable(canvas: &mut Canvas<Window>, object: &PeckableObject) -> Result<(), String> {
    let rect = to_sdl_rect(&object.rect);
    let color = match object.kind {
        PeckableKind::Tree => BROWN,
        PeckableKind::Flower => Color::RGB(255, 192, 203),
    };
    canvas.set_draw_color(color);
    canvas.fill_rect(rect)?;

    if object.pecked {
        canvas.set_draw_color(BLACK);
        canvas.draw_line(rect.top_left(), rect.bottom_right())?;
    }

    if object.larva_found() {
        fill_circle(canvas, rect.center().x(), rect.top() + 20, 6, Color::RGB(255, 250, 205))?;
    }
    Ok(())
}

fn render_snake(canvas: &mut Canvas<Window>, snake: &Snake) -> Result<(), String> {
    if !snake.active {
        return Ok(());
    }
    let rect = to_sdl_rect(&snake.rect);
    canvas.set_draw_color(Color::RGB(0, 100, 0));
    canvas.fill_rect(rect)?;
    fill_circle(canvas, rect.left() + 10, rect.top() + 10, 3, BLACK)
}

fn render_nest_piece(canvas: &mut Canvas<Window>, piece: &NestPiece) -> Result<(), String> {
    let color = match piece.piece_type {
        PieceType::Twig => Color::RGB(101, 67, 33),
        PieceType::Leaf => Color::RGB(0, 128, 0),
        PieceType::Moss => Color::RGB(107, 142, 35),
    };
    canvas.set_draw_color(color);
    canvas.fill_rect(to_sdl_rect(&piece.rect))
}

/// Woodpecker: red cap, black body, a wing that flaps between two frames
/// and a beak on the facing side
fn render_player(canvas: &mut Canvas<Window>, player: &Player) -> Result<(), String> {
    let body = to_sdl_rect(&player.rect);
    canvas.set_draw_color(Color::RGB(40, 40, 40));
    canvas.fill_rect(body)?;

    canvas.set_draw_color(Color::RGB(220, 20, 60));
    canvas.fill_rect(sdl2::rect::Rect::new(body.x(), body.y(), body.width(), 10))?;

    let wing_y = if player.wing_frame() == 0 { body.y() + 14 } else { body.y() + 22 };
    canvas.set_draw_color(WHITE);
    canvas.fill_rect(sdl2::rect::Rect::new(body.x() + 8, wing_y, body.width() - 16, 8))?;

    let beak_x = if player.facing_right { body.right() } else { body.left() - 10 };
    canvas.set_draw_color(Color::RGB(255, 200, 0));
    canvas.fill_rect(sdl2::rect::Rect::new(beak_x, body.y() + 12, 10, 6))
}

/// Collects the level's entities in draw order
pub fn level_renderables(game: &Game) -> Vec<Renderable<'_>> {
    let world = &game.world;
    let mut renderables: Vec<Renderable> = Vec::with_capacity(
        1 + world.obstacles.len() + world.peckables.len() + world.snakes.len() + 10,
    );

    renderables.extend(world.obstacles.iter().map(Renderable::Obstacle));
    renderables.extend(world.peckables.iter().map(Renderable::Peckable));
    renderables.extend(world.snakes.iter().map(Renderable::Snake));
    if let Some(nest) = &world.nest {
        renderables.extend(nest.slots.iter().map(Renderable::NestSlot));
        renderables.extend(nest.pieces.iter().map(Renderable::NestPiece));
    }
    if game.scene.is_platforming() {
        renderables.push(Renderable::Player(&game.player));
    }

    // Stable, so entities within a layer keep list order
    renderables.sort_by_key(|renderable| renderable.layer());
    renderables
}

/// Draws the whole frame for the current scene
pub fn render_game(canvas: &mut Canvas<Window>, game: &Game, hud: &Hud) -> Result<(), String> {
    let width = game.config.window.width;
    let center_x = width as i32 / 2;

    match game.scene {
        Scene::Menu => {
            clear(canvas, SKY_BLUE);
            draw_centered_text(canvas, content::GAME_TITLE, center_x, 100, BLACK, 4)?;
            render_buttons(canvas, game)?;
            let footer_y = game.config.window.height as i32 - 40;
            draw_centered_text(canvas, "Press ESC to quit", center_x, footer_y, BLACK, 2)?;
        }
        Scene::Story => {
            clear(canvas, SKY_BLUE);
            let page = content::STORY_PAGES
                .get(game.story_phase)
                .copied()
                .unwrap_or(&[]);
            draw_lines(canvas, page, 60, 200, BLACK, 2)?;
            draw_centered_text(canvas, "Press Enter to continue", center_x, 500, BLACK, 2)?;
        }
        Scene::Instructions => {
            clear(canvas, SKY_BLUE);
            draw_centered_text(canvas, "How to Play", center_x, 60, BLACK, 4)?;
            draw_lines(canvas, content::INSTRUCTIONS, 120, 150, BLACK, 2)?;
            render_buttons(canvas, game)?;
        }
        Scene::Map => {
            game.world_map.render(canvas, &game.progress, width)?;
        }
        Scene::Decision => {
            clear(canvas, SKY_BLUE);
            draw_centered_text(canvas, "A sunbird invites William", center_x, 150, BLACK, 3)?;
            draw_centered_text(canvas, "to the flower meadow.", center_x, 190, BLACK, 3)?;
            render_buttons(canvas, game)?;
        }
        Scene::GameOver => {
            clear(canvas, Color::RGB(60, 0, 0));
            draw_centered_text(canvas, "Game Over", center_x, 220, Color::RGB(255, 50, 50), 5)?;
            render_final_score(canvas, game, center_x)?;
        }
        Scene::Win => {
            clear(canvas, SKY_BLUE);
            draw_centered_text(canvas, "William built his nest!", center_x, 220, GOLD, 4)?;
            render_final_score(canvas, game, center_x)?;
        }
        Scene::FlyingTutorial
        | Scene::PeckingGame
        | Scene::FlowerChallenge
        | Scene::SnakeEncounter
        | Scene::NestBuilding => {
            clear(canvas, SKY_BLUE);
            for renderable in level_renderables(game) {
                renderable.render(canvas)?;
            }
            hud.render(canvas, game)?;
        }
    }

    Ok(())
}

fn clear(canvas: &mut Canvas<Window>, color: Color) {
    canvas.set_draw_color(color);
    canvas.clear();
}

fn render_buttons(canvas: &mut Canvas<Window>, game: &Game) -> Result<(), String> {
    for button in &game.buttons {
        button.render(canvas)?;
    }
    Ok(())
}

fn render_final_score(canvas: &mut Canvas<Window>, game: &Game, center_x: i32) -> Result<(), String> {
    let summary = format!(
        "Score: {}   Feathers: {}",
        game.progress.score,
        game.player.feathers()
    );
    draw_centered_text(canvas, &summary, center_x, 320, WHITE, 2)?;
    draw_centered_text(canvas, "Press Enter for the menu", center_x, 380, WHITE, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game_in(scene: Scene) -> Game {
        let mut game = Game::new(GameConfig::default(), StdRng::seed_from_u64(1));
        game.enter_scene(scene);
        game
    }

    #[test]
    fn test_player_drawn_last() {
        let game = game_in(Scene::SnakeEncounter);
        let layers: Vec<Layer> = level_renderables(&game).iter().map(|r| r.layer()).collect();

        assert_eq!(layers.first(), Some(&Layer::Scenery));
        assert_eq!(layers.last(), Some(&Layer::Player));
        assert!(layers.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_nest_scene_has_no_player() {
        let game = game_in(Scene::NestBuilding);
        let renderables = level_renderables(&game);

        // Ground, five slots, five pieces
        assert_eq!(renderables.len(), 11);
        assert!(renderables.iter().all(|r| r.layer() != Layer::Player));
    }

    #[test]
    fn test_sdl_rect_conversion_truncates() {
        let rect = to_sdl_rect(&Rect::new(10.7, 20.2, 40.0, 0.0));
        assert_eq!((rect.x(), rect.y()), (10, 20));
        assert_eq!((rect.width(), rect.height()), (40, 1));
    }
}
