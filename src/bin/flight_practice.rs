//! Flight practice: flap with Space, land softly on the branch, R to retry.

use rand::SeedableRng;
use rand::rngs::StdRng;
use sdl2::image::{InitFlag, LoadTexture};
use sdl2::pixels::Color;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{error, info};
use wild_adventure::flight::{FlightOutcome, FlightPractice};
use wild_adventure::input_system::{GameAction, InputContext, InputSystem};
use wild_adventure::logging::init_tracing;
use wild_adventure::render::to_sdl_rect;
use wild_adventure::text::draw_centered_text;
use wild_adventure::{GameConfig, GameError};

const ASSET_DIR: &str = "assets";

fn main() {
    init_tracing();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    name: &str,
) -> Result<Texture<'a>, GameError> {
    let path = Path::new(ASSET_DIR).join(name);
    texture_creator
        .load_texture(&path)
        .map_err(|message| GameError::Asset { path, message })
}

fn run() -> Result<(), GameError> {
    let config = GameConfig::load_or_default()?;
    let (width, height) = (config.window.width, config.window.height);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(InitFlag::PNG)?;

    let window = video_subsystem
        .window("William's Flight Practice", width, height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas.set_logical_size(width, height).map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let background = load_texture(&texture_creator, "background_forest.png")?;
    let bird = load_texture(&texture_creator, "william_bird.png")?;
    let branch = load_texture(&texture_creator, "branch.png")?;

    let mut event_pump = sdl_context.event_pump()?;
    let input = InputSystem::new(InputContext::FlightPractice);
    let mut rng = StdRng::from_entropy();
    let mut practice = FlightPractice::new(width as f32, height as f32, &config.flight, &mut rng);

    let frame_budget = Duration::from_secs_f32(config.window.frame_seconds());
    let center_x = width as i32 / 2;

    info!("flight practice started");

    'running: loop {
        let frame_start = Instant::now();

        for action in input.poll_events(&mut event_pump) {
            match action {
                GameAction::Quit => break 'running,
                GameAction::Flap => practice.flap(),
                GameAction::Retry if practice.outcome().is_some() => practice.reset(&mut rng),
                _ => {}
            }
        }

        practice.update();

        canvas.copy(&background, None, None)?;
        canvas.copy(&branch, None, to_sdl_rect(&practice.branch))?;
        canvas.copy(&bird, None, to_sdl_rect(&practice.bird))?;

        match practice.outcome() {
            Some(FlightOutcome::Landed) => {
                draw_centered_text(&mut canvas, "Safe landing!", center_x, 100, Color::RGB(0, 200, 0), 4)?;
                draw_centered_text(&mut canvas, "Press R to fly again", center_x, 160, Color::RGB(255, 255, 255), 2)?;
            }
            Some(FlightOutcome::Crashed) => {
                draw_centered_text(&mut canvas, "Crashed!", center_x, 100, Color::RGB(220, 0, 0), 4)?;
                draw_centered_text(&mut canvas, "Press R to try again", center_x, 160, Color::RGB(255, 255, 255), 2)?;
            }
            None => {
                draw_centered_text(&mut canvas, "Space to flap", center_x, 20, Color::RGB(255, 255, 255), 2)?;
            }
        }

        canvas.present();

        if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    Ok(())
}
