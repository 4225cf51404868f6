use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};
use tracing::{error, info};
use wild_adventure::input_system::{InputContext, InputSystem};
use wild_adventure::logging::init_tracing;
use wild_adventure::render::render_game;
use wild_adventure::ui::Hud;
use wild_adventure::{Game, GameConfig, GameError};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError> {
    let config = GameConfig::load_or_default()?;
    let (width, height) = (config.window.width, config.window.height);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(&config.window.title, width, height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas.set_logical_size(width, height).map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;
    let input = InputSystem::new(InputContext::Adventure);
    let hud = Hud::new();

    let frame_budget = Duration::from_secs_f32(config.window.frame_seconds());
    let mut game = Game::new(config, StdRng::from_entropy());

    info!(width, height, "William's Wild Adventure started");

    while game.is_running() {
        let frame_start = Instant::now();

        for action in input.poll_events(&mut event_pump) {
            game.handle_action(&action);
        }
        game.apply_held_keys(input.held_keys(&event_pump.keyboard_state()));

        game.update();

        render_game(&mut canvas, &game, &hud)?;
        canvas.present();

        if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    info!(score = game.progress.score, "goodbye");
    Ok(())
}
