// Game module - scene state machine and the controller that drives it
//
// This module contains:
// - types.rs: Scene and Zone enums
// - transitions.rs: the (scene, trigger) -> scene table and settle delays
// - progress.rs: score, completed levels, unlocked zones, rewards
// - world.rs: GameWorld, the entities of the active level
// - events.rs: input actions and held keys
// - update.rs: per-frame simulation, damage and completion checks

pub mod events;
pub mod progress;
pub mod transitions;
pub mod types;
pub mod update;
pub mod world;

pub use progress::{FLOWER_REWARD, LARVA_REWARD, Progress, Reward};
pub use transitions::{Trigger, next_scene, settle_delay};
pub use types::*;
pub use world::GameWorld;

use crate::config::GameConfig;
use crate::gui::{self, Button, WorldMap};
use crate::level;
use crate::player::Player;
use rand::rngs::StdRng;
use tracing::info;

/// Owns every piece of game state
///
/// Exactly one scene is active. Input handlers and the per-frame update
/// mutate the game; rendering only reads it.
pub struct Game {
    pub config: GameConfig,
    pub scene: Scene,
    pub player: Player,
    pub progress: Progress,
    pub world: GameWorld,
    pub buttons: Vec<Button>,
    pub world_map: WorldMap,
    /// Index of the story page on screen
    pub story_phase: usize,
    /// Seconds since the current level was entered
    pub level_timer: f32,
    pub current_zone: Zone,
    pub pointer: (f32, f32),
    /// Seconds since the completion predicate first held, once it has
    settle: Option<f32>,
    running: bool,
    rng: StdRng,
}

impl Game {
    pub fn new(config: GameConfig, rng: StdRng) -> Self {
        let (width, height) = screen_size(&config);
        let buttons = gui::buttons_for(Scene::Menu, width, height);

        Game {
            player: Player::new(100.0, height - 150.0),
            config,
            scene: Scene::Menu,
            progress: Progress::new(),
            world: GameWorld::empty(),
            buttons,
            world_map: WorldMap::new(),
            story_phase: 0,
            level_timer: 0.0,
            current_zone: Zone::TreeTops,
            pointer: (0.0, 0.0),
            settle: None,
            running: true,
            rng,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn quit(&mut self) {
        info!("quit requested");
        self.running = false;
    }

    /// Seconds the current level has been settling after completion
    pub fn settle_elapsed(&self) -> Option<f32> {
        self.settle
    }

    /// Applies `trigger` to the transition table. Returns false if the
    /// current scene ignores it.
    pub fn fire(&mut self, trigger: Trigger) -> bool {
        let Some(next) = next_scene(self.scene, trigger) else {
            return false;
        };

        info!(from = ?self.scene, to = ?next, ?trigger, "scene transition");
        self.enter_scene(next);
        true
    }

    /// Switches to `scene` and builds its world from scratch
    pub fn enter_scene(&mut self, scene: Scene) {
        let (width, height) = screen_size(&self.config);

        self.scene = scene;
        self.world = level::build_world(scene, &self.config, &mut self.rng);
        self.buttons = gui::buttons_for(scene, width, height);
        self.level_timer = 0.0;
        self.settle = None;

        if let Some(zone) = zone_of(scene) {
            self.current_zone = zone;
        }

        if scene.is_platforming() {
            let (x, y) = self.world.spawn;
            self.player.respawn(x, y);
        }
    }

    /// Clears everything earned in the current playthrough
    fn reset_playthrough(&mut self) {
        let (_, height) = screen_size(&self.config);

        info!(score = self.progress.score, "playthrough reset");
        self.player = Player::new(100.0, height - 150.0);
        self.progress = Progress::new();
        self.story_phase = 0;
        self.world_map.clear_selection();
        self.current_zone = Zone::TreeTops;
    }

    fn grant(&mut self, reward: Reward) {
        self.progress.score += reward.score;
        self.player.add_feathers(reward.feathers);
    }
}

fn screen_size(config: &GameConfig) -> (f32, f32) {
    (config.window.width as f32, config.window.height as f32)
}

/// Map zone a level belongs to
fn zone_of(scene: Scene) -> Option<Zone> {
    match scene {
        Scene::FlyingTutorial => Some(Zone::TreeTops),
        Scene::PeckingGame => Some(Zone::HomeForest),
        Scene::FlowerChallenge => Some(Zone::FlowerMeadow),
        _ => None,
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_new_game_starts_on_menu() {
        let game = game();
        assert_eq!(game.scene, Scene::Menu);
        assert_eq!(game.buttons.len(), 3);
        assert!(game.is_running());
        assert_eq!(game.progress.score, 0);
    }

    #[test]
    fn test_fire_ignores_unknown_transitions() {
        let mut game = game();
        assert!(!game.fire(Trigger::Completed));
        assert_eq!(game.scene, Scene::Menu);
    }

    #[test]
    fn test_entering_level_respawns_player_and_sets_zone() {
        let mut game = game();
        game.player.set_position(500.0, 10.0);
        game.player.velocity_y = 7.0;

        game.enter_scene(Scene::FlowerChallenge);

        assert_eq!((game.player.x, game.player.y), (100.0, 400.0));
        assert_eq!(game.player.velocity_y, 0.0);
        assert_eq!(game.current_zone, Zone::FlowerMeadow);
        assert_eq!(game.world.peckables.len(), 4);
        assert_eq!(game.level_timer, 0.0);
    }

    #[test]
    fn test_snake_scene_keeps_previous_zone() {
        let mut game = game_in(Scene::PeckingGame);
        game.enter_scene(Scene::SnakeEncounter);
        assert_eq!(game.current_zone, Zone::HomeForest);
    }
}
