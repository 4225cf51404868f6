// Input handling
//
// Discrete actions arrive once per key press or mouse event; held keys are
// applied every frame before the update.

use super::{FLOWER_REWARD, Game, LARVA_REWARD, Scene, Trigger};
use crate::gui::{self, ButtonAction, content};
use crate::input_system::{GameAction, HeldKeys};
use crate::peckable::PeckableKind;
use tracing::{debug, info};

impl Game {
    /// Applies one discrete input action to the current scene
    pub fn handle_action(&mut self, action: &GameAction) {
        match action {
            GameAction::Quit => self.quit(),
            GameAction::Escape => self.handle_escape(),
            GameAction::Confirm => self.handle_confirm(),
            GameAction::Jump => {
                if self.scene.is_platforming() {
                    self.player.jump(&self.config.physics);
                }
            }
            GameAction::Peck => self.handle_peck(),
            GameAction::PointerDown(x, y) => self.handle_pointer_down(*x as f32, *y as f32),
            GameAction::PointerMove(x, y) => self.handle_pointer_move(*x as f32, *y as f32),
            GameAction::PointerUp(x, y) => {
                self.pointer = (*x as f32, *y as f32);
                self.handle_pointer_up();
            }
            // Flight practice only
            GameAction::Flap | GameAction::Retry => {}
        }
    }

    /// Movement from keys held this frame. Ignored outside platforming scenes.
    pub fn apply_held_keys(&mut self, held: HeldKeys) {
        if !self.scene.is_platforming() {
            return;
        }

        let physics = &self.config.physics;
        if held.left {
            self.player.move_left(physics);
        }
        if held.right {
            self.player.move_right(physics);
        }
        if held.fly {
            self.player.fly(physics);
        }
    }

    fn handle_escape(&mut self) {
        if self.scene == Scene::Menu {
            self.quit();
        } else {
            self.fire(Trigger::Escape);
        }
    }

    fn handle_confirm(&mut self) {
        match self.scene {
            Scene::Story => {
                self.story_phase += 1;
                if self.story_phase >= content::STORY_PAGES.len() {
                    self.fire(Trigger::StoryFinished);
                }
            }
            Scene::Map => {
                if let Some(zone) = self.world_map.selected() {
                    self.fire(Trigger::ZoneChosen(zone));
                }
            }
            Scene::GameOver | Scene::Win => {
                self.reset_playthrough();
                self.fire(Trigger::Confirm);
            }
            _ => {}
        }
    }

    fn handle_peck(&mut self) {
        let Some(index) = self.player.peck_target(&self.world.peckables) else {
            return;
        };

        let target = &mut self.world.peckables[index];
        match (self.scene, target.kind) {
            (Scene::PeckingGame, PeckableKind::Tree) => {
                let found_larva = target.peck();
                debug!(tree = index, health = target.health, "peck");
                if found_larva {
                    self.grant(LARVA_REWARD);
                    info!(
                        tree = index,
                        found = self.world.larvae_found(),
                        score = self.progress.score,
                        "larva found"
                    );
                }
            }
            (Scene::FlowerChallenge, PeckableKind::Flower) => {
                if target.visit() {
                    self.grant(FLOWER_REWARD);
                    info!(
                        flower = index,
                        visited = self.world.flowers_visited(),
                        score = self.progress.score,
                        "flower visited"
                    );
                }
            }
            _ => {}
        }
    }

    fn handle_pointer_down(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);

        if let Some(action) = gui::clicked(&self.buttons, x, y) {
            self.handle_button(action);
            return;
        }

        match self.scene {
            Scene::Map => {
                if let Some(zone) = self.world_map.handle_click(x, y, &self.progress) {
                    self.fire(Trigger::ZoneChosen(zone));
                }
            }
            Scene::NestBuilding => {
                if let Some(nest) = self.world.nest.as_mut() {
                    if let Some(piece) = nest.pointer_down(x, y) {
                        debug!(piece, "drag started");
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);

        for button in self.buttons.iter_mut() {
            button.update_hover(x, y);
        }

        if let Some(nest) = self.world.nest.as_mut() {
            nest.pointer_move(x, y);
        }
    }

    fn handle_pointer_up(&mut self) {
        let Some(nest) = self.world.nest.as_mut() else {
            return;
        };

        if let Some(piece) = nest.pointer_up() {
            info!(
                piece,
                placed = nest.placed_count(),
                total = nest.pieces.len(),
                "nest piece placed"
            );
        }
    }

    fn handle_button(&mut self, action: ButtonAction) {
        debug!(?action, "button clicked");

        match action {
            ButtonAction::StartAdventure => {
                self.story_phase = 0;
                self.fire(Trigger::StartAdventure);
            }
            ButtonAction::Instructions => {
                self.fire(Trigger::ShowInstructions);
            }
            ButtonAction::Quit => self.quit(),
            ButtonAction::BackToMenu => {
                self.fire(Trigger::BackToMenu);
            }
            ButtonAction::FollowSunbird => {
                self.progress.unlock_zone(super::Zone::FlowerMeadow);
                self.fire(Trigger::FollowSunbird);
            }
            ButtonAction::StayAtHome => {
                self.fire(Trigger::StayAtHome);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Zone;
    use super::super::test_support::*;
    use super::*;

    fn click(game: &mut Game, x: i32, y: i32) {
        game.handle_action(&GameAction::PointerDown(x, y));
        game.handle_action(&GameAction::PointerUp(x, y));
    }

    #[test]
    fn test_menu_to_story_to_tutorial() {
        let mut game = game();

        click(&mut game, 400, 275);
        assert_eq!(game.scene, Scene::Story);
        assert_eq!(game.story_phase, 0);

        game.handle_action(&GameAction::Confirm);
        game.handle_action(&GameAction::Confirm);
        assert_eq!(game.scene, Scene::Story);
        assert_eq!(game.story_phase, 2);

        game.handle_action(&GameAction::Confirm);
        assert_eq!(game.scene, Scene::FlyingTutorial);
        assert_eq!(game.world.obstacles.len(), 4);
    }

    #[test]
    fn test_instructions_round_trip() {
        let mut game = game();

        click(&mut game, 400, 345);
        assert_eq!(game.scene, Scene::Instructions);
        assert_eq!(game.buttons.len(), 1);

        click(&mut game, 400, 540);
        assert_eq!(game.scene, Scene::Menu);
        assert_eq!(game.buttons.len(), 3);
    }

    #[test]
    fn test_quit_button_and_escape_on_menu() {
        let mut game = game();
        click(&mut game, 400, 415);
        assert!(!game.is_running());

        let mut game = super::super::test_support::game();
        game.handle_action(&GameAction::Escape);
        assert!(!game.is_running());
    }

    #[test]
    fn test_escape_from_level_goes_to_map() {
        let mut game = game_in(Scene::PeckingGame);
        game.handle_action(&GameAction::Escape);
        assert_eq!(game.scene, Scene::Map);
        assert!(game.world.peckables.is_empty());
        assert!(game.is_running());
    }

    #[test]
    fn test_follow_sunbird_unlocks_meadow() {
        let mut game = game_in(Scene::Decision);
        assert!(!game.progress.is_unlocked(Zone::FlowerMeadow));

        click(&mut game, 250, 320);

        assert_eq!(game.scene, Scene::FlowerChallenge);
        assert!(game.progress.is_unlocked(Zone::FlowerMeadow));
        assert_eq!(game.current_zone, Zone::FlowerMeadow);
    }

    #[test]
    fn test_stay_at_home_leads_to_snake() {
        let mut game = game_in(Scene::Decision);
        click(&mut game, 500, 320);
        assert_eq!(game.scene, Scene::SnakeEncounter);
        assert!(!game.progress.is_unlocked(Zone::FlowerMeadow));
        assert_eq!(game.world.snakes.len(), 1);
    }

    #[test]
    fn test_map_click_enters_zone() {
        let mut game = game_in(Scene::Map);

        // Locked zone does nothing
        click(&mut game, 500, 200);
        assert_eq!(game.scene, Scene::Map);

        click(&mut game, 300, 250);
        assert_eq!(game.scene, Scene::PeckingGame);
        assert_eq!(game.current_zone, Zone::HomeForest);
    }

    #[test]
    fn test_map_confirm_enters_selected_zone() {
        let mut game = game_in(Scene::Map);
        game.handle_action(&GameAction::Confirm);
        assert_eq!(game.scene, Scene::Map);

        game.progress.unlock_zone(Zone::Lake);
        game.world_map.handle_click(400.0, 350.0, &game.progress);
        game.handle_action(&GameAction::Confirm);
        // The lake has no level yet
        assert_eq!(game.scene, Scene::Map);

        game.world_map.handle_click(200.0, 150.0, &game.progress);
        game.handle_action(&GameAction::Confirm);
        assert_eq!(game.scene, Scene::FlyingTutorial);
    }

    #[test]
    fn test_peck_finds_larva_and_rewards_once() {
        let mut game = game_in(Scene::PeckingGame);
        let index = game
            .world
            .peckables
            .iter()
            .position(|p| p.has_larva())
            .unwrap();
        let tree = game.world.peckables[index].rect;

        // Stand just left of the tree, facing it
        game.player.facing_right = true;
        game.player.set_position(tree.left() - 40.0, tree.top() + 100.0);

        for _ in 0..5 {
            game.handle_action(&GameAction::Peck);
        }

        assert!(game.world.peckables[index].larva_found());
        assert_eq!(game.progress.score, LARVA_REWARD.score);
        assert_eq!(game.player.feathers(), LARVA_REWARD.feathers);
    }

    #[test]
    fn test_peck_visits_flower_once() {
        let mut game = game_in(Scene::FlowerChallenge);
        let flower = game.world.peckables[0].rect;
        game.player.facing_right = true;
        game.player.set_position(flower.left() - 40.0, flower.top() + 20.0);

        game.handle_action(&GameAction::Peck);
        game.handle_action(&GameAction::Peck);

        assert_eq!(game.world.flowers_visited(), 1);
        assert_eq!(game.progress.score, FLOWER_REWARD.score);
        assert_eq!(game.player.feathers(), 0);
    }

    #[test]
    fn test_peck_with_nothing_in_reach() {
        let mut game = game_in(Scene::FlowerChallenge);
        game.player.set_position(10.0, 10.0);
        game.handle_action(&GameAction::Peck);
        assert_eq!(game.progress.score, 0);
    }

    #[test]
    fn test_held_keys_only_move_in_platforming_scenes() {
        let held = HeldKeys {
            left: false,
            right: true,
            fly: false,
        };

        let mut game = game_in(Scene::NestBuilding);
        game.apply_held_keys(held);
        assert_eq!(game.player.velocity_x, 0.0);

        let mut game = game_in(Scene::FlyingTutorial);
        game.apply_held_keys(held);
        assert_eq!(game.player.velocity_x, game.config.physics.move_speed);
        assert!(game.player.facing_right);
    }

    #[test]
    fn test_nest_drag_through_actions() {
        let mut game = game_in(Scene::NestBuilding);
        let piece = game.world.nest.as_ref().unwrap().pieces[0].rect;
        let slot = game.world.nest.as_ref().unwrap().slots[0];

        game.handle_action(&GameAction::PointerDown(piece.x as i32 + 1, piece.y as i32 + 1));
        game.handle_action(&GameAction::PointerMove(slot.x as i32 + 1, slot.y as i32 + 1));
        game.handle_action(&GameAction::PointerUp(slot.x as i32 + 1, slot.y as i32 + 1));

        let nest = game.world.nest.as_ref().unwrap();
        assert!(nest.pieces[0].is_placed());
        assert_eq!(nest.placed_count(), 1);
    }

    #[test]
    fn test_game_over_confirm_resets_playthrough() {
        let mut game = game_in(Scene::GameOver);
        game.progress.score = 120;
        game.progress.mark_completed(Scene::FlyingTutorial);
        game.progress.unlock_zone(Zone::FlowerMeadow);
        game.player.add_feathers(5);
        game.player.take_damage(100);
        game.story_phase = 3;

        game.handle_action(&GameAction::Confirm);

        assert_eq!(game.scene, Scene::Menu);
        assert_eq!(game.progress.score, 0);
        assert!(game.progress.completed().is_empty());
        assert!(!game.progress.is_unlocked(Zone::FlowerMeadow));
        assert_eq!(game.player.feathers(), 0);
        assert_eq!(game.player.health, 100);
        assert_eq!(game.story_phase, 0);
        assert!(game.world_map.selected().is_none());
    }
}
