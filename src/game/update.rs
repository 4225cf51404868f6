// Per-frame simulation
//
// Order within a frame: level timer, physics, snake, falls, then the
// completion check and its settle window.

use super::{Game, Reward, Scene, Trigger, settle_delay};
use crate::collision::Collidable;
use tracing::{info, warn};

impl Game {
    /// Advances the current scene by one fixed frame
    pub fn update(&mut self) {
        if !self.scene.is_level() {
            return;
        }

        let dt = self.config.window.frame_seconds();
        self.level_timer += dt;

        if self.scene.is_platforming() {
            self.player.update(&self.world.obstacles, &self.config.physics);
            self.world.update_entities(self.player.x);

            self.check_snake_contact();
            self.check_fall();

            if self.player.is_defeated() {
                warn!(scene = ?self.scene, "William was defeated");
                self.fire(Trigger::PlayerDefeated);
                return;
            }
        }

        if self.settle.is_none() && self.completion_reached() {
            self.complete_scene();
        }

        if let Some(elapsed) = self.settle {
            if elapsed >= settle_delay(self.scene, &self.config.rules) {
                self.fire(Trigger::Completed);
            } else {
                self.settle = Some(elapsed + dt);
            }
        }
    }

    /// Whether the current level's goal has been met this frame
    pub fn completion_reached(&self) -> bool {
        let rules = &self.config.rules;

        match self.scene {
            Scene::FlyingTutorial => self
                .world
                .goal()
                .is_some_and(|goal| {
                    let bounds = self.player.get_bounds();
                    bounds.intersects(&goal.rect) || bounds.rests_on(&goal.rect)
                }),
            Scene::PeckingGame => self.world.larvae_found() >= rules.larvae_needed,
            Scene::FlowerChallenge => self.world.flowers_visited() >= rules.flowers_needed,
            Scene::SnakeEncounter => self.level_timer >= rules.snake_survival_seconds,
            Scene::NestBuilding => self
                .world
                .nest
                .as_ref()
                .is_some_and(|nest| nest.is_complete()),
            _ => false,
        }
    }

    /// Records the level as completed, pays its reward the first time,
    /// and opens the settle window
    fn complete_scene(&mut self) {
        if self.progress.mark_completed(self.scene) {
            let reward = Reward::for_completing(self.scene);
            self.grant(reward);
            info!(
                scene = ?self.scene,
                score = self.progress.score,
                feathers = self.player.feathers(),
                "level completed"
            );
        } else {
            info!(scene = ?self.scene, "level completed again, no reward");
        }

        self.settle = Some(0.0);
    }

    fn check_snake_contact(&mut self) {
        let Some(index) = self.world.snake_hit(&self.player.get_bounds()) else {
            return;
        };

        let rules = &self.config.rules;
        let snake_x = self.world.snakes[index].x;
        let knockback = if self.player.x < snake_x {
            -rules.snake_knockback
        } else {
            rules.snake_knockback
        };

        self.player.take_damage(rules.snake_damage);
        self.player.set_position(self.player.x + knockback, self.player.y);
        info!(health = self.player.health, "snake bite");
    }

    fn check_fall(&mut self) {
        if self.player.y <= self.config.window.height as f32 {
            return;
        }

        let (x, y) = self.world.spawn;
        self.player.take_damage(self.config.rules.fall_damage);
        self.player.respawn(x, y);
        info!(health = self.player.health, "fell out of the level");
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::{Game, Scene, Zone};
    use crate::input_system::GameAction;

    fn run(game: &mut Game, frames: usize) {
        for _ in 0..frames {
            game.update();
        }
    }

    #[test]
    fn test_flying_tutorial_completes_after_settle_delay() {
        let mut game = game_in(Scene::FlyingTutorial);
        let goal = game.world.goal().unwrap().rect;

        // Standing on the goal platform
        game.player.set_position(goal.x + 20.0, goal.top() - 40.0);

        run(&mut game, 60);
        assert_eq!(game.scene, Scene::FlyingTutorial);
        assert!(game.progress.is_completed(Scene::FlyingTutorial));
        assert_eq!(game.progress.score, 50);
        assert_eq!(game.player.feathers(), 3);

        run(&mut game, 140);
        assert_eq!(game.scene, Scene::PeckingGame);
        assert_eq!(game.progress.completed().len(), 1);
        assert_eq!(game.progress.score, 50);
    }

    #[test]
    fn test_snake_survival_completes_immediately() {
        let mut game = game_in(Scene::SnakeEncounter);
        game.level_timer = 15.0;

        game.update();

        assert_eq!(game.scene, Scene::NestBuilding);
        assert_eq!(game.progress.score, 75);
        assert_eq!(game.player.feathers(), 4);

        run(&mut game, 10);
        assert_eq!(game.progress.score, 75);
        assert_eq!(game.player.feathers(), 4);
    }

    #[test]
    fn test_nest_settle_window_starts_once() {
        let mut game = game_in(Scene::NestBuilding);
        let pieces: Vec<_> = game.world.nest.as_ref().unwrap().pieces.iter().map(|p| p.rect).collect();
        let slots = game.world.nest.as_ref().unwrap().slots.clone();

        for (piece, slot) in pieces.iter().zip(slots.iter()) {
            game.handle_action(&GameAction::PointerDown(piece.x as i32 + 1, piece.y as i32 + 1));
            game.handle_action(&GameAction::PointerMove(slot.x as i32 + 1, slot.y as i32 + 1));
            game.handle_action(&GameAction::PointerUp(slot.x as i32 + 1, slot.y as i32 + 1));
        }

        game.update();
        assert!(game.settle_elapsed().is_some());
        assert_eq!(game.progress.score, 50);

        run(&mut game, 30);
        let elapsed = game.settle_elapsed().unwrap();
        assert!((elapsed - 31.0 / 60.0).abs() < 1e-3, "settle restarted: {}", elapsed);
        assert_eq!(game.progress.score, 50);
        assert_eq!(game.player.feathers(), 3);

        run(&mut game, 200);
        assert_eq!(game.scene, Scene::Win);
    }

    #[test]
    fn test_pecking_game_needs_two_larvae() {
        let mut game = game_in(Scene::PeckingGame);
        let larva_trees: Vec<usize> = game
            .world
            .peckables
            .iter()
            .enumerate()
            .filter(|(_, p)| p.has_larva())
            .map(|(i, _)| i)
            .collect();

        for &i in larva_trees.iter().take(2) {
            for _ in 0..3 {
                game.world.peckables[i].peck();
            }
        }

        game.update();
        assert!(game.progress.is_completed(Scene::PeckingGame));
        // Larvae pecked directly, so only the level reward
        assert_eq!(game.progress.score, 50);

        run(&mut game, 200);
        assert_eq!(game.scene, Scene::Decision);
    }

    #[test]
    fn test_fall_costs_health_and_respawns() {
        let mut game = game_in(Scene::FlowerChallenge);
        game.player.set_position(100.0, 700.0);

        game.update();

        assert_eq!(game.player.health, 75);
        assert_eq!((game.player.x, game.player.y), game.world.spawn);
        assert_eq!(game.scene, Scene::FlowerChallenge);
    }

    #[test]
    fn test_fatal_fall_ends_game() {
        let mut game = game_in(Scene::PeckingGame);
        game.player.take_damage(80);
        game.player.set_position(100.0, 700.0);

        game.update();

        assert_eq!(game.scene, Scene::GameOver);
    }

    #[test]
    fn test_snake_bite_damages_and_knocks_back() {
        let mut game = game_in(Scene::SnakeEncounter);
        let snake = game.world.snakes[0].rect;

        // Standing on the ground just left of the snake, overlapping it
        game.player.set_position(snake.x - 30.0, 510.0);
        let before = game.player.x;

        game.update();

        assert_eq!(game.player.health, 90);
        assert!(game.player.x < before - 25.0);
    }

    #[test]
    fn test_head_bump_under_goal_does_not_complete() {
        let mut game = game_in(Scene::FlyingTutorial);
        let goal = game.world.goal().unwrap().rect;

        // Flying up into the underside of the goal platform
        game.player.set_position(goal.x + 20.0, goal.bottom() + 5.0);
        game.player.velocity_y = -12.0;
        game.player.flying = true;

        game.update();
        assert_eq!(game.player.rect.top(), goal.bottom());
        assert!(game.settle_elapsed().is_none());

        run(&mut game, 120);
        assert_eq!(game.scene, Scene::FlyingTutorial);
        assert!(!game.progress.is_completed(Scene::FlyingTutorial));
        assert_eq!(game.progress.score, 0);
    }

    #[test]
    fn test_goal_needs_more_than_a_corner() {
        let mut game = game_in(Scene::FlyingTutorial);
        let goal = game.world.goal().unwrap().rect;

        game.player.set_position(goal.right(), goal.top() - 40.0);
        assert!(!game.completion_reached());

        game.player.set_position(goal.left() - 40.0, goal.top() - 40.0);
        assert!(!game.completion_reached());

        game.player.set_position(goal.left() - 20.0, goal.top() - 40.0);
        assert!(game.completion_reached());
    }

    #[test]
    fn test_repeated_snake_bites_end_game() {
        let mut game = game_in(Scene::SnakeEncounter);

        for bite in 1..=10 {
            let snake = game.world.snakes[0].rect;
            game.player.set_position(snake.x - 30.0, 510.0);

            game.update();

            if bite < 10 {
                assert_eq!(game.player.health, 100 - 10 * bite);
                assert_eq!(game.scene, Scene::SnakeEncounter);
            }
        }

        assert_eq!(game.player.health, 0);
        assert_eq!(game.scene, Scene::GameOver);
        assert!(!game.progress.is_completed(Scene::SnakeEncounter));
    }

    #[test]
    fn test_replayed_level_pays_no_second_reward() {
        let mut game = game_in(Scene::FlyingTutorial);
        game.progress.mark_completed(Scene::FlyingTutorial);
        let goal = game.world.goal().unwrap().rect;
        game.player.set_position(goal.x + 20.0, goal.top() - 40.0);

        run(&mut game, 200);

        assert_eq!(game.scene, Scene::PeckingGame);
        assert_eq!(game.progress.score, 0);
        assert_eq!(game.current_zone, Zone::HomeForest);
    }

    #[test]
    fn test_update_is_noop_outside_levels() {
        let mut game = game_in(Scene::Decision);
        run(&mut game, 10);
        assert_eq!(game.level_timer, 0.0);
        assert_eq!(game.scene, Scene::Decision);
    }
}
