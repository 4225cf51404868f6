//! Scene layouts
//!
//! Builds the obstacles, entities and spawn point for each level scene.
//! Obstacles carry a role so scene logic can find "the goal platform" by
//! asking for it, not by remembering where it sits in the list.

use crate::collision::{Collidable, Rect};
use crate::config::GameConfig;
use crate::game::{GameWorld, Scene};
use crate::nest::{NestPiece, NestPuzzle, PieceType};
use crate::peckable::{PeckableKind, PeckableObject};
use crate::snake::Snake;
use rand::Rng;
use rand::seq::index;

const GROUND_HEIGHT: f32 = 50.0;
const TREE_COUNT: usize = 5;
const FLOWER_COUNT: usize = 4;
const NEST_PIECES: [PieceType; 5] = [
    PieceType::Twig,
    PieceType::Leaf,
    PieceType::Moss,
    PieceType::Twig,
    PieceType::Leaf,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleRole {
    Ground,
    Platform,
    /// Reaching this platform completes the flying tutorial
    Goal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub rect: Rect,
    pub role: ObstacleRole,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, role: ObstacleRole) -> Self {
        Obstacle {
            rect: Rect::new(x, y, width, height),
            role,
        }
    }
}

impl Collidable for Obstacle {
    fn get_bounds(&self) -> Rect {
        self.rect
    }
}

/// Builds the world for `scene`. Non-level scenes get an empty world.
pub fn build_world(scene: Scene, config: &GameConfig, rng: &mut impl Rng) -> GameWorld {
    let width = config.window.width as f32;
    let height = config.window.height as f32;
    let mut world = GameWorld::empty();

    if !scene.is_level() {
        return world;
    }

    world.obstacles.push(Obstacle::new(
        0.0,
        height - GROUND_HEIGHT,
        width,
        GROUND_HEIGHT,
        ObstacleRole::Ground,
    ));
    world.spawn = (100.0, height - 150.0);

    match scene {
        Scene::FlyingTutorial => {
            world.obstacles.extend([
                Obstacle::new(200.0, 450.0, 100.0, 20.0, ObstacleRole::Platform),
                Obstacle::new(400.0, 350.0, 100.0, 20.0, ObstacleRole::Platform),
                Obstacle::new(600.0, 250.0, 100.0, 20.0, ObstacleRole::Goal),
            ]);
        }
        Scene::PeckingGame => {
            let larva_trees = choose_larva_trees(TREE_COUNT, config.rules.larvae_needed, rng);
            world.peckables = (0..TREE_COUNT)
                .map(|i| {
                    PeckableObject::new(
                        Rect::new(100.0 + i as f32 * 150.0, height - 300.0, 40.0, 250.0),
                        PeckableKind::Tree,
                        larva_trees[i],
                    )
                })
                .collect();
        }
        Scene::FlowerChallenge => {
            world.peckables = (0..FLOWER_COUNT)
                .map(|i| {
                    PeckableObject::new(
                        Rect::new(150.0 + i as f32 * 180.0, height - 130.0, 50.0, 80.0),
                        PeckableKind::Flower,
                        false,
                    )
                })
                .collect();
            world.spawn = (100.0, height - 200.0);
        }
        Scene::SnakeEncounter => {
            world.snakes.push(Snake::new(width - 100.0, height - 80.0));
        }
        Scene::NestBuilding => {
            let pieces = NEST_PIECES
                .iter()
                .enumerate()
                .map(|(i, piece_type)| NestPiece::new(50.0 + i as f32 * 60.0, height - 100.0, *piece_type))
                .collect();
            let slots = (0..NEST_PIECES.len())
                .map(|i| Rect::new(300.0 + i as f32 * 50.0, 300.0, 40.0, 20.0))
                .collect();
            world.nest = Some(NestPuzzle::new(pieces, slots));
        }
        _ => {}
    }

    world
}

/// Decides which trees hide a larva.
///
/// Each tree gets a coin flip, then extra larvae are hidden until at least
/// `minimum` trees have one, so the pecking game can always be won.
fn choose_larva_trees(count: usize, minimum: usize, rng: &mut impl Rng) -> Vec<bool> {
    let mut has_larva: Vec<bool> = (0..count).map(|_| rng.gen_bool(0.5)).collect();
    let missing = minimum
        .min(count)
        .saturating_sub(has_larva.iter().filter(|l| **l).count());

    if missing > 0 {
        let empty: Vec<usize> = (0..count).filter(|i| !has_larva[*i]).collect();
        for pick in index::sample(rng, empty.len(), missing) {
            has_larva[empty[pick]] = true;
        }
    }

    has_larva
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn build(scene: Scene) -> GameWorld {
        let mut rng = StdRng::seed_from_u64(7);
        build_world(scene, &GameConfig::default(), &mut rng)
    }

    #[test]
    fn test_flying_tutorial_layout() {
        let world = build(Scene::FlyingTutorial);

        assert_eq!(world.obstacles.len(), 4);
        assert_eq!(world.obstacles[0].role, ObstacleRole::Ground);
        assert_eq!(world.obstacles[0].rect, Rect::new(0.0, 550.0, 800.0, 50.0));

        let goal = world.goal().unwrap();
        assert_eq!(goal.rect, Rect::new(600.0, 250.0, 100.0, 20.0));
        assert_eq!(world.spawn, (100.0, 450.0));
    }

    #[test]
    fn test_pecking_game_always_has_enough_larvae() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let world = build_world(Scene::PeckingGame, &GameConfig::default(), &mut rng);

            assert_eq!(world.peckables.len(), 5);
            let larvae = world.peckables.iter().filter(|p| p.has_larva()).count();
            assert!(larvae >= 2, "seed {} produced {} larvae", seed, larvae);
        }
    }

    #[test]
    fn test_larva_minimum_capped_by_tree_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let trees = choose_larva_trees(3, 10, &mut rng);
        assert_eq!(trees, vec![true, true, true]);
    }

    #[test]
    fn test_flower_layout_and_spawn() {
        let world = build(Scene::FlowerChallenge);

        assert_eq!(world.peckables.len(), 4);
        assert!(world.peckables.iter().all(|p| p.kind == PeckableKind::Flower && !p.has_larva()));
        assert_eq!(world.peckables[3].rect, Rect::new(690.0, 470.0, 50.0, 80.0));
        assert_eq!(world.spawn, (100.0, 400.0));
    }

    #[test]
    fn test_snake_layout() {
        let world = build(Scene::SnakeEncounter);
        assert_eq!(world.snakes.len(), 1);
        assert_eq!(world.snakes[0].rect, Rect::new(700.0, 520.0, 80.0, 30.0));
    }

    #[test]
    fn test_nest_layout() {
        let world = build(Scene::NestBuilding);
        let nest = world.nest.as_ref().unwrap();

        assert_eq!(nest.pieces.len(), 5);
        assert_eq!(nest.slots.len(), 5);
        assert_eq!(nest.pieces[2].piece_type, PieceType::Moss);
        assert_eq!(nest.pieces[4].rect, Rect::new(290.0, 500.0, 40.0, 20.0));
        assert_eq!(nest.slots[4], Rect::new(500.0, 300.0, 40.0, 20.0));
    }

    #[test]
    fn test_non_level_scene_is_empty() {
        let world = build(Scene::Decision);
        assert!(world.obstacles.is_empty());
        assert!(world.goal().is_none());
        assert!(world.nest.is_none());
    }
}
