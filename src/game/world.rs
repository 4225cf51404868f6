// GameWorld struct and level entity management
//
// This module contains the GameWorld struct which owns everything that lives
// inside the current level: obstacles, peckable trees and flowers, snakes and
// the nest puzzle. It is rebuilt from scratch every time a level is entered.

use crate::collision::{self, Collidable};
use crate::level::{Obstacle, ObstacleRole};
use crate::nest::NestPuzzle;
use crate::peckable::PeckableObject;
use crate::snake::Snake;

/// GameWorld encapsulates the entities of the active level
pub struct GameWorld {
    pub obstacles: Vec<Obstacle>,
    pub peckables: Vec<PeckableObject>,
    pub snakes: Vec<Snake>,
    pub nest: Option<NestPuzzle>,
    /// Where William appears when the level starts or after a fall
    pub spawn: (f32, f32),
}

impl GameWorld {
    /// A world with nothing in it, used by non-level scenes
    pub fn empty() -> Self {
        GameWorld {
            obstacles: Vec::new(),
            peckables: Vec::new(),
            snakes: Vec::new(),
            nest: None,
            spawn: (0.0, 0.0),
        }
    }

    /// The platform that completes the flying tutorial, if this level has one
    pub fn goal(&self) -> Option<&Obstacle> {
        self.obstacles
            .iter()
            .find(|obstacle| obstacle.role == ObstacleRole::Goal)
    }

    /// Move every snake toward the player
    ///
    /// # Arguments
    /// * `player_x` - Player's current X coordinate
    pub fn update_entities(&mut self, player_x: f32) {
        for snake in self.snakes.iter_mut() {
            snake.update(player_x);
        }
    }

    /// Index of the first active snake touching `bounds`
    pub fn snake_hit(&self, bounds: &collision::Rect) -> Option<usize> {
        self.snakes
            .iter()
            .enumerate()
            .find(|(_, snake)| snake.active && bounds.intersects(&snake.get_bounds()))
            .map(|(index, _)| index)
    }

    /// Count of peckables whose larva has been found
    pub fn larvae_found(&self) -> usize {
        self.peckables.iter().filter(|p| p.larva_found()).count()
    }

    /// Count of peckables that have been visited or pecked at least once
    pub fn flowers_visited(&self) -> usize {
        self.peckables.iter().filter(|p| p.pecked).count()
    }
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::empty()
    }
}
