// Per-playthrough progress: score, completed levels, unlocked zones

use super::types::{Scene, Zone};
use std::collections::HashSet;

/// Score and feathers granted once for completing a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub score: u32,
    pub feathers: u32,
}

impl Reward {
    pub const NONE: Reward = Reward { score: 0, feathers: 0 };

    /// Completion reward for each level
    pub fn for_completing(scene: Scene) -> Reward {
        match scene {
            Scene::FlyingTutorial => Reward { score: 50, feathers: 3 },
            Scene::PeckingGame => Reward { score: 50, feathers: 0 },
            Scene::FlowerChallenge => Reward { score: 50, feathers: 2 },
            Scene::SnakeEncounter => Reward { score: 75, feathers: 4 },
            Scene::NestBuilding => Reward { score: 50, feathers: 3 },
            _ => Reward::NONE,
        }
    }
}

/// Reward for digging out one larva
pub const LARVA_REWARD: Reward = Reward { score: 10, feathers: 1 };
/// Reward for hovering at a new flower
pub const FLOWER_REWARD: Reward = Reward { score: 5, feathers: 0 };

pub struct Progress {
    pub score: u32,
    completed: HashSet<Scene>,
    unlocked_zones: Vec<Zone>,
}

impl Progress {
    pub fn new() -> Self {
        Progress {
            score: 0,
            completed: HashSet::new(),
            unlocked_zones: Zone::ALL.into_iter().filter(Zone::starts_unlocked).collect(),
        }
    }

    /// Records `scene` as completed. Returns false if it already was.
    pub fn mark_completed(&mut self, scene: Scene) -> bool {
        self.completed.insert(scene)
    }

    pub fn is_completed(&self, scene: Scene) -> bool {
        self.completed.contains(&scene)
    }

    pub fn completed(&self) -> &HashSet<Scene> {
        &self.completed
    }

    pub fn unlock_zone(&mut self, zone: Zone) {
        if !self.unlocked_zones.contains(&zone) {
            self.unlocked_zones.push(zone);
        }
    }

    pub fn is_unlocked(&self, zone: Zone) -> bool {
        self.unlocked_zones.contains(&zone)
    }

    pub fn unlocked_zones(&self) -> &[Zone] {
        &self.unlocked_zones
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}
