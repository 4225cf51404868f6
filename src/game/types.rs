// Shared enums used throughout the game

/// Every stage of the game. Exactly one is active at a time.
///
/// The declaration order is the story order; `Instructions` is a side screen
/// reachable only from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scene {
    Menu,
    Story,
    Map,
    FlyingTutorial,
    PeckingGame,
    Decision,
    FlowerChallenge,
    SnakeEncounter,
    NestBuilding,
    GameOver,
    Win,
    Instructions,
}

impl Scene {
    /// Scenes where William is on screen and physics runs
    pub fn is_platforming(&self) -> bool {
        matches!(
            self,
            Scene::FlyingTutorial | Scene::PeckingGame | Scene::FlowerChallenge | Scene::SnakeEncounter
        )
    }

    /// Scenes with a completion predicate and a per-frame level timer
    pub fn is_level(&self) -> bool {
        self.is_platforming() || *self == Scene::NestBuilding
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Scene::GameOver | Scene::Win)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Scene::Menu => "Menu",
            Scene::Story => "Story",
            Scene::Map => "World Map",
            Scene::FlyingTutorial => "Flying Tutorial",
            Scene::PeckingGame => "Pecking Game",
            Scene::Decision => "Decision",
            Scene::FlowerChallenge => "Flower Challenge",
            Scene::SnakeEncounter => "Snake Encounter",
            Scene::NestBuilding => "Nest Building",
            Scene::GameOver => "Game Over",
            Scene::Win => "You Win",
            Scene::Instructions => "Instructions",
        }
    }
}

/// Places on the world map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    TreeTops,
    HomeForest,
    FlowerMeadow,
    Lake,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::TreeTops, Zone::HomeForest, Zone::FlowerMeadow, Zone::Lake];

    pub fn name(&self) -> &'static str {
        match self {
            Zone::TreeTops => "Tree Tops",
            Zone::HomeForest => "Home Forest",
            Zone::FlowerMeadow => "Flower Meadow",
            Zone::Lake => "Lake",
        }
    }

    /// Zones the player can visit at the start of a playthrough
    pub fn starts_unlocked(&self) -> bool {
        matches!(self, Zone::TreeTops | Zone::HomeForest)
    }
}
