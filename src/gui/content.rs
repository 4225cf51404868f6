// Text shown on the story, instructions and gameplay screens

use crate::game::{Scene, Zone};

pub const GAME_TITLE: &str = "William's Wild Adventure";

/// Story pages, shown one at a time and advanced with Enter
pub const STORY_PAGES: [&[&str]; 3] = [
    &[
        "Deep in the forest lives William,",
        "a young woodpecker with a big dream.",
        "He wants to build a nest of his own.",
    ],
    &[
        "But first William must learn to fly,",
        "find food in the old trees,",
        "and stay clear of hungry snakes.",
    ],
    &[
        "Help William grow strong and clever.",
        "Every feather he earns brings him",
        "closer to a home of his own!",
    ],
];

pub const INSTRUCTIONS: &[&str] = &[
    "Left / Right  -  walk",
    "Space  -  jump",
    "Up or W  -  flap while in the air",
    "P  -  peck at trees and flowers",
    "Mouse  -  drag nest pieces into place",
    "Enter  -  continue",
    "Esc  -  back to the world map",
];

/// One-line goal shown in the HUD for each level
pub fn objective(scene: Scene) -> Option<&'static str> {
    match scene {
        Scene::FlyingTutorial => Some("Fly up to the golden branch!"),
        Scene::PeckingGame => Some("Peck the trees to find 2 larvae."),
        Scene::FlowerChallenge => Some("Visit 3 flowers by pecking them."),
        Scene::SnakeEncounter => Some("Dodge the snake for 15 seconds!"),
        Scene::NestBuilding => Some("Drag each piece onto the nest."),
        _ => None,
    }
}

/// Educational tip for the zone the player is in
pub fn zone_tip(zone: Zone) -> Option<&'static str> {
    match zone {
        Zone::TreeTops => Some("Woodpeckers have strong beaks for drilling into trees!"),
        Zone::HomeForest => Some("Woodpeckers create homes by pecking holes in trees."),
        Zone::FlowerMeadow => Some("Some birds like hummingbirds can hover to drink nectar!"),
        Zone::Lake => None,
    }
}

/// Tip for the current scene; the snake has its own regardless of zone
pub fn tip(scene: Scene, zone: Zone) -> Option<&'static str> {
    match scene {
        Scene::SnakeEncounter => Some("Birds need to be alert to avoid predators like snakes."),
        scene if scene.is_level() => zone_tip(zone),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_an_objective() {
        for scene in [
            Scene::FlyingTutorial,
            Scene::PeckingGame,
            Scene::FlowerChallenge,
            Scene::SnakeEncounter,
            Scene::NestBuilding,
        ] {
            assert!(objective(scene).is_some(), "{:?}", scene);
        }
        assert!(objective(Scene::Menu).is_none());
    }

    #[test]
    fn test_snake_tip_overrides_zone() {
        assert_eq!(tip(Scene::SnakeEncounter, Zone::TreeTops), tip(Scene::SnakeEncounter, Zone::HomeForest));
        assert_eq!(tip(Scene::PeckingGame, Zone::HomeForest), zone_tip(Zone::HomeForest));
        assert_eq!(tip(Scene::Map, Zone::TreeTops), None);
    }
}
