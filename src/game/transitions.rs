// Scene transition table
//
// Every scene change goes through `next_scene`. Anything not listed here is
// not a valid transition and leaves the current scene unchanged.

use super::types::{Scene, Zone};
use crate::config::RulesConfig;

/// Something that can move the game from one scene to another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    StartAdventure,
    ShowInstructions,
    BackToMenu,
    StoryFinished,
    ZoneChosen(Zone),
    FollowSunbird,
    StayAtHome,
    /// The scene's completion predicate held and its settle delay elapsed
    Completed,
    PlayerDefeated,
    Confirm,
    Escape,
}

/// Looks up the scene that `trigger` leads to from `scene`
pub fn next_scene(scene: Scene, trigger: Trigger) -> Option<Scene> {
    use Scene::*;
    use Trigger::*;

    match (scene, trigger) {
        (Menu, StartAdventure) => Some(Story),
        (Menu, ShowInstructions) => Some(Instructions),
        (Instructions, BackToMenu) => Some(Menu),
        (Story, StoryFinished) => Some(FlyingTutorial),

        (Map, ZoneChosen(Zone::TreeTops)) => Some(FlyingTutorial),
        (Map, ZoneChosen(Zone::HomeForest)) => Some(PeckingGame),
        (Map, ZoneChosen(Zone::FlowerMeadow)) => Some(FlowerChallenge),
        (Map, ZoneChosen(Zone::Lake)) => None,

        (FlyingTutorial, Completed) => Some(PeckingGame),
        (PeckingGame, Completed) => Some(Decision),
        (Decision, FollowSunbird) => Some(FlowerChallenge),
        (Decision, StayAtHome) => Some(SnakeEncounter),
        (FlowerChallenge, Completed) => Some(SnakeEncounter),
        (SnakeEncounter, Completed) => Some(NestBuilding),
        (NestBuilding, Completed) => Some(Win),

        (FlyingTutorial | PeckingGame | FlowerChallenge | SnakeEncounter, PlayerDefeated) => {
            Some(GameOver)
        }

        (GameOver | Win, Confirm) => Some(Menu),

        (
            Map | FlyingTutorial | PeckingGame | Decision | FlowerChallenge | SnakeEncounter
            | NestBuilding,
            Escape,
        ) => Some(Map),

        _ => None,
    }
}

/// Seconds a completed scene waits before its forward transition
pub fn settle_delay(scene: Scene, rules: &RulesConfig) -> f32 {
    match scene {
        Scene::SnakeEncounter => 0.0,
        _ => rules.settle_delay,
    }
}
