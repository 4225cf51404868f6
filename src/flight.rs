//! Flight practice mini-game
//!
//! One bird, one branch. Space flaps; the round ends on the first touch of
//! the branch (a landing if slow enough, a crash otherwise) or when the bird
//! leaves the screen.

use crate::collision::Rect;
use crate::config::FlightConfig;
use rand::Rng;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightOutcome {
    Landed,
    Crashed,
}

pub struct FlightPractice {
    pub bird: Rect,
    pub velocity: f32,
    pub branch: Rect,
    outcome: Option<FlightOutcome>,
    width: f32,
    height: f32,
    config: FlightConfig,
}

impl FlightPractice {
    pub fn new(width: f32, height: f32, config: &FlightConfig, rng: &mut impl Rng) -> Self {
        FlightPractice {
            bird: start_position(height, config),
            velocity: 0.0,
            branch: random_branch(width, config, rng),
            outcome: None,
            width,
            height,
            config: config.clone(),
        }
    }

    pub fn outcome(&self) -> Option<FlightOutcome> {
        self.outcome
    }

    pub fn flap(&mut self) {
        if self.outcome.is_none() {
            self.velocity = self.config.flap_strength;
        }
    }

    /// Advances one frame. Does nothing once the round is over.
    pub fn update(&mut self) {
        if self.outcome.is_some() {
            return;
        }

        self.velocity += self.config.gravity;
        self.bird.y += self.velocity.trunc();

        if self.bird.intersects(&self.branch) {
            let outcome = if self.velocity.abs() < self.config.safe_landing_speed {
                FlightOutcome::Landed
            } else {
                FlightOutcome::Crashed
            };
            self.finish(outcome);
        } else if self.bird.top() <= 0.0 || self.bird.bottom() >= self.height {
            self.finish(FlightOutcome::Crashed);
        }
    }

    /// Starts a new round with a fresh branch height
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.bird = start_position(self.height, &self.config);
        self.velocity = 0.0;
        self.branch = random_branch(self.width, &self.config, rng);
        self.outcome = None;
    }

    fn finish(&mut self, outcome: FlightOutcome) {
        info!(?outcome, velocity = self.velocity, "flight over");
        self.outcome = Some(outcome);
    }
}

fn start_position(height: f32, config: &FlightConfig) -> Rect {
    Rect::new(
        100.0 - config.bird_width / 2.0,
        height / 2.0 - config.bird_height / 2.0,
        config.bird_width,
        config.bird_height,
    )
}

fn random_branch(width: f32, config: &FlightConfig, rng: &mut impl Rng) -> Rect {
    let y = rng.gen_range(config.branch_min_y..=config.branch_max_y).trunc();
    Rect::new(
        width - config.branch_width - config.branch_margin,
        y,
        config.branch_width,
        config.branch_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn practice() -> FlightPractice {
        let mut rng = StdRng::seed_from_u64(3);
        FlightPractice::new(800.0, 600.0, &FlightConfig::default(), &mut rng)
    }

    #[test]
    fn test_initial_layout() {
        let game = practice();

        assert_eq!(game.bird, Rect::new(70.0, 277.5, 60.0, 45.0));
        assert_eq!(game.branch.x, 550.0);
        assert!(game.branch.y >= 200.0 && game.branch.y <= 400.0);
        assert_eq!((game.branch.width, game.branch.height), (200.0, 40.0));
        assert!(game.outcome().is_none());
    }

    #[test]
    fn test_bird_moves_by_truncated_velocity() {
        let mut game = practice();
        let start = game.bird.y;

        game.update();
        assert_eq!(game.velocity, 0.5);
        assert_eq!(game.bird.y, start);

        game.update();
        game.update();
        assert_eq!(game.velocity, 1.5);
        assert_eq!(game.bird.y, start + 1.0 + 1.0);
    }

    #[test]
    fn test_flap_sets_velocity() {
        let mut game = practice();
        game.update();
        game.flap();
        assert_eq!(game.velocity, -10.0);
    }

    #[test]
    fn test_falling_off_screen_crashes() {
        let mut game = practice();
        for _ in 0..200 {
            game.update();
        }
        assert_eq!(game.outcome(), Some(FlightOutcome::Crashed));
    }

    #[test]
    fn test_slow_touch_lands() {
        let mut game = practice();
        game.bird = Rect::new(600.0, game.branch.y - 45.0, 60.0, 45.0);
        game.velocity = 1.0;

        game.update();

        assert_eq!(game.outcome(), Some(FlightOutcome::Landed));
    }

    #[test]
    fn test_fast_touch_crashes() {
        let mut game = practice();
        game.bird = Rect::new(600.0, game.branch.y - 50.0, 60.0, 45.0);
        game.velocity = 9.0;

        game.update();

        assert_eq!(game.outcome(), Some(FlightOutcome::Crashed));
    }

    #[test]
    fn test_round_freezes_until_reset() {
        let mut game = practice();
        game.bird.y = 0.0;
        game.update();
        assert_eq!(game.outcome(), Some(FlightOutcome::Crashed));

        let frozen = game.bird;
        game.flap();
        game.update();
        assert_eq!(game.bird, frozen);

        let mut rng = StdRng::seed_from_u64(9);
        game.reset(&mut rng);
        assert!(game.outcome().is_none());
        assert_eq!(game.velocity, 0.0);
        assert_eq!(game.bird.x, 70.0);
    }
}
