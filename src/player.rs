use crate::collision::{self, Collidable, Rect};
use crate::config::PhysicsConfig;

pub const PLAYER_SIZE: f32 = 40.0;
pub const MAX_HEALTH: i32 = 100;
/// Side length of the square peck probe
pub const PECK_REACH: f32 = 20.0;

const WING_FRAMES: f32 = 2.0;
const WING_SPEED: f32 = 0.2;

/// William, the player-controlled woodpecker
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub jumping: bool,
    pub flying: bool,
    pub facing_right: bool,
    pub health: i32,
    feathers: u32,
    pub rect: Rect,
    wing_phase: f32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Player {
            x,
            y,
            velocity_x: 0.0,
            velocity_y: 0.0,
            jumping: false,
            flying: false,
            facing_right: true,
            health: MAX_HEALTH,
            feathers: 0,
            rect: Rect::new(x, y, PLAYER_SIZE, PLAYER_SIZE),
            wing_phase: 0.0,
        }
    }

    /// Advances one frame: gravity, movement against `obstacles`, friction.
    pub fn update<T: Collidable>(&mut self, obstacles: &[T], physics: &PhysicsConfig) {
        self.velocity_y = (self.velocity_y + physics.gravity).min(physics.max_fall_speed);

        let result =
            collision::move_and_collide(self.rect, self.velocity_x, self.velocity_y, obstacles);

        self.rect = result.rect;
        self.velocity_x = result.velocity_x;
        self.velocity_y = result.velocity_y;
        if result.landed {
            self.jumping = false;
            self.flying = false;
        }
        self.x = self.rect.x;
        self.y = self.rect.y;

        self.wing_phase += WING_SPEED;
        if self.wing_phase >= WING_FRAMES {
            self.wing_phase = 0.0;
        }

        self.velocity_x *= physics.friction;
        if self.velocity_x.abs() < physics.velocity_epsilon {
            self.velocity_x = 0.0;
        }
    }

    pub fn jump(&mut self, physics: &PhysicsConfig) {
        if !self.jumping {
            self.velocity_y = physics.jump_velocity;
            self.jumping = true;
        }
    }

    /// Flapping only works once airborne from a jump
    pub fn fly(&mut self, physics: &PhysicsConfig) {
        if self.flying || self.jumping {
            self.velocity_y = physics.fly_velocity;
            self.flying = true;
        }
    }

    pub fn move_left(&mut self, physics: &PhysicsConfig) {
        self.velocity_x = -physics.move_speed;
        self.facing_right = false;
    }

    pub fn move_right(&mut self, physics: &PhysicsConfig) {
        self.velocity_x = physics.move_speed;
        self.facing_right = true;
    }

    /// The 20x20 hit-test region in front of William's beak
    pub fn peck_probe(&self) -> Rect {
        let x = if self.facing_right {
            self.rect.right()
        } else {
            self.rect.left() - PECK_REACH
        };
        Rect::new(x, self.rect.center_y() - PECK_REACH / 2.0, PECK_REACH, PECK_REACH)
    }

    /// Index of the first candidate inside the peck probe, if any
    pub fn peck_target<T: Collidable>(&self, candidates: &[T]) -> Option<usize> {
        collision::first_collision(&self.peck_probe(), candidates)
    }

    /// Moves to `(x, y)` and stops all motion
    pub fn respawn(&mut self, x: f32, y: f32) {
        self.set_position(x, y);
        self.velocity_x = 0.0;
        self.velocity_y = 0.0;
        self.jumping = false;
        self.flying = false;
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.rect.x = x;
        self.rect.y = y;
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).clamp(0, MAX_HEALTH);
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    pub fn feathers(&self) -> u32 {
        self.feathers
    }

    pub fn add_feathers(&mut self, amount: u32) {
        self.feathers += amount;
    }

    /// Current wing frame (0 or 1)
    pub fn wing_frame(&self) -> usize {
        self.wing_phase as usize
    }
}

impl Collidable for Player {
    fn get_bounds(&self) -> Rect {
        self.rect
    }
}
