use crate::collision::{Collidable, Rect};

pub const SNAKE_WIDTH: f32 = 80.0;
pub const SNAKE_HEIGHT: f32 = 30.0;
const SNAKE_SPEED: f32 = 2.0;

/// The ground snake that chases William along the x axis
pub struct Snake {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub rect: Rect,
    pub active: bool,
}

impl Snake {
    pub fn new(x: f32, y: f32) -> Self {
        Snake {
            x,
            y,
            speed: SNAKE_SPEED,
            rect: Rect::new(x, y, SNAKE_WIDTH, SNAKE_HEIGHT),
            active: true,
        }
    }

    /// Steps toward `player_x`. There is no vertical tracking.
    pub fn update(&mut self, player_x: f32) {
        if !self.active {
            return;
        }

        if self.x < player_x {
            self.x += self.speed;
        } else {
            self.x -= self.speed;
        }
        self.rect.x = self.x;
    }
}

impl Collidable for Snake {
    fn get_bounds(&self) -> Rect {
        self.rect
    }
}
