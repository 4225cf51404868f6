/// Collision detection and movement resolution for William's Wild Adventure
///
/// This module provides a float AABB (Axis-Aligned Bounding Box) rectangle,
/// a `Collidable` trait for entities, and the movement resolver used by the
/// player's physics step.
///
/// # Architecture
///
/// - `Rect`: Plain-data rectangle with strict intersection semantics
/// - `Collidable` trait: Implemented by every entity that owns a rectangle
/// - `move_and_collide()`: Moves a body against static obstacles and clamps it
///   at the contact edge
///
/// Nothing here knows about SDL2. The render layer converts `Rect` into
/// `sdl2::rect::Rect` when it draws.

/// An axis-aligned rectangle in screen pixels.
///
/// Width and height are never negative: `Rect::new` clamps them to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.width;
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.height;
    }

    /// Strict overlap test. Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        aabb_intersect(self, other)
    }

    /// True if this rectangle sits exactly on top of `other` with some
    /// horizontal overlap. A resolved landing leaves the bottom edge
    /// exactly on the obstacle's top edge.
    pub fn rests_on(&self, other: &Rect) -> bool {
        self.bottom() == other.top() && self.left() < other.right() && self.right() > other.left()
    }

    /// Half-open point containment (`x <= px < x + width`).
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }
}

/// Trait for entities that participate in collision detection.
///
/// # Example
///
/// ```rust
/// use wild_adventure::collision::{Collidable, Rect};
///
/// struct Pebble { rect: Rect }
///
/// impl Collidable for Pebble {
///     fn get_bounds(&self) -> Rect {
///         self.rect
///     }
/// }
/// ```
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this entity.
    fn get_bounds(&self) -> Rect;
}

impl Collidable for Rect {
    fn get_bounds(&self) -> Rect {
        *self
    }
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles intersect if they overlap on both the X and Y axes.
/// Upper bounds are exclusive, so touching edges do not count.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.left() < b.right() && a.right() > b.left();
    let y_overlap = a.top() < b.bottom() && a.bottom() > b.top();

    x_overlap && y_overlap
}

/// Returns the indices of every entity in `entities` whose bounds intersect `bounds`.
pub fn check_collisions_with_collection<T: Collidable>(bounds: &Rect, entities: &[T]) -> Vec<usize> {
    entities
        .iter()
        .enumerate()
        .filter(|(_, other)| aabb_intersect(bounds, &other.get_bounds()))
        .map(|(index, _)| index)
        .collect()
}

/// Returns the index of the first entity whose bounds intersect `bounds`.
///
/// Iteration order decides ties: among several overlapping candidates the
/// earliest one wins.
pub fn first_collision<T: Collidable>(bounds: &Rect, entities: &[T]) -> Option<usize> {
    entities
        .iter()
        .position(|other| aabb_intersect(bounds, &other.get_bounds()))
}

/// Result of moving a body for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    pub rect: Rect,
    pub velocity_x: f32,
    pub velocity_y: f32,
    /// True if the body came to rest on top of an obstacle this frame.
    pub landed: bool,
}

/// Moves `rect` by its velocity and resolves contacts against `obstacles`.
///
/// Obstacles are visited once each, in order, and every intersecting one
/// mutates the result. There is no re-check after a correction, so a body
/// pushed out of one obstacle into another is not corrected a second time.
///
/// A falling body always lands on the top edge of an obstacle it overlaps.
/// If it entered from the side (horizontally clear of the obstacle before
/// the move) its horizontal velocity is also zeroed.
///
/// Otherwise the contact axis comes from where the body was before the move:
/// below the obstacle and rising is vertical; horizontally clear of it and
/// moving sideways is horizontal; anything else is vertical.
pub fn move_and_collide<T: Collidable>(
    rect: Rect,
    velocity_x: f32,
    velocity_y: f32,
    obstacles: &[T],
) -> MoveResult {
    let previous = rect;
    let mut result = MoveResult {
        rect: Rect::new(rect.x + velocity_x, rect.y + velocity_y, rect.width, rect.height),
        velocity_x,
        velocity_y,
        landed: false,
    };

    for obstacle in obstacles {
        let bounds = obstacle.get_bounds();
        if !aabb_intersect(&result.rect, &bounds) {
            continue;
        }

        let came_from_below = previous.top() >= bounds.bottom() && result.velocity_y < 0.0;
        let side_entry = result.velocity_x != 0.0
            && (previous.right() <= bounds.left() || previous.left() >= bounds.right());

        if result.velocity_y > 0.0 {
            if side_entry && previous.bottom() > bounds.top() {
                result.velocity_x = 0.0;
            }
            resolve_vertical(&mut result, &bounds);
        } else if !came_from_below && side_entry {
            resolve_horizontal(&mut result, &bounds);
        } else {
            resolve_vertical(&mut result, &bounds);
        }
    }

    result
}

fn resolve_vertical(result: &mut MoveResult, obstacle: &Rect) {
    if result.velocity_y > 0.0 {
        result.rect.set_bottom(obstacle.top());
        result.velocity_y = 0.0;
        result.landed = true;
    } else if result.velocity_y < 0.0 {
        result.rect.set_top(obstacle.bottom());
        result.velocity_y = 0.0;
    }
}

fn resolve_horizontal(result: &mut MoveResult, obstacle: &Rect) {
    if result.velocity_x > 0.0 {
        result.rect.set_right(obstacle.left());
        result.velocity_x = 0.0;
    } else if result.velocity_x < 0.0 {
        result.rect.set_left(obstacle.right());
        result.velocity_x = 0.0;
    }
}
