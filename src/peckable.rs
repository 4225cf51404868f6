use crate::collision::{Collidable, Rect};

pub const PECKABLE_HEALTH: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeckableKind {
    Tree,
    Flower,
}

/// A tree to drill for larvae, or a flower to hover at
///
/// Health only ever goes down. `has_larva` is fixed at creation.
#[derive(Debug, Clone)]
pub struct PeckableObject {
    pub rect: Rect,
    pub kind: PeckableKind,
    pub health: i32,
    has_larva: bool,
    pub pecked: bool,
}

impl PeckableObject {
    pub fn new(rect: Rect, kind: PeckableKind, has_larva: bool) -> Self {
        PeckableObject {
            rect,
            kind,
            health: PECKABLE_HEALTH,
            has_larva,
            pecked: false,
        }
    }

    pub fn has_larva(&self) -> bool {
        self.has_larva
    }

    /// Pecks once. Returns true only on the call that drains the last point
    /// of health from an object hiding a larva.
    pub fn peck(&mut self) -> bool {
        let was_healthy = self.health > 0;
        self.health -= 1;
        self.pecked = true;
        self.has_larva && was_healthy && self.health <= 0
    }

    /// Marks a flower as visited. Returns true on the first visit only.
    pub fn visit(&mut self) -> bool {
        if self.pecked {
            return false;
        }
        self.pecked = true;
        true
    }

    pub fn is_depleted(&self) -> bool {
        self.health <= 0
    }

    /// True once this object's larva has been dug out
    pub fn larva_found(&self) -> bool {
        self.pecked && self.has_larva && self.is_depleted()
    }
}

impl Collidable for PeckableObject {
    fn get_bounds(&self) -> Rect {
        self.rect
    }
}
