//! Nest-building drag-and-drop puzzle
//!
//! Pieces are dragged with the pointer and dropped onto slots. A piece that
//! lands on a slot snaps to the slot's origin and stays there for good.

use crate::collision::{Collidable, Rect};

pub const PIECE_WIDTH: f32 = 40.0;
pub const PIECE_HEIGHT: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceType {
    Twig,
    Leaf,
    Moss,
}

#[derive(Debug, Clone)]
pub struct NestPiece {
    pub rect: Rect,
    pub piece_type: PieceType,
    placed: bool,
}

impl NestPiece {
    pub fn new(x: f32, y: f32, piece_type: PieceType) -> Self {
        NestPiece {
            rect: Rect::new(x, y, PIECE_WIDTH, PIECE_HEIGHT),
            piece_type,
            placed: false,
        }
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Moves the piece unless it has already been placed
    pub fn move_to(&mut self, x: f32, y: f32) {
        if self.placed {
            return;
        }
        self.rect.x = x;
        self.rect.y = y;
    }

    fn place_on(&mut self, slot: &Rect) {
        self.rect.x = slot.x;
        self.rect.y = slot.y;
        self.placed = true;
    }
}

impl Collidable for NestPiece {
    fn get_bounds(&self) -> Rect {
        self.rect
    }
}

/// An in-progress drag: which piece, and where it was grabbed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub piece: usize,
    pub offset_x: f32,
    pub offset_y: f32,
}

pub struct NestPuzzle {
    pub pieces: Vec<NestPiece>,
    pub slots: Vec<Rect>,
    drag: Option<Drag>,
}

impl NestPuzzle {
    pub fn new(pieces: Vec<NestPiece>, slots: Vec<Rect>) -> Self {
        NestPuzzle {
            pieces,
            slots,
            drag: None,
        }
    }

    pub fn drag(&self) -> Option<Drag> {
        self.drag
    }

    /// Starts dragging the first unplaced piece under the pointer
    pub fn pointer_down(&mut self, px: f32, py: f32) -> Option<usize> {
        let index = self
            .pieces
            .iter()
            .position(|piece| !piece.placed && piece.rect.contains_point(px, py))?;

        let rect = self.pieces[index].rect;
        self.drag = Some(Drag {
            piece: index,
            offset_x: rect.x - px,
            offset_y: rect.y - py,
        });
        Some(index)
    }

    pub fn pointer_move(&mut self, px: f32, py: f32) {
        if let Some(drag) = self.drag {
            self.pieces[drag.piece].move_to(px + drag.offset_x, py + drag.offset_y);
        }
    }

    /// Ends the drag. Returns the index of the piece if it snapped into a slot.
    pub fn pointer_up(&mut self) -> Option<usize> {
        let drag = self.drag.take()?;
        let piece = &mut self.pieces[drag.piece];
        let slot = self
            .slots
            .iter()
            .find(|slot| piece.rect.intersects(slot))?;

        piece.place_on(slot);
        Some(drag.piece)
    }

    pub fn placed_count(&self) -> usize {
        self.pieces.iter().filter(|piece| piece.placed).count()
    }

    /// The nest is done when every piece is placed
    pub fn is_complete(&self) -> bool {
        !self.pieces.is_empty() && self.pieces.iter().all(NestPiece::is_placed)
    }
}
