//! Drawing seam between the simulation and a host renderer
//!
//! Entities paint themselves onto a [`Surface`]; what happens to the calls
//! is the host's business. [`DrawList`] is the bundled implementation for
//! hosts that want the frame as data, and for tests.

use crate::assets::TextureId;
use crate::sim::Rect;

/// Receiver for one frame's draw calls, in paint order
pub trait Surface {
    fn draw_sprite(&mut self, texture: TextureId, rect: Rect);

    /// Debug outline for a collider. Default is to ignore it.
    fn draw_collider(&mut self, _rect: Rect) {}
}

/// One recorded sprite draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteCmd {
    pub texture: TextureId,
    pub rect: Rect,
}

/// A [`Surface`] that records draw calls in submission order
#[derive(Debug, Default)]
pub struct DrawList {
    sprites: Vec<SpriteCmd>,
    colliders: Vec<Rect>,
    record_colliders: bool,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list that also keeps collider outlines
    pub fn with_colliders() -> Self {
        Self {
            record_colliders: true,
            ..Self::default()
        }
    }

    pub fn sprites(&self) -> &[SpriteCmd] {
        &self.sprites
    }

    pub fn colliders(&self) -> &[Rect] {
        &self.colliders
    }

    /// Drop everything recorded so far; keeps the collider setting
    pub fn clear(&mut self) {
        self.sprites.clear();
        self.colliders.clear();
    }
}

impl Surface for DrawList {
    fn draw_sprite(&mut self, texture: TextureId, rect: Rect) {
        self.sprites.push(SpriteCmd { texture, rect });
    }

    fn draw_collider(&mut self, rect: Rect) {
        if self.record_colliders {
            self.colliders.push(rect);
        }
    }
}
