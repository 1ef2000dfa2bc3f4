//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be deterministic:
//! - Delta-time scaled physics, no hidden clocks
//! - Seeded RNG only
//! - Stable iteration order (load/spawn order)
//! - Drawing goes through the `render::Surface` seam, never a backend

pub mod collision;
pub mod components;
pub mod entity;
pub mod rect;
pub mod scene;

pub use collision::{BounceAxis, BrickBounce, deflect_velocity, deflection_sign, resolve_ball_brick};
pub use components::{
    Collider, Component, ComponentKind, ComponentSet, FrameInput, InputController, Transform,
};
pub use entity::{Ball, Brick, Drop, Entity, Paddle};
pub use rect::Rect;
pub use scene::{Scene, SceneOutcome};
