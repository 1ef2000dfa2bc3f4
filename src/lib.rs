//! Brickfall - a 2D brick-breaker simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, scene pipeline)
//! - `level`: Scene-description text format
//! - `assets`: Texture handles and the host resource seam
//! - `render`: Drawing surface seam
//! - `app`: Multi-scene driver and frame loop
//! - `settings`: Runtime configuration

pub mod app;
pub mod assets;
pub mod level;
pub mod render;
pub mod settings;
pub mod sim;

pub use app::{App, FrameOutcome, Platform, RunOutcome};
pub use assets::{NoTextures, ResourceCache, TextureId, TextureLoader, VisualHandle, VisualSource};
pub use level::EntityRecord;
pub use render::{DrawList, Surface};
pub use settings::Settings;
pub use sim::{FrameInput, Scene, SceneOutcome};

/// Game configuration constants
pub mod consts {
    /// Playfield width; the right wall sits here
    pub const WORLD_WIDTH: f32 = 1600.0;
    /// Playfield height; balls past this are out of play
    pub const WORLD_HEIGHT: f32 = 1000.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 180.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;
    /// Base entity speed attached to the paddle body
    pub const PADDLE_SPEED: f32 = 500.0;
    /// Speed the input controller steers the paddle at
    pub const PADDLE_CONTROL_SPEED: f32 = 300.0;
    /// Below this the paddle counts as standing still when deflecting
    pub const PADDLE_STILL_EPSILON: f32 = 0.01;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 250.0;
    /// Tilt applied to a ball leaving the paddle, degrees
    pub const DEFLECT_DEGREES: f32 = 10.0;

    /// Brick defaults; bricks are laid out at native size then scaled
    pub const BRICK_WIDTH: f32 = 60.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_SCALE: f32 = 1.5;
    /// Chance (percent) a broken brick releases a drop
    pub const DROP_CHANCE_PERCENT: u32 = 30;

    /// Drop defaults
    pub const DROP_SIZE: f32 = 24.0;
    pub const DROP_FALL_SPEED: f32 = 200.0;

    /// Extra balls granted by a caught drop
    pub const EXTRA_BALL_OFFSET_X: f32 = 20.0;
    pub const EXTRA_BALL_VELOCITY: f32 = 100.0;

    /// Gap left between a ball and the thing it just bounced off
    pub const COLLISION_NUDGE: f32 = 1.0;

    /// Frame pacing for the drive loop
    pub const TARGET_FPS: u32 = 60;
}
