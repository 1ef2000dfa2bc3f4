//! One level's entities and the per-frame simulation pipeline
//!
//! The scene owns the paddle, balls, bricks and drops for a single level and
//! runs the fixed-order update: paddle, drop motion, drop pickup, ball
//! motion, brick resolution, ball motion again, paddle bounce, cleanup,
//! termination. The step order is load-bearing; several behaviors (extra
//! ball placement, border contact timing) depend on it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::assets::{
    BALL_TEXTURE, BRICK_TEXTURE, DROP_TEXTURE, PADDLE_TEXTURE, UNBRICK_TEXTURE, VisualHandle,
    VisualSource,
};
use crate::consts::*;
use crate::level::EntityRecord;
use crate::render::Surface;

use super::collision::{BounceAxis, deflect_velocity, deflection_sign, resolve_ball_brick};
use super::components::{Component, FrameInput, InputController};
use super::entity::{Ball, Brick, Drop, Paddle};

/// What a frame of simulation concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneOutcome {
    /// Keep playing
    Running,
    /// No balls left. The scene only signals; the host decides what
    /// happens next.
    GameOver,
    /// Every breakable brick is gone; the scene has retired itself.
    Cleared,
}

/// A level in play
#[derive(Debug, Clone)]
pub struct Scene {
    paddle: Option<Paddle>,
    balls: Vec<Ball>,
    bricks: Vec<Brick>,
    drops: Vec<Drop>,
    active: bool,
    rng: Pcg32,
    // Handles for entities spawned mid-game, resolved once at load
    ball_visual: VisualHandle,
    drop_visual: VisualHandle,
}

impl Scene {
    /// A fresh, empty, active scene. The seed drives the drop-chance rolls
    /// and the deflection coin flips; same seed + same inputs replays the
    /// same game.
    pub fn new(seed: u64) -> Self {
        Self {
            paddle: None,
            balls: Vec::new(),
            bricks: Vec::new(),
            drops: Vec::new(),
            active: true,
            rng: Pcg32::seed_from_u64(seed),
            ball_visual: VisualHandle::empty(),
            drop_visual: VisualHandle::empty(),
        }
    }

    /// Populate the scene from parsed level records. Existing entities are
    /// discarded first, so a scene can be reloaded.
    pub fn load_entities(&mut self, records: &[EntityRecord], visuals: &mut dyn VisualSource) {
        self.paddle = None;
        self.balls.clear();
        self.bricks.clear();
        self.drops.clear();

        self.ball_visual = visuals.visual(BALL_TEXTURE);
        self.drop_visual = visuals.visual(DROP_TEXTURE);

        for record in records {
            match *record {
                EntityRecord::Paddle { x, y } => {
                    let mut paddle = Paddle::new(visuals.visual(PADDLE_TEXTURE));
                    paddle
                        .body_mut()
                        .add_component(Component::Input(InputController::new(
                            PADDLE_CONTROL_SPEED,
                        )));
                    if let Some(transform) = paddle.transform_mut() {
                        transform.move_to(x, y);
                    }
                    self.paddle = Some(paddle);
                }
                EntityRecord::Ball { x, y, vx, vy } => {
                    let mut ball = Ball::new(self.ball_visual);
                    if let Some(transform) = ball.transform_mut() {
                        transform.move_to(x, y);
                    }
                    ball.set_velocity(Vec2::new(vx, vy));
                    self.balls.push(ball);
                }
                EntityRecord::Brick { x, y } => {
                    let visual = visuals.visual(BRICK_TEXTURE);
                    self.bricks.push(build_brick(visual, x, y, false));
                }
                EntityRecord::UnbreakableBrick { x, y } => {
                    let visual = visuals.visual(UNBRICK_TEXTURE);
                    self.bricks.push(build_brick(visual, x, y, true));
                }
            }
        }

        log::info!(
            "Loaded scene: paddle: {}, balls: {}, bricks: {}",
            if self.paddle.is_some() { "yes" } else { "no" },
            self.balls.len(),
            self.bricks.len()
        );
    }

    /// Steer the paddle from this frame's keyboard snapshot
    pub fn input(&mut self, input: &FrameInput, dt: f32) {
        if let Some(paddle) = self.paddle.as_mut() {
            paddle.input(input, dt);
        }
    }

    /// Run one simulation step. The order of the passes below is fixed.
    pub fn update(&mut self, dt: f32) -> SceneOutcome {
        if !self.active {
            return SceneOutcome::Cleared;
        }

        // 1. Paddle position, velocity estimate, collider sync
        if let Some(paddle) = self.paddle.as_mut() {
            paddle.update(dt);
        }

        // 2. Drops fall
        for drop in &mut self.drops {
            drop.update(dt);
        }

        // 3. Caught drops convert into extra balls; scan by index so a
        //    removal does not skip the drop that slid into its slot
        if let Some(paddle_rect) = self.paddle.as_ref().and_then(|p| p.collider_rect()) {
            let mut i = 0;
            while i < self.drops.len() {
                let caught = self.drops[i]
                    .transform()
                    .is_some_and(|t| t.rect().intersects(&paddle_rect));
                if caught {
                    self.spawn_extra_balls();
                    self.drops.remove(i);
                } else {
                    i += 1;
                }
            }
        }

        // 4. Balls integrate and bounce off the walls
        for ball in &mut self.balls {
            ball.update(dt);
        }

        // 5. Each ball resolves against at most one brick
        self.resolve_brick_hits();

        // 6. Balls integrate a second time. Intentional: border contact
        //    timing depends on the double step
        for ball in &mut self.balls {
            ball.update(dt);
        }

        // 7. Balls bounce off the paddle with an angular deflection
        if let Some(paddle) = self.paddle.as_ref() {
            if let Some(paddle_rect) = paddle.collider_rect() {
                let paddle_velocity = paddle.velocity();
                for ball in &mut self.balls {
                    let Some(rect) = ball.transform().map(|t| t.rect()) else {
                        continue;
                    };
                    if !rect.intersects(&paddle_rect) {
                        continue;
                    }
                    let y = paddle_rect.y - rect.h - COLLISION_NUDGE;
                    if let Some(transform) = ball.transform_mut() {
                        transform.move_to(rect.x, y);
                    }
                    ball.reverse_vy();
                    let sign = deflection_sign(paddle_velocity, &mut self.rng);
                    ball.set_velocity(deflect_velocity(ball.velocity(), sign));
                }
            }
        }

        // 8. Balls past the bottom edge leave the game
        self.balls
            .retain(|ball| ball.transform().is_none_or(|t| t.y() <= WORLD_HEIGHT));

        // 9. Termination. Zero balls wins over a simultaneous clear, and
        //    one check per frame means one signal however many balls
        //    drained at once
        if self.balls.is_empty() {
            return SceneOutcome::GameOver;
        }
        let cleared = self
            .bricks
            .iter()
            .all(|brick| !brick.is_active() || brick.is_unbreakable());
        if cleared {
            self.balls.clear();
            self.active = false;
            log::info!("Scene cleared");
            return SceneOutcome::Cleared;
        }

        SceneOutcome::Running
    }

    /// Paint everything in layer order: paddle, balls, bricks, drops
    pub fn render(&self, surface: &mut dyn Surface) {
        if let Some(paddle) = self.paddle.as_ref() {
            paddle.render(surface);
        }
        for ball in &self.balls {
            ball.render(surface);
        }
        for brick in &self.bricks {
            brick.render(surface);
        }
        for drop in &self.drops {
            drop.render(surface);
        }
    }

    pub fn paddle(&self) -> Option<&Paddle> {
        self.paddle.as_ref()
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn drops(&self) -> &[Drop] {
        &self.drops
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// One caught drop doubles the balls in play: every ball present at
    /// this moment gets a twin 20 units to its right, launched at a gentle
    /// diagonal. A source ball with no transform still produces a twin,
    /// parked at the origin.
    fn spawn_extra_balls(&mut self) {
        let count = self.balls.len();
        for i in 0..count {
            let source = self.balls[i].transform().map(|t| t.rect().position());
            let mut ball = Ball::new(self.ball_visual);
            if let Some(position) = source {
                if let Some(transform) = ball.transform_mut() {
                    transform.move_to(position.x + EXTRA_BALL_OFFSET_X, position.y);
                }
            }
            ball.set_velocity(Vec2::splat(EXTRA_BALL_VELOCITY));
            self.balls.push(ball);
        }
    }

    /// Ball-vs-brick pass. Bricks are scanned in container order and the
    /// first active hit ends the scan for that ball, even if the ball
    /// overlaps several bricks. Unbreakable bricks bounce the ball but
    /// never deactivate and never drop.
    fn resolve_brick_hits(&mut self) {
        for ball_index in 0..self.balls.len() {
            let Some(ball_rect) = self.balls[ball_index].transform().map(|t| t.rect()) else {
                continue;
            };
            for brick_index in 0..self.bricks.len() {
                if !self.bricks[brick_index].is_active() {
                    continue;
                }
                let Some(brick_rect) = self.bricks[brick_index].transform().map(|t| t.rect())
                else {
                    continue;
                };
                if !ball_rect.intersects(&brick_rect) {
                    continue;
                }

                if !self.bricks[brick_index].is_unbreakable() {
                    self.bricks[brick_index].set_active(false);
                    if self.rng.random_range(0..100) < DROP_CHANCE_PERCENT {
                        self.spawn_drop(brick_rect.position());
                    }
                }

                let bounce = resolve_ball_brick(&ball_rect, &brick_rect);
                let ball = &mut self.balls[ball_index];
                if let Some(transform) = ball.transform_mut() {
                    transform.move_to(bounce.position.x, bounce.position.y);
                }
                match bounce.axis {
                    BounceAxis::Horizontal => ball.reverse_vx(),
                    BounceAxis::Vertical => ball.reverse_vy(),
                }
                break;
            }
        }
    }

    fn spawn_drop(&mut self, position: Vec2) {
        let mut drop = Drop::new(self.drop_visual);
        if let Some(transform) = drop.transform_mut() {
            transform.move_to(position.x, position.y);
        }
        self.drops.push(drop);
    }
}

/// Bricks load at 1.5x their native size; the collider is synced here
/// because bricks never run an update afterwards.
fn build_brick(visual: VisualHandle, x: f32, y: f32, unbreakable: bool) -> Brick {
    let mut brick = Brick::new(visual);
    brick.set_unbreakable(unbreakable);
    if let Some(transform) = brick.transform_mut() {
        transform.move_to(x, y);
        transform.set_w(transform.w() * BRICK_SCALE);
        transform.set_h(transform.h() * BRICK_SCALE);
    }
    brick.body_mut().sync_collider();
    brick
}
