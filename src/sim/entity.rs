//! Game entities: the shared body and the four kinds
//!
//! Every entity owns a [`ComponentSet`]; the kind-specific structs wrap the
//! shared body and override the pieces of behavior that differ. The set of
//! kinds is closed (paddle, ball, brick, drop), so plain structs beat a
//! trait-object hierarchy here.

use glam::Vec2;

use crate::assets::VisualHandle;
use crate::consts::*;
use crate::render::Surface;

use super::components::{Collider, Component, ComponentSet, FrameInput, Transform};
use super::rect::Rect;

/// Shared entity body: component set, base speed, horizontal direction
#[derive(Debug, Clone)]
pub struct Entity {
    components: ComponentSet,
    speed: f32,
    direction: f32,
}

impl Entity {
    pub fn new(speed: f32) -> Self {
        Self {
            components: ComponentSet::new(),
            speed,
            direction: 1.0,
        }
    }

    /// Install the standard body: visual, transform and collider at the
    /// native size, parked at the origin until the caller moves it.
    pub fn init_components(&mut self, w: f32, h: f32, visual: VisualHandle) {
        self.components.insert(Component::Visual(visual));
        self.components
            .insert(Component::Transform(Transform::new(0.0, 0.0, w, h)));
        self.components
            .insert(Component::Collider(Collider::new(0.0, 0.0, w, h)));
    }

    /// Add a component, replacing any existing one of the same kind
    pub fn add_component(&mut self, component: Component) -> Option<Component> {
        self.components.insert(component)
    }

    pub fn components(&self) -> &ComponentSet {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut ComponentSet {
        &mut self.components
    }

    /// Horizontal movement direction: -1, 0 or 1
    pub fn set_direction(&mut self, direction: f32) {
        self.direction = direction;
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.components.transform()
    }

    pub fn transform_mut(&mut self) -> Option<&mut Transform> {
        self.components.transform_mut()
    }

    /// Collider rectangle as of the last sync
    pub fn collider_rect(&self) -> Option<Rect> {
        self.components.collider().map(|c| c.rect())
    }

    /// Copy the transform rectangle into the collider. No-op if either
    /// component is missing.
    pub fn sync_collider(&mut self) {
        let Some(transform) = self.components.transform().copied() else {
            return;
        };
        if let Some(collider) = self.components.collider_mut() {
            collider.sync(&transform);
        }
    }

    /// Default update: drift horizontally at the base speed, then sync the
    /// collider. Kinds with their own motion replace this wholesale.
    pub fn update(&mut self, dt: f32) {
        if let Some(transform) = self.components.transform_mut() {
            let x = transform.x() + self.direction * self.speed * dt;
            transform.move_to(x, transform.y());
        }
        self.sync_collider();
    }

    /// Draw the sprite at the transform rectangle, then hand the collider
    /// to the surface's debug hook. An empty visual draws nothing, collider
    /// outline included.
    pub fn render(&self, surface: &mut dyn Surface) {
        let Some(texture) = self.components.visual().and_then(|v| v.texture()) else {
            return;
        };
        let Some(transform) = self.components.transform() else {
            return;
        };
        surface.draw_sprite(texture, transform.rect());
        if let Some(collider) = self.components.collider() {
            surface.draw_collider(collider.rect());
        }
    }
}

/// The player paddle. Steered by its input controller; tracks an
/// instantaneous velocity estimate for ball deflection.
#[derive(Debug, Clone)]
pub struct Paddle {
    body: Entity,
    last_x: f32,
    velocity: f32,
}

impl Paddle {
    pub fn new(visual: VisualHandle) -> Self {
        let mut body = Entity::new(PADDLE_SPEED);
        body.init_components(PADDLE_WIDTH, PADDLE_HEIGHT, visual);
        Self {
            body,
            last_x: 0.0,
            velocity: 0.0,
        }
    }

    pub fn body(&self) -> &Entity {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Entity {
        &mut self.body
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.body.transform()
    }

    pub fn transform_mut(&mut self) -> Option<&mut Transform> {
        self.body.transform_mut()
    }

    pub fn collider_rect(&self) -> Option<Rect> {
        self.body.collider_rect()
    }

    /// Instantaneous horizontal velocity from the last update, units/sec.
    /// Positive means moving right.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Steer from the frame's keyboard snapshot via the input controller
    pub fn input(&mut self, input: &FrameInput, dt: f32) {
        let Some(controller) = self.body.components().input().copied() else {
            return;
        };
        let Some(transform) = self.body.components_mut().transform_mut() else {
            return;
        };
        let direction = controller.apply(input, transform, dt);
        self.body.set_direction(direction);
    }

    /// Estimate velocity from x travel since last frame, then sync the
    /// collider. The estimate is left untouched when dt is zero.
    pub fn update(&mut self, dt: f32) {
        if dt > 0.0 {
            if let Some(transform) = self.body.transform() {
                let x = transform.x();
                self.velocity = (x - self.last_x) / dt;
                self.last_x = x;
            }
        }
        self.body.sync_collider();
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        self.body.render(surface);
    }
}

/// A ball in flight
#[derive(Debug, Clone)]
pub struct Ball {
    body: Entity,
    velocity: Vec2,
}

impl Ball {
    pub fn new(visual: VisualHandle) -> Self {
        let mut body = Entity::new(BALL_SPEED);
        body.init_components(BALL_SIZE, BALL_SIZE, visual);
        Self {
            body,
            velocity: Vec2::splat(BALL_SPEED),
        }
    }

    pub fn body(&self) -> &Entity {
        &self.body
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.body.transform()
    }

    pub fn transform_mut(&mut self) -> Option<&mut Transform> {
        self.body.transform_mut()
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn reverse_vx(&mut self) {
        self.velocity.x = -self.velocity.x;
    }

    pub fn reverse_vy(&mut self) {
        self.velocity.y = -self.velocity.y;
    }

    /// Integrate position, reflect off the top/left/right walls, sync the
    /// collider. There is no floor; balls past the bottom are the scene's
    /// problem.
    pub fn update(&mut self, dt: f32) {
        let Some(transform) = self.body.transform_mut() else {
            return;
        };

        let mut x = transform.x() + self.velocity.x * dt;
        let mut y = transform.y() + self.velocity.y * dt;
        let w = transform.w();

        if y <= 0.0 {
            y = 0.0;
            self.velocity.y = -self.velocity.y;
        }
        if x <= 0.0 {
            x = 0.0;
            self.velocity.x = -self.velocity.x;
        }
        if x + w >= WORLD_WIDTH {
            x = WORLD_WIDTH - w;
            self.velocity.x = -self.velocity.x;
        }

        transform.move_to(x, y);
        self.body.sync_collider();
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        self.body.render(surface);
    }
}

/// A brick. Static after load; destruction deactivates rather than removes,
/// and unbreakable bricks shrug destruction off entirely.
#[derive(Debug, Clone)]
pub struct Brick {
    body: Entity,
    active: bool,
    unbreakable: bool,
}

impl Brick {
    pub fn new(visual: VisualHandle) -> Self {
        let mut body = Entity::new(0.0);
        body.init_components(BRICK_WIDTH, BRICK_HEIGHT, visual);
        Self {
            body,
            active: true,
            unbreakable: false,
        }
    }

    pub fn body(&self) -> &Entity {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Entity {
        &mut self.body
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.body.transform()
    }

    pub fn transform_mut(&mut self) -> Option<&mut Transform> {
        self.body.transform_mut()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Ignored for unbreakable bricks
    pub fn set_active(&mut self, active: bool) {
        if !self.unbreakable {
            self.active = active;
        }
    }

    pub fn is_unbreakable(&self) -> bool {
        self.unbreakable
    }

    pub fn set_unbreakable(&mut self, unbreakable: bool) {
        self.unbreakable = unbreakable;
    }

    /// Inactive bricks are invisible
    pub fn render(&self, surface: &mut dyn Surface) {
        if !self.active {
            return;
        }
        self.body.render(surface);
    }
}

/// A falling pickup released by a broken brick
#[derive(Debug, Clone)]
pub struct Drop {
    body: Entity,
}

impl Drop {
    pub fn new(visual: VisualHandle) -> Self {
        let mut body = Entity::new(DROP_FALL_SPEED);
        body.init_components(DROP_SIZE, DROP_SIZE, visual);
        Self { body }
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.body.transform()
    }

    pub fn transform_mut(&mut self) -> Option<&mut Transform> {
        self.body.transform_mut()
    }

    /// Fall straight down at the base speed, then sync the collider
    pub fn update(&mut self, dt: f32) {
        let speed = self.body.speed;
        if let Some(transform) = self.body.transform_mut() {
            let y = transform.y() + speed * dt;
            transform.move_to(transform.x(), y);
        }
        self.body.sync_collider();
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        self.body.render(surface);
    }
}
