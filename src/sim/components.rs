//! Components attached to game entities
//!
//! An entity carries at most one component per kind. The set is a closed
//! four-slot bag rather than an open type map: the game never grows new
//! component kinds at runtime, and a tagged enum keeps retrieval total and
//! allocation-free.

use crate::assets::VisualHandle;
use crate::consts::WORLD_WIDTH;

use super::rect::Rect;

/// The component slots an entity can fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Transform,
    Collider,
    Visual,
    Input,
}

/// A component value, tagged by kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Component {
    Transform(Transform),
    Collider(Collider),
    Visual(VisualHandle),
    Input(InputController),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Transform(_) => ComponentKind::Transform,
            Component::Collider(_) => ComponentKind::Collider,
            Component::Visual(_) => ComponentKind::Visual,
            Component::Input(_) => ComponentKind::Input,
        }
    }
}

/// Position and size of an entity
///
/// The collider copies this rectangle each frame, never the other way
/// around.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    rect: Rect,
}

impl Transform {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
        }
    }

    /// Move to an absolute position, keeping size
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.rect.x = x;
        self.rect.y = y;
    }

    pub fn set_w(&mut self, w: f32) {
        self.rect.w = w;
    }

    pub fn set_h(&mut self, h: f32) {
        self.rect.h = h;
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.rect.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.rect.y
    }

    #[inline]
    pub fn w(&self) -> f32 {
        self.rect.w
    }

    #[inline]
    pub fn h(&self) -> f32 {
        self.rect.h
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// Axis-aligned bounding box used for intersection tests
///
/// Never positioned on its own; `sync` overwrites it from the owning
/// entity's transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Collider {
    rect: Rect,
}

impl Collider {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
        }
    }

    /// One-directional sync: collider follows transform
    pub fn sync(&mut self, transform: &Transform) {
        self.rect = transform.rect();
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// Keyboard snapshot for one frame, supplied by the host
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    /// Host asked to stop the run; the scene ignores it, the app loop acts
    pub quit: bool,
}

/// Keyboard steering for the paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputController {
    speed: f32,
}

impl InputController {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    /// Apply one frame of steering to a transform.
    ///
    /// Left and right both apply when both keys are held (the movement
    /// cancels, the reported direction is right). The x position is always
    /// clamped to the playfield afterwards. Returns the direction taken:
    /// -1, 0 or 1.
    pub fn apply(&self, input: &FrameInput, transform: &mut Transform, dt: f32) -> f32 {
        let mut x = transform.x();
        let mut direction = 0.0;
        if input.left {
            x -= self.speed * dt;
            direction = -1.0;
        }
        if input.right {
            x += self.speed * dt;
            direction = 1.0;
        }
        x = x.max(0.0).min(WORLD_WIDTH - transform.w());
        transform.move_to(x, transform.y());
        direction
    }
}

/// One slot per component kind. Inserting a kind already present replaces
/// the previous component and hands it back.
#[derive(Debug, Clone, Default)]
pub struct ComponentSet {
    transform: Option<Transform>,
    collider: Option<Collider>,
    visual: Option<VisualHandle>,
    input: Option<InputController>,
}

impl ComponentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a component, replacing any existing one of the same kind
    pub fn insert(&mut self, component: Component) -> Option<Component> {
        match component {
            Component::Transform(t) => self.transform.replace(t).map(Component::Transform),
            Component::Collider(c) => self.collider.replace(c).map(Component::Collider),
            Component::Visual(v) => self.visual.replace(v).map(Component::Visual),
            Component::Input(i) => self.input.replace(i).map(Component::Input),
        }
    }

    pub fn contains(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Transform => self.transform.is_some(),
            ComponentKind::Collider => self.collider.is_some(),
            ComponentKind::Visual => self.visual.is_some(),
            ComponentKind::Input => self.input.is_some(),
        }
    }

    pub fn remove(&mut self, kind: ComponentKind) -> Option<Component> {
        match kind {
            ComponentKind::Transform => self.transform.take().map(Component::Transform),
            ComponentKind::Collider => self.collider.take().map(Component::Collider),
            ComponentKind::Visual => self.visual.take().map(Component::Visual),
            ComponentKind::Input => self.input.take().map(Component::Input),
        }
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    pub fn transform_mut(&mut self) -> Option<&mut Transform> {
        self.transform.as_mut()
    }

    pub fn collider(&self) -> Option<&Collider> {
        self.collider.as_ref()
    }

    pub fn collider_mut(&mut self) -> Option<&mut Collider> {
        self.collider.as_mut()
    }

    pub fn visual(&self) -> Option<&VisualHandle> {
        self.visual.as_ref()
    }

    pub fn input(&self) -> Option<&InputController> {
        self.input.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_same_kind() {
        let mut set = ComponentSet::new();
        assert!(
            set.insert(Component::Transform(Transform::new(0.0, 0.0, 10.0, 10.0)))
                .is_none()
        );

        let old = set.insert(Component::Transform(Transform::new(5.0, 5.0, 20.0, 20.0)));
        assert!(matches!(old, Some(Component::Transform(t)) if t.w() == 10.0));

        // Only one transform slot; the new one is current
        assert_eq!(set.transform().map(|t| t.x()), Some(5.0));
    }

    #[test]
    fn test_missing_component_is_none() {
        let set = ComponentSet::new();
        assert!(set.transform().is_none());
        assert!(set.collider().is_none());
        assert!(set.visual().is_none());
        assert!(set.input().is_none());
        assert!(!set.contains(ComponentKind::Input));
    }

    #[test]
    fn test_remove_empties_slot() {
        let mut set = ComponentSet::new();
        set.insert(Component::Collider(Collider::new(0.0, 0.0, 4.0, 4.0)));
        assert!(set.contains(ComponentKind::Collider));
        assert!(set.remove(ComponentKind::Collider).is_some());
        assert!(!set.contains(ComponentKind::Collider));
        assert!(set.remove(ComponentKind::Collider).is_none());
    }

    #[test]
    fn test_collider_sync_follows_transform() {
        let mut collider = Collider::new(0.0, 0.0, 8.0, 8.0);
        let mut transform = Transform::new(0.0, 0.0, 8.0, 8.0);
        transform.move_to(120.0, 340.0);
        collider.sync(&transform);
        assert_eq!(collider.rect(), transform.rect());

        // Transform alone moves; the collider stays put until next sync
        transform.move_to(200.0, 340.0);
        assert_eq!(collider.rect().x, 120.0);
    }

    #[test]
    fn test_input_controller_moves_and_clamps() {
        let ctl = InputController::new(300.0);
        let mut transform = Transform::new(100.0, 900.0, 180.0, 30.0);

        let dir = ctl.apply(
            &FrameInput {
                right: true,
                ..Default::default()
            },
            &mut transform,
            0.5,
        );
        assert_eq!(dir, 1.0);
        assert_eq!(transform.x(), 250.0);

        // Clamp at the left wall
        let dir = ctl.apply(
            &FrameInput {
                left: true,
                ..Default::default()
            },
            &mut transform,
            10.0,
        );
        assert_eq!(dir, -1.0);
        assert_eq!(transform.x(), 0.0);

        // Clamp at the right wall: world width minus paddle width
        ctl.apply(
            &FrameInput {
                right: true,
                ..Default::default()
            },
            &mut transform,
            100.0,
        );
        assert_eq!(transform.x(), WORLD_WIDTH - 180.0);
    }

    #[test]
    fn test_input_controller_both_keys_cancel_movement() {
        let ctl = InputController::new(300.0);
        let mut transform = Transform::new(400.0, 900.0, 180.0, 30.0);
        let dir = ctl.apply(
            &FrameInput {
                left: true,
                right: true,
                ..Default::default()
            },
            &mut transform,
            0.25,
        );
        // Movement cancels out; direction reports right
        assert_eq!(transform.x(), 400.0);
        assert_eq!(dir, 1.0);
    }
}
