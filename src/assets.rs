//! Texture handles and the path-keyed resource cache
//!
//! The simulation never talks to a graphics backend. Entities hold a
//! [`VisualHandle`], the host loads real textures behind the
//! [`TextureLoader`] seam, and the cache hands the same handle back for the
//! same path. An entity with an empty handle still collides; it just draws
//! nothing.

use std::collections::HashMap;
use std::fmt;

/// Standard texture paths for the entities the scene spawns itself
pub const PADDLE_TEXTURE: &str = "assets/paddle.bmp";
pub const BALL_TEXTURE: &str = "assets/ball.bmp";
pub const BRICK_TEXTURE: &str = "assets/brick.bmp";
pub const UNBRICK_TEXTURE: &str = "assets/unbrick.bmp";
pub const DROP_TEXTURE: &str = "assets/drop.bmp";

/// Opaque texture id minted by the host's loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// What an entity knows about its appearance: a texture, or nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualHandle {
    texture: Option<TextureId>,
}

impl VisualHandle {
    pub fn new(texture: TextureId) -> Self {
        Self {
            texture: Some(texture),
        }
    }

    /// A handle that renders nothing. Physics does not care.
    pub fn empty() -> Self {
        Self { texture: None }
    }

    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    pub fn is_empty(&self) -> bool {
        self.texture.is_none()
    }
}

/// Host-side texture loading seam
pub trait TextureLoader {
    type Error: fmt::Display;

    fn load(&mut self, path: &str) -> Result<TextureId, Self::Error>;
}

/// What the scene loader consumes: a path in, a handle out, no errors.
/// Implemented by [`ResourceCache`] for real hosts and [`NoTextures`] for
/// headless runs.
pub trait VisualSource {
    fn visual(&mut self, path: &str) -> VisualHandle;
}

/// Path-keyed cache over a [`TextureLoader`].
///
/// The same path always yields the same handle. A failed load is reported
/// and yields an empty handle without being cached, so the next request
/// tries the loader again.
#[derive(Debug)]
pub struct ResourceCache<L> {
    loader: L,
    textures: HashMap<String, VisualHandle>,
}

impl<L: TextureLoader> ResourceCache<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            textures: HashMap::new(),
        }
    }

    pub fn handle(&mut self, path: &str) -> VisualHandle {
        if let Some(handle) = self.textures.get(path) {
            return *handle;
        }
        match self.loader.load(path) {
            Ok(id) => {
                let handle = VisualHandle::new(id);
                self.textures.insert(path.to_string(), handle);
                handle
            }
            Err(err) => {
                log::warn!("Failed to load texture {}: {}", path, err);
                VisualHandle::empty()
            }
        }
    }

    /// Number of cached textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl<L: TextureLoader> VisualSource for ResourceCache<L> {
    fn visual(&mut self, path: &str) -> VisualHandle {
        self.handle(path)
    }
}

/// Always-empty visual source for tests and headless hosts
pub struct NoTextures;

impl VisualSource for NoTextures {
    fn visual(&mut self, _path: &str) -> VisualHandle {
        VisualHandle::empty()
    }
}
