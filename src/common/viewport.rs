//! World-space rectangle currently visible on screen.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport(pub Rect);

impl Viewport {
    /// Viewport of `size` centred on the world origin (where the camera sits).
    pub fn centered(size: Vec2) -> Self {
        Self(Rect::from_center_size(Vec2::ZERO, size))
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::centered(Vec2::new(800.0, 600.0))
    }
}
