//! Pointer coordinates to shader space.

use super::{Rect, Vec2};

/// Where a drag started, captured on press.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragOrigin {
    /// Pointer position at press, in logical pixels.
    pub origin: Vec2,
    /// Surface size at press, in logical pixels.
    pub canvas_size: Vec2,
}

impl DragOrigin {
    #[inline]
    pub const fn new(origin: Vec2, canvas_size: Vec2) -> Self {
        Self { origin, canvas_size }
    }

    /// Maps `client` to a shader-space offset added onto `accumulated`.
    ///
    /// The pixel delta since press is scaled so one canvas extent spans 2 units,
    /// and the vertical axis is flipped (screen +Y is down, shader +Y is up).
    /// A zero-size canvas produces IEEE sentinels.
    pub fn map(&self, client: Vec2, accumulated: Vec2) -> Vec2 {
        let mapped = (client - self.origin) / self.canvas_size * 2.0;
        mapped.mirror_y() + accumulated
    }
}

/// Maps an absolute pointer position inside `bounds` to `[-1, 1]` per axis.
///
/// The top-left corner maps to `(-1, -1)`. No axis is flipped.
pub fn hover_to_clip(client: Vec2, bounds: Rect) -> Vec2 {
    ((client - bounds.origin) / bounds.size * 2.0 - 1.0).clamp(-1.0, 1.0)
}
