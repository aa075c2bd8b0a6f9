use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Used for the drawing surface bounds that pointer positions are measured
/// against.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rect anchored at the origin, e.g. a window's client area.
    #[inline]
    pub const fn from_size(size: Vec2) -> Self {
        Self { origin: Vec2::ZERO, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x() >= self.origin.x()
            && p.y() >= self.origin.y()
            && p.x() < max.x()
            && p.y() < max.y()
    }
}
