//! Coordinate types and the pointer-to-shader-space mapping.
//!
//! Screen space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Shader space is the `[-1, 1]` clip range with +Y up.

mod error;
mod mapping;
mod rect;
mod vec2;
mod viewport;

pub use error::ValidationError;
pub use mapping::{hover_to_clip, DragOrigin};
pub use rect::Rect;
pub use vec2::{Vec2, Vec2Like};
pub use viewport::Viewport;
