//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window and feeds translated input to the app.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
pub use winit::window::CursorIcon;
