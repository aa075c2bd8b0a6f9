//! Input subsystem.
//!
//! Public API is platform-agnostic. `platform::winit` translates window system
//! events into `InputEvent`s; `PointerDrag` turns pointer events into shader-space
//! mouse values.

mod drag;
mod state;
mod types;

pub mod platform;

pub use drag::PointerDrag;
pub use state::InputState;
pub use types::{
    InputEvent,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
