use crate::coords::{DragOrigin, Vec2};

/// Pointer drag with a two-phase commit of the accumulated mouse state.
///
/// Moves while pressed produce provisional values that are never stored.
/// Only `release` writes the final mapped value back into the accumulator.
#[derive(Debug, Clone, Default)]
pub struct PointerDrag {
    mouse: Vec2,
    press: Option<DragOrigin>,
}

impl PointerDrag {
    pub fn new(initial: Vec2) -> Self {
        Self { mouse: initial, press: None }
    }

    /// Accumulated (last committed) mouse state.
    #[inline]
    pub fn mouse(&self) -> Vec2 {
        self.mouse
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Starts a drag at `client` on a surface of `canvas_size`.
    ///
    /// Pressing again mid-drag restarts from the new origin.
    pub fn press(&mut self, client: Vec2, canvas_size: Vec2) {
        self.press = Some(DragOrigin::new(client, canvas_size));
    }

    /// Provisional mapped value for `client`, or `None` when not pressed.
    pub fn drag(&self, client: Vec2) -> Option<Vec2> {
        self.press.map(|press| press.map(client, self.mouse))
    }

    /// Commits the mapped value for `client` and ends the drag.
    ///
    /// Returns `None` and leaves the state untouched when not pressed.
    pub fn release(&mut self, client: Vec2) -> Option<Vec2> {
        let press = self.press.take()?;
        let mapped = press.map(client, self.mouse);
        self.mouse = mapped;
        Some(mapped)
    }

    /// Drops an in-flight drag without committing.
    pub fn cancel(&mut self) {
        self.press = None;
    }
}
