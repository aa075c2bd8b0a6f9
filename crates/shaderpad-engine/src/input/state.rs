use std::collections::HashSet;

use super::types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent};

/// Current input state for a single window.
///
/// Holds "is down" information and the current pointer position.
#[derive(Debug, Default)]
pub struct InputState {
    /// Pointer position in logical pixels.
    ///
    /// Kept after the pointer leaves the surface while any button is held, so a
    /// release outside the window still reports where the drag last was.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match *ev {
            InputEvent::Focused(false) => {
                // Avoids stuck buttons when focus changes mid-press.
                self.buttons_down.clear();
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((x, y));
            }

            InputEvent::PointerLeft => {
                if self.buttons_down.is_empty() {
                    self.pointer_pos = None;
                }
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((x, y));

                match state {
                    MouseButtonState::Pressed => {
                        self.buttons_down.insert(button);
                    }
                    MouseButtonState::Released => {
                        self.buttons_down.remove(&button);
                    }
                }
            }

            InputEvent::Focused(true) | InputEvent::Resized { .. } => {}
        }
    }

    /// Button event at the tracked pointer position.
    ///
    /// `None` when the position is unknown; such an event would carry a made-up
    /// coordinate.
    pub fn button_event(
        &self,
        button: MouseButton,
        state: MouseButtonState,
    ) -> Option<PointerButtonEvent> {
        let (x, y) = self.pointer_pos?;
        Some(PointerButtonEvent { button, state, x, y })
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}
