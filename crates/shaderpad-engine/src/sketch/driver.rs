use crate::coords::{hover_to_clip, Rect, Vec2, Viewport};
use crate::input::{
    InputEvent, MouseButton, MouseButtonState, PointerButtonEvent, PointerDrag, PointerMoveEvent,
};
use crate::time::FrameTime;
use crate::uniforms::{UniformSink, U_MOUSE, U_RES, U_TIME};

use super::config::{MouseMode, SketchConfig};

/// Wires pointer input and frame time into shader uniforms.
///
/// Drag mode follows a press / move / release cycle:
/// - press records the canvas size and press origin
/// - move while pressed sends a provisional `uMouse` without storing it
/// - release commits the final value into the accumulated state and sends it
pub struct Sketch<S> {
    config: SketchConfig,
    viewport: Viewport,
    drag: PointerDrag,
    sink: S,
}

impl<S: UniformSink> Sketch<S> {
    /// Creates a sketch and sends the initial `uRes`.
    pub fn new(config: SketchConfig, viewport: Viewport, sink: S) -> Self {
        let drag = PointerDrag::new(config.initial_mouse);
        let mut sketch = Self { config, viewport, drag, sink };
        sketch.send_resolution();
        sketch
    }

    #[inline]
    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Accumulated mouse state (last committed drag position).
    #[inline]
    pub fn mouse(&self) -> Vec2 {
        self.drag.mouse()
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Updates the surface size and sends `uRes`.
    pub fn resize(&mut self, viewport: Viewport) {
        if !viewport.is_valid() {
            log::debug!("ignoring invalid viewport {viewport:?}");
            return;
        }
        self.viewport = viewport;
        self.send_resolution();
    }

    pub fn handle_event(&mut self, ev: &InputEvent) {
        match *ev {
            InputEvent::PointerMoved(mv) => self.pointer_moved(mv),
            InputEvent::PointerButton(btn) if btn.button == MouseButton::Left => {
                self.pointer_button(btn)
            }
            InputEvent::Focused(false) => {
                if self.drag.is_pressed() {
                    log::debug!("focus lost mid-drag; keeping {}", self.drag.mouse());
                }
                self.drag.cancel();
            }
            InputEvent::Resized { width, height } => self.resize(Viewport::new(width, height)),
            _ => {}
        }
    }

    /// Sends `uTime` for the current frame.
    pub fn frame(&mut self, time: &FrameTime) {
        self.sink.set_uniform(U_TIME, time.elapsed.into());
    }

    fn pointer_moved(&mut self, mv: PointerMoveEvent) {
        let client = mv.position();
        let mapped = match self.config.mouse_mode {
            MouseMode::Drag => self.drag.drag(client),
            MouseMode::Hover => {
                let bounds = self.bounds();
                bounds.contains(client).then(|| hover_to_clip(client, bounds))
            }
        };

        if let Some(mapped) = mapped {
            self.sink.set_uniform(U_MOUSE, mapped.into());
        }
    }

    fn pointer_button(&mut self, btn: PointerButtonEvent) {
        if self.config.mouse_mode != MouseMode::Drag {
            return;
        }

        let client = btn.position();
        match btn.state {
            MouseButtonState::Pressed => {
                self.drag.press(client, self.viewport.size());
                log::debug!("drag started at {client}");
            }
            MouseButtonState::Released => {
                if let Some(mapped) = self.drag.release(client) {
                    log::debug!("drag committed {mapped}");
                    self.sink.set_uniform(U_MOUSE, mapped.into());
                }
            }
        }
    }

    fn bounds(&self) -> Rect {
        Rect::from_size(self.viewport.size())
    }

    fn send_resolution(&mut self) {
        self.sink.set_uniform(U_RES, self.viewport.size().into());
    }
}
