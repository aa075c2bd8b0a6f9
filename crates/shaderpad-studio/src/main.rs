use anyhow::Result;
use winit::dpi::LogicalSize;

use shaderpad_engine::coords::Viewport;
use shaderpad_engine::core::{App, AppControl, FrameCtx};
use shaderpad_engine::input::{InputEvent, MouseButton};
use shaderpad_engine::logging::{init_logging, LoggingConfig};
use shaderpad_engine::sketch::{MouseMode, Sketch, SketchConfig};
use shaderpad_engine::uniforms::UniformBlock;
use shaderpad_engine::window::{CursorIcon, Runtime, RuntimeConfig};

const MOUSE_MODE_ENV: &str = "SHADERPAD_MOUSE";

/// Drives the sketch uniforms from a real window.
///
/// Nothing is drawn; every changed uniform block is reported in the log,
/// which is where a GPU upload would go.
struct Studio {
    sketch: Sketch<UniformBlock>,
    cursor: Option<CursorIcon>,
}

impl Studio {
    fn new(config: SketchConfig, viewport: Viewport) -> Self {
        Self {
            sketch: Sketch::new(config, viewport, UniformBlock::new()),
            cursor: None,
        }
    }

    fn cursor_for(&self, dragging: bool) -> CursorIcon {
        match self.sketch.config().mouse_mode {
            MouseMode::Drag if dragging => CursorIcon::Grabbing,
            MouseMode::Drag => CursorIcon::Grab,
            MouseMode::Hover => CursorIcon::Crosshair,
        }
    }
}

impl App for Studio {
    fn on_input(&mut self, event: &InputEvent) -> AppControl {
        self.sketch.handle_event(event);
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if ctx.time.frame_index == 0 {
            self.sketch.resize(ctx.window.viewport());
        }

        let cursor = self.cursor_for(ctx.input.button_down(MouseButton::Left));
        if self.cursor != Some(cursor) {
            ctx.window.set_cursor(cursor);
            self.cursor = Some(cursor);
        }

        self.sketch.frame(&ctx.time);

        let block = self.sketch.sink_mut();
        if block.take_dirty() {
            let data = block.data();
            log::debug!(
                "upload {} bytes: uMouse={:?} uRes={:?} uTime={:.2}",
                block.bytes().len(),
                data.mouse,
                data.resolution,
                data.time
            );
        }

        AppControl::Continue
    }
}

fn mouse_mode_from_env() -> MouseMode {
    match std::env::var(MOUSE_MODE_ENV) {
        Ok(raw) => raw.parse::<MouseMode>().unwrap_or_else(|e| {
            log::warn!("{MOUSE_MODE_ENV}: {e}; using default");
            MouseMode::default()
        }),
        Err(_) => MouseMode::default(),
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let runtime = RuntimeConfig {
        title: "shaderpad".to_string(),
        initial_size: LogicalSize::new(640.0, 480.0),
    };
    let viewport = Viewport::new(
        runtime.initial_size.width as f32,
        runtime.initial_size.height as f32,
    );

    let sketch = SketchConfig::default().with_mouse_mode(mouse_mode_from_env());
    log::info!("starting shaderpad studio ({:?} mouse)", sketch.mouse_mode);

    Runtime::run(runtime, Studio::new(sketch, viewport))
}
