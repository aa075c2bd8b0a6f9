use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::input::platform::winit::translate_window_event;
use crate::input::InputState;
use crate::time::{FrameTime, SketchClock};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "shaderpad".to_string(),
            initial_size: LogicalSize::new(640.0, 480.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

struct WindowEntry {
    window: Window,
    input_state: InputState,
    clock: SketchClock,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    app: A,

    window: Option<WindowEntry>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, app: A) -> Self {
        Self {
            config,
            app,
            window: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        log::info!(
            "window {:?} created ({}x{} logical)",
            window.id(),
            self.config.initial_size.width,
            self.config.initial_size.height
        );

        self.window = Some(WindowEntry {
            window,
            input_state: InputState::default(),
            clock: SketchClock::default(),
        });
        Ok(())
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("failed to create initial window: {e:#}");
            self.request_exit(event_loop);
            return;
        }

        if let Some(entry) = &self.window {
            entry.window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw keeps `uTime` moving.
        if let Some(entry) = &self.window {
            entry.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let (app, window) = (&mut self.app, &mut self.window);

        let Some(entry) = window.as_mut().filter(|e| e.window.id() == window_id) else {
            return;
        };

        let mut control = app.on_window_event(window_id, &event);

        if control == AppControl::Continue {
            let scale = entry.window.scale_factor();
            if let Some(ev) = translate_window_event(scale, &entry.input_state, &event) {
                entry.input_state.apply_event(&ev);
                control = app.on_input(&ev);
            }
        }

        if control == AppControl::Continue {
            control = match &event {
                WindowEvent::CloseRequested => AppControl::Exit,

                WindowEvent::RedrawRequested => {
                    let ft: FrameTime = entry.clock.tick();
                    let mut ctx = FrameCtx {
                        window: WindowCtx {
                            id: window_id,
                            window: &entry.window,
                        },
                        input: &entry.input_state,
                        time: ft,
                    };
                    app.on_frame(&mut ctx)
                }

                _ => AppControl::Continue,
            };
        }

        if control == AppControl::Exit {
            self.window = None;
            self.request_exit(event_loop);
        }
    }
}
