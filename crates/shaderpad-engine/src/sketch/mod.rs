//! Sketch driver: the glue between pointer input, time and shader uniforms.

mod config;
mod driver;

pub use config::{MouseMode, ParseMouseModeError, SketchConfig};
pub use driver::Sketch;
