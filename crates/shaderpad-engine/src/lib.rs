//! Shaderpad engine crate.
//!
//! Pointer-to-shader-space mapping, input translation, uniform plumbing and a
//! small winit runtime for creative-coding sketches.

pub mod coords;
pub mod input;
pub mod uniforms;
pub mod sketch;
pub mod time;
pub mod core;
pub mod window;

pub mod logging;
