//! Shader uniform plumbing.
//!
//! Sketches write named values through `UniformSink`. Writes are fire-and-forget;
//! what happens to them (GPU upload, logging, test capture) is up to the sink.

mod block;

pub use block::{SketchUniforms, UniformBlock};

/// Pointer position in shader space.
pub const U_MOUSE: &str = "uMouse";
/// Surface resolution in logical pixels.
pub const U_RES: &str = "uRes";
/// Seconds since the sketch started.
pub const U_TIME: &str = "uTime";

/// Value written to a uniform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2([f32; 2]),
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        UniformValue::Float(value)
    }
}

impl From<crate::coords::Vec2> for UniformValue {
    fn from(value: crate::coords::Vec2) -> Self {
        UniformValue::Vec2(value.into())
    }
}

/// Destination for uniform writes.
pub trait UniformSink {
    fn set_uniform(&mut self, name: &str, value: UniformValue);
}

impl<S: UniformSink + ?Sized> UniformSink for &mut S {
    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        (**self).set_uniform(name, value);
    }
}

/// Records every write in order. Handy for tests and replay.
impl UniformSink for Vec<(String, UniformValue)> {
    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        self.push((name.to_string(), value));
    }
}
