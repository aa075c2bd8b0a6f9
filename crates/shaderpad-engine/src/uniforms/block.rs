use bytemuck::{Pod, Zeroable};

use super::{UniformSink, UniformValue, U_MOUSE, U_RES, U_TIME};

/// CPU mirror of the sketch uniform buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct SketchUniforms {
    pub mouse: [f32; 2],
    pub resolution: [f32; 2],
    pub time: f32,
    pub _pad: [f32; 3], // 16-byte alignment
}

/// `UniformSink` that writes into a `SketchUniforms` block.
///
/// Unknown names and mismatched value kinds are logged and dropped.
#[derive(Debug, Default)]
pub struct UniformBlock {
    data: SketchUniforms,
    dirty: bool,
}

impl UniformBlock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn data(&self) -> &SketchUniforms {
        &self.data
    }

    /// Raw bytes ready for a buffer upload.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.data)
    }

    /// Returns whether anything was written since the last call, and resets the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl UniformSink for UniformBlock {
    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        match (name, value) {
            (U_MOUSE, UniformValue::Vec2(v)) => self.data.mouse = v,
            (U_RES, UniformValue::Vec2(v)) => self.data.resolution = v,
            (U_TIME, UniformValue::Float(t)) => self.data.time = t,
            _ => {
                log::warn!("ignoring uniform write {name} = {value:?}");
                return;
            }
        }
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_32_bytes() {
        assert_eq!(std::mem::size_of::<SketchUniforms>(), 32);
        assert_eq!(UniformBlock::new().bytes().len(), 32);
    }

    #[test]
    fn writes_land_in_fields() {
        let mut block = UniformBlock::new();
        block.set_uniform(U_MOUSE, UniformValue::Vec2([0.5, -0.5]));
        block.set_uniform(U_RES, UniformValue::Vec2([640.0, 480.0]));
        block.set_uniform(U_TIME, UniformValue::Float(1.25));

        let data = block.data();
        assert_eq!(data.mouse, [0.5, -0.5]);
        assert_eq!(data.resolution, [640.0, 480.0]);
        assert_eq!(data.time, 1.25);

        let floats: &[f32] = bytemuck::cast_slice(block.bytes());
        assert_eq!(&floats[..5], &[0.5, -0.5, 640.0, 480.0, 1.25]);
    }

    #[test]
    fn dirty_flag_resets() {
        let mut block = UniformBlock::new();
        assert!(!block.take_dirty());
        block.set_uniform(U_TIME, UniformValue::Float(1.0));
        assert!(block.take_dirty());
        assert!(!block.take_dirty());
    }

    #[test]
    fn unknown_or_mismatched_writes_are_dropped() {
        let mut block = UniformBlock::new();
        block.set_uniform("uColor", UniformValue::Float(1.0));
        block.set_uniform(U_TIME, UniformValue::Vec2([1.0, 2.0]));
        assert!(!block.take_dirty());
        assert_eq!(*block.data(), SketchUniforms::default());
    }
}
