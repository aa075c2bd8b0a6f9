//! Time subsystem.
//!
//! One `SketchClock` per window; call `tick()` once per frame to obtain `FrameTime`.

mod clock;

pub use clock::{FrameTime, SketchClock};
