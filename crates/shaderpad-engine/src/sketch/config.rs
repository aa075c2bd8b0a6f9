use std::str::FromStr;

use thiserror::Error;

use crate::coords::Vec2;

/// How pointer input drives `uMouse`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum MouseMode {
    /// Press-drag-release moves an accumulated position; committed on release.
    #[default]
    Drag,
    /// Every pointer move sends the absolute position mapped to `[-1, 1]`.
    Hover,
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("unknown mouse mode {0:?}, expected \"drag\" or \"hover\"")]
pub struct ParseMouseModeError(pub String);

impl FromStr for MouseMode {
    type Err = ParseMouseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drag" => Ok(MouseMode::Drag),
            "hover" => Ok(MouseMode::Hover),
            _ => Err(ParseMouseModeError(s.to_string())),
        }
    }
}

/// Sketch behavior configuration.
#[derive(Debug, Clone, Default)]
pub struct SketchConfig {
    pub mouse_mode: MouseMode,
    /// Starting value of the accumulated mouse state.
    pub initial_mouse: Vec2,
}

impl SketchConfig {
    pub fn with_mouse_mode(mut self, mode: MouseMode) -> Self {
        self.mouse_mode = mode;
        self
    }

    pub fn with_initial_mouse(mut self, mouse: Vec2) -> Self {
        self.initial_mouse = mouse;
        self
    }
}
