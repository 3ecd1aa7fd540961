/// Overlay drawing surface
///
/// The host owns the actual canvas. The presenter only hands it
/// [`DrawCommand`]s; how they reach the screen is up to the surface.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Screen-space rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub fn alpha(&self) -> u8 {
        self.0[3]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect { bounds: Rect, color: Color },
    Text { x: i32, y: i32, text: String, color: Color },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("draw call rejected: {0}")]
    Rejected(String),
}

pub trait OverlaySurface {
    fn draw(&mut self, command: &DrawCommand) -> Result<(), DrawError>;
}

/// Surface that records every command, useful for inspection
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OverlaySurface for RecordingSurface {
    fn draw(&mut self, command: &DrawCommand) -> Result<(), DrawError> {
        self.commands.push(command.clone());
        Ok(())
    }
}

/// Surface that writes the frame to the log when it changes
#[derive(Debug, Default)]
pub struct LogSurface {
    frame: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
}

impl LogSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the current frame, logging it if it differs from the previous one
    pub fn present(&mut self) {
        if self.frame != self.last_frame {
            let rendered = serde_json::to_string(&self.frame).unwrap_or_default();
            info!("[Overlay] {}", rendered);
        }
        self.last_frame = std::mem::take(&mut self.frame);
    }
}

impl OverlaySurface for LogSurface {
    fn draw(&mut self, command: &DrawCommand) -> Result<(), DrawError> {
        self.frame.push(command.clone());
        Ok(())
    }
}
