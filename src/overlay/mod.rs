pub mod presenter;
pub mod surface;

pub use presenter::{indicator_commands, IndicatorKind, IndicatorPresenter};
pub use surface::{Color, DrawCommand, DrawError, LogSurface, OverlaySurface, RecordingSurface, Rect};
