use serde::Serialize;
use tracing::warn;

use super::surface::{Color, DrawCommand, OverlaySurface, Rect};
use crate::config::{Config, IndicatorStyle};
use crate::types::IndicatorState;

/// Gap between an indicator box and its label
const LABEL_SPACING: i32 = 2;

/// The two on-screen cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IndicatorKind {
    /// Every inventory slot is occupied
    FullInventory,
    /// An inventory item matches the configured name patterns
    ContainsMatch,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 2] = [IndicatorKind::FullInventory, IndicatorKind::ContainsMatch];

    pub fn is_enabled(&self, config: &Config) -> bool {
        match self {
            IndicatorKind::FullInventory => config.display_full,
            IndicatorKind::ContainsMatch => config.display_contain,
        }
    }

    pub fn is_active(&self, state: &IndicatorState) -> bool {
        match self {
            IndicatorKind::FullInventory => state.is_full,
            IndicatorKind::ContainsMatch => state.contains_match,
        }
    }

    pub fn style<'a>(&self, config: &'a Config) -> &'a IndicatorStyle {
        match self {
            IndicatorKind::FullInventory => &config.full_indicator,
            IndicatorKind::ContainsMatch => &config.contain_indicator,
        }
    }
}

/// Commands that draw one indicator in its configured style
pub fn indicator_commands(style: &IndicatorStyle) -> Vec<DrawCommand> {
    let color = Color(style.color);
    let bounds = Rect {
        x: style.x,
        y: style.y,
        width: style.width,
        height: style.height,
    };

    let mut commands = vec![DrawCommand::FillRect { bounds, color }];
    if let Some(label) = style.label.as_deref().filter(|l| !l.trim().is_empty()) {
        // Config values are unchecked; clamp at the screen coordinate limits
        let width = i32::try_from(bounds.width).unwrap_or(i32::MAX);
        let height = i32::try_from(bounds.height).unwrap_or(i32::MAX);
        commands.push(DrawCommand::Text {
            x: bounds.x.saturating_add(width).saturating_add(LABEL_SPACING),
            y: bounds.y.saturating_add(height),
            text: label.to_string(),
            color,
        });
    }
    commands
}

/// Turns indicator flags into draw calls
///
/// Stateless: every pass is decided from `(state, config)` alone. Draw
/// failures are logged and the affected indicator is skipped for that pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndicatorPresenter;

impl IndicatorPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Indicators that should be visible for this state and config
    pub fn visible(&self, state: &IndicatorState, config: &Config) -> Vec<IndicatorKind> {
        IndicatorKind::ALL
            .into_iter()
            .filter(|kind| kind.is_enabled(config) && kind.is_active(state))
            .collect()
    }

    /// Draw one indicator; returns whether it was fully drawn
    pub fn render_indicator(
        &self,
        kind: IndicatorKind,
        state: &IndicatorState,
        config: &Config,
        surface: &mut dyn OverlaySurface,
    ) -> bool {
        if !(kind.is_enabled(config) && kind.is_active(state)) {
            return false;
        }

        let style = kind.style(config);
        if style.width == 0 || style.height == 0 || Color(style.color).alpha() == 0 {
            return false;
        }

        for command in indicator_commands(style) {
            if let Err(e) = surface.draw(&command) {
                warn!("[Overlay] Skipping {:?} indicator this frame: {}", kind, e);
                return false;
            }
        }
        true
    }

    /// Draw every visible indicator; returns how many were drawn
    pub fn render(
        &self,
        state: &IndicatorState,
        config: &Config,
        surface: &mut dyn OverlaySurface,
    ) -> usize {
        IndicatorKind::ALL
            .into_iter()
            .filter(|kind| self.render_indicator(*kind, state, config, &mut *surface))
            .count()
    }
}
