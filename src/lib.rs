//! Inventory Indicators
//!
//! Watches the player's inventory on every container change and game tick and
//! exposes two flags, "inventory is full" and "inventory holds an item matching
//! the configured names", which overlays draw as on-screen cues.

pub mod config;
pub mod host;
pub mod inventory;
pub mod logging;
pub mod overlay;
pub mod plugin;
pub mod state;
pub mod types;
pub mod utils;

pub use inventory::{InventoryStateEvaluator, NamePatternList, NameResolver};
pub use overlay::{IndicatorPresenter, OverlaySurface};
pub use plugin::{HostEvent, InventoryIndicatorsPlugin};
pub use types::{IndicatorState, InventorySnapshot, ItemSlot};
