use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::Config;
use crate::inventory::{InventoryStateEvaluator, NameResolver};
use crate::overlay::{IndicatorKind, IndicatorPresenter, OverlaySurface};
use crate::state::{IndicatorReader, IndicatorStore};
use crate::types::{ContainerId, IndicatorState, InventorySnapshot};

/// Events delivered by the host client
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// A container's contents changed; carries that container's snapshot
    ContainerChanged {
        container: ContainerId,
        snapshot: InventorySnapshot,
    },
    /// A game tick, with the current player inventory
    GameTick { snapshot: InventorySnapshot },
    /// The user edited the configuration
    ConfigChanged(Config),
}

/// Overlays the plugin adds to the host's overlay manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayLayer {
    /// Drawn over the game scene
    Scene,
    /// Drawn over the inventory panel
    Inventory,
}

impl OverlayLayer {
    pub fn indicator(&self) -> IndicatorKind {
        match self {
            OverlayLayer::Scene => IndicatorKind::FullInventory,
            OverlayLayer::Inventory => IndicatorKind::ContainsMatch,
        }
    }
}

/// Inventory Indicators plugin
///
/// Routes host events to the evaluator and runs the presenter over the
/// registered overlays on each render pass.
pub struct InventoryIndicatorsPlugin<R> {
    config: Arc<RwLock<Config>>,
    evaluator: InventoryStateEvaluator,
    reader: IndicatorReader,
    presenter: IndicatorPresenter,
    resolver: R,
    overlays: Vec<OverlayLayer>,
}

impl<R: NameResolver> InventoryIndicatorsPlugin<R> {
    pub fn new(config: Config, resolver: R) -> Self {
        let store = IndicatorStore::new();
        let reader = store.reader();

        Self {
            config: Arc::new(RwLock::new(config)),
            evaluator: InventoryStateEvaluator::new(store),
            reader,
            presenter: IndicatorPresenter::new(),
            resolver,
            overlays: Vec::new(),
        }
    }

    pub fn start_up(&mut self) {
        self.evaluator.store().reset();
        self.overlays = vec![OverlayLayer::Scene, OverlayLayer::Inventory];
        info!("Inventory Indicators started");
    }

    pub fn shut_down(&mut self) {
        self.overlays.clear();
        info!("Inventory Indicators stopped");
    }

    pub fn is_running(&self) -> bool {
        !self.overlays.is_empty()
    }

    /// Latest indicator flags
    pub fn state(&self) -> IndicatorState {
        self.reader.get()
    }

    pub fn reader(&self) -> IndicatorReader {
        self.reader.clone()
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    pub fn handle(&mut self, event: HostEvent) {
        match event {
            HostEvent::ContainerChanged {
                container: ContainerId::Inventory,
                snapshot,
            } => {
                let config = self.config.read();
                self.evaluator.on_inventory_changed(&snapshot, &config);
            }
            HostEvent::ContainerChanged { container, .. } => {
                debug!("Ignoring change to container {:?}", container);
            }
            HostEvent::GameTick { snapshot } => {
                let config = self.config.read();
                self.evaluator.on_tick(&snapshot, &config, &self.resolver);
            }
            HostEvent::ConfigChanged(new_config) => {
                info!(
                    "Configuration changed (full: {}, contain: {}, patterns: {:?})",
                    new_config.display_full,
                    new_config.display_contain,
                    new_config.contain_patterns()
                );
                *self.config.write() = new_config;
            }
        }
    }

    /// One render pass over the registered overlays; returns indicators drawn
    pub fn render(&self, surface: &mut dyn OverlaySurface) -> usize {
        let state = self.reader.get();
        let config = self.config.read();

        self.overlays
            .iter()
            .filter(|layer| {
                self.presenter
                    .render_indicator(layer.indicator(), &state, &config, &mut *surface)
            })
            .count()
    }
}
