/// Recorded host sessions
///
/// A scenario is a JSON file describing an item catalog and a sequence of
/// container frames. Replaying it produces the same events a live client
/// would deliver: a container change for each frame followed by game ticks.
///
/// ```json
/// {
///   "items": { "385": "Shark", "995": "Coins" },
///   "frames": [
///     { "slots": [995, null, 385], "ticks": 3 },
///     { "container": "bank", "slots": [995], "capacity": 800 }
///   ]
/// }
/// ```

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::inventory::ItemCatalog;
use crate::plugin::HostEvent;
use crate::types::{ContainerId, InventorySnapshot, ItemId, ItemSlot, INVENTORY_CAPACITY};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("frame {frame} has {slots} slots but capacity {capacity}")]
    TooManySlots {
        frame: usize,
        slots: usize,
        capacity: usize,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub items: ItemCatalog,

    #[serde(default)]
    pub frames: Vec<Frame>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Frame {
    #[serde(default = "default_container")]
    pub container: ContainerId,

    #[serde(default)]
    pub slots: Vec<SlotSpec>,

    /// Declared size of the container; the player inventory is always 28
    #[serde(default)]
    pub capacity: Option<usize>,

    /// Game ticks to run after this frame is applied
    #[serde(default = "default_ticks")]
    pub ticks: u32,
}

/// A slot written either as a bare id (`385`, `null`, `-1`) or in full
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum SlotSpec {
    Id(Option<ItemId>),
    Slot(ItemSlot),
}

impl From<SlotSpec> for ItemSlot {
    fn from(spec: SlotSpec) -> Self {
        match spec {
            SlotSpec::Id(Some(id)) => ItemSlot::new(id, 1),
            SlotSpec::Id(None) => ItemSlot::empty(),
            SlotSpec::Slot(slot) => slot,
        }
    }
}

fn default_container() -> ContainerId {
    ContainerId::Inventory
}

fn default_ticks() -> u32 {
    1
}

impl Frame {
    fn capacity(&self) -> usize {
        match self.container {
            ContainerId::Inventory => INVENTORY_CAPACITY,
            _ => self.capacity.unwrap_or(self.slots.len()),
        }
    }

    /// Snapshot padded with empty slots up to the container capacity
    pub fn snapshot(&self) -> InventorySnapshot {
        let capacity = self.capacity();
        let mut slots: Vec<ItemSlot> = self.slots.iter().copied().map(ItemSlot::from).collect();
        if slots.len() < capacity {
            slots.resize(capacity, ItemSlot::empty());
        }
        InventorySnapshot::with_capacity(slots, capacity)
    }
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    fn validate(&self) -> Result<(), ScenarioError> {
        for (i, frame) in self.frames.iter().enumerate() {
            if frame.slots.len() > frame.capacity() {
                return Err(ScenarioError::TooManySlots {
                    frame: i,
                    slots: frame.slots.len(),
                    capacity: frame.capacity(),
                });
            }
        }
        Ok(())
    }
}

/// Replays scenario frames one game tick at a time
pub struct ScenarioPlayer {
    frames: VecDeque<Frame>,
    inventory: InventorySnapshot,
    pending_ticks: u32,
}

impl ScenarioPlayer {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames: frames.into(),
            inventory: InventorySnapshot::empty_inventory(),
            pending_ticks: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.frames.is_empty() && self.pending_ticks == 0
    }

    /// Events for the next game tick, or None once the scenario is exhausted
    pub fn next_tick(&mut self) -> Option<Vec<HostEvent>> {
        let mut events = Vec::new();

        while self.pending_ticks == 0 {
            let frame = self.frames.pop_front()?;
            let snapshot = frame.snapshot();
            if frame.container == ContainerId::Inventory {
                self.inventory = snapshot.clone();
            }
            events.push(HostEvent::ContainerChanged {
                container: frame.container,
                snapshot,
            });
            self.pending_ticks = frame.ticks;
        }

        self.pending_ticks -= 1;
        events.push(HostEvent::GameTick {
            snapshot: self.inventory.clone(),
        });
        Some(events)
    }
}
