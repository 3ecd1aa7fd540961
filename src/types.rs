use serde::{Deserialize, Serialize};

/// Game item identifier as reported by the host client
pub type ItemId = i32;

/// Item id the host uses to mark an empty slot
pub const EMPTY_ITEM_ID: ItemId = -1;

/// Fixed number of slots in the player inventory
pub const INVENTORY_CAPACITY: usize = 28;

/// Containers the host reports changes for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerId {
    Inventory,
    Bank,
    Other(u32),
}

/// A single container slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSlot {
    #[serde(default)]
    pub item_id: Option<ItemId>,

    #[serde(default)]
    pub quantity: i32,
}

impl ItemSlot {
    pub fn empty() -> Self {
        Self {
            item_id: None,
            quantity: 0,
        }
    }

    pub fn new(item_id: ItemId, quantity: i32) -> Self {
        Self {
            item_id: Some(item_id),
            quantity,
        }
    }

    /// Id of the held item, or None for an empty slot
    pub fn occupied_id(&self) -> Option<ItemId> {
        self.item_id.filter(|id| *id != EMPTY_ITEM_ID)
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied_id().is_some()
    }
}

impl Default for ItemSlot {
    fn default() -> Self {
        Self::empty()
    }
}

/// Point-in-time view of a container's slots, delivered by the host with an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySnapshot {
    slots: Vec<ItemSlot>,
    capacity: usize,
}

impl InventorySnapshot {
    /// Snapshot of the player inventory (fixed capacity of 28)
    pub fn inventory(slots: Vec<ItemSlot>) -> Self {
        Self::with_capacity(slots, INVENTORY_CAPACITY)
    }

    /// Snapshot of a container whose declared maximum size is `capacity`
    pub fn with_capacity(slots: Vec<ItemSlot>, capacity: usize) -> Self {
        Self { slots, capacity }
    }

    pub fn empty_inventory() -> Self {
        Self::inventory(vec![ItemSlot::empty(); INVENTORY_CAPACITY])
    }

    pub fn slots(&self) -> &[ItemSlot] {
        &self.slots
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Occupied slots in snapshot order, as (slot index, item id)
    pub fn occupied(&self) -> impl Iterator<Item = (usize, ItemId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.occupied_id().map(|id| (i, id)))
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }
}

/// The two indicator flags consumed by the overlays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndicatorState {
    pub is_full: bool,
    pub contains_match: bool,
}

impl IndicatorState {
    pub fn with_full(self, is_full: bool) -> Self {
        Self { is_full, ..self }
    }

    pub fn with_contains_match(self, contains_match: bool) -> Self {
        Self {
            contains_match,
            ..self
        }
    }
}
