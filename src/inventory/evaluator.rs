/// Inventory state evaluator
///
/// Recomputes the indicator flags from the snapshot delivered with each host
/// event. Each flag is only touched by its own event and only while its
/// feature is enabled; a disabled feature keeps its last value.

use tracing::{debug, trace};

use super::patterns::NamePatternList;
use super::resolver::NameResolver;
use crate::config::Config;
use crate::state::IndicatorStore;
use crate::types::{IndicatorState, InventorySnapshot, ItemId};
use crate::utils::normalize_name;

/// A slot whose item name contains one of the configured patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    pub slot: usize,
    pub item_id: ItemId,
    pub item_name: String,
    pub pattern: String,
}

/// True iff every slot of the container is occupied
pub fn is_full(snapshot: &InventorySnapshot) -> bool {
    snapshot.occupied_count() == snapshot.capacity()
}

/// First slot/pattern pair that matches, scanning slots in order
///
/// Stops at the first match: later slots are never resolved. Slots whose
/// name cannot be resolved are skipped.
pub fn find_match<R>(
    snapshot: &InventorySnapshot,
    patterns: &NamePatternList,
    resolver: &R,
) -> Option<PatternMatch>
where
    R: NameResolver + ?Sized,
{
    if !patterns.has_matchable() {
        return None;
    }

    for (slot, item_id) in snapshot.occupied() {
        let item_name = match resolver.resolve_name(item_id) {
            Ok(name) => name,
            Err(e) => {
                debug!("Skipping slot {} while matching: {}", slot, e);
                continue;
            }
        };

        let normalized = normalize_name(&item_name);
        if let Some(pattern) = patterns.first_match(&normalized) {
            return Some(PatternMatch {
                slot,
                item_id,
                item_name,
                pattern: pattern.to_string(),
            });
        }
    }

    None
}

/// Owns the write side of the indicator state
pub struct InventoryStateEvaluator {
    store: IndicatorStore,
}

impl InventoryStateEvaluator {
    pub fn new(store: IndicatorStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &IndicatorStore {
        &self.store
    }

    pub fn state(&self) -> IndicatorState {
        self.store.get()
    }

    /// Handle a container change for the player inventory
    pub fn on_inventory_changed(&self, snapshot: &InventorySnapshot, config: &Config) {
        if !config.display_full {
            return;
        }

        let full = is_full(snapshot);
        trace!(
            "Inventory holds {}/{} items",
            snapshot.occupied_count(),
            snapshot.capacity()
        );
        self.store.publish(|s| s.with_full(full));
    }

    /// Handle a game tick, re-deriving the patterns from the live config
    pub fn on_tick<R>(&self, snapshot: &InventorySnapshot, config: &Config, resolver: &R)
    where
        R: NameResolver + ?Sized,
    {
        if !config.display_contain {
            return;
        }

        let patterns = NamePatternList::parse(config.contain_patterns());
        let found = find_match(snapshot, &patterns, resolver);
        match &found {
            Some(m) => debug!(
                "The inventory contains: {} (slot {}, '{}')",
                m.pattern, m.slot, m.item_name
            ),
            None => debug!("The inventory does not contain: {:?}", patterns.tokens()),
        }

        let contains = found.is_some();
        self.store.publish(|s| s.with_contains_match(contains));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::resolver::{ItemCatalog, ResolveError};
    use crate::types::{ItemSlot, EMPTY_ITEM_ID, INVENTORY_CAPACITY};
    use std::cell::Cell;

    const SHARK: ItemId = 385;
    const LOBSTER: ItemId = 379;
    const RUNE_SCIMITAR: ItemId = 1333;
    const COINS: ItemId = 995;

    fn catalog() -> ItemCatalog {
        let mut catalog = ItemCatalog::new();
        catalog.insert(SHARK, "Shark meat");
        catalog.insert(LOBSTER, " lobster ");
        catalog.insert(RUNE_SCIMITAR, "Rune scimitar");
        catalog.insert(COINS, "Coins");
        catalog
    }

    fn config(patterns: &str) -> Config {
        Config {
            contain_name: Some(patterns.to_string()),
            ..Config::default()
        }
    }

    fn inventory_with(items: &[ItemId]) -> InventorySnapshot {
        let mut slots = vec![ItemSlot::empty(); INVENTORY_CAPACITY];
        for (slot, id) in slots.iter_mut().zip(items) {
            *slot = ItemSlot::new(*id, 1);
        }
        InventorySnapshot::inventory(slots)
    }

    fn inventory_with_count(count: usize) -> InventorySnapshot {
        inventory_with(&vec![COINS; count])
    }

    fn evaluator() -> InventoryStateEvaluator {
        InventoryStateEvaluator::new(IndicatorStore::new())
    }

    #[test]
    fn test_full_only_at_exact_capacity() {
        let evaluator = evaluator();
        let config = Config::default();

        for count in [0, 1, 27] {
            evaluator.on_inventory_changed(&inventory_with_count(count), &config);
            assert!(!evaluator.state().is_full, "{} items is not full", count);
        }

        evaluator.on_inventory_changed(&inventory_with_count(INVENTORY_CAPACITY), &config);
        assert!(evaluator.state().is_full);
    }

    #[test]
    fn test_sentinel_ids_do_not_count_as_occupied() {
        let mut slots = vec![ItemSlot::new(COINS, 1); INVENTORY_CAPACITY];
        slots[5] = ItemSlot::new(EMPTY_ITEM_ID, 0);
        assert!(!is_full(&InventorySnapshot::inventory(slots)));
    }

    #[test]
    fn test_capacity_follows_container_size() {
        let slots = vec![ItemSlot::new(COINS, 1); 14];
        assert!(is_full(&InventorySnapshot::with_capacity(slots.clone(), 14)));
        assert!(!is_full(&InventorySnapshot::with_capacity(slots, 16)));
    }

    #[test]
    fn test_inventory_changed_is_idempotent() {
        let evaluator = evaluator();
        let config = Config::default();
        let snapshot = inventory_with_count(INVENTORY_CAPACITY);

        evaluator.on_inventory_changed(&snapshot, &config);
        let first = evaluator.state();
        evaluator.on_inventory_changed(&snapshot, &config);
        assert_eq!(evaluator.state(), first);
    }

    #[test]
    fn test_display_full_disabled_freezes_flag() {
        let evaluator = evaluator();
        let mut config = Config::default();
        evaluator.on_inventory_changed(&inventory_with_count(INVENTORY_CAPACITY), &config);
        assert!(evaluator.state().is_full);

        config.display_full = false;
        evaluator.on_inventory_changed(&inventory_with_count(3), &config);
        assert!(evaluator.state().is_full);
    }

    #[test]
    fn test_inventory_changed_leaves_contains_match_alone() {
        let evaluator = evaluator();
        evaluator.on_tick(&inventory_with(&[SHARK]), &config("shark"), &catalog());
        evaluator.on_inventory_changed(&inventory_with_count(2), &config("shark"));
        assert!(evaluator.state().contains_match);
    }

    #[test]
    fn test_tick_matches_substring_of_any_slot() {
        let evaluator = evaluator();
        evaluator.on_tick(
            &inventory_with(&[COINS, LOBSTER, SHARK]),
            &config("rune.shark"),
            &catalog(),
        );
        assert!(evaluator.state().contains_match);
    }

    #[test]
    fn test_tick_without_match_clears_flag() {
        let evaluator = evaluator();
        evaluator.on_tick(&inventory_with(&[SHARK]), &config("shark"), &catalog());
        assert!(evaluator.state().contains_match);

        evaluator.on_tick(&inventory_with(&[COINS]), &config("shark"), &catalog());
        assert!(!evaluator.state().contains_match);
    }

    #[test]
    fn test_display_contain_disabled_freezes_flag() {
        let evaluator = evaluator();
        evaluator.on_tick(&inventory_with(&[SHARK]), &config("shark"), &catalog());

        let mut disabled = config("shark");
        disabled.display_contain = false;
        evaluator.on_tick(&inventory_with(&[]), &disabled, &catalog());
        assert!(evaluator.state().contains_match);

        evaluator.store().reset();
        evaluator.on_tick(&inventory_with(&[SHARK]), &disabled, &catalog());
        assert!(!evaluator.state().contains_match);
    }

    #[test]
    fn test_blank_pattern_never_matches() {
        let evaluator = evaluator();
        evaluator.store().publish(|s| s.with_contains_match(true));
        evaluator.on_tick(&inventory_with(&[SHARK, COINS]), &config(""), &catalog());
        assert!(!evaluator.state().contains_match);

        evaluator.on_tick(&inventory_with(&[SHARK]), &config(" . ."), &catalog());
        assert!(!evaluator.state().contains_match);
    }

    #[test]
    fn test_unset_pattern_string_never_matches() {
        let evaluator = evaluator();
        let config = Config {
            contain_name: None,
            ..Config::default()
        };
        evaluator.on_tick(&inventory_with(&[SHARK]), &config, &catalog());
        assert!(!evaluator.state().contains_match);
    }

    #[test]
    fn test_empty_inventory_resolves_nothing() {
        let calls = Cell::new(0);
        let resolver = |id: ItemId| {
            calls.set(calls.get() + 1);
            catalog().resolve_name(id)
        };

        let evaluator = evaluator();
        evaluator.on_tick(&inventory_with(&[]), &config("shark"), &resolver);
        assert!(!evaluator.state().contains_match);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_matching_ignores_case_and_whitespace() {
        let names = ItemCatalog::from_iter([
            (1, " lobster ".to_string()),
            (2, "LOBSTER".to_string()),
            (3, "Raw Lob ster".to_string()),
        ]);
        let patterns = NamePatternList::parse("Lobster");

        for id in [1, 2, 3] {
            assert!(
                find_match(&inventory_with(&[id]), &patterns, &names).is_some(),
                "item {} should match",
                id
            );
        }
    }

    #[test]
    fn test_first_match_stops_resolving() {
        let calls = Cell::new(0);
        let resolver = |id: ItemId| {
            calls.set(calls.get() + 1);
            catalog().resolve_name(id)
        };

        let snapshot = inventory_with(&[COINS, SHARK, LOBSTER, RUNE_SCIMITAR]);
        let found = find_match(&snapshot, &NamePatternList::parse("lobster.shark"), &resolver)
            .expect("shark should match");

        assert_eq!(found.slot, 1);
        assert_eq!(found.item_id, SHARK);
        assert_eq!(found.pattern, "shark");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_unresolvable_slot_is_skipped() {
        let resolver = |id: ItemId| {
            if id == SHARK {
                Err(ResolveError::Unavailable("definitions not loaded".into()))
            } else {
                catalog().resolve_name(id)
            }
        };

        let evaluator = evaluator();
        evaluator.on_tick(&inventory_with(&[SHARK, 4151]), &config("shark"), &resolver);
        assert!(!evaluator.state().contains_match);

        evaluator.on_tick(&inventory_with(&[SHARK, LOBSTER]), &config("lob"), &resolver);
        assert!(evaluator.state().contains_match);
    }

    #[test]
    fn test_tick_leaves_full_flag_alone() {
        let evaluator = evaluator();
        evaluator.on_inventory_changed(&inventory_with_count(INVENTORY_CAPACITY), &Config::default());
        evaluator.on_tick(&inventory_with(&[]), &config("shark"), &catalog());
        assert!(evaluator.state().is_full);
    }
}
