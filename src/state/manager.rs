use crate::types::IndicatorState;
use parking_lot::RwLock;
use std::sync::Arc;

/// Shared holder of the latest [`IndicatorState`]
///
/// The state is replaced as a whole value on each publish, so a reader on
/// another thread never sees one flag updated without the other.
#[derive(Clone, Default)]
pub struct IndicatorStore {
    state: Arc<RwLock<IndicatorState>>,
}

impl IndicatorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> IndicatorState {
        *self.state.read()
    }

    /// Read-only handle for consumers such as the overlays
    pub fn reader(&self) -> IndicatorReader {
        IndicatorReader {
            state: Arc::clone(&self.state),
        }
    }

    /// Swap in the result of `update` applied to the current state
    pub fn publish<F>(&self, update: F) -> IndicatorState
    where
        F: FnOnce(IndicatorState) -> IndicatorState,
    {
        let mut guard = self.state.write();
        let old_state = *guard;
        let new_state = update(old_state);
        if old_state != new_state {
            tracing::info!("Indicator state changed: {:?} -> {:?}", old_state, new_state);
            *guard = new_state;
        }
        new_state
    }

    /// Back to `{ is_full: false, contains_match: false }`
    pub fn reset(&self) {
        self.publish(|_| IndicatorState::default());
    }
}

/// Read-only view of an [`IndicatorStore`]
#[derive(Clone)]
pub struct IndicatorReader {
    state: Arc<RwLock<IndicatorState>>,
}

impl IndicatorReader {
    pub fn get(&self) -> IndicatorState {
        *self.state.read()
    }
}
