/// Item name resolution
///
/// Display names come from the host's item metadata, which may not know
/// every id. Callers treat a failed lookup as "this slot does not match".

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::types::ItemId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unknown item id {0}")]
    UnknownItem(ItemId),

    #[error("item metadata unavailable: {0}")]
    Unavailable(String),
}

/// Looks up the display name of an item id
pub trait NameResolver {
    fn resolve_name(&self, item_id: ItemId) -> Result<String, ResolveError>;
}

impl<F> NameResolver for F
where
    F: Fn(ItemId) -> Result<String, ResolveError>,
{
    fn resolve_name(&self, item_id: ItemId) -> Result<String, ResolveError> {
        self(item_id)
    }
}

/// In-memory id to name table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ItemCatalog {
    names: HashMap<ItemId, String>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item_id: ItemId, name: impl Into<String>) {
        self.names.insert(item_id, name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(ItemId, String)> for ItemCatalog {
    fn from_iter<I: IntoIterator<Item = (ItemId, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl NameResolver for ItemCatalog {
    fn resolve_name(&self, item_id: ItemId) -> Result<String, ResolveError> {
        self.names
            .get(&item_id)
            .cloned()
            .ok_or(ResolveError::UnknownItem(item_id))
    }
}
