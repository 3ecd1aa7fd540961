pub mod manager;

pub use manager::{IndicatorReader, IndicatorStore};
