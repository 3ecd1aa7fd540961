pub mod evaluator;
pub mod patterns;
pub mod resolver;

pub use evaluator::{find_match, is_full, InventoryStateEvaluator, PatternMatch};
pub use patterns::{NamePatternList, PATTERN_DELIMITER};
pub use resolver::{ItemCatalog, NameResolver, ResolveError};
