pub mod string;

pub use string::{normalize_name, strip_whitespace};
