pub mod driver;
pub mod scenario;

pub use driver::HostDriver;
pub use scenario::{Frame, Scenario, ScenarioError, ScenarioPlayer, SlotSpec};
