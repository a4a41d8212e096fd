//! Command implementations

pub mod categories;
pub mod play;
pub mod simulate;

pub use categories::run_categories;
pub use play::run_play;
pub use simulate::{SimulateConfig, SimulateResult, print_simulation_result, run_simulation};
