pub mod categories;
pub mod outcome;

pub use categories::*;
pub use outcome::{BacktestOutcome, Outcome};
