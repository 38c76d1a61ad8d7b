//! Numeric building blocks for the filter stages.

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;
