//! Leaf analyzers: independently testable, no dependency on each other.

pub mod options_flow;
pub mod sentiment;
pub mod support_resistance;

pub use options_flow::{OptionsFlowAnalyzer, OptionsFlowConfig};
pub use sentiment::{HeadlineScorer, VaderScorer};
pub use support_resistance::{ProximityCheck, SrConfig, SupportResistanceDetector};
