//! Shared data models spanning the pipeline layers.

pub mod levels;
pub mod market;
pub mod options;
pub mod signal;

pub use levels::{ExtremaLevel, LevelKind, LevelStrength};
pub use market::{PriceBar, PriceSeries, SymbolConfig, VolatilityBucket};
pub use options::{
    ExpirationChain, FlowSignal, IvStatus, OptionContract, OptionsMetrics, OptionsSnapshot,
};
pub use signal::{
    MarketRegimeState, SignalRecord, SignalType, StageOutcome, StageVerdict, StoredSignal,
};
