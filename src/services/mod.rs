//! External-world seams: data providers, signal persistence, delivery.

pub mod notify;
pub mod providers;
pub mod store;

pub use notify::{format_cycle_summary, send_with_retry, LogNotificationChannel, NotificationChannel};
pub use providers::{
    FixtureHeadlineProvider, FixtureOptionsProvider, FixturePriceProvider, HeadlineProvider,
    OptionsChainProvider, PriceSeriesProvider,
};
pub use store::{JsonlSignalStore, MemorySignalStore, SignalStore};
