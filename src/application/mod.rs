pub mod chart_service;
pub mod signal_feed;

pub use chart_service::{ChartService, RenderSummary};
pub use signal_feed::{SignalFeed, TickOutcome};
