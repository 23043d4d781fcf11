pub mod core;
pub mod messages;

// Re-export key components
pub use core::TrendEngine;
pub use messages::{ChartPayload, ChartRequest, TieredSpan};
