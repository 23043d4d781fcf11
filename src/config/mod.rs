//! Configuration module for the nav-trend engine.

pub mod analysis;

mod debug; // Private: callers go through crate::config::DEBUG_FLAGS style re-exports below
pub use debug::{
    PRINT_ALIGNMENT, PRINT_AXIS_BOUNDS, PRINT_CONSOLIDATION, PRINT_ENGINE_TIMINGS,
    PRINT_INDICATORS,
};

pub mod plot;
pub mod runtime;

// Re-export commonly used items
pub use analysis::{TREND, TrendConfig};
pub use plot::{AXIS, AxisConfig, TIERS, TOOLTIP, TierConfig, TooltipConfig};
pub use runtime::EngineConfig;
