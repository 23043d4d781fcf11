// Series normalization and trend annotation algorithms
pub mod calendar_aligner;
pub mod indicators;
pub mod interval_consolidator;
pub mod return_normalizer;
pub mod segment_slopes;
pub mod slope_tier;

// Re-export commonly used types
pub use calendar_aligner::{align, align_together, align_with, shared_axis, union_range};
pub use indicators::{IndicatorSnapshot, Signal, WarningLevel, compute_indicators, max_drawdown};
pub use interval_consolidator::{consolidate, consolidate_capped};
pub use return_normalizer::{axis_bounds, normalize, normalize_with, rebase};
pub use segment_slopes::{SegmentSlopes, describe_span, segment_slopes};
pub use slope_tier::{SeverityTier, SlopeTier, classify_slope};
