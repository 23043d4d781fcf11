// Series models produced by the engine
// Pure computation outputs: recomputed per request, never mutated in place

pub mod series;

// Re-export key types for convenience
pub use series::{
    AlignedPoint, AlignedSeries, AxisBounds, NormalizedPoint, NormalizedSeries, SeriesRole,
};
