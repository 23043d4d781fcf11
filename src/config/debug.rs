//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. All of them are further gated by `cfg(debug_assertions)`.

/// Emit a per-series summary after calendar alignment (days emitted, leading gap).
pub const PRINT_ALIGNMENT: bool = false;

/// Emit the computed y-axis bounds for the primary series.
pub const PRINT_AXIS_BOUNDS: bool = false;

/// Emit accepted / rejected counts from the span consolidator.
pub const PRINT_CONSOLIDATION: bool = false;

/// Emit wall-clock timings for each `build_chart` call.
pub const PRINT_ENGINE_TIMINGS: bool = false;

/// Emit the indicator snapshot as it is computed.
pub const PRINT_INDICATORS: bool = false;
