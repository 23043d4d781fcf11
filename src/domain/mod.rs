// Domain types and value objects
pub mod calendar_mode;
pub mod raw_point;
pub mod trend_span;

// Re-export commonly used types
pub use calendar_mode::CalendarMode;
pub use raw_point::{InstrumentSeries, RawPoint, validate_raw_series};
pub use trend_span::{Acceleration, Direction, TrendSpan};
