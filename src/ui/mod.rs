// Render-time geometry helpers. Pure functions of pointer and viewport; no UI toolkit here.
pub mod tooltip;

pub use tooltip::{Point, Side, Size, TooltipPlacement, TooltipPlacer, place_tooltip};
