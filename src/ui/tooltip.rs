//! Tooltip placement
//!
//! Places a measured label next to the pointer without letting it spill out of the
//! chart viewport. Each axis is solved on its own: prefer the side before the pointer
//! (left / above), then the side after it (right / below), then centre on the pointer.

use serde::{Deserialize, Serialize};

use crate::config::TOOLTIP;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Which side of the pointer the label ended up on, per axis.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left of / above the pointer
    Before,
    /// Right of / below the pointer
    After,
    Centered,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TooltipPlacement {
    /// Top-left corner of the label box
    pub position: Point,
    pub horizontal: Side,
    pub vertical: Side,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPlacer {
    pub margin: f64,
}

impl Default for TooltipPlacer {
    fn default() -> Self {
        Self {
            margin: TOOLTIP.margin,
        }
    }
}

impl TooltipPlacer {
    pub fn new(margin: f64) -> Self {
        Self { margin }
    }

    pub fn place(&self, pointer: Point, label: Size, viewport: Size) -> TooltipPlacement {
        let (x, horizontal) = self.place_axis(pointer.x, label.width, viewport.width);
        let (y, vertical) = self.place_axis(pointer.y, label.height, viewport.height);
        TooltipPlacement {
            position: Point { x, y },
            horizontal,
            vertical,
        }
    }

    fn place_axis(&self, pointer: f64, size: f64, extent: f64) -> (f64, Side) {
        let margin = self.margin;

        let (start, side) = if pointer >= size + margin {
            (pointer - size - margin, Side::Before)
        } else if extent - pointer >= size + margin {
            (pointer + margin, Side::After)
        } else {
            let lo = margin;
            let hi = extent - size - margin;
            let centered = if hi >= lo {
                (pointer - size / 2.0).clamp(lo, hi)
            } else {
                // Not enough room for the margin on both sides
                (extent - size) / 2.0
            };
            (centered, Side::Centered)
        };

        // Pointer may sit outside the viewport; never let the box leave it
        (start.min(extent - size).max(0.0), side)
    }
}

/// Place a label with the default clearance margin. Returns the label's top-left corner.
pub fn place_tooltip(pointer: Point, label: Size, viewport: Size) -> Point {
    TooltipPlacer::default().place(pointer, label, viewport).position
}
