use serde::{Deserialize, Serialize};

use super::value_objects::{
    ChartGeometry, LayoutConfig, PositionedItem, WaterfallItem, ZoomDirection, ZoomLevel,
};
use crate::domain::errors::{ChartError, LayoutResult, ZoomResult};

/// Aggregate output of a layout pass: positioned bars plus shared geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterfallLayout {
    pub positioned: Vec<PositionedItem>,
    pub geometry: ChartGeometry,
}

impl WaterfallLayout {
    /// Layout for an empty series: no bars, zeroed range, sentinel scale.
    pub fn empty() -> Self {
        Self {
            positioned: Vec::new(),
            geometry: ChartGeometry { min_value: 0.0, max_value: 0.0, scale_factor: 0.0 },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.positioned.is_empty()
    }

    /// Horizontal ties from each delta bar back to its predecessor, at the
    /// bar's start value. Totals restart from the axis and get no tie.
    pub fn connectors(&self) -> Vec<Connector> {
        self.positioned
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, positioned)| !positioned.item.is_total)
            .map(|(index, positioned)| Connector {
                from_index: index - 1,
                to_index: index,
                value: positioned.start,
            })
            .collect()
    }
}

/// Data-space tie between consecutive bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub from_index: usize,
    pub to_index: usize,
    pub value: f64,
}

/// Domain service - converts an ordered waterfall series into bar geometry.
///
/// Pure function of its inputs; the engine owns no state across calls.
#[derive(Debug, Clone, Default)]
pub struct WaterfallLayoutEngine {
    config: LayoutConfig,
}

impl WaterfallLayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Single left-to-right pass, O(n).
    ///
    /// Empty input is the benign degenerate case and yields
    /// [`WaterfallLayout::empty`]. Non-empty input whose observed range
    /// collapses to a point cannot produce a usable scale and fails with
    /// [`ChartError::DegenerateRange`].
    pub fn layout(
        &self,
        items: &[WaterfallItem],
        pixel_height: f64,
    ) -> LayoutResult<WaterfallLayout> {
        if items.is_empty() {
            return Ok(WaterfallLayout::empty());
        }

        let pass = items
            .iter()
            .fold(LayoutAccumulator::with_capacity(items.len()), LayoutAccumulator::place);

        let range = pass.max_value - pass.min_value;
        if range == 0.0 {
            return Err(ChartError::DegenerateRange {
                min_value: pass.min_value,
                max_value: pass.max_value,
            });
        }

        let scale_factor = (pixel_height - self.config.reserved_margin) / range;
        Ok(WaterfallLayout {
            positioned: pass.positioned,
            geometry: ChartGeometry {
                min_value: pass.min_value,
                max_value: pass.max_value,
                scale_factor,
            },
        })
    }

    /// Vertical mapper matching the scale of a completed layout pass.
    pub fn scale_mapper(&self, geometry: &ChartGeometry, pixel_height: f64) -> ScaleMapper {
        ScaleMapper::new(geometry, pixel_height, &self.config)
    }
}

/// Accumulator threaded through the layout fold. Each step places one bar
/// and widens the global extrema.
///
/// The extrema start at zero rather than infinity: the first bar's start is
/// always zero, so zero is in the observed union for every non-empty series.
struct LayoutAccumulator {
    running_total: f64,
    min_value: f64,
    max_value: f64,
    positioned: Vec<PositionedItem>,
}

impl LayoutAccumulator {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            running_total: 0.0,
            min_value: 0.0,
            max_value: 0.0,
            positioned: Vec::with_capacity(capacity),
        }
    }

    fn place(mut self, item: &WaterfallItem) -> Self {
        let start = if item.is_total { 0.0 } else { self.running_total };
        let end = if item.is_total { item.value } else { start + item.value };

        // A checkpoint bar anchors at the axis and leaves the running total
        // untouched: the next delta continues from the checkpoint's
        // predecessor. Kept as-is pending product sign-off (see DESIGN.md).
        if !item.is_total {
            self.running_total = end;
        }

        self.max_value = self.max_value.max(start).max(end);
        self.min_value = self.min_value.min(start).min(end);

        self.positioned.push(PositionedItem {
            item: item.clone(),
            start,
            end,
            height: item.value.abs(),
        });
        self
    }
}

/// Value-to-pixel mapping for the vertical axis.
///
/// Screen-up is data-up: higher values map to smaller pixel Y. The renderer
/// depends on this inversion, and `y_to_value` is the exact inverse of
/// `value_to_y` within floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMapper {
    min_value: f64,
    scale_factor: f64,
    pixel_height: f64,
    bottom_margin: f64,
}

impl ScaleMapper {
    pub fn new(geometry: &ChartGeometry, pixel_height: f64, config: &LayoutConfig) -> Self {
        Self {
            min_value: geometry.min_value,
            scale_factor: geometry.scale_factor,
            pixel_height,
            bottom_margin: config.bottom_margin,
        }
    }

    pub fn value_to_y(&self, value: f64) -> f64 {
        self.pixel_height - self.bottom_margin - (value - self.min_value) * self.scale_factor
    }

    pub fn y_to_value(&self, y: f64) -> f64 {
        self.min_value + (self.pixel_height - self.bottom_margin - y) / self.scale_factor
    }
}

/// Domain service - steps the zoom level within fixed bounds.
///
/// Zoom scales only the horizontal bar pitch; it never touches the vertical
/// scale factor or geometry.
pub struct ZoomController;

impl ZoomController {
    pub const MIN: f64 = 0.5;
    pub const MAX: f64 = 2.0;
    pub const STEP: f64 = 0.2;

    /// Step with silent clamping; repeated calls at a bound are a no-op.
    pub fn zoom(current: ZoomLevel, direction: ZoomDirection) -> ZoomLevel {
        let level = match direction {
            ZoomDirection::In => (current.value() + Self::STEP).min(Self::MAX),
            ZoomDirection::Out => (current.value() - Self::STEP).max(Self::MIN),
        };
        ZoomLevel::from(level)
    }

    /// Strict variant: refuses a step that is already resting at the bound
    /// instead of clamping it away.
    pub fn try_zoom(current: ZoomLevel, direction: ZoomDirection) -> ZoomResult<ZoomLevel> {
        let at_bound = match direction {
            ZoomDirection::In => current.value() >= Self::MAX,
            ZoomDirection::Out => current.value() <= Self::MIN,
        };
        if at_bound {
            return Err(ChartError::InvalidZoomRequest { level: current.value(), direction });
        }
        Ok(Self::zoom(current, direction))
    }
}
