use super::services::{WaterfallLayout, WaterfallLayoutEngine, ZoomController};
use super::value_objects::{
    LayoutConfig, TimeFrame, WaterfallItem, ZoomDirection, ZoomLevel, ZoomState,
};
use crate::domain::errors::LayoutResult;

/// Domain entity - a waterfall chart.
///
/// Holds the ordered series together with the layout configuration and the
/// externally supplied presentation state (zoom level, reporting period).
/// Layout itself stays a pure pass over the current items.
#[derive(Debug, Clone)]
pub struct WaterfallChart {
    pub id: String,
    pub items: Vec<WaterfallItem>,
    pub config: LayoutConfig,
    pub zoom: ZoomState,
    pub time_frame: TimeFrame,
}

impl WaterfallChart {
    pub fn new(id: String) -> Self {
        Self::with_config(id, LayoutConfig::default())
    }

    pub fn with_config(id: String, config: LayoutConfig) -> Self {
        Self {
            id,
            items: Vec::new(),
            config,
            zoom: ZoomState::default(),
            time_frame: TimeFrame::Quarterly,
        }
    }

    /// Replace the series (replaces existing items, order-significant).
    pub fn set_items(&mut self, items: Vec<WaterfallItem>) {
        self.items = items;
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn has_data(&self) -> bool {
        !self.items.is_empty()
    }

    /// Step the zoom level; clamped at the controller bounds.
    pub fn zoom(&mut self, direction: ZoomDirection) -> ZoomLevel {
        self.zoom.level = ZoomController::zoom(self.zoom.level, direction);
        self.zoom.level
    }

    pub fn zoom_level(&self) -> ZoomLevel {
        self.zoom.level
    }

    pub fn set_time_frame(&mut self, time_frame: TimeFrame) {
        self.time_frame = time_frame;
    }

    /// Compute bar geometry for the current series.
    pub fn layout(&self, pixel_height: f64) -> LayoutResult<WaterfallLayout> {
        WaterfallLayoutEngine::new(self.config.clone()).layout(&self.items, pixel_height)
    }

    /// Left edge of the bar slot at `index` under the current zoom.
    pub fn bar_x(&self, index: usize) -> f64 {
        self.config.bar_x(index, self.zoom.level)
    }

    /// Horizontal extent of the whole chart under the current zoom.
    pub fn chart_width(&self) -> f64 {
        self.config.chart_width(self.items.len(), self.zoom.level)
    }
}
