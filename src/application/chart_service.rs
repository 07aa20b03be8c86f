use std::sync::{Arc, Mutex};

use crate::domain::{
    errors::{ChartError, LayoutResult},
    logging::{LogComponent, get_logger},
    waterfall::{
        entities::WaterfallChart,
        services::WaterfallLayout,
        value_objects::{TimeFrame, WaterfallItem, ZoomDirection, ZoomLevel},
    },
};

/// Application service coordinating a waterfall chart for a rendering layer.
///
/// Owns the single-writer presentation state (zoom, time frame); callers on
/// other threads share the entity through the inner mutex.
pub struct WaterfallChartService {
    chart: Arc<Mutex<WaterfallChart>>,
    pixel_height: f64,
}

impl WaterfallChartService {
    pub fn new(chart_id: String, pixel_height: f64) -> Self {
        Self {
            chart: Arc::new(Mutex::new(WaterfallChart::new(chart_id))),
            pixel_height,
        }
    }

    /// Access to the chart entity for collaborating layers.
    pub fn get_chart(&self) -> Arc<Mutex<WaterfallChart>> {
        Arc::clone(&self.chart)
    }

    /// Replace the series with freshly aggregated line items.
    pub fn set_items(&self, items: Vec<WaterfallItem>) {
        let mut chart = self.chart.lock().unwrap();
        get_logger().info(
            LogComponent::Application("WaterfallService"),
            &format!("📊 Loaded {} waterfall items into '{}'", items.len(), chart.id),
        );
        chart.set_items(items);
    }

    pub fn zoom(&self, direction: ZoomDirection) -> ZoomLevel {
        let mut chart = self.chart.lock().unwrap();
        let level = chart.zoom(direction);
        get_logger().debug(
            LogComponent::Application("WaterfallService"),
            &format!("🔍 Zoom {} -> {:.1}", direction, level.value()),
        );
        level
    }

    pub fn zoom_in(&self) -> ZoomLevel {
        self.zoom(ZoomDirection::In)
    }

    pub fn zoom_out(&self) -> ZoomLevel {
        self.zoom(ZoomDirection::Out)
    }

    pub fn set_time_frame(&self, time_frame: TimeFrame) {
        self.chart.lock().unwrap().set_time_frame(time_frame);
    }

    /// Recompute bar geometry for the current series.
    pub fn layout(&self) -> LayoutResult<WaterfallLayout> {
        let chart = self.chart.lock().unwrap();
        let result = chart.layout(self.pixel_height);
        if let Err(error) = &result {
            get_logger().warn(
                LogComponent::Application("WaterfallService"),
                &format!("⚠️ Layout failed for '{}': {}", chart.id, error),
            );
        }
        result
    }

    /// Export the current layout as JSON for download-style consumers.
    pub fn export_json(&self) -> LayoutResult<String> {
        let layout = self.layout()?;
        serde_json::to_string_pretty(&layout)
            .map_err(|error| ChartError::Serialization(error.to_string()))
    }

    pub fn stats(&self) -> ChartStats {
        let chart = self.chart.lock().unwrap();
        ChartStats {
            item_count: chart.item_count(),
            has_data: chart.has_data(),
            zoom_level: chart.zoom_level().value(),
        }
    }
}

/// Chart data statistics
#[derive(Debug, Clone)]
pub struct ChartStats {
    pub item_count: usize,
    pub has_data: bool,
    pub zoom_level: f64,
}
