use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - one entry in a waterfall series.
///
/// A delta item shifts the running total by `value`; a total item is an
/// absolute checkpoint drawn from the zero baseline. `color` and `tooltip`
/// are passthrough display metadata, opaque to layout math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterfallItem {
    pub label: String,
    pub value: f64,
    pub is_total: bool,
    pub color: Option<Color>,
    pub tooltip: Option<String>,
}

impl WaterfallItem {
    pub fn delta(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value, is_total: false, color: None, tooltip: None }
    }

    pub fn total(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value, is_total: true, color: None, tooltip: None }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Explicit color if set, otherwise the sign-based fallback palette.
    pub fn effective_color(&self) -> Color {
        self.color.unwrap_or(if self.value >= 0.0 { Color::GAIN } else { Color::LOSS })
    }
}

/// Derived Object - data-space vertical extent of one bar.
///
/// Produced in the same order as the input items, one per item. `height` is
/// `abs(value)` and drives minimum-visible-bar sizing in the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedItem {
    pub item: WaterfallItem,
    pub start: f64,
    pub end: f64,
    pub height: f64,
}

impl PositionedItem {
    pub fn is_rising(&self) -> bool {
        self.item.value >= 0.0
    }

    pub fn effective_color(&self) -> Color {
        self.item.effective_color()
    }
}

/// Value Object - aggregate vertical geometry of a layout pass.
///
/// The range is purely data-driven from observed extents; zero is not forced
/// into it, so a renderer must not assume the baseline is on-screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub min_value: f64,
    pub max_value: f64,
    /// Pixels per data unit for the available drawing height.
    pub scale_factor: f64,
}

impl ChartGeometry {
    pub fn value_range(&self) -> f64 {
        self.max_value - self.min_value
    }

    /// Axis label values, top to bottom: max, midpoint, min.
    pub fn axis_ticks(&self) -> [f64; 3] {
        [self.max_value, (self.max_value + self.min_value) / 2.0, self.min_value]
    }
}

/// Value Object - layout configuration.
///
/// `reserved_margin` is the total vertical pixel band (top + bottom) kept
/// free for labels; `bottom_margin` is the baseline offset used by the
/// vertical scale mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub reserved_margin: f64,
    pub bottom_margin: f64,
    pub bar_width: f64,
    pub bar_spacing: f64,
    pub left_padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            reserved_margin: 100.0,
            bottom_margin: 50.0,
            bar_width: 40.0,
            bar_spacing: 30.0,
            left_padding: 20.0,
        }
    }
}

impl LayoutConfig {
    /// Horizontal distance between bar origins. Zoom scales only this
    /// pitch, never the vertical geometry.
    pub fn bar_pitch(&self, zoom: ZoomLevel) -> f64 {
        (self.bar_width + self.bar_spacing) * zoom.value()
    }

    pub fn bar_width_at(&self, zoom: ZoomLevel) -> f64 {
        self.bar_width * zoom.value()
    }

    /// Left edge of the bar slot at `index`.
    pub fn bar_x(&self, index: usize, zoom: ZoomLevel) -> f64 {
        self.left_padding + index as f64 * self.bar_pitch(zoom)
    }

    /// Total horizontal extent needed to draw `count` bars.
    pub fn chart_width(&self, count: usize, zoom: ZoomLevel) -> f64 {
        self.left_padding + count as f64 * self.bar_pitch(zoom)
    }
}

/// Value Object - horizontal magnification factor for bar pitch.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Serialize, Deserialize)]
pub struct ZoomLevel(f64);

impl ZoomLevel {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Value Object - zoom step direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr)]
pub enum ZoomDirection {
    #[display(fmt = "In")]
    #[strum(serialize = "in")]
    In,
    #[display(fmt = "Out")]
    #[strum(serialize = "out")]
    Out,
}

/// Current zoom resting state. Any level inside the controller bounds is a
/// valid resting state; there are no transitions beyond in/out stepping.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ZoomState {
    pub level: ZoomLevel,
}

/// Value Object - reporting period selector carried as chart state.
/// Opaque to layout math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr)]
pub enum TimeFrame {
    #[display(fmt = "Monthly")]
    #[strum(serialize = "monthly")]
    Monthly,
    #[display(fmt = "Quarterly")]
    #[strum(serialize = "quarterly")]
    Quarterly,
    #[display(fmt = "Yearly")]
    #[strum(serialize = "yearly")]
    Yearly,
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn to_hex(&self) -> u32 {
        let r = (self.r * 255.0) as u32;
        let g = (self.g * 255.0) as u32;
        let b = (self.b * 255.0) as u32;
        (r << 16) | (g << 8) | b
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha, ..*self }
    }

    /// Default palette: gains, losses, and checkpoint totals.
    pub const GAIN: Color = Color { r: 0x4A as f32 / 255.0, g: 0xDE as f32 / 255.0, b: 0x80 as f32 / 255.0, a: 1.0 };
    pub const LOSS: Color = Color { r: 0xF8 as f32 / 255.0, g: 0x71 as f32 / 255.0, b: 0x71 as f32 / 255.0, a: 1.0 };
    pub const TOTAL: Color = Color { r: 0x60 as f32 / 255.0, g: 0xA5 as f32 / 255.0, b: 0xFA as f32 / 255.0, a: 1.0 };
}

impl From<(f32, f32, f32)> for Color {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}
