pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::WaterfallChart;
pub use services::{Connector, ScaleMapper, WaterfallLayout, WaterfallLayoutEngine, ZoomController};
pub use value_objects::{
    ChartGeometry, Color, LayoutConfig, PositionedItem, TimeFrame, WaterfallItem, ZoomDirection,
    ZoomLevel, ZoomState,
};
