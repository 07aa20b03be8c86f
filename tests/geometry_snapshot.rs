use insta::assert_json_snapshot;
use waterfall_chart::domain::waterfall::{
    Color, LayoutConfig, WaterfallItem, WaterfallLayoutEngine,
};

/// Full reference dataset shipped with the dashboard.
fn margin_waterfall() -> Vec<WaterfallItem> {
    vec![
        WaterfallItem::delta("List Price", 100.0).with_color(Color::GAIN),
        WaterfallItem::delta("Volume Discount", -8.0).with_color(Color::LOSS),
        WaterfallItem::delta("Promotional Discount", -5.0).with_color(Color::LOSS),
        WaterfallItem::delta("Loyalty Discount", -3.0).with_color(Color::LOSS),
        WaterfallItem::delta("Contract Terms", -7.0).with_color(Color::LOSS),
        WaterfallItem::delta("Competitive Adjustment", -4.0).with_color(Color::LOSS),
        WaterfallItem::total("Pocket Price", 73.0).with_color(Color::TOTAL),
        WaterfallItem::delta("COGS", -45.0).with_color(Color::LOSS),
        WaterfallItem::total("Margin", 28.0).with_color(Color::GAIN),
    ]
}

#[test]
fn margin_waterfall_positions_snapshot() {
    let engine = WaterfallLayoutEngine::new(LayoutConfig::default());
    let layout = engine.layout(&margin_waterfall(), 400.0).unwrap();

    let result: Vec<[f64; 3]> =
        layout.positioned.iter().map(|p| [p.start, p.end, p.height]).collect();
    assert_json_snapshot!("margin_waterfall_positions", result);
}

#[test]
fn margin_waterfall_geometry_snapshot() {
    let engine = WaterfallLayoutEngine::new(LayoutConfig::default());
    let layout = engine.layout(&margin_waterfall(), 400.0).unwrap();
    assert_json_snapshot!("margin_waterfall_geometry", layout.geometry);
}
