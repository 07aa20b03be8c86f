use quickcheck_macros::quickcheck;
use waterfall_chart::domain::waterfall::{
    ChartGeometry, LayoutConfig, ScaleMapper, WaterfallItem, WaterfallLayoutEngine,
};

const PIXEL_HEIGHT: f64 = 400.0;

fn reference_mapper() -> ScaleMapper {
    let geometry = ChartGeometry { min_value: 0.0, max_value: 100.0, scale_factor: 3.0 };
    ScaleMapper::new(&geometry, PIXEL_HEIGHT, &LayoutConfig::default())
}

#[test]
fn min_value_maps_to_bottom_margin_line() {
    let mapper = reference_mapper();
    assert_eq!(mapper.value_to_y(0.0), PIXEL_HEIGHT - 50.0);
}

#[test]
fn higher_values_map_to_smaller_y() {
    let mapper = reference_mapper();
    assert_eq!(mapper.value_to_y(100.0), 50.0);
    assert!(mapper.value_to_y(80.0) < mapper.value_to_y(20.0));
}

#[test]
fn mapper_matches_engine_scale() {
    let engine = WaterfallLayoutEngine::new(LayoutConfig::default());
    let items = vec![
        WaterfallItem::delta("List Price", 100.0),
        WaterfallItem::delta("Discount", -8.0),
        WaterfallItem::total("Pocket Price", 73.0),
    ];
    let layout = engine.layout(&items, PIXEL_HEIGHT).unwrap();
    let mapper = engine.scale_mapper(&layout.geometry, PIXEL_HEIGHT);

    // The full observed range spans exactly the drawable band.
    let top = mapper.value_to_y(layout.geometry.max_value);
    let bottom = mapper.value_to_y(layout.geometry.min_value);
    assert_eq!(bottom - top, PIXEL_HEIGHT - 100.0);
}

#[quickcheck]
fn value_to_y_is_strictly_decreasing(a: f64, b: f64) -> bool {
    if !a.is_finite() || !b.is_finite() {
        return true;
    }
    let a = a.clamp(-1e6, 1e6);
    let b = b.clamp(-1e6, 1e6);
    if a == b {
        return true;
    }
    let (low, high) = if a < b { (a, b) } else { (b, a) };
    let mapper = reference_mapper();
    mapper.value_to_y(low) > mapper.value_to_y(high)
}

#[quickcheck]
fn pixel_mapping_round_trips(value: f64) -> bool {
    if !value.is_finite() {
        return true;
    }
    let value = value.clamp(-1e6, 1e6);
    let mapper = reference_mapper();
    (mapper.y_to_value(mapper.value_to_y(value)) - value).abs() < 1e-6
}
