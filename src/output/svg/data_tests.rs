use super::*;

#[test]
fn data_point_keeps_fields() {
    let point = DataPoint::new("Rust", 12.0, ChartColor::hex("#dea584"));
    assert_eq!(point.label, "Rust");
    assert!((point.value - 12.0).abs() < f64::EPSILON);
    assert_eq!(point.color.to_css(), "#dea584");
}
