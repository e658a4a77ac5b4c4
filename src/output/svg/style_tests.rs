use super::*;

#[test]
fn color_to_css() {
    assert_eq!(ChartColor::hex("#dea584").to_css(), "#dea584");
    assert_eq!(ChartColor::named("white").to_css(), "white");
}

#[test]
fn text_anchor_display() {
    assert_eq!(TextAnchor::Start.to_string(), "start");
    assert_eq!(TextAnchor::Middle.to_string(), "middle");
    assert_eq!(TextAnchor::End.to_string(), "end");
    assert_eq!(TextAnchor::default().to_string(), "start");
}

#[test]
fn palettes_differ_by_background() {
    let light = Palette::light();
    let dark = Palette::dark();
    assert_eq!(light.background.to_css(), "white");
    assert_ne!(light.background, dark.background);
    assert_ne!(light.text, dark.text);
}
