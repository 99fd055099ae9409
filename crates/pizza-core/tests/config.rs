// File: crates/pizza-core/tests/config.rs
// Purpose: Style and color settings deserialize from partial TOML with documented defaults.

use pizza_core::{ColorSpec, EdgeStyle, Rgba, StyleOptions, ValueFormat, ValueRange};

#[test]
fn partial_style_falls_back_to_defaults() {
    let style: StyleOptions = toml::from_str(
        r##"
        background_color = "#e9eae3"
        edges = "straight"
        show_reference_rings = true
        value_format = "percent"
        "##,
    )
    .expect("parse style");

    let defaults = StyleOptions::default();
    assert_eq!(style.background_color, Rgba::rgb(0xe9, 0xea, 0xe3));
    assert_eq!(style.edges, EdgeStyle::Straight);
    assert!(style.show_reference_rings);
    assert_eq!(style.value_format, ValueFormat::Percent);
    assert_eq!(style.inner_hole_fraction, defaults.inner_hole_fraction);
    assert_eq!(style.text_color, defaults.text_color);
    assert!(style.show_labels);
}

#[test]
fn bad_color_in_settings_is_reported() {
    let err = toml::from_str::<StyleOptions>(r#"text_color = "not-a-color""#).unwrap_err();
    assert!(err.to_string().contains("invalid color"), "{err}");
}

#[test]
fn color_spec_and_range_from_toml() {
    #[derive(serde::Deserialize)]
    struct Doc {
        colors: ColorSpec,
        range: ValueRange,
    }
    let doc: Doc = toml::from_str(
        r##"
        colors = { gradient = { start = "#2E2E2A", end = "#440981" } }
        range = { min = 0.0, max = 10.0 }
        "##,
    )
    .expect("parse doc");
    assert_eq!(
        doc.colors,
        ColorSpec::Gradient { start: Rgba::rgb(0x2e, 0x2e, 0x2a), end: Rgba::rgb(0x44, 0x09, 0x81) }
    );
    assert_eq!(doc.range.max(), 10.0);

    let inverted = toml::from_str::<Doc>(
        r##"
        colors = { solid = "#ffffff" }
        range = { min = 10.0, max = 0.0 }
        "##,
    );
    assert!(inverted.is_err());
}
