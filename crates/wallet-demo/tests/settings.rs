// File: crates/wallet-demo/tests/settings.rs
// Purpose: TOML chart settings layered over presets.

use pizza_core::{ColorSpec, EdgeStyle, MetricSeries, Rgba, Theme, ValueFormat};
use wallet_demo::ChartSettings;

#[test]
fn empty_settings_keep_the_preset() {
    let settings = ChartSettings::from_toml("").expect("parse");
    let theme = settings.theme(None);
    assert_eq!(theme.name, "wallet-dark");
    let (style, colors) = settings.apply(&theme).expect("apply");
    assert_eq!(style.background_color, theme.background);
    assert_eq!(colors, theme.color_spec());
    assert!(settings.show_overall_score());
}

#[test]
fn dashboard_keys_override_colors_and_edges() {
    let settings = ChartSettings::from_toml(
        r##"
theme = "wallet-light"
title = "Whale Watch"
highlight_color = "#F63366"
text_color = "#222222"
slice_bg_color = "#7D3C98"
straight_line = true
show_overall_score = false
value_format = "percent"
"##,
    )
    .expect("parse");
    let theme = settings.theme(None);
    assert_eq!(theme.name, "wallet-light");
    let (style, colors) = settings.apply(&theme).expect("apply");
    let pink = Rgba::rgb(0xf6, 0x33, 0x66);
    assert_eq!(style.highlight_color, pink);
    assert_eq!(style.text_color, Rgba::rgb(0x22, 0x22, 0x22));
    assert_eq!(style.line_color, Rgba::rgb(0x22, 0x22, 0x22));
    assert_eq!(style.background_color, Theme::wallet_light().background);
    assert_eq!(style.edges, EdgeStyle::Straight);
    assert_eq!(style.value_format, ValueFormat::Percent);
    assert_eq!(colors, ColorSpec::Gradient { start: Rgba::rgb(0x7d, 0x3c, 0x98), end: pink });
    assert_eq!(settings.title.as_deref(), Some("Whale Watch"));
    assert!(!settings.show_overall_score());
}

#[test]
fn cli_preset_wins_over_file_theme() {
    let settings = ChartSettings::from_toml("theme = \"wallet-light\"").expect("parse");
    assert_eq!(settings.theme(Some("pizza-dark")).name, "pizza-dark");
}

#[test]
fn unknown_keys_and_bad_colors_are_rejected() {
    assert!(ChartSettings::from_toml("colour = \"#fff\"").is_err());
    assert!(ChartSettings::from_toml("highlight_color = \"purple\"").is_err());
}

#[test]
fn misspelled_theme_falls_back() {
    let settings = ChartSettings::from_toml("theme = \"walet-light\"").expect("parse");
    assert_eq!(settings.theme(None).name, "wallet-dark");
    assert_eq!(settings.theme_or(Some("nope"), Theme::pizza_dark()).name, "pizza-dark");
}

fn player_series() -> MetricSeries {
    MetricSeries::from_pairs([("Passing", 8.5), ("Dribbling", 9.2), ("Shooting", 7.8)]).expect("series")
}

#[test]
fn range_colors_style_and_comparison_reach_the_request() {
    let settings = ChartSettings::from_toml(
        r##"
range = { min = 0.0, max = 10.0 }
colors = { ramp = { start = "#F63366", end = "#7D3C98" } }
comparison = { values = [7.0, 6.5, 9.0] }

[style]
show_reference_rings = true
reference_ring_count = 3
gap_deg = 2.0
label_size = 0.09
"##,
    )
    .expect("parse");
    let theme = Theme::pizza_dark();
    let request = settings.request(player_series(), &theme).expect("request");

    assert_eq!((request.range.min(), request.range.max()), (0.0, 10.0));
    assert_eq!(
        request.colors,
        ColorSpec::Ramp { start: Rgba::rgb(0xf6, 0x33, 0x66), end: Rgba::rgb(0x7d, 0x3c, 0x98) }
    );
    assert!(request.style.show_reference_rings);
    assert_eq!(request.style.reference_ring_count, 3);
    assert_eq!(request.style.gap_deg, 2.0);
    assert_eq!(request.style.label_size, 0.09);
    // untouched keys keep the preset, not the wallet-dark default
    assert_eq!(request.style.highlight_color, theme.highlight);
    assert_eq!(request.comparison, Some((vec![7.0, 6.5, 9.0], Rgba::rgb(0x34, 0x98, 0xdb))));

    let scene = request.build().expect("scene");
    assert_eq!(scene.layer(pizza_core::Layer::ReferenceRings).count(), 3);
    assert_eq!(scene.layer(pizza_core::Layer::ComparisonWedges).count(), 6);
}

#[test]
fn unknown_or_mistyped_style_keys_are_rejected() {
    let settings = ChartSettings::from_toml("[style]\nlabel_sise = 0.1\n").expect("parse");
    let err = settings.apply(&Theme::wallet_dark()).unwrap_err();
    assert!(err.to_string().contains("label_sise"), "{err}");

    let settings = ChartSettings::from_toml("[style]\ngap_deg = \"wide\"\n").expect("parse");
    assert!(settings.apply(&Theme::wallet_dark()).is_err());
}

#[test]
fn inverted_range_in_settings_is_rejected() {
    assert!(ChartSettings::from_toml("range = { min = 5.0, max = 1.0 }").is_err());
}
