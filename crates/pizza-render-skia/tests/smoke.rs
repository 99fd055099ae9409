// File: crates/pizza-render-skia/tests/smoke.rs
// Purpose: End-to-end render smoke tests for PNG and SVG output.

use pizza_core::{ChartRequest, ColorSpec, MetricSeries, Rgba, StyleOptions};
use pizza_render_skia::{RenderOptions, SkiaRenderer};

fn request() -> ChartRequest {
    let series = MetricSeries::from_pairs([
        ("Gambling", 100.0),
        ("Lending", 85.0),
        ("Perpetuals", 75.0),
        ("NFTs", 95.0),
        ("DEX", 80.0),
        ("Staking", 70.0),
    ])
    .expect("series");
    ChartRequest::new(series)
}

fn no_text() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    opts
}

#[test]
fn render_smoke_png() {
    let scene = request().with_title("Wallet Analysis", None).with_center_badge(85.0).build().expect("scene");
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    SkiaRenderer::new().render_to_png(&scene, &RenderOptions::default(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = SkiaRenderer::new().render_to_png_bytes(&scene, &RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (950, 1100));
}

#[test]
fn background_hole_and_wedge_pixels() {
    let fill = Rgba::rgb(200, 30, 60);
    let style = StyleOptions::default();
    let scene = request().with_colors(ColorSpec::Solid(fill)).build().expect("scene");
    let bytes = SkiaRenderer::new().render_to_png_bytes(&scene, &no_text()).expect("render");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();

    let bg = style.background_color;
    assert_eq!(img.get_pixel(0, 0).0, [bg.r, bg.g, bg.b, 255]);

    // Without a title the frame is square and centered on the surface.
    let (cx, cy) = (475u32, 550u32);
    assert_eq!(img.get_pixel(cx, cy).0, [bg.r, bg.g, bg.b, 255], "donut hole shows background");

    // Sector 0 is full height and centered at the top; its wedge hides the blank base.
    let scale = 950.0 / 2.55_f64;
    let y = (cy as f64 - 0.6 * scale).round() as u32;
    assert_eq!(img.get_pixel(cx, y).0, [fill.r, fill.g, fill.b, 255]);
}

#[test]
fn transparent_background_leaves_corners_clear() {
    let scene = request().build().expect("scene");
    let mut opts = no_text();
    opts.transparent = true;
    let bytes = SkiaRenderer::new().render_to_png_bytes(&scene, &opts).expect("render");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
}

#[test]
fn render_svg_document() {
    let scene = request().with_title("Wallet Analysis", Some("Address: 0xDemo1...".into())).build().expect("scene");
    let bytes = SkiaRenderer::new().render_to_svg_bytes(&scene, &RenderOptions::default()).expect("svg");
    let text = String::from_utf8(bytes).expect("utf8 svg");
    assert!(text.contains("<svg"), "should be an SVG document");
    assert!(text.contains("</svg>"));
}
