// File: crates/pizza-render-skia/src/lib.rs
// Summary: Skia renderer: paints a pizza-core ChartScene onto CPU raster (PNG) or SVG canvases.

pub mod text;

use std::path::Path;

use anyhow::{Context, Result};
use pizza_core::scene::{ChartScene, Element};
use pizza_core::{Bounds, EdgeStyle, Point, Rgba, SectorGeometry};
use skia_safe as skia;
use tracing::{debug, info};

pub use text::TextShaper;

/// Default surface width in pixels (9.5 x 11 figure at 100 dpi).
pub const WIDTH: i32 = 950;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 1100;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Skip the scene background so the chart floats on a transparent surface.
    pub transparent: bool,
    /// Text depends on installed fonts; disable for pixel-stable output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, transparent: false, draw_labels: true }
    }
}

pub(crate) fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Uniform chart-unit -> pixel mapping that fits the scene frame, centered.
#[derive(Clone, Copy, Debug)]
struct Viewport {
    frame: Bounds,
    scale: f32,
    offset_x: f32,
    offset_y: f32,
}

impl Viewport {
    fn fit(frame: Bounds, width: i32, height: i32) -> Self {
        let sx = width as f64 / frame.width().max(1e-9);
        let sy = height as f64 / frame.height().max(1e-9);
        let scale = sx.min(sy);
        let offset_x = (width as f64 - frame.width() * scale) * 0.5;
        let offset_y = (height as f64 - frame.height() * scale) * 0.5;
        Self { frame, scale: scale as f32, offset_x: offset_x as f32, offset_y: offset_y as f32 }
    }

    fn point(&self, p: Point) -> (f32, f32) {
        (
            self.offset_x + ((p.x - self.frame.left) as f32) * self.scale,
            self.offset_y + ((p.y - self.frame.top) as f32) * self.scale,
        )
    }

    fn len(&self, v: f64) -> f32 {
        v as f32 * self.scale
    }
}

pub struct SkiaRenderer {
    text: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new() }
    }

    /// Render the scene to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, scene: &ChartScene, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        surface.canvas().clear(skia::Color::TRANSPARENT);
        self.draw(surface.canvas(), scene, opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png(&self, scene: &ChartScene, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(scene, opts)?;
        write_output(path.as_ref(), &bytes)
    }

    /// Render the scene as an SVG document.
    pub fn render_to_svg_bytes(&self, scene: &ChartScene, opts: &RenderOptions) -> Result<Vec<u8>> {
        let bounds = skia::Rect::from_iwh(opts.width, opts.height);
        let canvas = skia::svg::Canvas::new(bounds, None);
        self.draw(&canvas, scene, opts);
        let data = canvas.end();
        if data.as_bytes().is_empty() {
            anyhow::bail!("SVG canvas produced no output");
        }
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_svg(&self, scene: &ChartScene, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_svg_bytes(scene, opts)?;
        write_output(path.as_ref(), &bytes)
    }

    /// Paint every scene item in stored (z) order.
    fn draw(&self, canvas: &skia::Canvas, scene: &ChartScene, opts: &RenderOptions) {
        let vp = Viewport::fit(scene.frame(), opts.width, opts.height);
        let center = vp.point(Point::ORIGIN);
        debug!(
            width = opts.width,
            height = opts.height,
            scale = vp.scale,
            items = scene.items().len(),
            "rendering chart scene"
        );

        for item in scene.items() {
            match &item.element {
                Element::Background { color } => {
                    if opts.transparent { continue; }
                    let mut paint = fill_paint(*color);
                    paint.set_anti_alias(false);
                    canvas.draw_rect(skia::Rect::from_iwh(opts.width, opts.height), &paint);
                }
                Element::Wedge { sector, fill, edges } => {
                    let path = sector_path(sector, *edges, center, &vp);
                    canvas.draw_path(&path, &fill_paint(*fill));
                }
                Element::Outline { sector, stroke, width, edges } => {
                    let path = sector_path(sector, *edges, center, &vp);
                    canvas.draw_path(&path, &stroke_paint(*stroke, vp.len(*width)));
                }
                Element::Ring { radius, stroke, width } => {
                    if *width <= 0.0 { continue; }
                    canvas.draw_circle(center, vp.len(*radius), &stroke_paint(*stroke, vp.len(*width)));
                }
                Element::Line { from, to, stroke, width } => {
                    let mut paint = stroke_paint(*stroke, vp.len(*width));
                    paint.set_stroke_cap(skia::paint::Cap::Butt);
                    canvas.draw_line(vp.point(*from), vp.point(*to), &paint);
                }
                Element::Text(t) => {
                    if !opts.draw_labels { continue; }
                    self.text.draw_item(canvas, t, vp.point(t.anchor), vp.len(t.size));
                }
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote chart");
    Ok(())
}

fn fill_paint(color: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(color));
    paint
}

fn stroke_paint(color: Rgba, width_px: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width_px.max(1.0));
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_color(to_skia(color));
    paint
}

fn oval(center: (f32, f32), r: f32) -> skia::Rect {
    skia::Rect::from_ltrb(center.0 - r, center.1 - r, center.0 + r, center.1 + r)
}

/// Closed wedge outline. Skia measures arcs clockwise from 3 o'clock, while
/// sector angles are clockwise from 12 o'clock, hence the -90.
fn sector_path(s: &SectorGeometry, edges: EdgeStyle, center: (f32, f32), vp: &Viewport) -> skia::Path {
    let start = (s.start_angle - 90.0) as f32;
    let sweep = s.span() as f32;
    let r_in = vp.len(s.inner_radius);
    let r_out = vp.len(s.outer_radius);
    let at = |r: f64, deg: f64| {
        let p = Point::polar(r, deg);
        (center.0 + vp.len(p.x), center.1 + vp.len(p.y))
    };

    let mut path = skia::Path::new();
    match edges {
        EdgeStyle::Curved => {
            path.arc_to(oval(center, r_out), start, sweep, true);
        }
        EdgeStyle::Straight => {
            path.move_to(at(s.outer_radius, s.start_angle));
            path.line_to(at(s.outer_radius, s.end_angle));
        }
    }
    if r_in > 0.0 {
        path.arc_to(oval(center, r_in), start + sweep, -sweep, false);
    } else {
        path.line_to(center);
    }
    path.close();
    path
}
