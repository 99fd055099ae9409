// File: crates/pizza-render-skia/src/text.rs
// Summary: Text shaper using Skia textlayout; draws centered/left-anchored, rotated, boxed or haloed text.

use pizza_core::scene::{HAlign, TextItem};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

use crate::to_skia;

/// Padding around boxed text, as a fraction of the font size.
const BOX_PAD: f32 = 0.25;
/// Halo thickness, as a fraction of the font size.
const HALO: f32 = 0.06;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // Kanit first: the dashboards' typeface when installed
        ts.set_font_families(&["Kanit", "Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure(&self, text: &str, size: f32, bold: bool) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), bold);
        (p.longest_line(), p.height())
    }

    /// Draw `item` with its anchor at pixel position `at`, font size `size_px`.
    pub fn draw_item(&self, canvas: &skia::Canvas, item: &TextItem, at: (f32, f32), size_px: f32) {
        let (w, h) = self.measure(&item.text, size_px, item.bold);
        let left = match item.align {
            HAlign::Left => 0.0,
            HAlign::Center => -w * 0.5,
        };
        let top = -h * 0.5;

        canvas.save();
        canvas.translate(at);
        canvas.rotate(item.rotation_deg as f32, None);

        if let Some(bx) = &item.boxed {
            let pad = size_px * BOX_PAD;
            let rect = skia::Rect::from_xywh(left - pad, top - pad * 0.5, w + pad * 2.0, h + pad);
            let radius = pad;
            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_style(skia::paint::Style::Fill);
            fill.set_color(to_skia(bx.fill));
            canvas.draw_round_rect(rect, radius, radius, &fill);

            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width((bx.stroke_width as f32 * size_px / item.size.max(1e-6) as f32).max(1.0));
            stroke.set_color(to_skia(bx.stroke));
            canvas.draw_round_rect(rect, radius, radius, &stroke);
        }

        if let Some(halo) = item.halo {
            // outline by stamping the glyphs around the anchor before the fill pass
            let mut p = self.layout(&item.text, size_px, to_skia(halo), item.bold);
            let d = (size_px * HALO).max(1.0);
            for (dx, dy) in [(-d, 0.0), (d, 0.0), (0.0, -d), (0.0, d), (-d, -d), (d, d), (-d, d), (d, -d)] {
                p.paint(canvas, (left + dx, top + dy));
            }
        }

        let mut p = self.layout(&item.text, size_px, to_skia(item.color), item.bold);
        p.paint(canvas, (left, top));
        canvas.restore();
    }
}
