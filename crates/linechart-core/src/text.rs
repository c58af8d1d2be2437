// File: crates/linechart-core/src/text.rs
// Summary: Skia font wrapper for label measurement and drawing.

use skia_safe as skia;

/// A colored font used to measure and draw one axis's labels.
///
/// Width measurement drives the layout pass, so the same font instance must
/// be used for measuring and drawing or labels drift out of their reserved
/// margins.
pub struct LabelFont {
    font: skia::Font,
    paint: skia::Paint,
}

impl LabelFont {
    pub fn new(color: skia::Color, size: f32) -> Self {
        // Resolve the system default typeface; Font::default() can carry an
        // empty typeface on some platforms and then measures everything as 0.
        let font = match skia::FontMgr::default()
            .legacy_make_typeface(None, skia::FontStyle::normal())
        {
            Some(typeface) => skia::Font::from_typeface(typeface, size.max(1.0)),
            None => {
                let mut f = skia::Font::default();
                f.set_size(size.max(1.0));
                f
            }
        };
        let mut paint = skia::Paint::default();
        paint.set_color(color);
        paint.set_anti_alias(true);
        Self { font, paint }
    }

    /// Advance width of `text` in pixels.
    pub fn measure(&self, text: &str) -> f32 {
        self.font.measure_str(text, Some(&self.paint)).0
    }

    /// Full line height: bottom - top + leading.
    pub fn text_height(&self) -> f32 {
        let (_, m) = self.font.metrics();
        m.bottom - m.top + m.leading
    }

    /// Distance from baseline to the lowest glyph extent (positive, down).
    pub fn descent(&self) -> f32 {
        self.font.metrics().1.descent
    }

    /// Distance from baseline to the highest glyph extent (negative, up).
    pub fn ascent(&self) -> f32 {
        self.font.metrics().1.ascent
    }

    /// Draw `text` with its baseline at (x, y).
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32) {
        canvas.draw_str(text, (x, y), &self.font, &self.paint);
    }
}
