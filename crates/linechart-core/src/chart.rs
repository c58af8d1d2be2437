// File: crates/linechart-core/src/chart.rs
// Summary: Chart widget state machine, draw pipeline, and headless rendering
// over Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{Axis, AxisConfig, PlacedLabel};
use crate::curve;
use crate::error::ChartError;
use crate::geometry::PlotRect;
use crate::grid;
use crate::layout::{self, Layout, MeasuredAxis};
use crate::ranges::AxisRanges;
use crate::series::{Series, SeriesConfig};
use crate::text::LabelFont;
use crate::theme::ChartStyle;
use crate::types::{CacheState, HEIGHT, WIDTH};

/// Options for the headless render entry points.
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Overrides the style's background when set.
    pub background: Option<skia::Color>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, background: None }
    }
}

/// The line-chart widget.
///
/// Two render states: Empty (no series, or no valid size yet) draws only a
/// centered placeholder message; Populated composites grid, then series in
/// insertion order, then axis labels. All mutation happens through `&mut
/// self`, so the geometry caches are single-threaded by construction.
pub struct Chart {
    style: ChartStyle,
    ranges: AxisRanges,
    axes: Vec<Axis>,
    series: Vec<Series>,
    width: f32,
    height: f32,
    layout: Option<Layout>,
    geometry: CacheState,
}

impl Chart {
    pub fn new() -> Self {
        Self::with_style(ChartStyle::default())
    }

    pub fn with_style(style: ChartStyle) -> Self {
        Self {
            style,
            ranges: AxisRanges::default(),
            axes: Vec::new(),
            series: Vec::new(),
            width: 0.0,
            height: 0.0,
            layout: None,
            geometry: CacheState::Dirty,
        }
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    pub fn ranges(&self) -> &AxisRanges {
        &self.ranges
    }

    /// Replace all axis ranges atomically. Validation happens before the
    /// swap, so a rejected update leaves the previous ranges untouched and
    /// no partially-updated state is ever visible.
    pub fn set_axis_ranges(&mut self, ranges: AxisRanges) -> Result<(), ChartError> {
        ranges.validate()?;
        self.ranges = ranges;
        self.mark_dirty();
        Ok(())
    }

    /// Add an axis. Axes cannot be removed or replaced once added.
    pub fn add_axis(&mut self, config: AxisConfig) {
        self.axes.push(Axis::new(config));
        self.mark_dirty();
    }

    /// Add a line series. Later series draw on top of earlier ones.
    pub fn add_series(&mut self, config: SeriesConfig) {
        self.series.push(Series::new(config));
        self.mark_dirty();
    }

    /// Remove all series (axes stay), returning the widget to Empty.
    pub fn clear_series(&mut self) {
        self.series.clear();
        self.mark_dirty();
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Attach/resize notification from the host surface.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.mark_dirty();
        }
    }

    /// Current layout, if a layout pass has run since the last mutation.
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn plot_rect(&self) -> Option<PlotRect> {
        self.layout.map(|l| l.plot)
    }

    /// Formatted labels with their final draw positions for the axis at
    /// `index` (insertion order), running the layout pass first if needed.
    pub fn axis_labels(&mut self, index: usize) -> Option<Vec<PlacedLabel>> {
        self.ensure_layout();
        let layout = self.layout?;
        let (view_height, margin) = (self.height, self.style.axis_margin);
        let ranges = self.ranges;
        let axis = self.axes.get_mut(index)?;
        Some(axis.placed_labels(&ranges, &layout, view_height, margin).to_vec())
    }

    fn mark_dirty(&mut self) {
        self.geometry = CacheState::Dirty;
    }

    /// Run the measurement/layout pass and invalidate every derived cache.
    /// Driven by the geometry dirty flag; also callable directly by hosts
    /// that want layout results before the next draw.
    pub fn refresh_layout(&mut self) {
        let measured: Vec<MeasuredAxis> =
            self.axes.iter().map(|a| a.measure(&self.ranges)).collect();
        self.layout = Some(layout::compute(
            self.width,
            self.height,
            self.style.axis_margin,
            &self.ranges,
            &measured,
        ));
        for axis in &mut self.axes {
            axis.invalidate();
        }
        for series in &mut self.series {
            series.invalidate();
        }
        self.geometry = CacheState::Clean;
    }

    fn ensure_layout(&mut self) {
        if self.geometry == CacheState::Dirty || self.layout.is_none() {
            self.refresh_layout();
        }
    }

    /// Paint the current state into a canvas. Runs the layout pass first
    /// when geometry is dirty; never errors, degenerate series are skipped.
    pub fn draw(&mut self, canvas: &skia::Canvas) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return;
        }
        if self.series.is_empty() {
            self.draw_placeholder(canvas);
            return;
        }
        self.ensure_layout();
        let layout = match self.layout {
            Some(layout) => layout,
            None => return,
        };
        if !layout.plot.is_valid() {
            return;
        }
        let ranges = self.ranges;

        draw_grid(canvas, &layout, &ranges, self.style.grid, self.style.grid_stroke_width);

        for series in &mut self.series {
            let stroke = match curve::stroke_path(series.pixel_points(&layout.plot, &ranges)) {
                Some(path) => path,
                None => continue,
            };
            canvas.draw_path(&stroke, &series.stroke_paint());
            if let Some(fill_paint) = series.fill_paint(&layout.plot) {
                if let Some(fill) = curve::fill_path(
                    series.pixel_points(&layout.plot, &ranges),
                    layout.plot.bottom,
                ) {
                    canvas.draw_path(&fill, &fill_paint);
                }
            }
        }

        let (view_height, margin) = (self.height, self.style.axis_margin);
        for axis in &mut self.axes {
            axis.placed_labels(&ranges, &layout, view_height, margin);
            axis.draw(canvas);
        }
    }

    fn draw_placeholder(&self, canvas: &skia::Canvas) {
        let font = LabelFont::new(self.style.placeholder_color, self.style.placeholder_size);
        let text = &self.style.placeholder;
        let x = (self.width - font.measure(text)) / 2.0;
        let y = (self.height - (font.ascent() + font.descent())) / 2.0;
        font.draw(canvas, text, x, y);
    }

    /// Render into a CPU raster surface and encode as PNG bytes.
    pub fn render_to_png_bytes(&mut self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG file at `output_png_path`.
    pub fn render_to_png(
        &mut self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render and read back raw RGBA8 pixels: (pixels, width, height, stride).
    pub fn render_to_rgba8(&mut self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.raster_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = opts.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * opts.height as usize];
        if !surface
            .canvas()
            .read_pixels(&info, &mut pixels, row_bytes, (0, 0))
        {
            anyhow::bail!("read pixels failed");
        }
        Ok((pixels, opts.width, opts.height, row_bytes))
    }

    fn raster_surface(&mut self, opts: &RenderOptions) -> Result<skia::Surface> {
        if opts.width <= 0 || opts.height <= 0 {
            anyhow::bail!("render size must be positive");
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.resize(opts.width as f32, opts.height as f32);
        let canvas = surface.canvas();
        canvas.clear(opts.background.unwrap_or(self.style.background));
        self.draw(canvas);
        Ok(surface)
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    layout: &Layout,
    ranges: &AxisRanges,
    color: skia::Color,
    stroke_width: f32,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_stroke_width(stroke_width);

    let plot = layout.plot;
    for y in grid::horizontal_positions(&plot, ranges.left_ticks(), stroke_width) {
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
    for x in grid::vertical_positions(&plot, ranges.bottom_ticks(), stroke_width) {
        canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
    }
}
