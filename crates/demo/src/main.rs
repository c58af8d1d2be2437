// File: crates/demo/src/main.rs
// Summary: Demo renders two dashboard charts to PNG: a Wi-Fi experience score
// with gradient area fill, and CPU/memory usage with clock-time labels.
// Optionally loads (time, value) samples from a CSV file.

use anyhow::{Context, Result};
use linechart_core::skia::Color;
use linechart_core::{
    AxisConfig, AxisPosition, AxisRanges, Chart, ClockLabels, FormatWith, GradientFill,
    RenderOptions, SeriesConfig,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() -> Result<()> {
    let samples = match std::env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            println!("Using input file: {}", path.display());
            load_samples_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => mock_scores(),
    };
    if samples.len() < 2 {
        anyhow::bail!("need at least two samples");
    }
    println!("Loaded {} samples", samples.len());

    let first_t = samples.first().map(|s| s.0).unwrap_or(0.0);
    let last_t = samples.last().map(|s| s.0).unwrap_or(1.0);
    let opts = RenderOptions::default();

    // 1) Wi-Fi experience score: gradient area fill, positional captions
    let mut score_chart = Chart::new();
    score_chart.set_axis_ranges(AxisRanges {
        left_max: 100.0,
        left_step: 20.0,
        bottom_min: first_t,
        bottom_max: last_t,
        bottom_step: (last_t - first_t) / 2.0,
        ..AxisRanges::default()
    })?;
    score_chart.add_axis(
        AxisConfig::new(AxisPosition::Left).with_color(Color::from_argb(255, 0, 0, 0)),
    );
    score_chart.add_axis(
        AxisConfig::new(AxisPosition::Bottom)
            .with_color(Color::from_argb(0x99, 0x3c, 0x3c, 0x43))
            .with_formatter(Arc::new(FormatWith(|index: usize, _: f32| {
                ["24 Hours Ago", "12 Hours Ago", "Now"]
                    .get(index)
                    .unwrap_or(&"")
                    .to_string()
            }))),
    );
    score_chart.add_series(
        SeriesConfig::with_values(samples.clone())
            .with_color(Color::from_argb(255, 0x5b, 0x8f, 0xf9))
            .with_stroke_width(2.0)
            .with_gradient_fill(GradientFill::new(
                Color::from_argb(0x7e, 0x00, 0x6f, 0xff),
                Color::from_argb(0x00, 0x00, 0x6f, 0xff),
            )),
    );
    let out_score = out_name("wifi_score");
    score_chart.render_to_png(&opts, &out_score)?;
    println!("Wrote {}", out_score.display());

    // 2) CPU/memory usage: two lines, clock-time bottom labels
    let (cpu, mem) = mock_usage(first_t, last_t);
    let mut usage_chart = Chart::new();
    usage_chart.set_axis_ranges(AxisRanges {
        left_max: 100.0,
        left_step: 20.0,
        bottom_min: first_t,
        bottom_max: last_t,
        bottom_step: (last_t - first_t) / 6.0,
        ..AxisRanges::default()
    })?;
    usage_chart.add_axis(
        AxisConfig::new(AxisPosition::Left)
            .with_formatter(Arc::new(FormatWith(|_: usize, value: f32| format!("{value}%")))),
    );
    usage_chart.add_axis(
        AxisConfig::new(AxisPosition::Bottom)
            .with_color(Color::from_argb(0x99, 0x3c, 0x3c, 0x43))
            .with_formatter(Arc::new(ClockLabels::new("%H:%M"))),
    );
    usage_chart.add_series(
        SeriesConfig::with_values(cpu).with_color(Color::from_argb(255, 0x00, 0x7a, 0xff)),
    );
    usage_chart.add_series(
        SeriesConfig::with_values(mem).with_color(Color::from_argb(255, 0x34, 0xc7, 0x59)),
    );
    let out_usage = out_name("usage");
    usage_chart.render_to_png(&opts, &out_usage)?;
    println!("Wrote {}", out_usage.display());

    Ok(())
}

/// Output file name like target/out/chart_<suffix>.png
fn out_name(suffix: &str) -> PathBuf {
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.join(format!("chart_{suffix}.png"))
}

/// 24 hours of synthetic score samples ending now, one per half hour.
fn mock_scores() -> Vec<(f32, f32)> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0) as f32;
    let start = now - 24.0 * 3600.0;
    (0..=48)
        .map(|i| {
            let t = start + i as f32 * 1800.0;
            let score = 70.0 + (i as f32 * 0.35).sin() * 20.0 + (i as f32 * 0.08).cos() * 8.0;
            (t, score.clamp(0.0, 100.0))
        })
        .collect()
}

/// Synthetic CPU and memory percentages over the same window.
fn mock_usage(first_t: f32, last_t: f32) -> (Vec<(f32, f32)>, Vec<(f32, f32)>) {
    let n = 48;
    let step = (last_t - first_t) / n as f32;
    let cpu = (0..=n)
        .map(|i| {
            let t = first_t + i as f32 * step;
            (t, (35.0 + (i as f32 * 0.5).sin() * 25.0).clamp(0.0, 100.0))
        })
        .collect();
    let mem = (0..=n)
        .map(|i| {
            let t = first_t + i as f32 * step;
            (t, (55.0 + (i as f32 * 0.2).cos() * 10.0).clamp(0.0, 100.0))
        })
        .collect();
    (cpu, mem)
}

/// Load (time, value) samples from a CSV with `time`/`value`-like headers.
fn load_samples_csv(path: &Path) -> Result<Vec<(f32, f32)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        headers
            .iter()
            .position(|h| names.iter().any(|want| h == want))
    };
    let i_time = idx(&["time", "timestamp", "date", "t"]);
    let i_value = idx(&["value", "score", "y", "v"]);

    let mut out = Vec::new();
    let mut row_index = 0.0f32;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f32> {
            i.and_then(|ix| rec.get(ix))
                .and_then(|s| s.trim().parse::<f32>().ok())
        };
        let t = parse(i_time).unwrap_or_else(|| {
            let v = row_index;
            row_index += 1.0;
            v
        });
        if let Some(v) = parse(i_value) {
            out.push((t, v));
        }
    }
    Ok(out)
}
