//! Scatter and line plots over aggregated rows.

use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::debug;
use viz_core::bucket::Bucket;
use viz_core::error::{Result, VizError};
use viz_core::models::{FrequencyRow, SentimentRow};

use crate::palette;

const CHART_SIZE: (u32, u32) = (1600, 800);

// ── Public API ────────────────────────────────────────────────────────────────

/// Render frequency rows to `<axis>.png` in `out_dir` and return the path.
///
/// Time buckets produce a scatter plot, date buckets a line plot with the
/// points of each series sorted by coordinate first.
pub fn render_frequency(rows: &[FrequencyRow], bucket: Bucket, out_dir: &Path) -> Result<PathBuf> {
    let points: Vec<(String, f64, f64)> = rows
        .iter()
        .map(|row| (row.sender.clone(), row.bucket.coord(), f64::from(row.count)))
        .collect();

    let y_max = points.iter().map(|p| p.2).fold(0.0_f64, f64::max);
    let y_range = 0.0..(y_max * 1.1).max(1.0);

    let path = out_dir.join(format!("{}.png", bucket.axis_label()));
    draw_chart(&path, &points, bucket, "Frequency", y_range)?;
    Ok(path)
}

/// Render sentiment rows to `<axis>_Sentiment.png` in `out_dir` and return
/// the path. The y-axis is pinned to the score range [-1, 1].
pub fn render_sentiment(rows: &[SentimentRow], bucket: Bucket, out_dir: &Path) -> Result<PathBuf> {
    let points: Vec<(String, f64, f64)> = rows
        .iter()
        .map(|row| (row.sender.clone(), row.bucket.coord(), row.mean_score))
        .collect();

    let path = out_dir.join(format!("{}_Sentiment.png", bucket.axis_label()));
    draw_chart(&path, &points, bucket, "Sentiment", -1.0..1.0)?;
    Ok(path)
}

// ── Drawing ───────────────────────────────────────────────────────────────────

fn draw_chart(
    path: &Path,
    points: &[(String, f64, f64)],
    bucket: Bucket,
    y_label: &str,
    y_range: Range<f64>,
) -> Result<()> {
    let series = group_by_sender(points);
    let x_range = x_range_of(points);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Graph of {} against {}", y_label, bucket.axis_label()),
            ("sans-serif", 30),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(bucket.axis_label())
        .y_desc(y_label)
        .x_label_formatter(&|x| bucket.format_coord(*x))
        .draw()
        .map_err(render_err)?;

    for (idx, (sender, sender_points)) in series.iter().enumerate() {
        let color = palette::color_for(idx);

        match bucket {
            Bucket::ByTime => {
                let style = color.filled();
                chart
                    .draw_series(
                        sender_points
                            .iter()
                            .map(|&(x, y)| Circle::new((x, y), 4, style)),
                    )
                    .map_err(render_err)?
                    .label(sender.as_str())
                    .legend(move |(x, y)| Circle::new((x, y), 4, style));
            }
            Bucket::ByDate => {
                // Unsorted points zig-zag the line back and forth.
                let mut sorted = sender_points.clone();
                sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

                let style = color.stroke_width(2);
                chart
                    .draw_series(LineSeries::new(sorted, style))
                    .map_err(render_err)?
                    .label(sender.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
            }
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    debug!("rendered {} series to {}", series.len(), path.display());
    Ok(())
}

fn render_err(e: impl std::fmt::Display) -> VizError {
    VizError::Render(e.to_string())
}

/// Group (sender, x, y) triples into per-sender series, preserving the order
/// senders first appear in.
fn group_by_sender(points: &[(String, f64, f64)]) -> Vec<(String, Vec<(f64, f64)>)> {
    let mut series: Vec<(String, Vec<(f64, f64)>)> = Vec::new();
    for (sender, x, y) in points {
        match series.iter_mut().find(|(name, _)| name == sender) {
            Some((_, pts)) => pts.push((*x, *y)),
            None => series.push((sender.clone(), vec![(*x, *y)])),
        }
    }
    series
}

/// X range covering all points, padded so single-bucket data stays visible.
fn x_range_of(points: &[(String, f64, f64)]) -> Range<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (_, x, _) in points {
        min = min.min(*x);
        max = max.max(*x);
    }
    if min > max {
        return 0.0..1.0;
    }
    let pad = ((max - min) * 0.05).max(1.0);
    (min - pad)..(max + pad)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
