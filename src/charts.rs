//! charts.rs
//!
//! Bar chart rendering with `plotters`. One parameterized renderer serves
//! both call sites (overall show-time chart and per-city top-movies chart);
//! the call sites differ only in config and output path.

use std::path::Path;

use plotters::prelude::*;

use crate::error::ReportError;

// Bar colors of the two call sites.
pub const SHOWTIME_BAR_COLOR: RGBColor = RGBColor(0x4f, 0x6c, 0xff);
pub const CITY_BAR_COLOR: RGBColor = RGBColor(0x4c, 0xaf, 0x50);

/// Everything a call site fixes about its chart.
#[derive(Debug, Clone)]
pub struct BarChartConfig<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub bar_color: RGBColor,
    pub size: (u32, u32),
}

fn chart_err<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Chart(err.to_string())
}

/// Draw a vertical bar chart for `categories` and write it to `output_path`,
/// creating parent directories as needed and overwriting any existing file.
///
/// The y axis tops out at 1.1x the largest value, clamped to a minimum
/// positive range so an all-zero input still renders a valid axis.
pub fn render_bar_chart(
    categories: &[(String, u64)],
    config: &BarChartConfig<'_>,
    output_path: &Path,
) -> Result<(), ReportError> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let max_value = categories.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let y_max = (max_value as f64 * 1.1).max(1.0);
    let x_max = categories.len().max(1);

    let root = BitMapBackend::new(output_path, config.size).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(config.title, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0usize..x_max, 0f64..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(x_max)
        .x_label_formatter(&|idx: &usize| {
            categories
                .get(*idx)
                .map(|(label, _)| label.clone())
                .unwrap_or_default()
        })
        .x_desc(config.x_label)
        .y_desc(config.y_label)
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(categories.iter().enumerate().map(|(idx, (_, value))| {
            let mut bar = Rectangle::new(
                [(idx, 0.0), (idx + 1, *value as f64)],
                config.bar_color.mix(0.9).filled(),
            );
            bar.set_margin(0, 0, 12, 12);
            bar
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    tracing::debug!("chart saved at {}", output_path.display());
    Ok(())
}
