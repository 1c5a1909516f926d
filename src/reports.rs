//! reports.rs
//!
//! Orchestrates loader -> analytics -> charts for the two supported reports
//! and the city list. Paths are threaded explicitly: the caller decides where
//! the CSV lives and where each chart lands.
//!
//! Every function is stateless and idempotent modulo the overwritten chart
//! file; the CSV is re-read from disk on each call.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::analytics::{self, GlobalSummary, RankedMovie};
use crate::charts::{self, BarChartConfig, CITY_BAR_COLOR, SHOWTIME_BAR_COLOR};
use crate::error::ReportError;
use crate::loader;
use crate::models::ShowTime;

/// How many movies a city report ranks.
pub const TOP_MOVIES: usize = 5;

const DATE_FORMAT: &str = "%d %b %Y";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallReport {
    pub total_seats: u64,
    pub most_popular_show_time: ShowTime,
    pub max_seats: u64,
    pub first_date: String,
    pub last_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityReport {
    pub chart_path: PathBuf,
    pub top_movies: Vec<RankedMovie>,
    pub summary: String,
}

/// Load the CSV, compute the show-time popularity ranking and the date
/// range, and render the show-time chart to `chart_path`.
///
/// A table with no data rows has no most-popular slot and no date range, so
/// it is rejected as malformed rather than reported with invented values.
pub fn build_overall_report(
    csv_path: &Path,
    chart_path: &Path,
) -> Result<OverallReport, ReportError> {
    let bookings = loader::load_bookings(csv_path)?;

    let popularity = analytics::showtime_popularity(&bookings);
    let (Some(&(most_popular_show_time, max_seats)), Some(first), Some(last)) = (
        popularity.first(),
        bookings.iter().map(|b| b.show_date).min(),
        bookings.iter().map(|b| b.show_date).max(),
    ) else {
        return Err(ReportError::MalformedData(
            "no booking records in CSV".to_string(),
        ));
    };

    let total_seats: u64 = bookings.iter().map(|b| u64::from(b.seats_booked)).sum();

    // The chart is drawn in chronological slot order, with slots absent from
    // the table shown as zero-height bars.
    let categories: Vec<(String, u64)> = ShowTime::ALL
        .iter()
        .map(|slot| {
            let seats = popularity
                .iter()
                .find(|(s, _)| s == slot)
                .map(|(_, seats)| *seats)
                .unwrap_or(0);
            (slot.to_string(), seats)
        })
        .collect();

    charts::render_bar_chart(
        &categories,
        &BarChartConfig {
            title: "Show-Time Popularity Based on Bookings",
            x_label: "Show Time",
            y_label: "Total Seats Booked",
            bar_color: SHOWTIME_BAR_COLOR,
            size: (1000, 600),
        },
        chart_path,
    )?;

    tracing::info!(
        "overall report: {} seats, most popular slot {} ({} seats)",
        total_seats,
        most_popular_show_time,
        max_seats
    );

    Ok(OverallReport {
        total_seats,
        most_popular_show_time,
        max_seats,
        first_date: first.format(DATE_FORMAT).to_string(),
        last_date: last.format(DATE_FORMAT).to_string(),
    })
}

/// Load the CSV and compute the whole-table summary statistics.
pub fn build_global_summary(csv_path: &Path) -> Result<GlobalSummary, ReportError> {
    let bookings = loader::load_bookings(csv_path)?;
    Ok(analytics::global_summary(&bookings))
}

/// Load the CSV, rank `city`'s top movies, render its chart to `chart_path`
/// and compose the one-sentence summary.
pub fn build_city_report(
    csv_path: &Path,
    chart_path: &Path,
    city: &str,
) -> Result<CityReport, ReportError> {
    let bookings = loader::load_bookings(csv_path)?;

    let top_movies = analytics::top_movies_in_city(&bookings, city, TOP_MOVIES);
    let stats = analytics::city_summary(&bookings, city);

    let categories: Vec<(String, u64)> = top_movies
        .iter()
        .map(|movie| (movie.name.clone(), movie.seats))
        .collect();

    let title = format!("{}'s Top {} Movies", city, TOP_MOVIES);
    charts::render_bar_chart(
        &categories,
        &BarChartConfig {
            title: &title,
            x_label: "Movie Name",
            y_label: "Total Seats Booked",
            bar_color: CITY_BAR_COLOR,
            size: (1200, 600),
        },
        chart_path,
    )?;

    let summary = format!(
        "In {}, {} movies were screened with a total of {} seats booked.",
        city, stats.total_movies, stats.total_seats
    );

    Ok(CityReport {
        chart_path: chart_path.to_path_buf(),
        top_movies,
        summary,
    })
}

/// Distinct cities in the CSV, sorted alphabetically.
pub fn list_cities(csv_path: &Path) -> Result<Vec<String>, ReportError> {
    let bookings = loader::load_bookings(csv_path)?;
    Ok(analytics::list_cities(&bookings))
}

/// Resolve a 1-based numeric selection against the city list.
pub fn select_city<'a>(cities: &'a [String], input: &str) -> Result<&'a str, ReportError> {
    let count = cities.len();
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=count).contains(n))
        .map(|n| cities[n - 1].as_str())
        .ok_or_else(|| ReportError::InvalidSelection {
            input: input.trim().to_string(),
            count,
        })
}
