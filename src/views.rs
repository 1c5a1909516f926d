//! views.rs
//!
//! maud templates for the dashboard pages. Handlers pass in plain report
//! data; no template touches the filesystem or the aggregations.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::analytics::GlobalSummary;
use crate::reports::{CityReport, OverallReport};

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; color: #222; }
nav a { margin-right: 1rem; }
.error { color: #b00020; font-weight: bold; }
.stats { display: flex; flex-wrap: wrap; gap: 1rem; margin: 1rem 0; }
.stat { border: 1px solid #ddd; border-radius: 8px; padding: 0.8rem 1.2rem; min-width: 10rem; }
.stat .value { font-size: 1.5rem; font-weight: bold; }
table { border-collapse: collapse; margin: 1rem 0; }
th, td { border: 1px solid #ddd; padding: 0.4rem 0.9rem; text-align: left; }
img.chart { max-width: 100%; border: 1px solid #eee; margin-top: 1rem; }
form.upload, form.city { margin: 1.5rem 0; }
"#;

/// Per-city results as rendered on the city analysis page.
pub struct CityView<'a> {
    pub city: &'a str,
    pub report: &'a CityReport,
    pub chart_url: &'a str,
}

fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                nav {
                    a href="/" { "Upload" }
                    a href="/city-analysis" { "City Analysis" }
                }
                (content)
            }
        }
    }
}

fn stat(label: &str, value: &str) -> Markup {
    html! {
        div.stat {
            div { (label) }
            div.value { (value) }
        }
    }
}

pub fn upload_page(error: Option<&str>) -> Markup {
    layout(
        "CineStats - Upload",
        html! {
            h1 { "CineStats" }
            p { "Upload a CSV of movie ticket bookings to analyze show-time popularity." }
            @if let Some(message) = error {
                p.error { (message) }
            }
            form.upload action="/upload" method="post" enctype="multipart/form-data" {
                input type="file" name="file" accept=".csv" required;
                " "
                input type="submit" value="Upload & Analyze";
            }
        },
    )
}

pub fn dashboard_page(
    report: &OverallReport,
    stats: &GlobalSummary,
    chart_url: &str,
) -> Markup {
    layout(
        "CineStats - Dashboard",
        html! {
            h1 { "Booking Analysis" }
            p {
                "Data is from " (report.first_date) " to " (report.last_date) "."
            }
            div.stats {
                (stat("Total Seats Booked", &report.total_seats.to_string()))
                (stat("Most Popular Show Time", report.most_popular_show_time.label()))
                (stat("Seats at Peak Slot", &report.max_seats.to_string()))
                (stat("Total Bookings", &stats.total_bookings.to_string()))
                (stat("Total Revenue", &format!("{:.2}", stats.total_revenue)))
                (stat("Movies", &stats.unique_movies.to_string()))
                (stat("Cities", &stats.unique_cities.to_string()))
            }
            h2 { "Show-Time Popularity" }
            img.chart src=(chart_url) alt="Show-time popularity bar chart";
        },
    )
}

pub fn city_page(cities: &[String], results: Option<CityView<'_>>) -> Markup {
    let selected = results.as_ref().map(|r| r.city);
    layout(
        "CineStats - City Analysis",
        html! {
            h1 { "City-wise Analysis" }
            form.city action="/city-analysis" method="post" {
                label for="selected_city" { "Select a city: " }
                select name="selected_city" id="selected_city" {
                    @for city in cities {
                        option value=(city) selected[selected == Some(city.as_str())] {
                            (city)
                        }
                    }
                }
                " "
                input type="submit" value="Analyze";
            }
            @if let Some(view) = results {
                h2 { (view.city) "'s Top Movies" }
                p { (view.report.summary) }
                @if view.report.top_movies.is_empty() {
                    p { "No bookings were found for this city." }
                } @else {
                    table {
                        tr { th { "Rank" } th { "Movie" } th { "Seats Booked" } }
                        @for movie in &view.report.top_movies {
                            tr {
                                td { (movie.rank) }
                                td { (movie.name) }
                                td { (movie.seats) }
                            }
                        }
                    }
                    img.chart src=(view.chart_url) alt="Top movies bar chart";
                }
            }
        },
    )
}

pub fn error_page(message: &str) -> Markup {
    layout(
        "CineStats - Error",
        html! {
            h1 { "Something went wrong" }
            p.error { (message) }
            p { a href="/" { "Go back" } }
        },
    )
}
