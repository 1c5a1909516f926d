//! Interactive command-line variant of the dashboard flow: run the overall
//! report, list the cities, prompt for a selection and render that city's
//! top-movies chart.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;

use cinestats::config::Config;
use cinestats::reports;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let csv_path: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.storage.csv_path());

    println!("{:=<60}", "");
    println!("CineStats - Movie Ticket Booking Analysis");
    println!("{:=<60}", "");

    let report =
        reports::build_overall_report(&csv_path, &config.storage.showtime_chart_path())?;
    let stats = reports::build_global_summary(&csv_path)?;

    println!("Data is from: {} to {}", report.first_date, report.last_date);
    println!("Total Bookings: {}", stats.total_bookings);
    println!("Total Seats Booked: {}", report.total_seats);
    println!("Total Revenue: {:.2}", stats.total_revenue);
    println!("Movies: {}, Cities: {}", stats.unique_movies, stats.unique_cities);
    println!();
    println!("Most Popular Show Time: {}", report.most_popular_show_time);
    println!("Seats at Peak Slot: {}", report.max_seats);
    println!(
        "Chart saved: {}",
        config.storage.showtime_chart_path().display()
    );

    let cities = reports::list_cities(&csv_path)?;
    println!();
    println!("All Cities (Alphabetically):");
    for (idx, city) in cities.iter().enumerate() {
        println!("{}. {}", idx + 1, city);
    }

    print!("\nEnter city number: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    // Invalid input is reported, not propagated: the process still exits
    // cleanly with the overall report already produced.
    let city = match reports::select_city(&cities, &line) {
        Ok(city) => city,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    let city_report =
        reports::build_city_report(&csv_path, &config.storage.city_chart_path(), city)?;
    println!();
    println!("Chart saved: {}", city_report.chart_path.display());
    println!("{}", city_report.summary);

    Ok(())
}
