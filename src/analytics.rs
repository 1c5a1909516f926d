//! analytics.rs
//!
//! Pure aggregations over the in-memory booking table.
//!
//! Includes the following functionality:
//! - Seats booked per show time, ranked by popularity.
//! - Top-N movies by seats booked within a city.
//! - Per-city and global summary statistics.
//! - The distinct city list for the selection form.
//!
//! Nothing here touches the filesystem; rendering is a separate step in
//! `charts`/`reports`.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::Serialize;

use crate::models::{Booking, ShowTime};

/// One entry of a top-movies ranking, 1-indexed in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedMovie {
    pub rank: usize,
    pub name: String,
    pub seats: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CitySummary {
    pub total_seats: u64,
    pub total_movies: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlobalSummary {
    pub total_bookings: usize,
    pub total_seats: u64,
    pub total_revenue: f64,
    pub unique_movies: usize,
    pub unique_cities: usize,
}

/// Total seats booked per show time, sorted descending by total.
///
/// Grouping goes through a `BTreeMap` keyed on the chronologically ordered
/// `ShowTime`, and the final sort is stable, so slots with equal totals stay
/// in chronological order. Deterministic for a fixed input.
pub fn showtime_popularity(bookings: &[Booking]) -> Vec<(ShowTime, u64)> {
    let mut totals: BTreeMap<ShowTime, u64> = BTreeMap::new();
    for booking in bookings {
        *totals.entry(booking.show_time).or_insert(0) += u64::from(booking.seats_booked);
    }

    let mut ranked: Vec<(ShowTime, u64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Top `n` movies by seats booked among rows matching `city` exactly.
///
/// Returns fewer than `n` entries when fewer distinct movies exist, and an
/// empty vec when the city matches no rows. Movies with equal totals stay
/// in alphabetical order (stable sort over a `BTreeMap`).
pub fn top_movies_in_city(bookings: &[Booking], city: &str, n: usize) -> Vec<RankedMovie> {
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for booking in bookings.iter().filter(|b| b.city == city) {
        *totals.entry(booking.movie_name.as_str()).or_insert(0) +=
            u64::from(booking.seats_booked);
    }

    let mut ranked: Vec<(&str, u64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);

    ranked
        .into_iter()
        .enumerate()
        .map(|(idx, (name, seats))| RankedMovie {
            rank: idx + 1,
            name: name.to_string(),
            seats,
        })
        .collect()
}

/// Seats booked and distinct movie count among rows matching `city`.
pub fn city_summary(bookings: &[Booking], city: &str) -> CitySummary {
    let mut total_seats = 0u64;
    let mut movies: HashSet<&str> = HashSet::new();
    for booking in bookings.iter().filter(|b| b.city == city) {
        total_seats += u64::from(booking.seats_booked);
        movies.insert(booking.movie_name.as_str());
    }

    CitySummary {
        total_seats,
        total_movies: movies.len(),
    }
}

/// Whole-table totals: one pass, revenue as `Σ seats × price`.
pub fn global_summary(bookings: &[Booking]) -> GlobalSummary {
    let mut total_seats = 0u64;
    let mut total_revenue = 0f64;
    let mut movies: HashSet<&str> = HashSet::new();
    let mut cities: HashSet<&str> = HashSet::new();

    for booking in bookings {
        total_seats += u64::from(booking.seats_booked);
        total_revenue += f64::from(booking.seats_booked) * booking.ticket_price;
        movies.insert(booking.movie_name.as_str());
        cities.insert(booking.city.as_str());
    }

    GlobalSummary {
        total_bookings: bookings.len(),
        total_seats,
        total_revenue,
        unique_movies: movies.len(),
        unique_cities: cities.len(),
    }
}

/// Distinct city names, case-sensitive alphabetical order.
pub fn list_cities(bookings: &[Booking]) -> Vec<String> {
    bookings
        .iter()
        .map(|b| b.city.clone())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn booking(time: ShowTime, seats: u32, price: f64, movie: &str, city: &str) -> Booking {
        Booking {
            show_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            show_time: time,
            seats_booked: seats,
            ticket_price: price,
            movie_name: movie.to_string(),
            city: city.to_string(),
        }
    }

    #[test]
    fn popularity_sums_seats_within_a_slot() {
        let table = vec![
            booking(ShowTime::TenAm, 10, 100.0, "Alpha", "Pune"),
            booking(ShowTime::TenAm, 20, 100.0, "Alpha", "Pune"),
            booking(ShowTime::TenAm, 30, 100.0, "Beta", "Mumbai"),
        ];
        let ranked = showtime_popularity(&table);
        assert_eq!(ranked, vec![(ShowTime::TenAm, 60)]);
    }

    #[test]
    fn popularity_orders_descending_with_chronological_ties() {
        let table = vec![
            booking(ShowTime::OnePm, 5, 100.0, "Alpha", "Pune"),
            booking(ShowTime::TenPm, 40, 100.0, "Beta", "Pune"),
            booking(ShowTime::TenAm, 5, 100.0, "Gamma", "Pune"),
        ];
        let ranked = showtime_popularity(&table);
        // 10:00 AM and 1:00 PM tie on 5 seats; chronological order wins.
        assert_eq!(
            ranked,
            vec![
                (ShowTime::TenPm, 40),
                (ShowTime::TenAm, 5),
                (ShowTime::OnePm, 5),
            ]
        );
    }

    #[test]
    fn top_movies_ranks_by_seats_within_city() {
        let table = vec![
            booking(ShowTime::TenAm, 30, 150.0, "B", "Pune"),
            booking(ShowTime::OnePm, 50, 150.0, "A", "Pune"),
            booking(ShowTime::FourPm, 10, 150.0, "C", "Pune"),
            booking(ShowTime::TenPm, 5, 150.0, "D", "Mumbai"),
        ];
        let top = top_movies_in_city(&table, "Pune", 5);
        assert_eq!(
            top,
            vec![
                RankedMovie { rank: 1, name: "A".into(), seats: 50 },
                RankedMovie { rank: 2, name: "B".into(), seats: 30 },
                RankedMovie { rank: 3, name: "C".into(), seats: 10 },
            ]
        );
        assert!(top_movies_in_city(&table, "Goa", 5).is_empty());
    }

    #[test]
    fn top_movies_caps_at_n() {
        let table: Vec<Booking> = ["A", "B", "C", "D", "E", "F", "G"]
            .iter()
            .enumerate()
            .map(|(i, name)| booking(ShowTime::TenAm, (i as u32 + 1) * 10, 100.0, name, "Pune"))
            .collect();
        let top = top_movies_in_city(&table, "Pune", 5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].name, "G");
        assert_eq!(top[0].seats, 70);
    }

    #[test]
    fn city_summary_counts_distinct_movies() {
        let table = vec![
            booking(ShowTime::TenAm, 10, 100.0, "Alpha", "Pune"),
            booking(ShowTime::OnePm, 20, 100.0, "Alpha", "Pune"),
            booking(ShowTime::TenPm, 5, 100.0, "Beta", "Pune"),
            booking(ShowTime::TenPm, 99, 100.0, "Gamma", "Mumbai"),
        ];
        let summary = city_summary(&table, "Pune");
        assert_eq!(summary, CitySummary { total_seats: 35, total_movies: 2 });
    }

    #[test]
    fn global_summary_multiplies_seats_by_price() {
        let table = vec![
            booking(ShowTime::TenAm, 10, 200.0, "Alpha", "Pune"),
            booking(ShowTime::OnePm, 5, 100.0, "Beta", "Mumbai"),
        ];
        let summary = global_summary(&table);
        assert_eq!(summary.total_bookings, 2);
        assert_eq!(summary.total_seats, 15);
        assert!((summary.total_revenue - 2500.0).abs() < 1e-9);
        assert_eq!(summary.unique_movies, 2);
        assert_eq!(summary.unique_cities, 2);
    }

    #[test]
    fn empty_table_yields_zeroes_and_empty_mappings() {
        let table: Vec<Booking> = Vec::new();
        assert!(showtime_popularity(&table).is_empty());
        assert!(top_movies_in_city(&table, "Pune", 5).is_empty());
        assert_eq!(city_summary(&table, "Pune"), CitySummary { total_seats: 0, total_movies: 0 });
        let summary = global_summary(&table);
        assert_eq!(summary.total_bookings, 0);
        assert_eq!(summary.total_seats, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.unique_movies, 0);
        assert_eq!(summary.unique_cities, 0);
        assert!(list_cities(&table).is_empty());
    }

    #[test]
    fn list_cities_sorts_and_deduplicates() {
        let table = vec![
            booking(ShowTime::TenAm, 1, 100.0, "Alpha", "Pune"),
            booking(ShowTime::TenAm, 1, 100.0, "Alpha", "Mumbai"),
            booking(ShowTime::TenAm, 1, 100.0, "Alpha", "Pune"),
            booking(ShowTime::TenAm, 1, 100.0, "Alpha", "Agra"),
        ];
        assert_eq!(list_cities(&table), vec!["Agra", "Mumbai", "Pune"]);
    }

    fn arb_booking() -> impl Strategy<Value = Booking> {
        (
            0usize..ShowTime::ALL.len(),
            0u32..500,
            0.0f64..500.0,
            prop::sample::select(vec!["Alpha", "Beta", "Gamma", "Delta", "Epsilon"]),
            prop::sample::select(vec!["Pune", "Mumbai", "Nagpur", "Delhi"]),
            0u64..365,
        )
            .prop_map(|(slot, seats, price, movie, city, day)| Booking {
                show_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(day),
                show_time: ShowTime::ALL[slot],
                seats_booked: seats,
                ticket_price: price,
                movie_name: movie.to_string(),
                city: city.to_string(),
            })
    }

    proptest! {
        #[test]
        fn popularity_preserves_the_seat_total(table in prop::collection::vec(arb_booking(), 0..60)) {
            let expected: u64 = table.iter().map(|b| u64::from(b.seats_booked)).sum();
            let ranked: u64 = showtime_popularity(&table).iter().map(|(_, s)| s).sum();
            prop_assert_eq!(ranked, expected);
        }

        #[test]
        fn top_movies_ranks_are_dense_and_non_increasing(
            table in prop::collection::vec(arb_booking(), 0..60),
            city in prop::sample::select(vec!["Pune", "Mumbai", "Nowhere"]),
        ) {
            let top = top_movies_in_city(&table, city, 5);
            prop_assert!(top.len() <= 5);
            for (idx, entry) in top.iter().enumerate() {
                prop_assert_eq!(entry.rank, idx + 1);
            }
            for pair in top.windows(2) {
                prop_assert!(pair[0].seats >= pair[1].seats);
            }
        }

        #[test]
        fn revenue_matches_the_row_by_row_sum(table in prop::collection::vec(arb_booking(), 0..60)) {
            let expected: f64 = table
                .iter()
                .map(|b| f64::from(b.seats_booked) * b.ticket_price)
                .sum();
            let summary = global_summary(&table);
            prop_assert!((summary.total_revenue - expected).abs() < 1e-6);
        }
    }
}
