//! cities.rs
//!
//! City-wise analysis flow:
//! - GET /city-analysis shows the city selection form.
//! - POST /city-analysis renders the selected city's top movies, chart and
//!   summary sentence.

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Form, Router,
};
use maud::Markup;
use serde::Deserialize;
use std::sync::Arc;
use tokio::task;

use crate::config::{self, StorageConfig};
use crate::controllers::{error_response, join_error};
use crate::error::ReportError;
use crate::views::{self, CityView};
use crate::{reports, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/city-analysis", get(city_page).post(city_result))
}

// GET /city-analysis
async fn city_page(
    State(state): State<Arc<AppState>>,
) -> Result<Markup, (StatusCode, Markup)> {
    let csv_path = state.config.storage.csv_path();
    let cities = task::spawn_blocking(move || reports::list_cities(&csv_path))
        .await
        .map_err(join_error)?;

    match cities {
        Ok(cities) => Ok(views::city_page(&cities, None)),
        // No snapshot yet: steer the user back to the upload form.
        Err(ReportError::NotFound { .. }) => {
            Ok(views::upload_page(Some("Please upload a CSV file first!")))
        }
        Err(e) => {
            tracing::error!("city_page: failed to list cities: {}", e);
            Err(error_response(e))
        }
    }
}

#[derive(Debug, Deserialize)]
struct CitySelection {
    selected_city: String,
}

// POST /city-analysis
async fn city_result(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CitySelection>,
) -> Result<Markup, (StatusCode, Markup)> {
    let csv_path = state.config.storage.csv_path();
    let chart_path = state.config.storage.city_chart_path();
    let city = form.selected_city;

    let result = task::spawn_blocking(move || {
        let cities = reports::list_cities(&csv_path)?;
        let report = reports::build_city_report(&csv_path, &chart_path, &city)?;
        Ok::<_, ReportError>((cities, report, city))
    })
    .await
    .map_err(join_error)?;

    match result {
        Ok((cities, report, city)) => Ok(views::city_page(
            &cities,
            Some(CityView {
                city: &city,
                report: &report,
                chart_url: &StorageConfig::chart_url(config::CITY_CHART_FILE),
            }),
        )),
        Err(ReportError::NotFound { .. }) => {
            Ok(views::upload_page(Some("Please upload a CSV file first!")))
        }
        Err(e) => {
            tracing::error!("city_result: report failed: {}", e);
            Err(error_response(e))
        }
    }
}
