//! dashboard.rs
//!
//! Upload page and the overall analysis flow:
//! - GET / shows the CSV upload form.
//! - POST /upload persists the uploaded file to the configured CSV path,
//!   runs the overall report and renders the dashboard.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use maud::Markup;
use std::sync::Arc;
use tokio::task;

use crate::config::{self, StorageConfig};
use crate::controllers::{error_response, join_error};
use crate::views;
use crate::{reports, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(upload_page))
        .route("/upload", post(upload_csv))
}

// GET /
async fn upload_page() -> Markup {
    views::upload_page(None)
}

fn bad_upload(message: &'static str) -> (StatusCode, Markup) {
    (StatusCode::BAD_REQUEST, views::upload_page(Some(message)))
}

// POST /upload
async fn upload_csv(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Markup, (StatusCode, Markup)> {
    // Pull the bytes of the "file" field; other fields are ignored.
    let mut payload = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("upload_csv: failed to read multipart field: {:?}", e);
        bad_upload("Could not read the uploaded file.")
    })? {
        if field.name() == Some("file") {
            let bytes = field.bytes().await.map_err(|e| {
                tracing::error!("upload_csv: failed to buffer upload: {:?}", e);
                bad_upload("Could not read the uploaded file.")
            })?;
            payload = Some(bytes);
            break;
        }
    }

    let Some(data) = payload else {
        return Err(bad_upload("No file was uploaded."));
    };

    // Overwrite the single CSV snapshot on disk.
    let csv_path = state.config.storage.csv_path();
    if let Some(parent) = csv_path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            tracing::error!("upload_csv: failed to create data dir: {:?}", e);
            error_response(e.into())
        })?;
    }
    tokio::fs::write(&csv_path, &data).await.map_err(|e| {
        tracing::error!("upload_csv: failed to persist CSV: {:?}", e);
        error_response(e.into())
    })?;
    tracing::info!("uploaded CSV saved to {} ({} bytes)", csv_path.display(), data.len());

    // The load-aggregate-render pipeline is synchronous; keep it off the
    // async workers.
    let chart_path = state.config.storage.showtime_chart_path();
    let (report, stats) = task::spawn_blocking(move || {
        let report = reports::build_overall_report(&csv_path, &chart_path)?;
        let stats = reports::build_global_summary(&csv_path)?;
        Ok::<_, crate::error::ReportError>((report, stats))
    })
    .await
    .map_err(join_error)?
    .map_err(|e| {
        tracing::error!("upload_csv: report failed: {}", e);
        error_response(e)
    })?;

    Ok(views::dashboard_page(
        &report,
        &stats,
        &StorageConfig::chart_url(config::SHOWTIME_CHART_FILE),
    ))
}
