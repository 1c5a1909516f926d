pub mod cities;
pub mod dashboard;

use axum::http::StatusCode;
use axum::Router;
use maud::Markup;
use std::sync::Arc;

use crate::error::ReportError;
use crate::views;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(dashboard::routes())
        .merge(cities::routes())
}

/// The shell never exposes raw internals: every core error becomes an HTML
/// error page with a matching status code.
pub(crate) fn error_response(err: ReportError) -> (StatusCode, Markup) {
    let status = match err {
        ReportError::NotFound { .. } => StatusCode::NOT_FOUND,
        ReportError::MalformedData(_) | ReportError::InvalidSelection { .. } => {
            StatusCode::BAD_REQUEST
        }
        ReportError::Chart(_) | ReportError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, views::error_page(&err.to_string()))
}

/// A blocking report task that died before returning its result.
pub(crate) fn join_error(err: tokio::task::JoinError) -> (StatusCode, Markup) {
    tracing::error!("report task panicked: {:?}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        views::error_page("The report could not be generated."),
    )
}
