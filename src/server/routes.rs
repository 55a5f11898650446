use crate::dataset::{DatasetError, OrganizationRecord};
use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Path of the dataset read endpoint
pub const SCRAPED_DATA_PATH: &str = "/scraped_data";

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Dataset read failure, surfaced as a 500
pub struct DatasetUnavailable(DatasetError);

impl IntoResponse for DatasetUnavailable {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Failed to read dataset");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Returns the whole persisted dataset
///
/// The dataset is read from the store on every request. A missing or
/// unreadable dataset fails the request; there is no empty fallback.
pub async fn scraped_data_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrganizationRecord>>, DatasetUnavailable> {
    let records = state.store.read_records().map_err(DatasetUnavailable)?;
    Ok(Json(records))
}
