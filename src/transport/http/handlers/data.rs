use crate::domain::record::{self, Record};
use crate::transport::http::error::ApiError;
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::Json;

/// Returns every record of the collection, identifiers as strings.
#[utoipa::path(
    get,
    path = "/api/data",
    responses(
        (status = 200, description = "JSON array of every record in the collection"),
        (status = 500, description = "Document store unavailable", body = ApiResponse)
    )
)]
pub async fn get_all_data_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record>>, ApiError> {
    let docs = state.source.fetch_all().await?;
    Ok(Json(record::from_documents(docs)))
}
