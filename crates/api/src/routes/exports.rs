//! Admin export, backup and reset route handlers.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use domain::services::export::ExportCollection;
use persistence::ExportFile;
use serde::Serialize;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_download;
use crate::routes::{with_notice, MutationResponse};

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEntry {
    pub collection: &'static str,
    pub records: usize,
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportListResponse {
    pub collections: Vec<ExportEntry>,
    pub backup_path: &'static str,
}

fn attachment(file: ExportFile, content_type: &'static str) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            ),
        ],
        file.content,
    )
        .into_response()
}

/// Collections available for download, with their record counts.
///
/// GET /api/v1/admin/export
pub async fn list_exports(State(state): State<AppState>) -> Json<ExportListResponse> {
    let store = state.store.lock().await;
    let collections = ExportCollection::ALL
        .into_iter()
        .map(|collection| {
            let records = match collection {
                ExportCollection::Inquiries => store.inquiries().len(),
                ExportCollection::Bookings => store.bookings().len(),
                ExportCollection::Testimonials => store.testimonials().len(),
                ExportCollection::Services => store.services().len(),
                ExportCollection::Gallery => store.gallery().len(),
                ExportCollection::Team => store.team().len(),
                ExportCollection::Faqs => store.faqs().len(),
            };
            ExportEntry {
                collection: collection.as_str(),
                records,
                path: format!("/api/v1/admin/export/{}.csv", collection),
            }
        })
        .collect();

    Json(ExportListResponse {
        collections,
        backup_path: "/api/v1/admin/export/backup",
    })
}

/// Download one collection as CSV.
///
/// GET /api/v1/admin/export/:collection.csv
pub async fn download_csv(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<Response, ApiError> {
    let collection: ExportCollection = file
        .strip_suffix(".csv")
        .and_then(|name| name.parse().ok())
        .ok_or_else(|| ApiError::NotFound(format!("No export named {}", file)))?;

    let store = state.store.lock().await;
    let export = store.export_csv(collection, Utc::now())?;
    record_download(collection.as_str());
    info!(collection = %collection, file_name = %export.file_name, "Collection exported");

    Ok(attachment(export, CSV_CONTENT_TYPE))
}

/// Download every collection as one JSON document.
///
/// GET /api/v1/admin/export/backup
pub async fn download_backup(State(state): State<AppState>) -> Result<Response, ApiError> {
    let store = state.store.lock().await;
    let backup = store.backup_file(Utc::now())?;
    record_download("backup");
    info!(file_name = %backup.file_name, "System backup downloaded");

    Ok(attachment(backup, JSON_CONTENT_TYPE))
}

/// Reset is disabled: nothing is removed and an error notice is raised.
///
/// POST /api/v1/admin/export/reset
pub async fn reset_data(State(state): State<AppState>) -> Json<MutationResponse<bool>> {
    let store = state.store.lock().await;
    store.reset_all_data();

    with_notice(&state, false)
}
