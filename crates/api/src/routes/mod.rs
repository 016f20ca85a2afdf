//! HTTP route handlers.

pub mod bookings;
pub mod dashboard;
pub mod exports;
pub mod faqs;
pub mod gallery;
pub mod health;
pub mod inquiries;
pub mod notification;
pub mod public;
pub mod services;
pub mod session;
pub mod site_content;
pub mod team;
pub mod testimonials;

use axum::Json;
use domain::services::notification::Notice;
use serde::Serialize;

use crate::app::AppState;

/// Response for collection listings.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}

/// Response for anything that changes content: the affected data plus the
/// notice the change raised.
#[derive(Debug, Serialize)]
pub struct MutationResponse<T> {
    pub data: T,
    pub notice: Option<Notice>,
}

/// Body for single deletes.
#[derive(Debug, Serialize)]
pub struct DeletedResponse<Id> {
    pub id: Id,
}

/// Wraps `data` with the notice currently on the board.
pub(crate) fn with_notice<T>(state: &AppState, data: T) -> Json<MutationResponse<T>> {
    Json(MutationResponse {
        data,
        notice: state.toasts.current().map(|active| active.notice),
    })
}
