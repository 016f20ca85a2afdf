//! Public site route handlers (no admin flag required).
//!
//! Visitors can read published content and submit two things: a review,
//! which waits for moderation, and a quote request, which lands in the
//! inquiry pipeline as New.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::gallery::GalleryQuery;
use domain::models::inquiry::NewInquiryRequest;
use domain::models::testimonial::NewTestimonialRequest;
use domain::models::{
    AboutData, Faq, GalleryImage, Inquiry, Service, SiteSettings, TeamMember, Testimonial,
    TrustedHtml,
};
use serde::Serialize;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::{services::not_found as service_not_found, ListResponse};

const HOME_SERVICES: usize = 3;
const HOME_GALLERY: usize = 6;
const HOME_TESTIMONIALS: usize = 3;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub headline: String,
    pub sub_headline: String,
    pub primary_action: String,
    pub secondary_action: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub whatsapp: String,
}

impl CompanyInfo {
    fn from_settings(settings: &SiteSettings) -> Self {
        Self {
            name: settings.company_name.clone(),
            phone: settings.phone.clone(),
            email: settings.email.clone(),
            address: settings.address.clone(),
            whatsapp: settings.whatsapp_number(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    pub hero: Hero,
    pub services: Vec<Service>,
    pub gallery: Vec<GalleryImage>,
    pub testimonials: Vec<Testimonial>,
    pub company: CompanyInfo,
}

#[derive(Debug, Serialize)]
pub struct AboutResponse {
    pub about: AboutData,
    pub team: Vec<TeamMember>,
    pub faqs: Vec<Faq>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub company: CompanyInfo,
    pub map_embed: TrustedHtml,
}

#[derive(Debug, Serialize)]
pub struct SubmittedResponse<T> {
    pub data: T,
    pub message: &'static str,
}

/// Landing page content.
///
/// GET /api/v1/home
pub async fn home(State(state): State<AppState>) -> Json<HomeResponse> {
    let store = state.store.lock().await;
    let settings = store.settings();

    let mut testimonials = store.approved_testimonials();
    testimonials.truncate(HOME_TESTIMONIALS);

    Json(HomeResponse {
        hero: Hero {
            headline: settings.hero_headline.clone(),
            sub_headline: settings.hero_sub_headline.clone(),
            primary_action: settings.hero_btn1.clone(),
            secondary_action: settings.hero_btn2.clone(),
        },
        services: store.services().iter().take(HOME_SERVICES).cloned().collect(),
        gallery: store.gallery().iter().take(HOME_GALLERY).cloned().collect(),
        testimonials,
        company: CompanyInfo::from_settings(settings),
    })
}

/// GET /api/v1/about
pub async fn about(State(state): State<AppState>) -> Json<AboutResponse> {
    let store = state.store.lock().await;
    Json(AboutResponse {
        about: store.about().clone(),
        team: store.team().to_vec(),
        faqs: store.faqs().to_vec(),
    })
}

/// GET /api/v1/services
pub async fn list_services(State(state): State<AppState>) -> Json<ListResponse<Service>> {
    let store = state.store.lock().await;
    Json(ListResponse::new(store.services().to_vec()))
}

/// GET /api/v1/services/:id
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Service>, ApiError> {
    let store = state.store.lock().await;
    store
        .service(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| service_not_found(&id))
}

/// GET /api/v1/gallery?category=
pub async fn gallery(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> Json<ListResponse<GalleryImage>> {
    let store = state.store.lock().await;
    Json(ListResponse::new(store.gallery_by_category(&query.category)))
}

/// Approved testimonials only.
///
/// GET /api/v1/testimonials
pub async fn list_testimonials(
    State(state): State<AppState>,
) -> Json<ListResponse<Testimonial>> {
    let store = state.store.lock().await;
    Json(ListResponse::new(store.approved_testimonials()))
}

/// Submit a review. It is stored as Pending and stays hidden until approved.
///
/// POST /api/v1/testimonials
pub async fn submit_testimonial(
    State(state): State<AppState>,
    Json(request): Json<NewTestimonialRequest>,
) -> Result<(StatusCode, Json<SubmittedResponse<Testimonial>>), ApiError> {
    request.validate()?;

    let mut store = state.store.lock().await;
    let testimonial = store.add_testimonial(request.into_testimonial());
    info!(testimonial_id = testimonial.id, "Testimonial submitted for review");

    Ok((
        StatusCode::CREATED,
        Json(SubmittedResponse {
            data: testimonial,
            message: "Thank you! Your review has been submitted for approval.",
        }),
    ))
}

/// GET /api/v1/contact
pub async fn contact(State(state): State<AppState>) -> Json<ContactResponse> {
    let store = state.store.lock().await;
    let settings = store.settings();
    Json(ContactResponse {
        company: CompanyInfo::from_settings(settings),
        map_embed: settings.map_embed.clone(),
    })
}

/// Quote request from the contact form. Creates a New inquiry.
///
/// POST /api/v1/contact
pub async fn submit_inquiry(
    State(state): State<AppState>,
    Json(request): Json<NewInquiryRequest>,
) -> Result<(StatusCode, Json<SubmittedResponse<Inquiry>>), ApiError> {
    request.validate()?;

    let mut store = state.store.lock().await;
    let inquiry = store.add_inquiry(request.into_inquiry());
    info!(inquiry_id = inquiry.id, event_type = %inquiry.event_type, "Quote request received");

    Ok((
        StatusCode::CREATED,
        Json(SubmittedResponse {
            data: inquiry,
            message: "Thank you for your inquiry! We will contact you shortly.",
        }),
    ))
}
