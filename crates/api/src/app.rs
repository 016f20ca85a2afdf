use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use domain::services::notification::ToastBoard;
use persistence::{AccessGate, ContentStore, KeyValueStorage};
use shared::ids::IdGenerator;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, require_admin_session, security_headers_middleware,
    trace_id,
};
use crate::routes::{
    bookings, dashboard, exports, faqs, gallery, health, inquiries, notification, public,
    services, session, site_content, team, testimonials,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// All site content. Handlers hold the lock for a whole operation, so
    /// operations never interleave.
    pub store: Arc<Mutex<ContentStore>>,
    pub gate: Arc<AccessGate>,
    pub toasts: Arc<ToastBoard>,
    pub storage: Arc<dyn KeyValueStorage>,
}

impl AppState {
    /// Builds the store, gate and notice board on top of `storage`.
    pub fn new(config: Config, storage: Arc<dyn KeyValueStorage>) -> Self {
        let toasts = Arc::new(ToastBoard::new(config.notice_dismiss_after()));
        let store = ContentStore::open(storage.clone(), toasts.clone(), IdGenerator::new());
        let gate = AccessGate::new(storage.clone(), config.admin_credentials());

        Self {
            config: Arc::new(config),
            store: Arc::new(Mutex::new(store)),
            gate: Arc::new(gate),
            toasts,
            storage,
        }
    }
}

pub fn create_app(config: Config, storage: Arc<dyn KeyValueStorage>) -> Router {
    build_router(AppState::new(config, storage))
}

pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Admin routes (require the access gate flag; otherwise redirect to login)
    let admin_routes = Router::new()
        .route("/api/v1/admin", get(dashboard::get_dashboard))
        // Inquiries
        .route(
            "/api/v1/admin/inquiries",
            get(inquiries::list_inquiries).post(inquiries::create_inquiry),
        )
        .route(
            "/api/v1/admin/inquiries/bulk-delete",
            post(inquiries::bulk_delete_inquiries),
        )
        .route(
            "/api/v1/admin/inquiries/:id",
            get(inquiries::get_inquiry)
                .put(inquiries::update_inquiry)
                .delete(inquiries::delete_inquiry),
        )
        .route(
            "/api/v1/admin/inquiries/:id/status",
            put(inquiries::update_inquiry_status),
        )
        // Bookings
        .route(
            "/api/v1/admin/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route(
            "/api/v1/admin/bookings/bulk-delete",
            post(bookings::bulk_delete_bookings),
        )
        .route(
            "/api/v1/admin/bookings/:id",
            get(bookings::get_booking)
                .put(bookings::update_booking)
                .delete(bookings::delete_booking),
        )
        .route(
            "/api/v1/admin/bookings/:id/status",
            put(bookings::update_booking_status),
        )
        // Services
        .route(
            "/api/v1/admin/services",
            get(services::list_services).post(services::create_service),
        )
        .route(
            "/api/v1/admin/services/bulk-delete",
            post(services::bulk_delete_services),
        )
        .route(
            "/api/v1/admin/services/:id",
            get(services::get_service)
                .put(services::update_service)
                .delete(services::delete_service),
        )
        // Gallery
        .route(
            "/api/v1/admin/gallery",
            get(gallery::list_images).post(gallery::upload_image),
        )
        .route(
            "/api/v1/admin/gallery/bulk-delete",
            post(gallery::bulk_delete_images),
        )
        .route(
            "/api/v1/admin/gallery/:id",
            put(gallery::update_image).delete(gallery::delete_image),
        )
        // Testimonials
        .route(
            "/api/v1/admin/testimonials",
            get(testimonials::list_testimonials).post(testimonials::create_testimonial),
        )
        .route(
            "/api/v1/admin/testimonials/bulk-delete",
            post(testimonials::bulk_delete_testimonials),
        )
        .route(
            "/api/v1/admin/testimonials/:id",
            put(testimonials::update_testimonial).delete(testimonials::delete_testimonial),
        )
        .route(
            "/api/v1/admin/testimonials/:id/status",
            put(testimonials::update_testimonial_status),
        )
        // Team
        .route(
            "/api/v1/admin/team",
            get(team::list_team).post(team::create_member),
        )
        .route("/api/v1/admin/team/bulk-delete", post(team::bulk_delete_members))
        .route(
            "/api/v1/admin/team/:id",
            put(team::update_member).delete(team::delete_member),
        )
        // FAQs
        .route("/api/v1/admin/faqs", get(faqs::list_faqs).post(faqs::create_faq))
        .route("/api/v1/admin/faqs/bulk-delete", post(faqs::bulk_delete_faqs))
        .route(
            "/api/v1/admin/faqs/:id",
            put(faqs::update_faq).delete(faqs::delete_faq),
        )
        // Singletons
        .route(
            "/api/v1/admin/about",
            get(site_content::get_about).put(site_content::update_about),
        )
        .route(
            "/api/v1/admin/settings",
            get(site_content::get_settings).put(site_content::update_settings),
        )
        // Export
        .route("/api/v1/admin/export", get(exports::list_exports))
        .route("/api/v1/admin/export/backup", get(exports::download_backup))
        .route("/api/v1/admin/export/reset", post(exports::reset_data))
        .route("/api/v1/admin/export/:file", get(exports::download_csv))
        // Notices
        .route(
            "/api/v1/admin/notification",
            get(notification::current_notice).delete(notification::dismiss_notice),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin_session,
        ));

    // Admin session routes (reachable without the flag)
    let session_routes = Router::new()
        .route(
            "/api/v1/admin/login",
            get(session::login_screen).post(session::login),
        )
        .route("/api/v1/admin/logout", post(session::logout))
        .route("/api/v1/admin/session", get(session::get_session));

    // Public site routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/v1/home", get(public::home))
        .route("/api/v1/about", get(public::about))
        .route("/api/v1/services", get(public::list_services))
        .route("/api/v1/services/:id", get(public::get_service))
        .route("/api/v1/gallery", get(public::gallery))
        .route(
            "/api/v1/testimonials",
            get(public::list_testimonials).post(public::submit_testimonial),
        )
        .route(
            "/api/v1/contact",
            get(public::contact).post(public::submit_inquiry),
        )
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(session_routes)
        .merge(admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
