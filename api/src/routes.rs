use axum::{
    routing::{get, post},
    Router,
};

use crate::{contact_handlers, handlers, state::AppState, testimonial_handlers};

pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/api/contact", post(contact_handlers::submit_contact))
}

pub fn testimonial_routes() -> Router<AppState> {
    Router::new().route(
        "/api/testimonials",
        get(testimonial_handlers::list_testimonials).post(testimonial_handlers::submit_testimonial),
    )
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health_check))
}

/// Full application router, shared by `main` and the integration tests.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(contact_routes())
        .merge(testimonial_routes())
        .merge(health_routes())
        .fallback(handlers::route_not_found)
        .with_state(state)
}
