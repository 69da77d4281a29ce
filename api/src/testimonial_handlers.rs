use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Utc;
use tracing::{error, info};

use shared::{
    sanitize_testimonial, testimonial_id, validate_testimonial, Testimonial, TestimonialAccepted,
    TestimonialForm, TestimonialsFile,
};

use crate::{
    error::{map_json_rejection, ApiError, ApiResult},
    state::AppState,
};

/// Testimonial intake: validate, sanitize, then append to the backing file
/// with a fresh id and today's date.
pub async fn submit_testimonial(
    State(state): State<AppState>,
    form: Result<Json<TestimonialForm>, JsonRejection>,
) -> ApiResult<Json<TestimonialAccepted>> {
    let Json(form) = form.map_err(map_json_rejection)?;

    let errors = validate_testimonial(&form);
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let submission = sanitize_testimonial(form);
    let testimonial = Testimonial {
        id: testimonial_id(),
        name: submission.name,
        testimonial: submission.testimonial,
        rating: submission.rating,
        service: submission.service,
        created_at: Utc::now().date_naive(),
    };
    let id = testimonial.id.clone();

    state.store.append(testimonial).await.map_err(|err| {
        error!(error = %err, "failed to persist testimonial");
        ApiError::internal("Failed to submit testimonial. Please try again later.")
    })?;

    info!(id = %id, "testimonial accepted");
    Ok(Json(TestimonialAccepted {
        success: true,
        message: "Testimonial submitted successfully".to_string(),
        testimonial_id: id,
    }))
}

/// Testimonial retrieval never fails the caller: a missing or unreadable
/// backing file is served as the empty collection.
pub async fn list_testimonials(State(state): State<AppState>) -> Json<TestimonialsFile> {
    Json(state.store.load_or_empty().await)
}
