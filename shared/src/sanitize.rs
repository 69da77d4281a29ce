use crate::models::{ContactForm, ContactSubmission, TestimonialForm, TestimonialSubmission};

fn trimmed(field: Option<String>) -> String {
    field.map_or_else(String::new, |s| s.trim().to_string())
}

/// Normalize a validated contact form: trim everything, lower-case the
/// email address.
pub fn sanitize_contact(form: ContactForm) -> ContactSubmission {
    ContactSubmission {
        name: trimmed(form.name),
        email: trimmed(form.email).to_lowercase(),
        phone: trimmed(form.phone),
        service: trimmed(form.service),
        message: trimmed(form.message),
    }
}

/// Round a rating to whole stars, falling back to five when the value is
/// missing or rounds below one.
pub fn sanitize_rating(rating: Option<f64>) -> u8 {
    match rating.map(f64::round) {
        Some(r) if r >= 1.0 => r.clamp(1.0, 5.0) as u8,
        _ => 5,
    }
}

/// Normalize a validated testimonial form: upper-case the reference code,
/// lower-case email and service, round the rating, drop a blank service.
pub fn sanitize_testimonial(form: TestimonialForm) -> TestimonialSubmission {
    let service = form
        .service
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    TestimonialSubmission {
        reference_code: trimmed(form.reference_code).to_uppercase(),
        name: trimmed(form.name),
        email: trimmed(form.email).to_lowercase(),
        testimonial: trimmed(form.testimonial),
        rating: sanitize_rating(form.rating),
        service,
    }
}
