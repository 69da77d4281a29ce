use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{ContactForm, TestimonialForm};

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Check an email address against the form pattern: one `@`, no whitespace,
/// and a dot somewhere in the domain part.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn trimmed_len(field: &Option<String>) -> usize {
    field.as_deref().map_or(0, |s| s.trim().len())
}

/// Validate a contact form, collecting every violated rule.
pub fn validate_contact(form: &ContactForm) -> Vec<String> {
    let mut errors = Vec::new();

    if trimmed_len(&form.name) < 2 {
        errors.push("Name is required and must be at least 2 characters".to_string());
    }

    if !form.email.as_deref().is_some_and(is_valid_email) {
        errors.push("Valid email address is required".to_string());
    }

    if trimmed_len(&form.phone) < 6 {
        errors.push("Phone number is required and must be at least 6 characters".to_string());
    }

    if trimmed_len(&form.service) == 0 {
        errors.push("Service selection is required".to_string());
    }

    if trimmed_len(&form.message) < 10 {
        errors.push("Message is required and must be at least 10 characters".to_string());
    }

    errors
}

/// Validate a testimonial form, collecting every violated rule.
pub fn validate_testimonial(form: &TestimonialForm) -> Vec<String> {
    let mut errors = Vec::new();

    if trimmed_len(&form.reference_code) < 5 {
        errors.push("Valid reference code is required".to_string());
    }

    if trimmed_len(&form.name) < 2 {
        errors.push("Name is required and must be at least 2 characters".to_string());
    }

    if !form.email.as_deref().is_some_and(is_valid_email) {
        errors.push("Valid email address is required".to_string());
    }

    if trimmed_len(&form.testimonial) < 10 {
        errors.push("Testimonial is required and must be at least 10 characters".to_string());
    }

    if !form.rating.is_some_and(|r| (1.0..=5.0).contains(&r)) {
        errors.push("Rating must be between 1 and 5 stars".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: &str, phone: &str, service: &str, message: &str) -> ContactForm {
        ContactForm {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            phone: Some(phone.to_string()),
            service: Some(service.to_string()),
            message: Some(message.to_string()),
        }
    }

    fn testimonial(rating: Option<f64>) -> TestimonialForm {
        TestimonialForm {
            reference_code: Some("REF-1700000000000-ABCDEF123".to_string()),
            name: Some("Anna Berger".to_string()),
            email: Some("anna@example.com".to_string()),
            testimonial: Some("Very clean work, friendly team.".to_string()),
            rating,
            service: None,
        }
    }

    #[test]
    fn email_pattern_accepts_and_rejects() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("plainstring"));
        assert!(!is_valid_email("a b@c.de"));
    }

    #[test]
    fn valid_contact_passes() {
        let form = contact(
            "Anna Berger",
            "anna@example.com",
            "+41 79 123 45 67",
            "painting",
            "Two rooms need repainting.",
        );
        assert!(validate_contact(&form).is_empty());
    }

    #[test]
    fn contact_reports_every_violation() {
        let form = contact("", "anna@example.com", "+41 79 123 45 67", "painting", "   ");
        let errors = validate_contact(&form);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("Name"));
        assert!(errors[1].contains("Message"));
    }

    #[test]
    fn empty_contact_reports_all_five_rules() {
        let errors = validate_contact(&ContactForm::default());
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let form = contact("  ", " ", "    ", " ", "         ");
        assert_eq!(validate_contact(&form).len(), 5);
    }

    #[test]
    fn email_is_checked_before_trimming() {
        // The pattern itself rejects surrounding whitespace.
        let form = contact(
            "Anna Berger",
            " anna@example.com ",
            "+41 79 123 45 67",
            "painting",
            "Two rooms need repainting.",
        );
        let errors = validate_contact(&form);
        assert_eq!(errors, vec!["Valid email address is required".to_string()]);
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(validate_testimonial(&testimonial(Some(1.0))).is_empty());
        assert!(validate_testimonial(&testimonial(Some(5.0))).is_empty());
        assert!(validate_testimonial(&testimonial(Some(4.7))).is_empty());

        for bad in [Some(0.0), Some(6.0), Some(0.5), None] {
            let errors = validate_testimonial(&testimonial(bad));
            assert_eq!(errors, vec!["Rating must be between 1 and 5 stars".to_string()]);
        }
    }

    #[test]
    fn short_reference_code_is_rejected() {
        let mut form = testimonial(Some(3.0));
        form.reference_code = Some("REF".to_string());
        let errors = validate_testimonial(&form);
        assert_eq!(errors, vec!["Valid reference code is required".to_string()]);
    }

    #[test]
    fn empty_testimonial_reports_all_five_rules() {
        let errors = validate_testimonial(&TestimonialForm::default());
        assert_eq!(errors.len(), 5);
    }
}
