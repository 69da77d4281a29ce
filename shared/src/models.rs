// src/models.rs
// Shared data types for the contact and testimonial pipelines

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────
// Contact intake
// ─────────────────────────────────────────────────────────

/// Raw contact-form payload as posted by the site.
///
/// Every field is optional at the wire level so that validation can report
/// all missing fields together instead of failing at deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A contact form after validation and sanitization. Rendered into the two
/// notification emails and then discarded, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactAccepted {
    pub success: bool,
    pub message: String,
    pub reference_number: String,
}

// ─────────────────────────────────────────────────────────
// Testimonial intake
// ─────────────────────────────────────────────────────────

/// Raw testimonial payload as posted by the site.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialForm {
    #[serde(default)]
    pub reference_code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub testimonial: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub service: Option<String>,
}

/// Testimonial input after validation and sanitization.
///
/// The reference code is collected for the submitter's own cross-reference;
/// it is not checked against issued reference numbers and is not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialSubmission {
    pub reference_code: String,
    pub name: String,
    pub email: String,
    pub testimonial: String,
    pub rating: u8,
    pub service: Option<String>,
}

/// A published testimonial as stored in the backing file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub testimonial: String,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub created_at: NaiveDate,
}

/// The entire backing-file document. Read fully and rewritten fully.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestimonialsFile {
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialAccepted {
    pub success: bool,
    pub message: String,
    pub testimonial_id: String,
}

// ─────────────────────────────────────────────────────────
// Site configuration
// ─────────────────────────────────────────────────────────

/// Language of submitter-facing email content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    De,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::De => write!(f, "de"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}
