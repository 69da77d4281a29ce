//! Notification email templates
//! The confirmation email follows the configured site language; the owner
//! notification is always English. Every user-supplied value embedded in
//! HTML goes through `escape_html` first.

use chrono::Utc;
use shared::{ContactSubmission, Language};

const BUSINESS_NAME: &str = "A.B Maler Fassadenbau & Gipser GmbH";

/// Escape text for embedding in an HTML email body.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn confirmation_subject(reference_number: &str, language: Language) -> String {
    match language {
        Language::En => format!("Service Request Confirmation - {}", reference_number),
        Language::De => format!("Bestätigung Ihrer Anfrage - {}", reference_number),
    }
}

pub fn confirmation_body(name: &str, reference_number: &str, language: Language) -> String {
    let name = escape_html(name);
    let reference_number = escape_html(reference_number);
    match language {
        Language::En => format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #333;">Service Request Received</h2>
  <p>Dear {name},</p>
  <p>Thank you for submitting your service request to <strong>{BUSINESS_NAME}</strong>. We have received your inquiry and will review it shortly.</p>

  <div style="background-color: #f5f5f5; padding: 15px; border-radius: 5px; margin: 20px 0;">
    <p><strong>Reference Number:</strong> <code>{reference_number}</code></p>
    <p style="font-size: 12px; color: #666;">Please save this reference number for your records.</p>
  </div>

  <p>Our team will contact you within 24 hours to discuss your project details and provide a personalized quote.</p>

  <p>Best regards,<br>
  <strong>{BUSINESS_NAME}</strong><br>
  Professional Painting &amp; Construction Services</p>

  <hr style="border: none; border-top: 1px solid #ddd; margin-top: 30px;">
  <p style="font-size: 12px; color: #999; text-align: center;">This is an automated email. Please do not reply to this address.</p>
</div>"#
        ),
        Language::De => format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #333;">Anfrage erhalten</h2>
  <p>Guten Tag {name},</p>
  <p>Vielen Dank für Ihre Anfrage an <strong>{BUSINESS_NAME}</strong>. Wir haben Ihre Nachricht erhalten und werden sie in Kürze prüfen.</p>

  <div style="background-color: #f5f5f5; padding: 15px; border-radius: 5px; margin: 20px 0;">
    <p><strong>Referenznummer:</strong> <code>{reference_number}</code></p>
    <p style="font-size: 12px; color: #666;">Bitte bewahren Sie diese Referenznummer für Ihre Unterlagen auf.</p>
  </div>

  <p>Unser Team meldet sich innerhalb von 24 Stunden bei Ihnen, um die Projektdetails zu besprechen und eine persönliche Offerte zu erstellen.</p>

  <p>Freundliche Grüsse<br>
  <strong>{BUSINESS_NAME}</strong><br>
  Malerei, Fassadenbau &amp; Gipserarbeiten</p>

  <hr style="border: none; border-top: 1px solid #ddd; margin-top: 30px;">
  <p style="font-size: 12px; color: #999; text-align: center;">Dies ist eine automatische E-Mail. Bitte antworten Sie nicht auf diese Adresse.</p>
</div>"#
        ),
    }
}

pub fn owner_subject(reference_number: &str, name: &str) -> String {
    format!("New Service Request - {} from {}", reference_number, name)
}

pub fn owner_body(submission: &ContactSubmission, reference_number: &str) -> String {
    let name = escape_html(&submission.name);
    let email = escape_html(&submission.email);
    let phone = escape_html(&submission.phone);
    let service = escape_html(&submission.service);
    let message = escape_html(&submission.message);
    let reference_number = escape_html(reference_number);
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #d32f2f;">New Service Request - {reference_number}</h2>

  <div style="background-color: #fff3e0; padding: 15px; border-radius: 5px; margin: 20px 0;">
    <h3 style="margin-top: 0; color: #333;">Customer Information</h3>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>
    <p><strong>Phone:</strong> <a href="tel:{phone}">{phone}</a></p>
  </div>

  <div style="background-color: #e8f5e9; padding: 15px; border-radius: 5px; margin: 20px 0;">
    <h3 style="margin-top: 0; color: #333;">Service Details</h3>
    <p><strong>Service Type:</strong> {service}</p>
    <p><strong>Message:</strong></p>
    <p style="white-space: pre-wrap; background-color: #fff; padding: 10px; border-radius: 3px;">{message}</p>
  </div>

  <div style="background-color: #f5f5f5; padding: 15px; border-radius: 5px; margin: 20px 0;">
    <p><strong>Reference Number:</strong> {reference_number}</p>
    <p style="font-size: 12px; color: #666;">Timestamp: {timestamp}</p>
  </div>

  <p style="color: #d32f2f; font-weight: bold;">Action Required: Please contact the customer within 24 hours.</p>
</div>"#
    )
}
