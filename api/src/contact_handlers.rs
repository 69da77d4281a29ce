use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{error, info};

use shared::{reference_number, sanitize_contact, validate_contact, ContactAccepted, ContactForm};

use crate::{
    emails,
    error::{map_json_rejection, ApiError, ApiResult},
    mailer::{Email, MailError},
    state::AppState,
};

fn mail_failure(stage: &str, err: MailError) -> ApiError {
    error!(stage = stage, error = %err, "contact email delivery failed");
    if err.is_auth() {
        ApiError::internal("Email service authentication failed. Please check credentials.")
    } else {
        ApiError::internal("Failed to submit service request. Please try again later.")
    }
}

/// Contact intake: validate, sanitize, issue a reference number, then send
/// the submitter confirmation and the owner notification in that order.
/// Either send failing aborts the rest; an already-delivered first email is
/// not compensated.
pub async fn submit_contact(
    State(state): State<AppState>,
    form: Result<Json<ContactForm>, JsonRejection>,
) -> ApiResult<Json<ContactAccepted>> {
    let Json(form) = form.map_err(map_json_rejection)?;

    let errors = validate_contact(&form);
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let submission = sanitize_contact(form);
    let reference = reference_number();

    let confirmation = Email {
        from: state.config.mail.from_address.clone(),
        to: submission.email.clone(),
        subject: emails::confirmation_subject(&reference, state.config.language),
        html: emails::confirmation_body(&submission.name, &reference, state.config.language),
    };
    state
        .mailer
        .send(confirmation)
        .await
        .map_err(|err| mail_failure("confirmation", err))?;

    let notification = Email {
        from: state.config.mail.from_address.clone(),
        to: state.config.mail.owner_address.clone(),
        subject: emails::owner_subject(&reference, &submission.name),
        html: emails::owner_body(&submission, &reference),
    };
    state
        .mailer
        .send(notification)
        .await
        .map_err(|err| mail_failure("owner notification", err))?;

    info!(reference = %reference, "service request accepted");
    Ok(Json(ContactAccepted {
        success: true,
        message: "Service request submitted successfully".to_string(),
        reference_number: reference,
    }))
}
