use chrono::Utc;
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn base36_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

/// Correlation token issued to a contact-form submitter and echoed in both
/// notification emails. Format: `REF-<epoch-millis>-<9 base36 chars>`.
pub fn reference_number() -> String {
    format!(
        "REF-{}-{}",
        Utc::now().timestamp_millis(),
        base36_suffix(9).to_uppercase()
    )
}

/// Unique id for a persisted testimonial.
/// Format: `testimonial-<epoch-millis>-<9 base36 chars>`.
pub fn testimonial_id() -> String {
    format!(
        "testimonial-{}-{}",
        Utc::now().timestamp_millis(),
        base36_suffix(9)
    )
}
