//! Pre-filled email draft links.

use crate::app_config::EmailConfig;

/// Build a `mailto:` link addressed to `recipient` with the configured subject
/// and body. Files are not attached; the body only mentions them.
///
/// The recipient is trimmed and percent-encoded except for `@`, so query
/// characters in it cannot add header fields to the link.
pub fn draft_link(recipient: &str, email: &EmailConfig) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        encode_recipient(recipient.trim()),
        urlencoding::encode(&email.subject),
        urlencoding::encode(&email.body)
    )
}

fn encode_recipient(recipient: &str) -> String {
    recipient
        .split('@')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join("@")
}
