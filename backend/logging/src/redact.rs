//! Log Redaction Layer
//!
//! Scrubs API keys, bearer tokens and phone numbers from free text prior to logging.

use regex::Regex;
use std::sync::LazyLock;

static TELEPHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap());
static API_KEY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(sk-[a-zA-Z0-9]{32,})|(Bearer\s+[a-zA-Z0-9\-\._~+/]+=*)").unwrap());

/// Redacts sensitive patterns in a user message.
pub fn redact_sensitive_data(input: &str) -> String {
    let redacted = TELEPHONE_RE.replace_all(input, "[REDACTED_PHONE]");
    API_KEY_RE.replace_all(&redacted, "[REDACTED_TOKEN]").into_owned()
}
