//! API key masking and input validation.
//!
//! Validation runs at the CLI boundary only — storage accepts whatever it is
//! given, matching the advisory nature of the rest of the data model.

use crate::error::{AidexError, Result};

/// Accept a URL iff it parses and uses http or https.
pub fn validate_url(raw: &str) -> Result<()> {
    let parsed =
        url::Url::parse(raw).map_err(|e| AidexError::validation("url", e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AidexError::validation(
            "url",
            format!("unsupported scheme: {other}"),
        )),
    }
}

/// Accept an API key iff it is non-empty after trimming.
pub fn validate_api_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(AidexError::validation("api key", "must not be empty"));
    }
    Ok(())
}

/// Mask an API key for display: keys of 8 characters or fewer collapse to
/// `****`, longer keys keep the first 3 and last 4 characters.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}****{tail}")
}
