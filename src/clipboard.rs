//! Best-effort system clipboard writes.
//!
//! Clipboard access fails on headless sessions or when the desktop
//! environment denies it; failures are logged and swallowed so a copy action
//! never takes the CLI down.

use tracing::warn;

/// Write text to the system clipboard, logging on failure.
pub fn copy_text(text: &str) {
    let result =
        arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_owned()));
    if let Err(e) = result {
        warn!(error = %e, "clipboard write failed");
    }
}
