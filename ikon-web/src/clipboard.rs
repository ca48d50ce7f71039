//! Clipboard writes through `navigator.clipboard`

use tracing::debug;

/// JS statement writing `text` to the clipboard. The text is JSON-encoded so
/// quotes, backslashes and newlines survive as a string literal.
pub fn copy_script(text: &str) -> String {
    let literal = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    format!("navigator.clipboard.writeText({literal});")
}

pub fn copy_to_clipboard(text: &str) {
    debug!("Copying {} bytes to clipboard", text.len());
    dioxus::document::eval(&copy_script(text));
}
