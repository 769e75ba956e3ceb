//! Input sanitization for template interpolation.

/// Escapes the HTML-significant characters plus the forward slash.
///
/// Single pass, left to right: an already-escaped `&amp;` is not treated
/// specially, so sanitizing twice double-escapes. Callers sanitize each
/// field exactly once, immediately before interpolation.
pub fn sanitize(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
        .replace('/', "&#x2F;")
}
