/**
 * Output Sanitization
 *
 * Escapes HTML-significant characters in user-supplied free-text fields
 * immediately before serialization, so a stored `<script>` can never
 * reach a client as executable markup.
 *
 * This is strictly a read-time concern: stored data is never mutated,
 * and re-fetching after a sanitized read still yields the original raw
 * bytes in storage.
 */

/// Escape a pattern title for inclusion in a response.
///
/// `encode_safe` escapes `&`, `<`, `>`, quotes, backtick, `/` and `=`,
/// which keeps the result inert in element, attribute and script
/// contexts alike.
pub fn sanitize_title(title: &str) -> String {
    html_escape::encode_safe(title).into_owned()
}
