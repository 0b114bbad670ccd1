//! Plain text rendering.

use bibapa_citeproc::MarkedText;

/// The citation with all styling dropped.
///
/// Idempotent: the result, taken as unstyled text, renders to itself.
/// Asterisks that were part of a field stay in the output.
pub fn to_plain_text(text: &MarkedText) -> String {
    text.plain_text()
}

/// Remove italic markers from a stored inline citation.
///
/// The input is the inline form, so `\*` and `\\` are unescaped. The output
/// is plain text, not inline form: feeding it back in would read a literal
/// `*word*` from a field as an italic run. Use [`to_plain_text`] when the
/// citation is at hand as [`MarkedText`].
///
/// ```rust
/// use bibapa_richtext::strip_formatting;
///
/// assert_eq!(strip_formatting("A. *Nature*, *10*."), "A. Nature, 10.");
/// assert_eq!(strip_formatting("rated 5* overall"), "rated 5* overall");
/// ```
pub fn strip_formatting(inline: &str) -> String {
    MarkedText::parse_inline(inline).plain_text()
}
