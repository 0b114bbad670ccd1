//! HTML rendering.
//!
//! Italic runs become `<i>` elements. Text separated by a blank line is a
//! reference list: each entry becomes its own hanging-indent paragraph.

use crate::config::HtmlConfig;
use bibapa_citeproc::{MarkedText, Span};

/// Separates entries of a reference list.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Bottom margin of a lone paragraph in a standalone document.
const SINGLE_PARAGRAPH_SPACING: &str = "0";

/// Render with the default layout.
///
/// ```rust
/// use bibapa_citeproc::MarkedText;
/// use bibapa_richtext::to_html;
///
/// let text = MarkedText::parse_inline("Doe, J. (2001). *A & B*.");
/// assert_eq!(to_html(&text), "Doe, J. (2001). <i>A &amp; B</i>.");
/// ```
pub fn to_html(text: &MarkedText) -> String {
    render_html(text, &HtmlConfig::default())
}

/// Render a complete HTML document with the default layout.
pub fn to_html_document(text: &MarkedText) -> String {
    render_html_document(text, &HtmlConfig::default())
}

/// Render as an HTML fragment.
///
/// A single paragraph is returned as inline markup. Several paragraphs are
/// each trimmed, wrapped in a styled `<p>`, and joined by newlines; blank
/// ones are dropped.
pub fn render_html(text: &MarkedText, config: &HtmlConfig) -> String {
    let paragraphs = split_paragraphs(text);
    if let [single] = paragraphs.as_slice() {
        return inline_html(single);
    }

    tracing::trace!(paragraphs = paragraphs.len(), "rendering reference list");
    let style = config.paragraph_style(&config.paragraph_spacing);
    paragraphs
        .iter()
        .map(inline_html)
        .filter_map(|html| {
            let html = html.trim();
            (!html.is_empty()).then(|| format!(r#"<p style="{style}">{html}</p>"#))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render as a standalone UTF-8 HTML document, suitable for the HTML flavour
/// of a clipboard.
pub fn render_html_document(text: &MarkedText, config: &HtmlConfig) -> String {
    let body = if split_paragraphs(text).len() > 1 {
        render_html(text, config)
    } else {
        format!(
            r#"<p style="{}">{}</p>"#,
            config.paragraph_style(SINGLE_PARAGRAPH_SPACING),
            inline_html(text)
        )
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n</head>\n<body>\n{body}\n</body>\n</html>"
    )
}

/// Split on blank lines, keeping each piece's styling.
fn split_paragraphs(text: &MarkedText) -> Vec<MarkedText> {
    let mut paragraphs = vec![MarkedText::new()];
    for span in text.spans() {
        for (i, piece) in span.text.split(PARAGRAPH_BREAK).enumerate() {
            if i > 0 {
                paragraphs.push(MarkedText::new());
            }
            if let Some(current) = paragraphs.last_mut() {
                current.push_styled(piece, span.style);
            }
        }
    }
    paragraphs
}

fn inline_html(text: &MarkedText) -> String {
    text.spans().iter().map(span_html).collect()
}

fn span_html(span: &Span) -> String {
    let escaped = escape_html(&span.text);
    if span.is_italic() {
        format!("<i>{escaped}</i>")
    } else {
        escaped
    }
}

/// Escape the characters that are markup in HTML text content.
fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
