//! Rendering a citation in a requested format.

use crate::config::RenderConfig;
use crate::{html, plain, rtf};
use bibapa_citeproc::MarkedText;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An output format a clipboard can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Plain,
    Html,
    Rtf,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Plain, Format::Html, Format::Rtf];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Plain => "plain",
            Format::Html => "html",
            Format::Rtf => "rtf",
        }
    }

    /// MIME type of a payload in this format.
    pub fn media_type(&self) -> &'static str {
        match self {
            Format::Plain => "text/plain; charset=utf-8",
            Format::Html => "text/html; charset=utf-8",
            Format::Rtf => "text/rtf",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders citations with a fixed configuration.
///
/// ```rust
/// use bibapa_citeproc::MarkedText;
/// use bibapa_richtext::{Format, Renderer};
///
/// let renderer = Renderer::default();
/// let text = MarkedText::parse_inline("Doe, J. (2001). *Book*.");
///
/// assert_eq!(renderer.render(&text, Format::Plain), "Doe, J. (2001). Book.");
/// assert_eq!(renderer.render(&text, Format::Html), "Doe, J. (2001). <i>Book</i>.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `text` as one payload. HTML is rendered as a fragment; use
    /// [`Renderer::html_document`] for a standalone document.
    pub fn render(&self, text: &MarkedText, format: Format) -> String {
        tracing::trace!(%format, spans = text.spans().len(), "rendering citation");
        match format {
            Format::Plain => plain::to_plain_text(text),
            Format::Html => html::render_html(text, &self.config.html),
            Format::Rtf => rtf::render_rtf(text, &self.config.rtf),
        }
    }

    pub fn html_document(&self, text: &MarkedText) -> String {
        html::render_html_document(text, &self.config.html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RtfConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_uses_config() {
        let renderer = Renderer::new(RenderConfig {
            rtf: RtfConfig {
                font_size: 10,
                ..RtfConfig::default()
            },
            ..RenderConfig::default()
        });
        let rtf = renderer.render(&MarkedText::plain("x"), Format::Rtf);
        assert!(rtf.contains(r"\fs20 "));
        assert_eq!(renderer.config().rtf.font_size, 10);
    }

    #[test]
    fn test_every_format_renders_content() {
        let renderer = Renderer::default();
        let text = MarkedText::parse_inline("Doe (2001). *Book*.");
        for format in Format::ALL {
            assert!(renderer.render(&text, format).contains("Book"), "{format}");
        }
    }

    #[test]
    fn test_format_names() {
        assert_eq!(Format::Html.to_string(), "html");
        assert_eq!(Format::Rtf.media_type(), "text/rtf");
    }
}
