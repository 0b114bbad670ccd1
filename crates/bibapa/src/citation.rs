//! Citations as stored and copied by a reference manager.

use crate::error::Result;
use bibapa_bibtex::{Record, WebMetadata};
use bibapa_citeproc::MarkedText;
use bibapa_richtext::html::PARAGRAPH_BREAK;
use bibapa_richtext::{Format, Renderer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a citation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Bibtex,
    Url,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Bibtex => "bibtex",
            SourceKind::Url => "url",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A formatted citation together with the input it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    source: String,
    source_kind: SourceKind,
    record: Record,
    text: MarkedText,
}

impl Citation {
    /// Parse a BibTeX record and format it.
    ///
    /// ```rust
    /// use bibapa::Citation;
    ///
    /// let citation = Citation::from_bibtex(
    ///     "@article{k1, author={Smith, John}, year={2020}, title={a study of x}, \
    ///      journal={Nature}, volume={10}, pages={1-5}}",
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(
    ///     citation.stored_text(),
    ///     "Smith, J. (2020). A study of x. *Nature*, *10*, 1–5."
    /// );
    /// ```
    pub fn from_bibtex(raw: &str) -> Result<Self> {
        let record = bibapa_bibtex::parse(raw)?;
        let text = bibapa_citeproc::format(&record);
        tracing::debug!(key = record.key(), "citation from bibtex");
        Ok(Self {
            source: raw.to_string(),
            source_kind: SourceKind::Bibtex,
            record,
            text,
        })
    }

    /// Format metadata scraped from a web page. The source is the page URL.
    pub fn from_metadata(metadata: WebMetadata) -> Self {
        let source = metadata.url.trim().to_string();
        let record = Record::from_metadata(metadata);
        let text = bibapa_citeproc::format(&record);
        tracing::debug!(url = %source, "citation from web metadata");
        Self {
            source,
            source_kind: SourceKind::Url,
            record,
            text,
        }
    }

    /// The raw BibTeX, or the URL for web citations.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source_kind
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn text(&self) -> &MarkedText {
        &self.text
    }

    /// The citation in inline form, with italic runs wrapped in `*`.
    pub fn stored_text(&self) -> String {
        self.text.to_inline()
    }

    pub fn render(&self, renderer: &Renderer, format: Format) -> String {
        renderer.render(&self.text, format)
    }
}

/// Join citations into a reference list, one entry per paragraph.
///
/// Entries keep the given order and are not numbered.
pub fn reference_list(citations: &[Citation]) -> MarkedText {
    MarkedText::join(
        citations.iter().map(|citation| citation.text.clone()),
        PARAGRAPH_BREAK,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_bibtex_keeps_source() {
        let raw = "@book{b, title={Dune}}";
        let citation = Citation::from_bibtex(raw).unwrap();
        assert_eq!(citation.source(), raw);
        assert_eq!(citation.source_kind(), SourceKind::Bibtex);
        assert_eq!(citation.record().key(), "b");
        assert_eq!(citation.stored_text(), "Unknown (n.d.). *Dune*.");
    }

    #[test]
    fn test_from_bibtex_error() {
        let err = Citation::from_bibtex("not bibtex").unwrap_err();
        assert!(matches!(
            err,
            Error::Bibtex(bibapa_bibtex::Error::MalformedSource { .. })
        ));
    }

    #[test]
    fn test_from_metadata() {
        let citation = Citation::from_metadata(WebMetadata {
            title: "Home".to_string(),
            url: " https://example.org ".to_string(),
            ..WebMetadata::default()
        });
        assert_eq!(citation.source(), "https://example.org");
        assert_eq!(citation.source_kind(), SourceKind::Url);
        assert_eq!(
            citation.stored_text(),
            "Unknown (n.d.). *Home*. Retrieved from https://example.org"
        );
    }

    #[test]
    fn test_from_metadata_without_author_uses_publisher() {
        let citation = Citation::from_metadata(WebMetadata {
            title: "Annual report".to_string(),
            publisher: "Mozilla".to_string(),
            url: "https://mozilla.org/r".to_string(),
            ..WebMetadata::default()
        });
        assert_eq!(
            citation.stored_text(),
            "Mozilla (n.d.). *Annual report*. Retrieved from https://mozilla.org/r"
        );
    }

    #[test]
    fn test_reference_list_order() {
        let first = Citation::from_bibtex("@misc{a, title={Zeta}}").unwrap();
        let second = Citation::from_bibtex("@misc{b, title={Alpha}}").unwrap();
        let list = reference_list(&[first, second]);
        assert_eq!(
            list.to_inline(),
            "Unknown (n.d.). *Zeta*.\n\nUnknown (n.d.). *Alpha*."
        );
        assert!(reference_list(&[]).is_empty());
    }
}
