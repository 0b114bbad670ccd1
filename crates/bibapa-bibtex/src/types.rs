//! Record types produced by the parser.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The closed set of entry categories the formatter knows how to render.
///
/// Raw BibTeX entry types are folded into these with [`CitationType::from_entry_type`];
/// anything unrecognised becomes [`CitationType::Generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CitationType {
    Article,
    Book,
    /// Paper in conference proceedings (`inproceedings`, `conference`).
    Conference,
    /// Chapter or contribution in an edited book (`inbook`, `incollection`).
    Chapter,
    #[serde(rename = "thesis-doctoral")]
    DoctoralThesis,
    #[serde(rename = "thesis-masters")]
    MastersThesis,
    /// Web pages and miscellaneous sources (`misc`, `online`, ...).
    Web,
    Generic,
}

impl CitationType {
    /// Map a raw entry type token (case-insensitive) to its category.
    pub fn from_entry_type(entry_type: &str) -> Self {
        match entry_type.to_ascii_lowercase().as_str() {
            "article" => CitationType::Article,
            "book" => CitationType::Book,
            "inproceedings" | "conference" => CitationType::Conference,
            "inbook" | "incollection" => CitationType::Chapter,
            "phdthesis" => CitationType::DoctoralThesis,
            "mastersthesis" => CitationType::MastersThesis,
            "misc" | "online" | "webpage" | "electronic" | "www" => CitationType::Web,
            _ => CitationType::Generic,
        }
    }

    /// Stable tag for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            CitationType::Article => "article",
            CitationType::Book => "book",
            CitationType::Conference => "conference",
            CitationType::Chapter => "chapter",
            CitationType::DoctoralThesis => "thesis-doctoral",
            CitationType::MastersThesis => "thesis-masters",
            CitationType::Web => "web",
            CitationType::Generic => "generic",
        }
    }

    /// Whether the title is the cited work itself and is set in italics.
    pub fn italicizes_title(&self) -> bool {
        matches!(
            self,
            CitationType::Book
                | CitationType::DoctoralThesis
                | CitationType::MastersThesis
                | CitationType::Web
        )
    }
}

impl std::fmt::Display for CitationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed bibliographic record.
///
/// Records are immutable once built. Field names are lower-cased and a
/// missing field is simply absent; the parser never stores empty values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "type")]
    citation_type: CitationType,
    key: String,
    fields: HashMap<String, String>,
}

impl Record {
    /// Build a record from already-cleaned parts.
    ///
    /// Field names are lower-cased; on a name collision the later entry wins.
    pub fn new<I, K, V>(citation_type: CitationType, key: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(name, value)| (name.as_ref().to_lowercase(), value.into()))
            .collect();
        Self {
            citation_type,
            key: key.into(),
            fields,
        }
    }

    /// Assemble a web record from scraped page metadata.
    ///
    /// The URL doubles as the citation key. Blank values are dropped so the
    /// formatter sees them as missing.
    pub fn from_metadata(metadata: WebMetadata) -> Self {
        let WebMetadata {
            title,
            author,
            year,
            publisher,
            url,
        } = metadata;

        let fields = [
            ("title", title),
            ("author", author),
            ("year", year),
            ("publisher", publisher),
            ("url", url.clone()),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            let value = value.trim();
            (!value.is_empty()).then(|| (name, value.to_string()))
        });

        Record::new(CitationType::Web, url.trim(), fields)
    }

    pub fn citation_type(&self) -> CitationType {
        self.citation_type
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Look up a field by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Look up the first present field among `names`.
    pub fn get_any(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.get(name))
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }
}

/// Raw page metadata handed over by a web scraping collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebMetadata {
    pub title: String,
    pub author: String,
    pub year: String,
    pub publisher: String,
    pub url: String,
}
