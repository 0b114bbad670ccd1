//! APA author lists.
//!
//! BibTeX name fields separate people with ` and `; each person is written
//! either `Family, Given` or `Given Family`. APA6 prints family names with
//! initials, joins the list with `&`, and for more than seven authors lists
//! the first six, an ellipsis, and the final author.

use once_cell::sync::Lazy;
use regex::Regex;

/// Rendered when a record has no author.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Separator between people in a BibTeX name field.
const NAME_SEPARATOR: &str = " and ";

/// Lists longer than this are truncated.
const MAX_LISTED_AUTHORS: usize = 7;

/// Authors shown before the ellipsis in a truncated list.
const TRUNCATED_LEADING_AUTHORS: usize = 6;

const ELLIPSIS: &str = "…";

/// A lone `Ã` left over from a mis-decoded `Ø` initial.
static STRAY_O_STROKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bÃ\b").unwrap());

/// One person from a name field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorName {
    /// A name with a reliable family/given split.
    Split {
        family: String,
        given: String,
        suffix: Option<String>,
    },
    /// A single token that offers no split point, kept verbatim.
    Single(String),
}

impl AuthorName {
    /// Parse one person.
    ///
    /// - `Family, Given` splits on the comma;
    /// - `Family, Suffix, Given` (BibTeX's `von Last, Jr, First`) keeps the suffix;
    /// - otherwise the last whitespace-separated word is the family name.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let parts: Vec<&str> = raw.split(',').map(str::trim).collect();

        match parts.as_slice() {
            [family, given] => AuthorName::Split {
                family: family.to_string(),
                given: given.to_string(),
                suffix: None,
            },
            [family, suffix, given] => AuthorName::Split {
                family: family.to_string(),
                given: given.to_string(),
                suffix: (!suffix.is_empty()).then(|| suffix.to_string()),
            },
            _ => {
                let words: Vec<&str> = raw.split_whitespace().collect();
                match words.split_last() {
                    Some((family, given)) if !given.is_empty() => AuthorName::Split {
                        family: family.to_string(),
                        given: given.join(" "),
                        suffix: None,
                    },
                    _ => AuthorName::Single(raw.to_string()),
                }
            }
        }
    }

    /// `Family, I.` (with `, Suffix` when present), or the single token.
    pub fn format(&self) -> String {
        match self {
            AuthorName::Single(name) => name.clone(),
            AuthorName::Split {
                family,
                given,
                suffix,
            } => {
                let mut out = family.clone();
                if let Some(initials) = initials(given) {
                    out.push_str(", ");
                    out.push_str(&initials);
                }
                if let Some(suffix) = suffix {
                    out.push_str(", ");
                    out.push_str(suffix);
                }
                out
            }
        }
    }
}

/// Initials of every given-name word, run together with one trailing period
/// (`John Paul` → `JP.`). `None` when there are no given names.
pub fn initials(given: &str) -> Option<String> {
    let letters: String = given
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();
    (!letters.is_empty()).then(|| format!("{letters}."))
}

/// Render a BibTeX name field as an APA6 author list.
///
/// ```rust
/// use bibapa_citeproc::render_authors;
///
/// assert_eq!(render_authors("Smith, John and Doe, Jane"), "Smith, J., & Doe, J.");
/// assert_eq!(render_authors(""), "Unknown");
/// ```
pub fn render_authors(raw: &str) -> String {
    let repaired = repair_author_encoding(raw);
    let names: Vec<AuthorName> = repaired
        .split(NAME_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(AuthorName::parse)
        .collect();

    let Some(last) = names.last() else {
        return UNKNOWN_AUTHOR.to_string();
    };

    if names.len() > MAX_LISTED_AUTHORS {
        tracing::trace!(authors = names.len(), "truncating author list");
        let leading: Vec<String> = names[..TRUNCATED_LEADING_AUTHORS]
            .iter()
            .map(AuthorName::format)
            .collect();
        return format!("{} {} {}", leading.join(", "), ELLIPSIS, last.format());
    }

    let formatted: Vec<String> = names.iter().map(AuthorName::format).collect();
    match formatted.as_slice() {
        [only] => only.clone(),
        [init @ .., last] => format!("{}, & {}", init.join(", "), last),
        [] => UNKNOWN_AUTHOR.to_string(),
    }
}

/// Repairs that survive field cleaning when a name was only partly corrupted.
fn repair_author_encoding(raw: &str) -> String {
    if !raw.contains('Ã') {
        return raw.to_string();
    }
    let repaired = raw.replace("Ã˜", "Ø").replace("Ã¸", "ø");
    STRAY_O_STROKE.replace_all(&repaired, "Ø").into_owned()
}
