//! Text transformations used by the APA templates.

use once_cell::sync::Lazy;
use regex::Regex;

/// Hyphen runs and dashes, with any whitespace around them.
static PAGE_DASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*(?:-{1,3}|[–—])\s*").unwrap());

/// A DOI given as a resolver URL or with a `doi:` prefix.
static DOI_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:https?://(?:dx\.)?doi\.org/|doi:\s*)").unwrap());

const EN_DASH: &str = "–";

/// Apply APA sentence case to a title.
///
/// The first word has its first character upper-cased. Every later word is
/// lower-cased, unless the word before it ends in `.`, `?`, `!` or `:`, in
/// which case it is lower-cased and then given a capital first character.
/// This is a heuristic: proper nouns and acronyms inside a title are
/// lower-cased too.
///
/// ```rust
/// use bibapa_citeproc::text::sentence_case;
///
/// assert_eq!(sentence_case("a study of X"), "A study of x");
/// assert_eq!(sentence_case("Deep Learning: A Survey"), "Deep learning: A survey");
/// ```
pub fn sentence_case(title: &str) -> String {
    let words: Vec<&str> = title.split_whitespace().collect();
    let Some((first, rest)) = words.split_first() else {
        return String::new();
    };

    let mut out = capitalize_first(first);
    let mut previous = *first;
    for word in rest {
        let lowered = word.to_lowercase();
        out.push(' ');
        if ends_sentence(previous) {
            out.push_str(&capitalize_first(&lowered));
        } else {
            out.push_str(&lowered);
        }
        previous = *word;
    }
    out
}

fn ends_sentence(word: &str) -> bool {
    word.ends_with(['.', '?', '!', ':'])
}

/// Upper-case the first character, leaving the rest unchanged.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Normalise a page range to use an en dash with no surrounding spaces.
///
/// ```rust
/// use bibapa_citeproc::text::normalize_pages;
///
/// assert_eq!(normalize_pages("12--15"), "12–15");
/// assert_eq!(normalize_pages("12 — 15"), "12–15");
/// ```
pub fn normalize_pages(pages: &str) -> String {
    PAGE_DASH.replace_all(pages.trim(), EN_DASH).into_owned()
}

/// Resolver URL for a DOI, accepting bare DOIs, `doi:` prefixes and
/// existing `doi.org` links.
pub fn doi_url(doi: &str) -> String {
    let bare = DOI_PREFIX.replace(doi.trim(), "");
    format!("https://doi.org/{bare}")
}

/// Whether a sentence ending in `c` needs no extra period.
pub fn is_terminal_punctuation(c: char) -> bool {
    matches!(c, '.' | '?' | '!')
}
