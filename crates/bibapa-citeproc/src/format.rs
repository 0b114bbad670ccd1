//! APA6 citation templates.
//!
//! Every template starts with `Authors (year). Title` and adds a trailer
//! specific to the entry type. Missing fields are dropped together with the
//! punctuation that would have introduced them, so formatting never fails.

use crate::names::{UNKNOWN_AUTHOR, render_authors};
use crate::output::MarkedText;
use crate::text::{doi_url, is_terminal_punctuation, normalize_pages, sentence_case};
use bibapa_bibtex::{CitationType, Record};

/// Rendered in place of a missing year.
pub const NO_DATE: &str = "n.d.";

/// Format a record as an APA6 citation.
///
/// ```rust
/// use bibapa_bibtex::parse;
/// use bibapa_citeproc::format;
///
/// let record = parse(
///     "@article{k1, author={Smith, John}, year={2020}, title={a study of x}, \
///      journal={Nature}, volume={10}, pages={1-5}}",
/// )
/// .unwrap();
///
/// assert_eq!(
///     format(&record).to_inline(),
///     "Smith, J. (2020). A study of x. *Nature*, *10*, 1–5."
/// );
/// ```
pub fn format(record: &Record) -> MarkedText {
    let citation_type = record.citation_type();
    tracing::debug!(
        key = record.key(),
        template = citation_type.as_str(),
        "formatting citation"
    );

    match citation_type {
        CitationType::Article => format_article(record),
        CitationType::Book => format_book(record),
        CitationType::Conference => format_in_collection(record, false),
        CitationType::Chapter => format_in_collection(record, true),
        CitationType::DoctoralThesis => format_thesis(record, "Doctoral dissertation"),
        CitationType::MastersThesis => format_thesis(record, "Master's thesis"),
        CitationType::Web => format_web(record),
        CitationType::Generic => {
            tracing::trace!(key = record.key(), "no dedicated template, using generic");
            format_generic(record)
        }
    }
}

/// `Authors (year). Title`, with the title in italics for types whose title
/// is the cited work itself. No period is added after the title.
fn head(record: &Record) -> MarkedText {
    head_with_authors(record, &render_authors(record.get("author").unwrap_or_default()))
}

fn head_with_authors(record: &Record, authors: &str) -> MarkedText {
    let year = record.get("year").unwrap_or(NO_DATE);

    let mut text = MarkedText::plain(format!("{authors} ({year})."));

    let title = record
        .get("title")
        .map(sentence_case)
        .filter(|title| !title.is_empty());
    if let Some(title) = title {
        text.push(" ");
        if record.citation_type().italicizes_title() {
            text.push_italic(title);
        } else {
            text.push(title);
        }
    }
    text
}

/// End the current sentence unless it already ends with `.`, `?` or `!`.
fn close_sentence(text: &mut MarkedText) {
    if !text.last_char().is_some_and(is_terminal_punctuation) {
        text.push(".");
    }
}

/// Start a new sentence holding `content`.
fn push_sentence(text: &mut MarkedText, content: &str) {
    close_sentence(text);
    text.push(" ");
    text.push(content);
}

fn format_article(record: &Record) -> MarkedText {
    let mut text = head(record);
    close_sentence(&mut text);

    if let Some(journal) = record.get("journal") {
        text.push(" ");
        text.push_italic(journal);
        if let Some(volume) = record.get("volume") {
            text.push(", ");
            text.push_italic(volume);
            if let Some(issue) = record.get_any(&["number", "issue"]) {
                text.push(format!("({issue})"));
            }
        }
        if let Some(pages) = record.get("pages") {
            text.push(", ");
            text.push(normalize_pages(pages));
        }
        close_sentence(&mut text);
    }

    if let Some(doi) = record.get("doi") {
        text.push(" ");
        text.push(doi_url(doi));
    }
    text
}

fn format_book(record: &Record) -> MarkedText {
    let mut text = head(record);

    let imprint = match (record.get("address"), record.get("publisher")) {
        (Some(address), Some(publisher)) => Some(format!("{address}: {publisher}")),
        (None, Some(single)) | (Some(single), None) => Some(single.to_string()),
        (None, None) => None,
    };
    if let Some(imprint) = imprint {
        push_sentence(&mut text, &imprint);
    }
    close_sentence(&mut text);
    text
}

/// Conference papers and book chapters: `Title. In [Editors (Ed.), ]*Book*
/// (pp. pages). Publisher.`
fn format_in_collection(record: &Record, with_editors: bool) -> MarkedText {
    let mut text = head(record);
    close_sentence(&mut text);

    let editors = record
        .get("editor")
        .filter(|_| with_editors)
        .map(|editor| format!("{} (Ed.)", render_authors(editor)));
    let book_title = record.get("booktitle");
    let in_clause = editors.is_some() || book_title.is_some();

    match (editors, book_title) {
        (Some(editors), Some(book_title)) => {
            text.push(format!(" In {editors}, "));
            text.push_italic(book_title);
        }
        (Some(editors), None) => text.push(format!(" In {editors}")),
        (None, Some(book_title)) => {
            text.push(" In ");
            text.push_italic(book_title);
        }
        (None, None) => {}
    }

    if let Some(pages) = record.get("pages") {
        let pages = normalize_pages(pages);
        if in_clause {
            text.push(format!(" (pp. {pages})"));
        } else {
            text.push(format!(" pp. {pages}"));
        }
    }

    if let Some(publisher) = record.get("publisher") {
        push_sentence(&mut text, publisher);
    }
    close_sentence(&mut text);
    text
}

fn format_thesis(record: &Record, qualifier: &str) -> MarkedText {
    let mut text = head(record);
    text.push(format!(" [{qualifier}]"));
    if let Some(institution) = record.get_any(&["school", "institution"]) {
        push_sentence(&mut text, institution);
    }
    close_sentence(&mut text);
    text
}

/// A page without a named author is credited to its publisher, verbatim.
/// Otherwise a publisher other than the author gets its own sentence.
fn format_web(record: &Record) -> MarkedText {
    let author = record.get("author");
    let publisher = record.get("publisher");
    let authors = match (author, publisher) {
        (Some(author), _) => render_authors(author),
        (None, Some(publisher)) => publisher.to_string(),
        (None, None) => UNKNOWN_AUTHOR.to_string(),
    };

    let mut text = head_with_authors(record, &authors);
    if let (Some(author), Some(publisher)) = (author, publisher)
        && publisher != author
    {
        push_sentence(&mut text, publisher);
    }
    match record.get("url") {
        Some(url) => push_sentence(&mut text, &format!("Retrieved from {url}")),
        None => close_sentence(&mut text),
    }
    text
}

fn format_generic(record: &Record) -> MarkedText {
    let mut text = head(record);
    close_sentence(&mut text);
    text
}
