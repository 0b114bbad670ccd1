//! Parser for single BibTeX records.

use crate::clean::clean_value;
use crate::error::{Error, Result};
use crate::types::{CitationType, Record};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// `@type{key, body}`. The body runs to the last closing brace in the input.
static ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)@(\w+)\s*\{\s*([^,]+)\s*,(.+)\}").unwrap());

/// A field name and the `=` that introduces its value.
static FIELD_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\s*=\s*").unwrap());

/// Parse a single BibTeX record.
///
/// Only the outer `@type{key, ...}` shape is required; text that does not
/// look like a `name = value` pair inside the body is skipped. Every value
/// is passed through [`clean_value`].
///
/// # Example
///
/// ```rust
/// use bibapa_bibtex::{parse, CitationType};
///
/// let record = parse("@book{k, title={Dune}, year=1965}").unwrap();
/// assert_eq!(record.citation_type(), CitationType::Book);
/// assert_eq!(record.get("year"), Some("1965"));
/// ```
pub fn parse(raw: &str) -> Result<Record> {
    let input = raw.trim();
    let caps = ENTRY
        .captures(input)
        .ok_or_else(|| Error::malformed("expected @type{key, field = value, ...}"))?;

    let entry_type = &caps[1];
    let key = caps[2].trim();
    let body = &caps[3];

    let citation_type = CitationType::from_entry_type(entry_type);
    let fields = parse_fields(body);

    tracing::debug!(
        key,
        entry_type,
        citation_type = %citation_type,
        fields = fields.len(),
        "parsed bibtex record"
    );

    Ok(Record::new(citation_type, key, fields))
}

/// Extract `name = value` pairs from an entry body.
///
/// Later duplicates overwrite earlier ones. Values that are empty after
/// cleaning are left out.
fn parse_fields(body: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    let mut pos = 0;

    while let Some(caps) = FIELD_NAME.captures_at(body, pos) {
        let Some(whole) = caps.get(0) else {
            break;
        };
        let name = caps[1].to_lowercase();

        let Some((raw_value, next)) = scan_value(body, whole.end()) else {
            pos = whole.end();
            continue;
        };
        pos = next;

        let value = clean_value(raw_value);
        if value.is_empty() {
            tracing::trace!(field = %name, "skipping empty field");
            continue;
        }
        tracing::trace!(field = %name, "extracted field");
        fields.insert(name, value);
    }

    fields
}

/// Read one value starting at `start`, returning it with the offset just past
/// it.
///
/// Tried in order: `{braced}` (nesting respected), `"quoted"` (quotes inside
/// braces do not terminate), then a bare token up to the next `,` or `}`.
fn scan_value(body: &str, start: usize) -> Option<(&str, usize)> {
    let rest = &body[start..];

    let delimited = match rest.chars().next() {
        Some('{') => scan_delimited(rest, '}'),
        Some('"') => scan_delimited(rest, '"'),
        _ => None,
    };
    if let Some((inner, consumed)) = delimited {
        return Some((inner, start + consumed));
    }

    let end = rest.find([',', '}']).unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    Some((rest[..end].trim(), start + end))
}

/// Scan a value opened by the first character of `text` and closed by `close`
/// at brace depth zero. Returns the inner text and the number of bytes used,
/// or `None` if the value is never closed.
fn scan_delimited(text: &str, close: char) -> Option<(&str, usize)> {
    let mut depth = 0usize;
    for (i, c) in text.char_indices().skip(1) {
        match c {
            c if c == close && depth == 0 => return Some((&text[1..i], i + 1)),
            '{' => depth += 1,
            '}' => depth = depth.checked_sub(1)?,
            _ => {}
        }
    }
    None
}
