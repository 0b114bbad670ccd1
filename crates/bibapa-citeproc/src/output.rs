//! Formatted citation output.
//!
//! A citation is built as [`MarkedText`]: an ordered list of [`Span`]s, each
//! either plain or italic. Keeping the runs structured means field content
//! never has to be escaped while the citation is being composed; markers or
//! tags only appear when the text is serialized.
//!
//! The inline form used for storage wraps italic runs in `*`:
//!
//! ```rust
//! use bibapa_citeproc::MarkedText;
//!
//! let mut text = MarkedText::new();
//! text.push("Smith, J. (2020). Title. ");
//! text.push_italic("Nature");
//! text.push(".");
//!
//! assert_eq!(text.to_inline(), "Smith, J. (2020). Title. *Nature*.");
//! assert_eq!(MarkedText::parse_inline(&text.to_inline()), text);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Delimiter around italic runs in the inline form.
pub const ITALIC_MARKER: char = '*';

const ESCAPE: char = '\\';

/// Font style of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// A run of text in a single style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub style: FontStyle,
}

impl Span {
    pub fn is_italic(&self) -> bool {
        self.style == FontStyle::Italic
    }
}

/// Citation text as a sequence of plain and italic runs.
///
/// Invariants: no span is empty and no two neighbouring spans share a style.
/// Both are maintained by the push methods, so italic runs never nest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkedText {
    spans: Vec<Span>,
}

impl MarkedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain text with no italic runs.
    pub fn plain(text: impl Into<String>) -> Self {
        let mut marked = Self::new();
        marked.push(text);
        marked
    }

    /// Append plain text.
    pub fn push(&mut self, text: impl Into<String>) {
        self.push_styled(text, FontStyle::Normal);
    }

    /// Append italic text.
    pub fn push_italic(&mut self, text: impl Into<String>) {
        self.push_styled(text, FontStyle::Italic);
    }

    /// Append text in `style`, merging with the last run when styles match.
    pub fn push_styled(&mut self, text: impl Into<String>, style: FontStyle) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.text.push_str(&text),
            _ => self.spans.push(Span { text, style }),
        }
    }

    /// Append all runs of `other`.
    pub fn append(&mut self, other: MarkedText) {
        for span in other.spans {
            self.push_styled(span.text, span.style);
        }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The last character of the text, if any.
    pub fn last_char(&self) -> Option<char> {
        self.spans.last().and_then(|span| span.text.chars().last())
    }

    /// Content with all styling dropped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Join several texts, inserting `separator` as plain text between them.
    pub fn join(items: impl IntoIterator<Item = MarkedText>, separator: &str) -> MarkedText {
        let mut joined = MarkedText::new();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                joined.push(separator);
            }
            joined.append(item);
        }
        joined
    }

    /// Serialize to the inline form: italic runs wrapped in `*`, with `*` and
    /// `\` inside content escaped by a backslash.
    pub fn to_inline(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            if span.is_italic() {
                out.push(ITALIC_MARKER);
            }
            for c in span.text.chars() {
                if c == ITALIC_MARKER || c == ESCAPE {
                    out.push(ESCAPE);
                }
                out.push(c);
            }
            if span.is_italic() {
                out.push(ITALIC_MARKER);
            }
        }
        out
    }

    /// Parse the inline form.
    ///
    /// `*content*` with non-empty content is an italic run. A `*` without a
    /// partner, or an empty `**`, is literal text. `\*` and `\\` are literal
    /// characters; any other backslash is kept as is.
    pub fn parse_inline(input: &str) -> MarkedText {
        let chars: Vec<char> = input.chars().collect();
        let mut marked = MarkedText::new();
        let mut plain = String::new();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                ESCAPE if matches!(chars.get(i + 1), Some(&(ITALIC_MARKER | ESCAPE))) => {
                    plain.push(chars[i + 1]);
                    i += 2;
                }
                ITALIC_MARKER => match read_italic_run(&chars, i + 1) {
                    Some((content, next)) => {
                        marked.push(std::mem::take(&mut plain));
                        marked.push_italic(content);
                        i = next;
                    }
                    None => {
                        plain.push(ITALIC_MARKER);
                        i += 1;
                    }
                },
                c => {
                    plain.push(c);
                    i += 1;
                }
            }
        }
        marked.push(plain);
        marked
    }
}

/// Read an italic run starting after its opening marker. Returns the unescaped
/// content and the index after the closing marker.
fn read_italic_run(chars: &[char], start: usize) -> Option<(String, usize)> {
    let mut content = String::new();
    let mut i = start;
    while i < chars.len() {
        match chars[i] {
            ESCAPE if matches!(chars.get(i + 1), Some(&(ITALIC_MARKER | ESCAPE))) => {
                content.push(chars[i + 1]);
                i += 2;
            }
            ITALIC_MARKER if content.is_empty() => return None,
            ITALIC_MARKER => return Some((content, i + 1)),
            c => {
                content.push(c);
                i += 1;
            }
        }
    }
    None
}

impl fmt::Display for MarkedText {
    /// Writes the inline form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_inline())
    }
}

impl FromStr for MarkedText {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MarkedText::parse_inline(s))
    }
}
