//! APA6 citation formatting.
//!
//! [`format`] turns a parsed [`bibapa_bibtex::Record`] into [`MarkedText`],
//! a sequence of plain and italic runs. Formatting is total: missing fields
//! are dropped with their punctuation and a record with no author or year
//! renders with `Unknown` and `n.d.`.
//!
//! ```rust
//! use bibapa_bibtex::parse;
//!
//! let record =
//!     parse("@phdthesis{r1, author={Max Roe}, year={2018}, title={Deep Things}, school={MIT}}")
//!         .unwrap();
//! let citation = bibapa_citeproc::format(&record);
//!
//! assert_eq!(
//!     citation.to_inline(),
//!     "Roe, M. (2018). *Deep things* [Doctoral dissertation]. MIT."
//! );
//! assert_eq!(
//!     citation.plain_text(),
//!     "Roe, M. (2018). Deep things [Doctoral dissertation]. MIT."
//! );
//! ```

pub mod format;
pub mod names;
pub mod output;
pub mod text;

pub use format::format;
pub use names::{AuthorName, render_authors};
pub use output::{FontStyle, MarkedText, Span};
