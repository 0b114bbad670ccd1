//! BibTeX record parsing for bibapa.
//!
//! This crate turns one `@type{key, field = value, ...}` record into a
//! [`Record`]: a closed [`CitationType`], the opaque citation key, and a map
//! of lower-cased field names to cleaned values.
//!
//! Cleaning resolves LaTeX accent commands and repairs text that was
//! mis-decoded on its way out of a PDF, so downstream formatting only ever
//! sees plain Unicode.
//!
//! # Example
//!
//! ```rust
//! use bibapa_bibtex::{parse, CitationType};
//!
//! let record = parse(
//!     r"@article{orsted1820,
//!         author = {{\O}rsted, Hans Christian},
//!         title = {Experiments on the effect of a current},
//!         year = 1820
//!     }",
//! )
//! .unwrap();
//!
//! assert_eq!(record.citation_type(), CitationType::Article);
//! assert_eq!(record.key(), "orsted1820");
//! assert_eq!(record.get("author"), Some("Ørsted, Hans Christian"));
//! ```
//!
//! Input that does not have the outer record shape is rejected as a whole:
//!
//! ```rust
//! use bibapa_bibtex::{parse, Error};
//!
//! let err = parse("title = {no entry}").unwrap_err();
//! assert!(matches!(err, Error::MalformedSource { .. }));
//! ```

pub mod clean;
pub mod error;
pub mod parser;
pub mod types;

pub use error::{Error, Result};
pub use parser::parse;
pub use types::{CitationType, Record, WebMetadata};
