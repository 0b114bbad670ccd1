//! bibapa: APA6 citations from BibTeX records and web-page metadata.
//!
//! This crate ties the pipeline together. [`Citation::from_bibtex`] parses a
//! single record and formats it; [`Citation::from_metadata`] does the same
//! for page metadata collected by a scraper. A citation is stored in its
//! inline form and rendered to plain text, HTML or RTF on demand.
//!
//! ```rust
//! use bibapa::{Citation, Format, Renderer};
//!
//! let citation = Citation::from_bibtex(
//!     "@phdthesis{r1, author={Roe, Max}, year={2018}, title={Deep Things}, school={MIT}}",
//! )?;
//!
//! let renderer = Renderer::default();
//! assert_eq!(
//!     citation.render(&renderer, Format::Html),
//!     "Roe, M. (2018). <i>Deep things</i> [Doctoral dissertation]. MIT."
//! );
//! # Ok::<(), bibapa::Error>(())
//! ```
//!
//! Fetching pages, talking to the system clipboard and persisting
//! citations are left to the caller.

pub mod citation;
pub mod error;

pub use citation::{Citation, SourceKind, reference_list};
pub use error::{Error, Result};

pub use bibapa_bibtex::{CitationType, Record, WebMetadata};
pub use bibapa_citeproc::MarkedText;
pub use bibapa_richtext::{Format, RenderConfig, Renderer};

/// Build a renderer from a TOML render configuration.
pub fn renderer_from_toml(source: &str) -> Result<Renderer> {
    Ok(Renderer::new(RenderConfig::from_toml_str(source)?))
}
