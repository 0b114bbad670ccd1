//! Errors surfaced by the bibapa facade.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The BibTeX source could not be parsed.
    #[error(transparent)]
    Bibtex(#[from] bibapa_bibtex::Error),

    /// The render configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] bibapa_richtext::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
