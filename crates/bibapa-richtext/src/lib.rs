//! Rendering of formatted citations for display and the clipboard.
//!
//! A [`MarkedText`](bibapa_citeproc::MarkedText) can be rendered as:
//!
//! - plain text, with italics dropped ([`to_plain_text`]);
//! - an HTML fragment or document, with italics as `<i>` and reference
//!   lists as hanging-indent paragraphs ([`to_html`], [`to_html_document`]);
//! - an RTF document ([`to_rtf`]).
//!
//! The free functions use the default layout. [`Renderer`] renders with a
//! [`RenderConfig`], which can be loaded from TOML.

pub mod config;
pub mod error;
pub mod html;
pub mod plain;
pub mod render;
pub mod rtf;

pub use config::{HtmlConfig, RenderConfig, RtfConfig};
pub use error::{ConfigError, ConfigResult};
pub use html::{to_html, to_html_document};
pub use plain::{strip_formatting, to_plain_text};
pub use render::{Format, Renderer};
pub use rtf::to_rtf;
