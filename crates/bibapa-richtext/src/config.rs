//! Render configuration.
//!
//! All settings have defaults that produce the APA reference-list layout:
//! a half-inch hanging indent, 1.15 line height and 12pt between entries
//! in HTML; 12pt Helvetica Neue on A4 with one-inch side margins in RTF.
//!
//! A configuration file only needs the values it changes:
//!
//! ```toml
//! [html]
//! hanging_indent = "0.75in"
//!
//! [rtf]
//! font_size = 11
//! ```

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub html: HtmlConfig,
    pub rtf: RtfConfig,
}

/// Paragraph layout for HTML output. Lengths are CSS lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    /// Indent of every line but the first.
    pub hanging_indent: String,
    pub line_height: f64,
    /// Space after each paragraph of a reference list.
    pub paragraph_spacing: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            hanging_indent: "0.5in".to_string(),
            line_height: 1.15,
            paragraph_spacing: "12pt".to_string(),
        }
    }
}

impl HtmlConfig {
    /// Inline CSS for a hanging-indent paragraph with the given bottom margin.
    pub fn paragraph_style(&self, margin_bottom: &str) -> String {
        format!(
            "margin-left: {indent}; text-indent: -{indent}; margin-top: 0; \
             margin-bottom: {margin_bottom}; line-height: {line_height};",
            indent = self.hanging_indent,
            line_height = self.line_height,
        )
    }
}

/// Document settings for RTF output. Paper and margin sizes are in twips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RtfConfig {
    pub font: String,
    /// Font size in points.
    pub font_size: u32,
    pub paper_width: u32,
    pub paper_height: u32,
    pub margin_left: u32,
    pub margin_right: u32,
}

impl Default for RtfConfig {
    fn default() -> Self {
        Self {
            font: "HelveticaNeue".to_string(),
            font_size: 12,
            paper_width: 11900,
            paper_height: 16840,
            margin_left: 1440,
            margin_right: 1440,
        }
    }
}

impl RenderConfig {
    /// Parse a TOML configuration. Missing sections and keys keep their
    /// defaults.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: RenderConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file. A missing file yields the defaults.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no render config, using defaults");
            return Ok(Self::default());
        }
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Reject values that would produce broken markup.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.html.line_height.is_finite() || self.html.line_height <= 0.0 {
            return Err(invalid("html.line_height", "must be a positive number"));
        }
        for (field, value) in [
            ("html.hanging_indent", &self.html.hanging_indent),
            ("html.paragraph_spacing", &self.html.paragraph_spacing),
        ] {
            if value.trim().is_empty() || value.contains([';', '"', '<', '>']) {
                return Err(invalid(field, "must be a CSS length"));
            }
        }

        let font = self.rtf.font.trim();
        if font.is_empty() || font.contains(['\\', '{', '}', ';']) {
            return Err(invalid("rtf.font", "must be a plain font name"));
        }
        if self.rtf.font_size == 0 {
            return Err(invalid("rtf.font_size", "must be at least 1"));
        }
        if self.rtf.paper_width == 0 || self.rtf.paper_height == 0 {
            return Err(invalid("rtf.paper_width", "paper size must be non-zero"));
        }
        if self.rtf.margin_left.saturating_add(self.rtf.margin_right) >= self.rtf.paper_width {
            return Err(invalid("rtf.margin_left", "margins leave no room for text"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_source_is_default() {
        assert_eq!(RenderConfig::from_toml_str("").unwrap(), RenderConfig::default());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = RenderConfig::from_toml_str(
            r#"
            [html]
            hanging_indent = "0.75in"

            [rtf]
            font_size = 11
            "#,
        )
        .unwrap();

        assert_eq!(config.html.hanging_indent, "0.75in");
        assert_eq!(config.html.paragraph_spacing, "12pt");
        assert_eq!(config.rtf.font_size, 11);
        assert_eq!(config.rtf.font, "HelveticaNeue");
    }

    #[test]
    fn test_paragraph_style() {
        assert_eq!(
            HtmlConfig::default().paragraph_style("12pt"),
            "margin-left: 0.5in; text-indent: -0.5in; margin-top: 0; \
             margin-bottom: 12pt; line-height: 1.15;"
        );
    }

    #[test]
    fn test_syntax_error() {
        let err = RenderConfig::from_toml_str("[html\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_wrong_type() {
        let err = RenderConfig::from_toml_str("[rtf]\nfont_size = \"big\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_values() {
        let err = RenderConfig::from_toml_str("[rtf]\nfont = \"Evil}\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "rtf.font", .. }));
        assert_eq!(
            err.to_string(),
            "Invalid value for 'rtf.font': must be a plain font name"
        );

        let err = RenderConfig::from_toml_str("[rtf]\nfont_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "rtf.font_size", .. }));

        let err = RenderConfig::from_toml_str("[html]\nline_height = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "html.line_height", .. }));

        let err = RenderConfig::from_toml_str("[html]\nhanging_indent = \"1in; color: red\"")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "html.hanging_indent", .. }));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let config = RenderConfig::load(Path::new("/nonexistent/bibapa/render.toml")).unwrap();
        assert_eq!(config, RenderConfig::default());
    }
}
