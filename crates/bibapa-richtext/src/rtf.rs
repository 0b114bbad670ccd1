//! RTF rendering.
//!
//! The output is a complete single-font document. Italic runs are wrapped in
//! `\i ` and `\i0 `, characters outside ASCII use `\uN?` escapes, and every
//! newline becomes a paragraph break.

use crate::config::RtfConfig;
use bibapa_citeproc::MarkedText;
use std::fmt::Write;

/// Render with the default document settings.
///
/// ```rust
/// use bibapa_citeproc::MarkedText;
/// use bibapa_richtext::to_rtf;
///
/// let rtf = to_rtf(&MarkedText::parse_inline("Ørsted (1820). *Title*."));
/// assert!(rtf.starts_with(r"{\rtf1\ansi"));
/// assert!(rtf.ends_with(r"\u216?rsted (1820). \i Title\i0 .}"));
/// ```
pub fn to_rtf(text: &MarkedText) -> String {
    render_rtf(text, &RtfConfig::default())
}

/// Render as a complete RTF document.
pub fn render_rtf(text: &MarkedText, config: &RtfConfig) -> String {
    let mut rtf = header(config);
    for span in text.spans() {
        if span.is_italic() {
            rtf.push_str(r"\i ");
            escape_rtf_into(&span.text, &mut rtf);
            rtf.push_str(r"\i0 ");
        } else {
            escape_rtf_into(&span.text, &mut rtf);
        }
    }
    rtf.push('}');
    tracing::trace!(bytes = rtf.len(), "rendered rtf");
    rtf
}

fn header(config: &RtfConfig) -> String {
    format!(
        "{{\\rtf1\\ansi\\ansicpg1252\\cocoartf2639\n\
         \\cocoatextscaling0\\cocoaplatform0{{\\fonttbl\\f0\\fnil\\fcharset0 {font};}}\n\
         {{\\colortbl;\\red255\\green255\\blue255;\\red0\\green0\\blue0;}}\n\
         {{\\*\\expandedcolortbl;;\\cssrgb\\c0\\c0\\c0;}}\n\
         \\paperw{width}\\paperh{height}\\margl{left}\\margr{right}\\vieww11520\\viewh8400\\viewkind0\n\
         \\deftab720\n\
         \\pard\\pardeftab720\\partightenfactor0\n\
         \\f0\\fs{half_points} \\cf2 ",
        font = config.font.trim(),
        width = config.paper_width,
        height = config.paper_height,
        left = config.margin_left,
        right = config.margin_right,
        half_points = config.font_size.saturating_mul(2),
    )
}

fn escape_rtf_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '\\' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\par\n"),
            '\r' => {}
            c if c.is_ascii() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    // RTF reads the parameter as a signed 16-bit value.
                    let _ = write!(out, "\\u{}?", *unit as i16);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn body(inline: &str) -> String {
        let rtf = to_rtf(&MarkedText::parse_inline(inline));
        let start = rtf.find(r"\cf2 ").map(|i| i + r"\cf2 ".len()).unwrap();
        rtf[start..rtf.len() - 1].to_string()
    }

    #[test]
    fn test_header() {
        let expected = [
            r"{\rtf1\ansi\ansicpg1252\cocoartf2639",
            r"\cocoatextscaling0\cocoaplatform0{\fonttbl\f0\fnil\fcharset0 HelveticaNeue;}",
            r"{\colortbl;\red255\green255\blue255;\red0\green0\blue0;}",
            r"{\*\expandedcolortbl;;\cssrgb\c0\c0\c0;}",
            r"\paperw11900\paperh16840\margl1440\margr1440\vieww11520\viewh8400\viewkind0",
            r"\deftab720",
            r"\pard\pardeftab720\partightenfactor0",
            r"\f0\fs24 \cf2 ",
        ]
        .join("\n");
        assert_eq!(header(&RtfConfig::default()), expected);
    }

    #[test]
    fn test_document_is_closed() {
        let rtf = to_rtf(&MarkedText::plain("x"));
        assert!(rtf.ends_with(r"\cf2 x}"));
    }

    #[test]
    fn test_italic_runs() {
        assert_eq!(
            body("T. *Nature*, *10*, 1."),
            r"T. \i Nature\i0 , \i 10\i0 , 1."
        );
    }

    #[test]
    fn test_escapes_control_characters() {
        assert_eq!(body(r"a{b}c\d"), r"a\{b\}c\\d");
        assert_eq!(body(r"*{x}*"), r"\i \{x\}\i0 ");
    }

    #[test]
    fn test_literal_italic_control_word_is_escaped() {
        assert_eq!(body(r"see \i here"), r"see \\i here");
    }

    #[test]
    fn test_unicode_escapes() {
        assert_eq!(body("é–"), r"\u233?\u8211?");
        assert_eq!(body("가"), r"\u-21504?");
        assert_eq!(body("😀"), r"\u-10179?\u-8704?");
    }

    #[test]
    fn test_newlines_become_paragraphs() {
        assert_eq!(body("a\n\nb"), "a\\par\n\\par\nb");
        assert_eq!(body("a\r\nb"), "a\\par\nb");
    }

    #[test]
    fn test_custom_document_settings() {
        let config = RtfConfig {
            font: "Times New Roman".to_string(),
            font_size: 11,
            ..RtfConfig::default()
        };
        let rtf = render_rtf(&MarkedText::plain("x"), &config);
        assert!(rtf.contains(r"\fcharset0 Times New Roman;}"));
        assert!(rtf.contains(r"\f0\fs22 \cf2 x}"));
    }
}
