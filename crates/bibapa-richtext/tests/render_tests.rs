//! Rendering parsed and formatted citations.

use bibapa_bibtex::parse;
use bibapa_citeproc::{MarkedText, format};
use bibapa_richtext::{
    ConfigError, Format, RenderConfig, Renderer, strip_formatting, to_html, to_plain_text, to_rtf,
};
use pretty_assertions::assert_eq;

fn article() -> MarkedText {
    format(
        &parse(
            "@article{k1, author={Smith, John}, year={2020}, title={a study of x}, \
             journal={Nature}, volume={10}, pages={1-5}}",
        )
        .expect("valid record"),
    )
}

#[test]
fn test_article_in_every_format() {
    let citation = article();

    assert_eq!(
        to_plain_text(&citation),
        "Smith, J. (2020). A study of x. Nature, 10, 1–5."
    );
    assert_eq!(
        to_html(&citation),
        "Smith, J. (2020). A study of x. <i>Nature</i>, <i>10</i>, 1–5."
    );
    assert!(to_rtf(&citation).ends_with(r"A study of x. \i Nature\i0 , \i 10\i0 , 1\u8211?5.}"));
}

#[test]
fn test_stored_form_strips_to_plain_text() {
    let citation = article();
    assert_eq!(strip_formatting(&citation.to_inline()), to_plain_text(&citation));
}

#[test]
fn test_title_with_asterisks_keeps_them_in_plain_text() {
    let citation = format(&parse("@misc{k, title={the *real* story}}").expect("valid record"));
    let plain = to_plain_text(&citation);

    assert_eq!(plain, "Unknown (n.d.). The *real* story.");
    assert_eq!(strip_formatting(&citation.to_inline()), plain);
    assert_eq!(to_plain_text(&MarkedText::plain(plain.clone())), plain);
}

#[test]
fn test_reference_list_paragraphs() {
    let book = format(
        &parse(
            "@book{b, author={Herbert, Frank}, year={1965}, title={Dune}, publisher={Chilton}}",
        )
        .expect("valid record"),
    );
    let list = MarkedText::join([article(), book], "\n\n");

    let html = to_html(&list);
    let paragraphs: Vec<&str> = html.lines().collect();
    assert_eq!(paragraphs.len(), 2);
    assert!(paragraphs[0].starts_with("<p style=\"margin-left: 0.5in;"));
    assert!(paragraphs[0].ends_with("<i>10</i>, 1–5.</p>"));
    assert!(paragraphs[1].ends_with("Herbert, F. (1965). <i>Dune</i>. Chilton.</p>"));

    let rtf = Renderer::default().render(&list, Format::Rtf);
    assert!(rtf.contains("1\\u8211?5.\\par\n\\par\nHerbert, F. (1965). \\i Dune\\i0 . Chilton.}"));
}

#[test]
fn test_configured_renderer() {
    let config = RenderConfig::from_toml_str(
        r#"
        [html]
        hanging_indent = "1cm"
        line_height = 2.0

        [rtf]
        font = "Georgia"
        "#,
    )
    .expect("valid config");
    let renderer = Renderer::new(config);

    let document = renderer.html_document(&article());
    assert!(document.starts_with("<!DOCTYPE html>\n"));
    assert!(document.contains(
        "<p style=\"margin-left: 1cm; text-indent: -1cm; margin-top: 0; margin-bottom: 0; line-height: 2;\">"
    ));

    let rtf = renderer.render(&article(), Format::Rtf);
    assert!(rtf.contains(r"\fcharset0 Georgia;}"));
}

#[test]
fn test_config_errors_display() {
    let err = RenderConfig::from_toml_str("[rtf]\nmargin_left = 6000\nmargin_right = 6000")
        .expect_err("margins too wide");
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
    assert_eq!(
        err.to_string(),
        "Invalid value for 'rtf.margin_left': margins leave no room for text"
    );
}
