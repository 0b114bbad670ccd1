//! Field value cleaning: whitespace, LaTeX escapes and mis-decoded text.
//!
//! BibTeX copied out of PDFs and reference managers tends to arrive with
//! LaTeX accent commands (`\'e`, `{\o}`) and with UTF-8 that was decoded as
//! Windows-1252 somewhere along the way (`Ã˜rsted` instead of `Ørsted`).
//! [`clean_value`] undoes both.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// ASCII whitespace only: a non-breaking space is half of the mis-decoded `à`.
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\n\x0B\x0C\r]+").unwrap());

/// Accent commands as (command char, base letter, composed character).
///
/// Each entry is expanded into both the bare (`\'e`) and the braced (`\'{e}`)
/// spelling.
const ACCENTS: &[(char, char, &str)] = &[
    ('\'', 'a', "á"),
    ('\'', 'e', "é"),
    ('\'', 'i', "í"),
    ('\'', 'o', "ó"),
    ('\'', 'u', "ú"),
    ('\'', 'y', "ý"),
    ('\'', 'A', "Á"),
    ('\'', 'E', "É"),
    ('\'', 'I', "Í"),
    ('\'', 'O', "Ó"),
    ('\'', 'U', "Ú"),
    ('`', 'a', "à"),
    ('`', 'e', "è"),
    ('`', 'i', "ì"),
    ('`', 'o', "ò"),
    ('`', 'u', "ù"),
    ('`', 'A', "À"),
    ('`', 'E', "È"),
    ('"', 'a', "ä"),
    ('"', 'e', "ë"),
    ('"', 'i', "ï"),
    ('"', 'o', "ö"),
    ('"', 'u', "ü"),
    ('"', 'y', "ÿ"),
    ('"', 'A', "Ä"),
    ('"', 'E', "Ë"),
    ('"', 'O', "Ö"),
    ('"', 'U', "Ü"),
    ('^', 'a', "â"),
    ('^', 'e', "ê"),
    ('^', 'i', "î"),
    ('^', 'o', "ô"),
    ('^', 'u', "û"),
    ('^', 'A', "Â"),
    ('^', 'E', "Ê"),
    ('^', 'O', "Ô"),
    ('~', 'a', "ã"),
    ('~', 'n', "ñ"),
    ('~', 'o', "õ"),
    ('~', 'A', "Ã"),
    ('~', 'N', "Ñ"),
    ('~', 'O', "Õ"),
];

/// Cedillas, which take a braced argument like the accents but are matched
/// only in that spelling.
const CEDILLAS: &[(&str, &str)] = &[(r"\c{c}", "ç"), (r"\c{C}", "Ç")];

/// Commands named by letters alone, such as `\o` and `\ss`.
///
/// A command name runs to the first non-letter, so these only resolve when
/// the name ends there: `\oe` is `œ`, while `\ldots` and `\LaTeX` are left
/// untouched. An empty `{}` terminating the name is consumed.
const LETTER_COMMANDS: &[(&str, &str)] = &[
    ("aa", "å"),
    ("AA", "Å"),
    ("ae", "æ"),
    ("AE", "Æ"),
    ("oe", "œ"),
    ("OE", "Œ"),
    ("ss", "ß"),
    ("o", "ø"),
    ("O", "Ø"),
    ("l", "ł"),
    ("L", "Ł"),
];

static LETTER_COMMAND: Lazy<Regex> = Lazy::new(|| {
    let names: Vec<&str> = LETTER_COMMANDS.iter().map(|&(name, _)| name).collect();
    Regex::new(&format!(r"\\({})(?:\{{\}}|\b)", names.join("|"))).unwrap()
});

static LATEX_ESCAPES: Lazy<Vec<(String, &'static str)>> = Lazy::new(|| {
    let mut table = Vec::with_capacity(ACCENTS.len() * 2 + CEDILLAS.len());
    for &(command, base, composed) in ACCENTS {
        table.push((format!("\\{command}{{{base}}}"), composed));
        table.push((format!("\\{command}{base}"), composed));
    }
    table.extend(
        CEDILLAS
            .iter()
            .map(|&(latex, unicode)| (latex.to_string(), unicode)),
    );
    table
});

/// UTF-8 sequences that were decoded as Windows-1252, keyed by what they look
/// like after the bad decode.
const MOJIBAKE: &[(&str, &str)] = &[
    ("Ã˜", "Ø"),
    ("Ã¸", "ø"),
    ("Ã…", "Å"),
    ("Ã¥", "å"),
    ("Ã¦", "æ"),
    ("Ã†", "Æ"),
    ("Ã©", "é"),
    ("Ã¨", "è"),
    ("Ãª", "ê"),
    ("Ã«", "ë"),
    ("Ã¡", "á"),
    ("Ã\u{a0}", "à"),
    ("Ã¢", "â"),
    ("Ã¤", "ä"),
    ("Ã¶", "ö"),
    ("Ã¼", "ü"),
    ("Ã±", "ñ"),
    ("Ã§", "ç"),
    ("ÃŸ", "ß"),
    ("Ã‰", "É"),
    ("Ã–", "Ö"),
    ("Ãœ", "Ü"),
    ("Ã„", "Ä"),
    ("Ã‡", "Ç"),
    ("Ã³", "ó"),
    ("Ãº", "ú"),
    ("Ã\u{ad}", "í"),
    ("Ã¯", "ï"),
    ("Ã®", "î"),
    ("Ã´", "ô"),
    ("Ã»", "û"),
    ("Ã£", "ã"),
];

/// Partially corrupted text where the second byte was lost entirely. These
/// run after [`MOJIBAKE`] so they only see a lone `Ã`.
const PARTIAL_MOJIBAKE: &[(&str, &str)] = &[("Ã,", "Ø,"), ("Seland, Ã", "Seland, Ø")];

/// Clean a raw field value.
///
/// Steps, in order: collapse whitespace, resolve LaTeX escapes, repair
/// mis-decoded sequences, strip braces, repair again, trim.
pub fn clean_value(raw: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(raw, " ");
    let resolved = resolve_latex(&collapsed);
    let repaired = repair_encoding(&resolved);
    let unbraced: String = repaired.chars().filter(|c| !matches!(c, '{' | '}')).collect();
    repair_encoding(&unbraced).trim().to_string()
}

/// Replace LaTeX accent and ligature commands with Unicode characters.
pub fn resolve_latex(value: &str) -> String {
    if !value.contains('\\') {
        return value.to_string();
    }
    let accented = LATEX_ESCAPES
        .iter()
        .fold(value.to_string(), |acc, (latex, unicode)| {
            acc.replace(latex.as_str(), unicode)
        });
    LETTER_COMMAND
        .replace_all(&accented, |caps: &Captures| {
            LETTER_COMMANDS
                .iter()
                .find(|&&(name, _)| name == &caps[1])
                .map_or("", |&(_, unicode)| unicode)
        })
        .into_owned()
}

/// Repair UTF-8 text that went through a Windows-1252 decode.
pub fn repair_encoding(value: &str) -> String {
    if !value.contains('Ã') {
        return value.to_string();
    }
    MOJIBAKE
        .iter()
        .chain(PARTIAL_MOJIBAKE)
        .fold(value.to_string(), |acc, &(bad, good)| acc.replace(bad, good))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_and_newlines() {
        assert_eq!(clean_value("  A   study\n\tof   x  "), "A study of x");
    }

    #[test]
    fn test_resolves_accents_in_both_spellings() {
        assert_eq!(resolve_latex(r"Caf\'e"), "Café");
        assert_eq!(resolve_latex(r"Caf\'{e}"), "Café");
        assert_eq!(resolve_latex(r"Espa\~na"), "España");
        assert_eq!(resolve_latex(r#"M\"{u}ller"#), "Müller");
    }

    #[test]
    fn test_ligatures_before_prefixes() {
        assert_eq!(resolve_latex(r"c\oe ur"), "cœ ur");
        assert_eq!(clean_value(r"{\o}rsted"), "ørsted");
        assert_eq!(resolve_latex(r"M\o{}ller"), "Møller");
        assert_eq!(resolve_latex(r"Gau\ss"), "Gauß");
        assert_eq!(resolve_latex(r"Fran\c{c}ois"), "François");
        assert_eq!(clean_value(r"{\L}{\'o}dz"), "Łódz");
    }

    #[test]
    fn test_letter_commands_need_a_complete_name() {
        assert_eq!(
            clean_value(r"The \LaTeX{} Companion"),
            r"The \LaTeX Companion"
        );
        assert_eq!(resolve_latex(r"a \ldots b"), r"a \ldots b");
        assert_eq!(resolve_latex(r"\ssection \oslash"), r"\ssection \oslash");
        assert_eq!(resolve_latex(r"\L{}ukasz \l"), "Łukasz ł");
    }

    #[test]
    fn test_braced_latex_is_stripped_after_resolution() {
        assert_eq!(clean_value(r"{\O}stergaard"), "Østergaard");
        assert_eq!(clean_value(r"Sm{\aa}land"), "Småland");
    }

    #[test]
    fn test_repairs_mojibake() {
        assert_eq!(repair_encoding("Ã˜rsted"), "Ørsted");
        assert_eq!(repair_encoding("Ã¥r"), "år");
        assert_eq!(repair_encoding("CafÃ©"), "Café");
        assert_eq!(repair_encoding("voil\u{c3}\u{a0}"), "voilà");
    }

    #[test]
    fn test_repairs_partial_corruption() {
        assert_eq!(repair_encoding("Hansen, Ã, and more"), "Hansen, Ø, and more");
        assert_eq!(repair_encoding("Seland, Ã"), "Seland, Ø");
    }

    #[test]
    fn test_repair_across_brace_boundary() {
        // The braces split the sequence until they are stripped.
        assert_eq!(clean_value("{Ã}˜rsted"), "Ørsted");
    }

    #[test]
    fn test_non_breaking_space_survives_collapse() {
        assert_eq!(clean_value("a\u{a0} b"), "a\u{a0} b");
    }
}
