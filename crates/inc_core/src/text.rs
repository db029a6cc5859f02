//! Canonical text form used by every pattern match.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercases, strips diacritics, collapses whitespace and trims.
///
/// `normalize(normalize(s)) == normalize(s)` holds for every input.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.nfkd() {
        if is_combining_mark(c) {
            continue;
        }
        for c in c.to_lowercase() {
            if is_combining_mark(c) {
                continue;
            }
            let c = fold_punctuation(c);
            if c.is_whitespace() {
                pending_space = !out.is_empty();
                continue;
            }
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }

    out
}

/// Same as [`normalize`] but for optional text.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

fn fold_punctuation(c: char) -> char {
    match c {
        '\u{2018}' | '\u{2019}' | '\u{201B}' | '\u{02BC}' | '\u{2032}' | '`' => '\'',
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{00AB}' | '\u{00BB}' => '"',
        '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' => '-',
        _ => c,
    }
}

/// Cuts `text` to at most `max` characters, on a char boundary.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_accents_and_case() {
        assert_eq!(normalize("Si è verificato un INCIDENTE"), "si e verificato un incidente");
        assert_eq!(normalize("Viabilità, città, perché"), "viabilita, citta, perche");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  due\t\tferiti \n\n in via  Roma  "), "due feriti in via roma");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_normalize_folds_typographic_quotes() {
        assert_eq!(normalize("L’auto è finita «fuori strada»"), "l'auto e finita \"fuori strada\"");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "Incidente in via Roma, due feriti",
            "Un'auto ha perso il controllo ed è finita contro un muro",
            "ÀÉÎÕÜ çñ ß İstanbul ﬁne ㎒",
            "\u{00A0}spazio\u{2009}sottile\u{3000}ideografico ",
            "Ελληνικά Кириллица 日本語",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_normalize_opt() {
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some("Corato")), "corato");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("città", 4), "citt");
        assert_eq!(truncate_chars("città", 10), "città");
        assert_eq!(truncate_chars("", 3), "");
    }
}
