//! French-locale string comparison.
//!
//! Stand-in for the browser's `localeCompare(_, "fr")` used by table
//! sorting: case-insensitive, accents fold to their base letter, and
//! strings that only differ by accents or case fall back to byte order so
//! the comparator stays total and deterministic.

use std::cmp::Ordering;

/// Compare two strings with French collation conventions.
#[must_use]
pub fn compare_fr(a: &str, b: &str) -> Ordering {
    let folded = fold_chars(a).cmp(fold_chars(b));
    match folded {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

fn fold_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().map(fold_char)
}

/// Lowercase and strip the accents French text actually uses.
const fn fold_char(c: char) -> char {
    match c {
        'à' | 'â' | 'ä' | 'À' | 'Â' | 'Ä' | 'A' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' | 'E' => 'e',
        'î' | 'ï' | 'Î' | 'Ï' | 'I' => 'i',
        'ô' | 'ö' | 'Ô' | 'Ö' | 'O' => 'o',
        'ù' | 'û' | 'ü' | 'Ù' | 'Û' | 'Ü' | 'U' => 'u',
        'ç' | 'Ç' | 'C' => 'c',
        'ÿ' | 'Ÿ' | 'Y' => 'y',
        'œ' | 'Œ' => 'œ',
        'B'..='Z' => c.to_ascii_lowercase(),
        _ => c,
    }
}
