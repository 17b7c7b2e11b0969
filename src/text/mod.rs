//! Accent-insensitive text comparison and comma-separated term lists.
//!
//! Office settings store risk vocabularies as free-form comma-separated
//! strings typed by staff ("Liminar, urgente, Tutela"). Matching happens on a
//! folded form: lowercased, canonically decomposed, with combining marks in
//! U+0300..=U+036F stripped, so `"médio"` and `"MEDIO"` compare equal.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

const COMBINING_MARKS: RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Separator used when re-joining a term list.
pub const TERM_SEPARATOR: &str = ", ";

/// Folds text for accent- and case-insensitive comparison.
///
/// # Examples
///
/// ```rust
/// use jurisdash::text::normalize_text;
///
/// assert_eq!(normalize_text("Médio"), normalize_text("medio"));
/// assert_eq!(normalize_text("AUDIÊNCIA"), "audiencia");
/// ```
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|ch| !COMBINING_MARKS.contains(ch))
        .collect()
}

/// Folds raw bytes of unknown encoding.
///
/// Valid UTF-8 goes through [`normalize_text`]; anything else falls back to
/// a plain lowercase of the lossily decoded input without decomposition.
#[must_use]
pub fn normalize_text_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => normalize_text(text),
        Err(_) => String::from_utf8_lossy(bytes).to_lowercase(),
    }
}

/// Splits a comma-separated list into folded, non-empty terms.
///
/// Order is preserved and duplicates are kept.
///
/// # Examples
///
/// ```rust
/// use jurisdash::text::split_terms;
///
/// assert_eq!(split_terms(" Liminar, ,Tutela "), vec!["liminar", "tutela"]);
/// ```
#[must_use]
pub fn split_terms(csv: &str) -> Vec<String> {
    raw_entries(csv).map(normalize_text).collect()
}

fn raw_entries(csv: &str) -> impl Iterator<Item = &str> {
    csv.split(',').map(str::trim).filter(|entry| !entry.is_empty())
}

/// Adds `term` to a comma-separated list, or removes it when already present.
///
/// Presence is decided on the folded form; every entry folding to the same
/// value is removed. Untouched entries keep their original spelling and an
/// added term is appended as typed (trimmed). A blank term leaves the list
/// unchanged apart from re-joining.
///
/// # Examples
///
/// ```rust
/// use jurisdash::text::toggle_term_in_list;
///
/// assert_eq!(toggle_term_in_list("liminar, urgente", "LIMINAR"), "urgente");
/// assert_eq!(toggle_term_in_list("urgente", "liminar"), "urgente, liminar");
/// ```
#[must_use]
pub fn toggle_term_in_list(csv: &str, term: &str) -> String {
    let entries: Vec<&str> = raw_entries(csv).collect();
    let typed = term.trim();
    if typed.is_empty() {
        return entries.join(TERM_SEPARATOR);
    }

    let needle = normalize_text(typed);
    let kept: Vec<&str> = entries
        .iter()
        .copied()
        .filter(|entry| normalize_text(entry) != needle)
        .collect();

    if kept.len() == entries.len() {
        let mut extended = entries;
        extended.push(typed);
        return extended.join(TERM_SEPARATOR);
    }
    kept.join(TERM_SEPARATOR)
}

/// How a folded term is located inside folded text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Plain substring containment. Short terms may hit inside unrelated
    /// words; this is the compatible default.
    #[default]
    Substring,
    /// The term's words must appear as a contiguous run of whole words.
    Token,
}

impl MatchMode {
    /// Returns whether `term` occurs in `haystack`.
    ///
    /// Both arguments are expected to be folded already. Empty terms never
    /// match.
    #[must_use]
    pub fn matches(self, haystack: &str, term: &str) -> bool {
        if term.is_empty() {
            return false;
        }
        match self {
            Self::Substring => haystack.contains(term),
            Self::Token => {
                let words: Vec<&str> = tokens(haystack).collect();
                let wanted: Vec<&str> = tokens(term).collect();
                !wanted.is_empty()
                    && words
                        .windows(wanted.len())
                        .any(|window| window == wanted.as_slice())
            }
        }
    }
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|ch: char| !ch.is_alphanumeric())
        .filter(|word| !word.is_empty())
}

/// Accent- and case-insensitive substring test.
#[must_use]
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    normalize_text(haystack).contains(&normalize_text(needle))
}

#[cfg(test)]
mod tests {
    use super::{
        MatchMode, contains_normalized, normalize_text, normalize_text_bytes, split_terms,
        toggle_term_in_list,
    };
    use rstest::rstest;

    #[rstest]
    #[case("médio", "medio")]
    #[case("AUDIÊNCIA", "audiencia")]
    #[case("Ação Cível", "acao civel")]
    #[case("já", "ja")]
    fn normalize_text_folds_case_and_accents(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_text(input), expected);
    }

    #[rstest]
    fn normalize_text_bytes_falls_back_to_lowercase_for_invalid_utf8() {
        let bytes = b"URGENTE \xff";
        assert_eq!(normalize_text_bytes(bytes), "urgente \u{fffd}");
        assert_eq!(normalize_text_bytes("Médio".as_bytes()), "medio");
    }

    #[rstest]
    fn split_terms_preserves_order_and_duplicates() {
        assert_eq!(
            split_terms("Liminar,  urgente ,, LIMINAR"),
            vec!["liminar", "urgente", "liminar"]
        );
    }

    #[rstest]
    fn split_terms_of_blank_list_is_empty() {
        assert!(split_terms(" , ,").is_empty());
    }

    #[rstest]
    #[case("liminar, urgente", "liminar", "urgente")]
    #[case("urgente", "liminar", "urgente, liminar")]
    #[case("Audiência, prazo", "audiencia", "prazo")]
    #[case("", "Tutela", "Tutela")]
    #[case("urgente", "  ", "urgente")]
    #[case("urgente,liminar", "Penhora", "urgente, liminar, Penhora")]
    #[case("liminar, urgente, LIMINAR", "Liminar", "urgente")]
    fn toggle_term_in_list_adds_or_removes(
        #[case] csv: &str,
        #[case] term: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(toggle_term_in_list(csv, term), expected);
    }

    #[rstest]
    fn toggling_twice_restores_membership() {
        let added = toggle_term_in_list("urgente", "liminar");
        assert_eq!(toggle_term_in_list(&added, "liminar"), "urgente");
    }

    #[rstest]
    #[case(MatchMode::Substring, "prazo para contestacao", "testa", true)]
    #[case(MatchMode::Token, "prazo para contestacao", "testa", false)]
    #[case(MatchMode::Token, "pedido de tutela antecipada", "tutela antecipada", true)]
    #[case(MatchMode::Token, "pedido de tutela", "tutela antecipada", false)]
    #[case(MatchMode::Substring, "qualquer texto", "", false)]
    fn match_mode_controls_word_boundaries(
        #[case] mode: MatchMode,
        #[case] haystack: &str,
        #[case] term: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(mode.matches(haystack, term), expected);
    }

    #[rstest]
    fn contains_normalized_ignores_accents() {
        assert!(contains_normalized("Tribunal de Justiça", "JUSTICA"));
    }
}
