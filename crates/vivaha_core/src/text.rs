//! Pure text helpers for the dictation input path.
//!
//! Browser speech-to-text produces run-on, unevenly spaced fragments; this
//! module cleans them up before they land in a form field. No domain-store
//! coupling.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Refines raw dictation output into presentable text.
///
/// Rules:
/// - Whitespace runs collapse to single spaces; leading/trailing whitespace
///   is trimmed.
/// - The first letter of the text and of each sentence (after `.`, `!`,
///   `?`) is uppercased.
pub fn refine_dictation(raw: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(raw, " ");
    let trimmed = collapsed.trim();

    let mut refined = String::with_capacity(trimmed.len());
    let mut at_sentence_start = true;
    for ch in trimmed.chars() {
        if at_sentence_start && ch.is_alphabetic() {
            refined.extend(ch.to_uppercase());
            at_sentence_start = false;
            continue;
        }
        if matches!(ch, '.' | '!' | '?') {
            at_sentence_start = true;
        }
        refined.push(ch);
    }
    refined
}

#[cfg(test)]
mod tests {
    use super::refine_dictation;

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(
            refine_dictation("  book   the\tband \n tomorrow  "),
            "Book the band tomorrow"
        );
    }

    #[test]
    fn capitalizes_each_sentence() {
        assert_eq!(
            refine_dictation("call the caterer. confirm the menu! send deposit? yes"),
            "Call the caterer. Confirm the menu! Send deposit? Yes"
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(refine_dictation("   "), "");
    }
}
