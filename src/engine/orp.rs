//! Optimal recognition point calculation.
//!
//! RSVP displays every word at a fixed screen location; the eye fixates a
//! point slightly left of center for fastest recognition. The index table
//! below carries empirically tuned reading-research constants (the Spritz
//! method) and must not be "simplified".

use unicode_segmentation::UnicodeSegmentation;

/// A word split around its fixation character.
///
/// `before`, `fixation` and `after` are slices of the original word, so
/// concatenating them always reproduces it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSplit<'a> {
    pub before: &'a str,
    pub fixation: &'a str,
    pub after: &'a str,
}

/// Fixation index for a word of the given character length.
///
/// - 1–3 chars → 0
/// - 4–5 chars → 1
/// - 6–8 chars → 2
/// - 9–11 chars → 3
/// - 12–13 chars → 4
/// - 14+ chars → floor(length × 0.35)
pub fn orp_index(word_length: usize) -> usize {
    match word_length {
        0..=3 => 0,
        4..=5 => 1,
        6..=8 => 2,
        9..=11 => 3,
        12..=13 => 4,
        len => (len as f64 * 0.35).floor() as usize,
    }
}

/// Splits a word at its fixation point.
///
/// Characters are Unicode grapheme clusters so the fixation is always one
/// whole user-visible character. An out-of-range index (only possible for
/// the empty word, which the tokenizer never produces) yields an empty
/// fixation.
pub fn split_word(word: &str) -> WordSplit<'_> {
    let graphemes: Vec<(usize, &str)> = word.grapheme_indices(true).collect();
    let index = orp_index(graphemes.len());

    match graphemes.get(index) {
        Some(&(start, grapheme)) => {
            let end = start + grapheme.len();
            WordSplit {
                before: &word[..start],
                fixation: &word[start..end],
                after: &word[end..],
            }
        }
        None => WordSplit {
            before: word,
            fixation: "",
            after: "",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orp_index_single_char() {
        assert_eq!(orp_index(1), 0);
    }

    #[test]
    fn test_orp_index_two_to_three() {
        assert_eq!(orp_index(2), 0);
        assert_eq!(orp_index(3), 0);
    }

    #[test]
    fn test_orp_index_four_to_five() {
        assert_eq!(orp_index(4), 1);
        assert_eq!(orp_index(5), 1);
    }

    #[test]
    fn test_orp_index_six_to_eight() {
        assert_eq!(orp_index(6), 2);
        assert_eq!(orp_index(7), 2);
        assert_eq!(orp_index(8), 2);
    }

    #[test]
    fn test_orp_index_nine_to_eleven() {
        assert_eq!(orp_index(9), 3);
        assert_eq!(orp_index(10), 3);
        assert_eq!(orp_index(11), 3);
    }

    #[test]
    fn test_orp_index_twelve_to_thirteen() {
        assert_eq!(orp_index(12), 4);
        assert_eq!(orp_index(13), 4);
    }

    #[test]
    fn test_orp_index_fourteen_plus_is_35_percent() {
        assert_eq!(orp_index(14), 4); // floor(14 * 0.35) = 4
        assert_eq!(orp_index(17), 5); // floor(17 * 0.35) = 5
        assert_eq!(orp_index(20), 7); // floor(20 * 0.35) = 7
    }

    #[test]
    fn test_split_word_short() {
        let split = split_word("cat");
        assert_eq!(split.before, "");
        assert_eq!(split.fixation, "c");
        assert_eq!(split.after, "at");
    }

    #[test]
    fn test_split_word_medium() {
        let split = split_word("reading");
        assert_eq!(split.before, "re");
        assert_eq!(split.fixation, "a");
        assert_eq!(split.after, "ding");
    }

    #[test]
    fn test_split_word_single_char() {
        let split = split_word("I");
        assert_eq!(split.before, "");
        assert_eq!(split.fixation, "I");
        assert_eq!(split.after, "");
    }

    #[test]
    fn test_split_word_empty_has_empty_fixation() {
        let split = split_word("");
        assert_eq!(split.before, "");
        assert_eq!(split.fixation, "");
        assert_eq!(split.after, "");
    }

    #[test]
    fn test_split_is_lossless() {
        for word in [
            "a",
            "to",
            "cat",
            "word",
            "hello",
            "running.",
            "extraordinary",
            "antidisestablishmentarianism",
            "caf\u{e9}-au-lait",
            "\u{1f600}yes\u{1f600}",
        ] {
            let split = split_word(word);
            let rejoined = format!("{}{}{}", split.before, split.fixation, split.after);
            assert_eq!(rejoined, word, "split of {:?} must be lossless", word);
        }
    }

    #[test]
    fn test_split_multibyte_fixation_is_whole_grapheme() {
        // 4 graphemes -> fixation index 1, which is the accented char.
        let split = split_word("c\u{e1}f\u{e9}");
        assert_eq!(split.before, "c");
        assert_eq!(split.fixation, "\u{e1}");
        assert_eq!(split.after, "f\u{e9}");
    }
}
