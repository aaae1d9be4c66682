//! Per-word display duration.
//!
//! All adjustments are multiplicative and applied in a fixed order so the
//! result is deterministic for identical inputs:
//!
//! `delay = base(wpm) × (length multiplier × digit bonus) × punctuation multiplier`

use std::time::Duration;

use super::config::TimingConfig;
use super::token::{PunctuationClass, Token};

/// Raw per-word budget at a given speed, in milliseconds.
pub fn base_delay_ms(wpm: u32) -> f64 {
    60_000.0 / wpm.max(1) as f64
}

/// Display duration for one word, in milliseconds.
///
/// The length ladder is deliberately non-compounding: a word past the
/// very-long threshold gets only the very-long multiplier. The digit bonus
/// scales the length multiplier, not the final product, so it combines with
/// punctuation the same way a longer word would.
pub fn word_delay_ms(word: &Token, wpm: u32, config: &TimingConfig) -> f64 {
    let base = base_delay_ms(wpm);

    let len = word.char_len();
    let mut length_multiplier = if len > config.very_long_word_threshold {
        config.very_long_word_multiplier
    } else if len > config.long_word_threshold {
        config.long_word_multiplier
    } else {
        1.0
    };

    if word.has_digit() {
        length_multiplier *= config.digit_multiplier;
    }

    let punctuation_multiplier = match word.punctuation_class() {
        PunctuationClass::SentenceEnd => config.sentence_end_multiplier,
        PunctuationClass::ClauseSeparator => config.clause_multiplier,
        PunctuationClass::DashOrParen => config.dash_paren_multiplier,
        PunctuationClass::Plain => 1.0,
    };

    base * length_multiplier * punctuation_multiplier
}

/// `word_delay_ms` as a `Duration` for the step scheduler.
pub fn word_delay(word: &Token, wpm: u32, config: &TimingConfig) -> Duration {
    Duration::from_secs_f64(word_delay_ms(word, wpm, config) / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delay(word: &str, wpm: u32) -> f64 {
        word_delay_ms(&Token::new(word), wpm, &TimingConfig::default())
    }

    #[test]
    fn test_base_delay_300_wpm() {
        assert_eq!(base_delay_ms(300), 200.0);
    }

    #[test]
    fn test_base_delay_never_divides_by_zero() {
        assert!(base_delay_ms(0).is_finite());
    }

    #[test]
    fn test_plain_short_word() {
        // "cat": 3 chars, no punctuation, no digits.
        assert_eq!(delay("cat", 300), 200.0);
    }

    #[test]
    fn test_sentence_end_multiplier() {
        // "running." is 8 chars, so no length bonus; trailing period 2.5x.
        assert_eq!(delay("running.", 300), 500.0);
    }

    #[test]
    fn test_clause_separator_multiplier() {
        assert_eq!(delay("first,", 300), 200.0 * 1.8);
    }

    #[test]
    fn test_dash_anywhere_multiplier() {
        assert_eq!(delay("well-knwn", 300), 200.0 * 1.3 * 1.3);
        assert_eq!(delay("(aside", 300), 200.0 * 1.3);
    }

    #[test]
    fn test_long_word_multiplier() {
        // 9 chars crosses the >8 threshold.
        assert_eq!(delay("wonderful", 300), 200.0 * 1.3);
    }

    #[test]
    fn test_very_long_word_gets_single_multiplier() {
        // 13 chars: only the >12 branch applies, never 1.3 × 1.5.
        assert_eq!(delay("extraordinary", 300), 300.0);
    }

    #[test]
    fn test_digit_bonus_scales_length_multiplier() {
        // "1,234": 5 chars (1.0), digit bonus 1.5, trailing char is a digit
        // so no punctuation multiplier.
        assert_eq!(delay("1,234", 300), 300.0);
    }

    #[test]
    fn test_digit_bonus_combines_with_punctuation() {
        // "42," -> length 1.0 × digit 1.5, clause 1.8.
        assert_eq!(delay("42,", 300), 200.0 * 1.5 * 1.8);
    }

    #[test]
    fn test_digit_bonus_compounds_with_long_word() {
        // 10 chars with a digit: (1.3 × 1.5).
        assert_eq!(delay("abcdefghi1", 300), 200.0 * 1.3 * 1.5);
    }

    #[test]
    fn test_trailing_sentence_end_beats_inner_dash() {
        assert_eq!(delay("one-off.", 300), 200.0 * 2.5);
    }

    #[test]
    fn test_word_delay_duration_matches_ms() {
        let token = Token::new("cat");
        let d = word_delay(&token, 300, &TimingConfig::default());
        assert_eq!(d, Duration::from_millis(200));
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        assert_eq!(delay("repeatable,", 451), delay("repeatable,", 451));
    }
}
