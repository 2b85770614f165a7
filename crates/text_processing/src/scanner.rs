//! Number-sequence scanning
//!
//! Walks normalized tokens left to right, threading explicit state so every
//! step is independently testable. A multiplier word looks back at the last
//! emitted value and expands it in place; values outside the card range are
//! dropped, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use cardvoice_core::{CardNumber, CardQuantity, TranscriptParser, MAX_CARD_NUMBER, MIN_CARD_NUMBER};

use crate::compound::{match_compound, parse_single};
use crate::lexicon;
use crate::normalize;
use crate::pairs;

/// Largest multiplier a phrase like "42 times N" may apply.
pub const DEFAULT_MAX_MULTIPLIER: i64 = 50;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Parser configuration rejected at construction time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("card range {min}..={max} is inverted")]
    InvertedRange { min: i64, max: i64 },

    #[error("multiplier cap must be at least 1, got {0}")]
    MultiplierCapTooSmall(i64),
}

/// Spoken-number parser with configurable output gates.
///
/// Defaults match the dictation flow: card numbers `1..=9999`, multiplier
/// phrases capped at 50. Out-of-range values are silently not emitted.
#[derive(Debug, Clone)]
pub struct SpokenNumberParser {
    min_card: i64,
    max_card: i64,
    max_multiplier: i64,
}

impl Default for SpokenNumberParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SpokenNumberParser {
    pub fn new() -> Self {
        Self {
            min_card: MIN_CARD_NUMBER,
            max_card: MAX_CARD_NUMBER,
            max_multiplier: DEFAULT_MAX_MULTIPLIER,
        }
    }

    /// Override the range of emitted values.
    pub fn with_card_range(mut self, min: i64, max: i64) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvertedRange { min, max });
        }
        self.min_card = min;
        self.max_card = max;
        Ok(self)
    }

    /// Override the multiplier cap.
    pub fn with_max_multiplier(mut self, cap: i64) -> Result<Self, ConfigError> {
        if cap < 1 {
            return Err(ConfigError::MultiplierCapTooSmall(cap));
        }
        self.max_multiplier = cap;
        Ok(self)
    }

    /// Parse spoken text into an ordered list of card numbers,
    /// duplicates preserved.
    pub fn parse(&self, text: &str) -> Vec<CardNumber> {
        let tokens = normalize::tokenize(text);
        let mut state = ScanState::new();
        while state.step(&tokens, self) {}
        debug!(
            tokens = tokens.len(),
            numbers = state.output.len(),
            "transcript scan complete"
        );
        state.output
    }

    fn in_range(&self, v: i64) -> bool {
        (self.min_card..=self.max_card).contains(&v)
    }
}

impl TranscriptParser for SpokenNumberParser {
    fn parse_numbers(&self, text: &str) -> Vec<CardNumber> {
        self.parse(text)
    }

    fn parse_quantities(&self, text: &str) -> Vec<CardQuantity> {
        pairs::parse_card_quantities(text)
    }
}

/// Scanner state threaded through each step.
///
/// `last_value` is overwritten on every successful append (including digit
/// fallback appends) and is never cleared by skip words; it is consulted
/// only by the multiplier rule.
#[derive(Debug, Default)]
pub struct ScanState {
    pub pos: usize,
    pub last_value: Option<i64>,
    pub output: Vec<i64>,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process the token at `pos`. Returns false once input is exhausted.
    pub fn step(&mut self, tokens: &[String], cfg: &SpokenNumberParser) -> bool {
        let Some(token) = tokens.get(self.pos) else {
            return false;
        };

        // Filler words carry no information and never clear last_value.
        if lexicon::is_skip_word(token) {
            self.pos += 1;
            return true;
        }

        // Multiplier lookback: "42 times 3" expands the 42 already emitted.
        // Without a preceding number the keyword is an ordinary token.
        if lexicon::is_multiplier_word(token) {
            if let Some(last) = self.last_value {
                if let Some(m) = tokens.get(self.pos + 1).and_then(|t| parse_single(t)) {
                    if (1..=cfg.max_multiplier).contains(&m) {
                        trace!(card = last, multiplier = m, "applying multiplier phrase");
                        for _ in 1..m {
                            self.output.push(last);
                        }
                        self.pos += 2;
                        return true;
                    }
                }
                // Failed lookahead: drop the keyword only; the next token
                // is re-evaluated on its own.
                self.pos += 1;
                return true;
            }
        }

        // Compound number starting at this position.
        let (value, consumed) = match_compound(tokens, self.pos);
        if let Some(v) = value {
            if cfg.in_range(v) {
                self.output.push(v);
                self.last_value = Some(v);
                self.pos += consumed;
                return true;
            }
        }

        // Garbage tolerance: keep any embedded digit runs, drop the rest.
        for run in DIGIT_RUN.find_iter(token) {
            if let Ok(v) = run.as_str().parse::<i64>() {
                if cfg.in_range(v) {
                    self.output.push(v);
                    self.last_value = Some(v);
                }
            }
        }
        self.pos += 1;
        true
    }
}

/// Parse spoken text into an ordered list of card numbers with the default
/// gates. Total over all inputs; the worst case is an empty result.
pub fn parse_spoken_numbers(text: &str) -> Vec<CardNumber> {
    SpokenNumberParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_strings() {
        assert_eq!(parse_spoken_numbers("42 55 103"), vec![42, 55, 103]);
        assert_eq!(parse_spoken_numbers("1 2 3 4 5"), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_word_numbers() {
        assert_eq!(
            parse_spoken_numbers("one two three four five"),
            vec![1, 2, 3, 4, 5]
        );
        assert_eq!(parse_spoken_numbers("eleven twelve thirteen"), vec![11, 12, 13]);
    }

    #[test]
    fn test_compound_numbers() {
        assert_eq!(parse_spoken_numbers("twenty three forty two"), vec![23, 42]);
        assert_eq!(parse_spoken_numbers("one hundred"), vec![100]);
        assert_eq!(parse_spoken_numbers("one hundred fifty"), vec![150]);
        assert_eq!(parse_spoken_numbers("two hundred thirty five"), vec![235]);
        assert_eq!(parse_spoken_numbers("one hundred twenty three"), vec![123]);
        assert_eq!(parse_spoken_numbers("nine hundred ninety nine"), vec![999]);
    }

    #[test]
    fn test_mixed_words_and_digits() {
        assert_eq!(parse_spoken_numbers("42 fifty five 103"), vec![42, 55, 103]);
        assert_eq!(parse_spoken_numbers("one 2 three 4 five 6"), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_word_digit_compounds() {
        assert_eq!(parse_spoken_numbers("forty 3"), vec![43]);
        assert_eq!(parse_spoken_numbers("twenty 1"), vec![21]);
        assert_eq!(parse_spoken_numbers("ninety 9"), vec![99]);
        assert_eq!(parse_spoken_numbers("one hundred 5"), vec![105]);
        assert_eq!(parse_spoken_numbers("two hundred 12"), vec![212]);
        assert_eq!(parse_spoken_numbers("three hundred and 7"), vec![307]);
        assert_eq!(parse_spoken_numbers("three hundred forty 2"), vec![342]);
        assert_eq!(parse_spoken_numbers("forty 3 twenty 1"), vec![43, 21]);
    }

    #[test]
    fn test_duplicates_never_merge() {
        assert_eq!(parse_spoken_numbers("42 42 42"), vec![42, 42, 42]);
        assert_eq!(parse_spoken_numbers("1 1 1"), vec![1, 1, 1]);
        assert_eq!(parse_spoken_numbers("twenty twenty"), vec![20, 20]);
        assert_eq!(parse_spoken_numbers("twenty twenty twenty"), vec![20, 20, 20]);
    }

    #[test]
    fn test_multiplier_words() {
        assert_eq!(parse_spoken_numbers("42 times 3"), vec![42, 42, 42]);
        assert_eq!(parse_spoken_numbers("55 x 2"), vec![55, 55]);
        assert_eq!(parse_spoken_numbers("42 of 3"), vec![42, 42, 42]);
        assert_eq!(parse_spoken_numbers("307 quantity 2"), vec![307, 307]);
        assert_eq!(parse_spoken_numbers("307 stock 2"), vec![307, 307]);
        assert_eq!(parse_spoken_numbers("307 copies 3"), vec![307, 307, 307]);
        assert_eq!(parse_spoken_numbers("307 ex 2"), vec![307, 307]);
        assert_eq!(parse_spoken_numbers("42 times 3 55 103"), vec![42, 42, 42, 55, 103]);
    }

    #[test]
    fn test_multiplier_with_word_operands() {
        assert_eq!(parse_spoken_numbers("fifty count five"), vec![50; 5]);
        assert_eq!(parse_spoken_numbers("five count ten"), vec![5; 10]);
        assert_eq!(parse_spoken_numbers("one hundred count three"), vec![100, 100, 100]);
        assert_eq!(parse_spoken_numbers("fifty five count twenty"), vec![55; 20]);
    }

    #[test]
    fn test_multiplier_bounds() {
        assert_eq!(parse_spoken_numbers("42 times 50"), vec![42; 50]);
        // 51 fails the cap and is parsed as its own number
        assert_eq!(parse_spoken_numbers("42 times 51"), vec![42, 51]);
        assert_eq!(parse_spoken_numbers("42 times 0"), vec![42]);
        assert_eq!(parse_spoken_numbers("42 times 1"), vec![42]);
        assert_eq!(parse_spoken_numbers("100 count 100"), vec![100, 100]);
        assert_eq!(parse_spoken_numbers("9999 count 50"), vec![9999; 50]);
    }

    #[test]
    fn test_multiplier_without_preceding_number() {
        // "count" with no last value is an ordinary token; the 5 stands alone
        assert_eq!(parse_spoken_numbers("count 5"), vec![5]);
        assert_eq!(parse_spoken_numbers("of 5"), vec![5]);
        assert_eq!(parse_spoken_numbers("count"), Vec::<i64>::new());
        assert_eq!(parse_spoken_numbers("count count count"), Vec::<i64>::new());
    }

    #[test]
    fn test_multiplier_at_end_of_input() {
        assert_eq!(parse_spoken_numbers("42 count"), vec![42]);
    }

    // Chained multiplier keywords: the step policy is applied literally and
    // these outputs pin its deterministic result.
    #[test]
    fn test_chained_multipliers() {
        assert_eq!(parse_spoken_numbers("100 count count 5"), vec![100; 5]);
        assert_eq!(parse_spoken_numbers("100 count 5 count 3"), vec![100; 7]);
        assert_eq!(parse_spoken_numbers("42 count 3 times 2"), vec![42; 4]);
        assert_eq!(parse_spoken_numbers("42 times 3 count 2"), vec![42; 4]);
    }

    #[test]
    fn test_skip_words() {
        assert_eq!(parse_spoken_numbers("um 42 uh 55 like 103"), vec![42, 55, 103]);
        assert_eq!(
            parse_spoken_numbers("okay I have number 42 and 55 and number 103"),
            vec![42, 55, 103]
        );
        assert_eq!(parse_spoken_numbers("card 100 card 200 card 300"), vec![100, 200, 300]);
        assert_eq!(parse_spoken_numbers("number 42"), vec![42]);
        assert_eq!(parse_spoken_numbers("a hundred"), vec![100]);
        assert_eq!(parse_spoken_numbers("is that a one or a two"), vec![1, 2]);
        assert_eq!(parse_spoken_numbers("uh um like okay so yeah"), Vec::<i64>::new());
        assert_eq!(parse_spoken_numbers("the the the"), Vec::<i64>::new());
    }

    #[test]
    fn test_misheard_homophones() {
        assert_eq!(parse_spoken_numbers("won too tree for fife"), vec![1, 2, 3, 4, 5]);
        assert_eq!(parse_spoken_numbers("won for ate"), vec![1, 4, 8]);
        assert_eq!(parse_spoken_numbers("nein"), vec![9]);
        assert_eq!(parse_spoken_numbers("fourty two"), vec![42]);
        assert_eq!(parse_spoken_numbers("fitty five"), vec![55]);
    }

    #[test]
    fn test_and_merges_only_after_hundred() {
        assert_eq!(parse_spoken_numbers("five hundred and twelve"), vec![512]);
        assert_eq!(parse_spoken_numbers("three hundred and forty two"), vec![342]);
        assert_eq!(parse_spoken_numbers("two hundred and three"), vec![203]);
        // elsewhere "and" is plain filler
        assert_eq!(parse_spoken_numbers("five and twelve"), vec![5, 12]);
        assert_eq!(parse_spoken_numbers("and"), Vec::<i64>::new());
    }

    #[test]
    fn test_standalone_hundred() {
        assert_eq!(parse_spoken_numbers("hundred"), vec![100]);
        // tens never prefix "hundred"
        assert_eq!(parse_spoken_numbers("ten hundred"), vec![10, 100]);
        assert_eq!(parse_spoken_numbers("forty two hundred"), vec![42, 100]);
    }

    #[test]
    fn test_boundary_values() {
        assert_eq!(parse_spoken_numbers(""), Vec::<i64>::new());
        assert_eq!(parse_spoken_numbers("0"), Vec::<i64>::new());
        assert_eq!(parse_spoken_numbers("zero"), Vec::<i64>::new());
        assert_eq!(parse_spoken_numbers("1"), vec![1]);
        assert_eq!(parse_spoken_numbers("9999"), vec![9999]);
        assert_eq!(parse_spoken_numbers("10000"), Vec::<i64>::new());
        assert_eq!(parse_spoken_numbers("99999"), Vec::<i64>::new());
        assert_eq!(parse_spoken_numbers("9999 10000"), vec![9999]);
        assert_eq!(parse_spoken_numbers("0042"), vec![42]);
    }

    #[test]
    fn test_dashes_and_punctuation() {
        assert_eq!(parse_spoken_numbers("42-55-103"), vec![42, 55, 103]);
        assert_eq!(parse_spoken_numbers("-5"), vec![5]);
        assert_eq!(parse_spoken_numbers("--42--"), vec![42]);
        assert_eq!(parse_spoken_numbers("negative five"), vec![5]);
        assert_eq!(parse_spoken_numbers("42, 55. 103!"), vec![42, 55, 103]);
        assert_eq!(parse_spoken_numbers("42."), vec![42]);
        assert_eq!(parse_spoken_numbers("1,234"), vec![1, 234]);
    }

    #[test]
    fn test_garbage_tolerance() {
        assert_eq!(parse_spoken_numbers("...!!!"), Vec::<i64>::new());
        assert_eq!(parse_spoken_numbers("I have cards number uh"), Vec::<i64>::new());
        assert_eq!(parse_spoken_numbers("\u{e9}\u{e8}\u{ea}\u{eb}"), Vec::<i64>::new());
        assert_eq!(parse_spoken_numbers("42 \u{2603} 55"), vec![42, 55]);
        assert_eq!(parse_spoken_numbers("42\t55\n100"), vec![42, 55, 100]);
        assert_eq!(
            parse_spoken_numbers("the the the 42 the the the"),
            vec![42]
        );
        // merged digits beyond the card range contribute nothing
        assert_eq!(parse_spoken_numbers("4255103"), Vec::<i64>::new());
    }

    #[test]
    fn test_embedded_digit_runs() {
        assert_eq!(parse_spoken_numbers("abc42def"), vec![42]);
        assert_eq!(parse_spoken_numbers("x42y55z"), vec![42, 55]);
    }

    #[test]
    fn test_large_batches() {
        let text: Vec<String> = (1..=100).map(|i| i.to_string()).collect();
        let result = parse_spoken_numbers(&text.join(" "));
        assert_eq!(result.len(), 100);
        assert_eq!(result[0], 1);
        assert_eq!(result[99], 100);
    }

    #[test]
    fn test_step_positions() {
        let tokens = normalize::tokenize("um 42 times 3 banana");
        let cfg = SpokenNumberParser::new();
        let mut state = ScanState::new();

        assert!(state.step(&tokens, &cfg)); // "um": skipped
        assert_eq!((state.pos, state.last_value), (1, None));

        assert!(state.step(&tokens, &cfg)); // "42": emitted
        assert_eq!((state.pos, state.last_value), (2, Some(42)));
        assert_eq!(state.output, vec![42]);

        assert!(state.step(&tokens, &cfg)); // "times 3": expands
        assert_eq!(state.pos, 4);
        assert_eq!(state.output, vec![42, 42, 42]);

        assert!(state.step(&tokens, &cfg)); // "banana": dropped
        assert_eq!(state.pos, 5);

        assert!(!state.step(&tokens, &cfg)); // exhausted
        assert_eq!(state.output, vec![42, 42, 42]);
    }

    #[test]
    fn test_skip_words_do_not_clear_last_value() {
        assert_eq!(parse_spoken_numbers("42 and the um times 3"), vec![42, 42, 42]);
    }

    #[test]
    fn test_custom_card_range() {
        let parser = SpokenNumberParser::new().with_card_range(1, 100).unwrap();
        assert_eq!(parser.parse("42 101 100"), vec![42, 100]);
    }

    #[test]
    fn test_custom_multiplier_cap() {
        let parser = SpokenNumberParser::new().with_max_multiplier(3).unwrap();
        // 4 fails the cap and is parsed as its own number
        assert_eq!(parser.parse("42 times 4"), vec![42, 4]);
        assert_eq!(parser.parse("42 times 3"), vec![42, 42, 42]);
    }

    #[test]
    fn test_config_validation() {
        let err = SpokenNumberParser::new().with_card_range(10, 1).unwrap_err();
        assert_eq!(err, ConfigError::InvertedRange { min: 10, max: 1 });

        let err = SpokenNumberParser::new().with_max_multiplier(0).unwrap_err();
        assert_eq!(err, ConfigError::MultiplierCapTooSmall(0));
    }
}
