//! Transcript normalization
//!
//! Dash-family characters become spaces before tokenization: "-5" must not
//! read as a negative number, and "forty-two" must split so the compound
//! grammar can recombine it. Sentence punctuation is transcription noise
//! and is dropped the same way.

/// Lowercase the text and replace dashes, sentence punctuation, and
/// whitespace runs with single spaces.
pub fn clean(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        let c = match c {
            '-' | '\u{2013}' | '\u{2014}' => ' ',
            ',' | '.' | '!' | '?' | ';' | ':' => ' ',
            c if c.is_whitespace() => ' ',
            c => c,
        };
        if c == ' ' && (out.is_empty() || out.ends_with(' ')) {
            continue;
        }
        out.push(c);
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Split cleaned text into tokens. Never yields an empty token.
pub fn tokenize(text: &str) -> Vec<String> {
    clean(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
