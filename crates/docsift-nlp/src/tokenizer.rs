//! Whitespace tokenizer with punctuation splitting
//!
//! Text is split on whitespace. From each word, leading opening punctuation
//! and trailing closing punctuation are split off as separate one-character
//! tokens. Punctuation inside a word (`a.b@example.com`, `3:30`, `don't`) is
//! never split.

use docsift_domain::Token;

const PREFIXES: &[char] = &['(', '[', '{', '"', '\'', '\u{201C}', '\u{2018}'];

const SUFFIXES: &[char] = &[
    '.', ',', ';', ':', '!', '?', ')', ']', '}', '"', '\'', '\u{201D}', '\u{2019}',
];

/// Byte ranges of maximal non-whitespace runs
fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;

    for (pos, c) in text.char_indices() {
        match (start, c.is_whitespace()) {
            (None, false) => start = Some(pos),
            (Some(s), true) => {
                spans.push((s, pos));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }

    spans
}

/// Tokenize `text` into tokens with byte offsets
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (word_start, word_end) in word_spans(text) {
        let mut lo = word_start;
        let mut hi = word_end;
        let mut suffixes = Vec::new();

        while let Some(c) = text[lo..hi].chars().next() {
            if !PREFIXES.contains(&c) || hi - lo == c.len_utf8() {
                break;
            }
            tokens.push(Token::new(c.to_string(), lo, lo + c.len_utf8()));
            lo += c.len_utf8();
        }

        while let Some(c) = text[lo..hi].chars().next_back() {
            if !SUFFIXES.contains(&c) || hi - lo == c.len_utf8() {
                break;
            }
            suffixes.push(Token::new(c.to_string(), hi - c.len_utf8(), hi));
            hi -= c.len_utf8();
        }

        tokens.push(Token::new(&text[lo..hi], lo, hi));
        tokens.extend(suffixes.into_iter().rev());
    }

    tokens
}
