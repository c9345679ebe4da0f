//! Rule-based sentence segmentation
//!
//! A sentence ends at `.`, `!` or `?` (plus trailing closing quotes and
//! brackets) when followed by whitespace and a character that can open a new
//! sentence, or at the end of the text. Blank lines always end a sentence.
//! Returned spans never include surrounding whitespace.

/// Abbreviations whose trailing period does not end a sentence (lowercase, no final dot)
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "e.g", "i.e", "inc", "ltd", "co",
    "corp", "no", "fig", "approx", "dept", "est", "u.s", "jan", "feb", "mar", "apr", "jun", "jul",
    "aug", "sep", "sept", "oct", "nov", "dec", "mon", "tue", "tues", "wed", "thu", "thur",
    "thurs", "fri", "sat", "sun",
];

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '\u{201D}' | '\u{2019}')
}

fn opens_sentence(c: char) -> bool {
    c.is_uppercase()
        || c.is_ascii_digit()
        || matches!(c, '"' | '\'' | '(' | '[' | '\u{201C}' | '\u{2018}')
}

/// Words that commonly open a sentence (lowercase)
const SENTENCE_OPENERS: &[&str] = &[
    "a", "after", "all", "also", "an", "and", "as", "at", "before", "but", "for", "he", "her",
    "his", "how", "however", "i", "if", "in", "it", "its", "my", "no", "on", "one", "our",
    "please", "see", "she", "so", "some", "that", "the", "their", "then", "there", "these",
    "they", "this", "those", "to", "we", "what", "when", "where", "while", "who", "why", "yes",
    "you",
];

/// Trailing run of letters and dots in `text`
fn last_word(text: &str) -> &str {
    text.rsplit(|c: char| !(c.is_alphabetic() || c == '.'))
        .next()
        .unwrap_or("")
}

/// A single capital followed by a period, such as "J."
fn is_initial_token(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(letter), Some('.'), None) if letter.is_uppercase()
    )
}

/// Whether a lone capital `letter` before a period reads as a name initial
///
/// "I" is always the pronoun. Otherwise the letter is an initial when it sits
/// in a run of initials ("J. R. Smith") or the next word is capitalized and
/// not a usual sentence opener ("J. Smith" but not "plan B. It worked").
fn is_initial(letter: char, preceding: &str, after: &str) -> bool {
    if !letter.is_uppercase() || letter == 'I' {
        return false;
    }

    if is_initial_token(last_word(preceding.trim_end())) {
        return true;
    }

    let next = after.split_whitespace().next().unwrap_or("");
    if is_initial_token(next) {
        return true;
    }

    let next_word = next.trim_matches(|c: char| !c.is_alphanumeric());
    next_word.chars().next().is_some_and(char::is_uppercase)
        && !SENTENCE_OPENERS.contains(&next_word.to_lowercase().as_str())
}

/// Whether the word ending right before a single period is an abbreviation or initial
///
/// `before` is the sentence text up to the period and `after` the text
/// following it.
fn ends_with_abbreviation(before: &str, after: &str) -> bool {
    let word = last_word(before);

    let mut chars = word.chars();
    if let (Some(only), None) = (chars.next(), chars.next()) {
        return is_initial(only, &before[..before.len() - word.len()], after);
    }

    let lowered = word.to_lowercase();
    ABBREVIATIONS.contains(&lowered.as_str())
}

/// Whether the newline at `index` starts a blank line
fn is_paragraph_break(chars: &[(usize, char)], index: usize) -> bool {
    chars[index + 1..]
        .iter()
        .map(|&(_, c)| c)
        .take_while(|c| c.is_whitespace())
        .any(|c| c == '\n')
}

fn byte_at(chars: &[(usize, char)], index: usize, len: usize) -> usize {
    chars.get(index).map_or(len, |&(pos, _)| pos)
}

/// Split `text` into sentence byte ranges in document order
pub fn split_sentences(text: &str) -> Vec<(usize, usize)> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    let mut i = 0;

    let close = |spans: &mut Vec<(usize, usize)>, from: usize, to: usize| {
        let trimmed = text[from..to].trim_end();
        if !trimmed.is_empty() {
            spans.push((from, from + trimmed.len()));
        }
    };

    while i < chars.len() {
        let (pos, c) = chars[i];

        let sentence_start = match start {
            Some(s) => s,
            None if c.is_whitespace() => {
                i += 1;
                continue;
            }
            None => {
                start = Some(pos);
                pos
            }
        };

        if is_terminal(c) {
            let mut j = i + 1;
            while j < chars.len() && (is_terminal(chars[j].1) || is_closing(chars[j].1)) {
                j += 1;
            }
            let end = byte_at(&chars, j, text.len());

            let mut k = j;
            while k < chars.len() && chars[k].1.is_whitespace() {
                k += 1;
            }

            let single_period = c == '.' && j == i + 1;
            let boundary = k == chars.len()
                || (k > j
                    && opens_sentence(chars[k].1)
                    && !(single_period
                        && ends_with_abbreviation(&text[sentence_start..pos], &text[end..])));

            if boundary {
                close(&mut spans, sentence_start, end);
                start = None;
                i = k;
            } else {
                i = j;
            }
            continue;
        }

        if c == '\n' && is_paragraph_break(&chars, i) {
            close(&mut spans, sentence_start, pos);
            start = None;
        }
        i += 1;
    }

    if let Some(s) = start {
        close(&mut spans, s, text.len());
    }

    spans
}
