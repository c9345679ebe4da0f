//! Token-level email matching
//!
//! The analyzer's entity labels are not trusted for emails. Instead every
//! token is tested against a fixed pattern anchored at the token start: a
//! token that begins with an address is kept whole, while a token with any
//! leading character outside the pattern is dropped. Addresses split across
//! several tokens are missed.

use docsift_domain::Token;
use regex::Regex;

/// Address pattern, anchored at the token start
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Matches email-like tokens
#[derive(Debug, Clone)]
pub struct EmailMatcher {
    pattern: Regex,
}

impl EmailMatcher {
    /// Compile the address pattern
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(EMAIL_PATTERN)?,
        })
    }

    /// Whether the token starts with an address
    pub fn matches(&self, token: &str) -> bool {
        self.pattern.is_match(token)
    }

    /// Trimmed text of every matching token, in order
    pub fn collect<'a, I>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a Token>,
    {
        tokens
            .into_iter()
            .filter(|token| self.matches(&token.text))
            .map(|token| token.text.trim().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_from_start_not_full_match() {
        let matcher = EmailMatcher::new().unwrap();
        assert!(matcher.matches("test@example.com"));
        assert!(matcher.matches("test@example.com>"));
        assert!(!matcher.matches("<test@example.com"));
        assert!(!matcher.matches("test@localhost"));
        assert!(!matcher.matches("@example.com"));
    }

    #[test]
    fn test_collect_keeps_whole_token() {
        let matcher = EmailMatcher::new().unwrap();
        let tokens = vec![
            Token::new("mail", 0, 4),
            Token::new("a.b+c@mail.example.org;x", 5, 29),
            Token::new("mailto:x@y.com", 30, 44),
        ];
        assert_eq!(matcher.collect(&tokens), vec!["a.b+c@mail.example.org;x"]);
    }
}
