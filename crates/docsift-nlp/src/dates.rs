//! Pattern-based recognition of date and time mentions
//!
//! Every pattern is run over the whole text. Overlapping matches are resolved
//! by keeping the earliest match, then the longest. Recognized mentions are
//! not validated or normalized.

use crate::NlpError;
use docsift_domain::{EntityLabel, EntitySpan};
use regex::Regex;

const MONTH: &str = r"(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)";

// "May" is left out of bare month names to avoid matching the modal verb
const MONTH_FULL: &str = r"(?:January|February|March|April|June|July|August|September|October|November|December)";

const WEEKDAY: &str = r"(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)s?";

const ORDINAL: &str = r"(?:st|nd|rd|th)?";

const COUNT: &str = r"(?:\d+|(?i:a|one|two|three|four|five|six|seven|eight|nine|ten|few|several))";

/// One recognition rule
struct Rule {
    label: &'static str,
    pattern: Regex,
}

/// Recognizes DATE and TIME mentions
pub struct DateRecognizer {
    rules: Vec<Rule>,
}

impl DateRecognizer {
    /// Compile the recognition rules
    pub fn new() -> Result<Self, NlpError> {
        let date_patterns = [
            // January 1, 2024 / Jan. 5 / March 3rd
            format!(r"\b{MONTH}\.?\s+\d{{1,2}}{ORDINAL}\b(?:,?\s+\d{{4}}\b)?"),
            // 1 January 2024 / 3rd of March
            format!(r"\b\d{{1,2}}{ORDINAL}\s+(?:of\s+)?{MONTH}\b(?:\.?,?\s+\d{{4}}\b)?"),
            // March 2024
            format!(r"\b{MONTH}\.?,?\s+\d{{4}}\b"),
            // June
            format!(r"\b{MONTH_FULL}\b"),
            // 2024-01-15
            r"\b\d{4}-\d{2}-\d{2}\b".to_string(),
            // 01/15/2024, 1/5/24
            r"\b\d{1,2}/\d{1,2}/\d{2,4}\b".to_string(),
            // 15.01.2024 (dotted forms need a full year so "2.0.12" stays a version)
            r"\b\d{1,2}\.\d{1,2}\.\d{4}\b".to_string(),
            // last Friday / Monday
            format!(r"\b(?:(?i:last|next|this)\s+)?{WEEKDAY}\b"),
            // today / yesterday / tomorrow
            r"\b(?i:today|yesterday|tomorrow)\b".to_string(),
            // last week / next month / this year
            r"\b(?i:(?:last|next|this|past|coming)\s+(?:week|weekend|month|quarter|year|decade))\b"
                .to_string(),
            // two days ago / 3 years ago
            format!(r"\b{COUNT}\s+(?i:days?|weeks?|months?|years?)\s+(?i:ago)\b"),
            // the 1990s
            r"\b(?:19|20)\d0s\b".to_string(),
            // in 2024 / since 1999 (only the year is kept)
            r"\b(?i:in|since|by|during|until)\s+((?:19|20)\d{2})\b".to_string(),
        ];

        let time_patterns = [
            // 3:30 pm / 14:00
            r"\b\d{1,2}:\d{2}(?:\s*(?i:[ap]m\b|[ap]\.m\.))?".to_string(),
            // 3pm / 11 a.m.
            r"\b\d{1,2}\s*(?i:[ap]m\b|[ap]\.m\.)".to_string(),
        ];

        let mut rules = Vec::with_capacity(date_patterns.len() + time_patterns.len());
        for (label, patterns) in [("DATE", &date_patterns[..]), ("TIME", &time_patterns[..])] {
            for pattern in patterns {
                let pattern = Regex::new(pattern)
                    .map_err(|e| NlpError::ModelNotAvailable(format!("invalid rule: {}", e)))?;
                rules.push(Rule { label, pattern });
            }
        }

        Ok(Self { rules })
    }

    /// Find date and time mentions in `text`, ordered by start offset
    pub fn recognize(&self, text: &str) -> Vec<EntitySpan> {
        let mut candidates: Vec<(usize, usize, &'static str)> = Vec::new();

        for rule in &self.rules {
            for captures in rule.pattern.captures_iter(text) {
                // Prefer the first capture group when the rule has one
                let m = captures.get(1).or_else(|| captures.get(0));
                if let Some(m) = m {
                    candidates.push((m.start(), m.end(), rule.label));
                }
            }
        }

        candidates.sort_by(|a, b| a.0.cmp(&b.0).then((b.1 - b.0).cmp(&(a.1 - a.0))));

        let mut entities = Vec::new();
        let mut last_end = 0;
        for (start, end, label) in candidates {
            if start < last_end {
                continue;
            }
            entities.push(EntitySpan::new(
                &text[start..end],
                EntityLabel::from_label(label),
                start,
                end,
            ));
            last_end = end;
        }

        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(text: &str) -> Vec<String> {
        DateRecognizer::new()
            .unwrap()
            .recognize(text)
            .into_iter()
            .filter(|e| e.is_date())
            .map(|e| e.text)
            .collect()
    }

    #[test]
    fn test_month_day_year() {
        assert_eq!(dates("Due January 1, 2024."), vec!["January 1, 2024"]);
        assert_eq!(dates("Due Jan. 5 at noon"), vec!["Jan. 5"]);
        assert_eq!(dates("On March 3rd we met"), vec!["March 3rd"]);
    }

    #[test]
    fn test_day_month_year() {
        assert_eq!(dates("Signed 1 January 2024 here"), vec!["1 January 2024"]);
        assert_eq!(dates("the 3rd of March"), vec!["3rd of March"]);
    }

    #[test]
    fn test_month_year_and_bare_month() {
        assert_eq!(dates("Since March 2024 sales rose"), vec!["March 2024"]);
        assert_eq!(dates("See you in June"), vec!["June"]);
    }

    #[test]
    fn test_may_as_verb_is_not_a_date() {
        assert!(dates("You may leave now").is_empty());
        assert!(dates("May I help?").is_empty());
        assert_eq!(dates("Opened May 4, 2020"), vec!["May 4, 2020"]);
    }

    #[test]
    fn test_numeric_dates() {
        assert_eq!(dates("Filed 2024-01-15."), vec!["2024-01-15"]);
        assert_eq!(dates("Filed 01/15/2024."), vec!["01/15/2024"]);
        assert_eq!(dates("Filed 15.01.2024 here"), vec!["15.01.2024"]);
    }

    #[test]
    fn test_version_strings_are_not_dates() {
        assert!(dates("Upgrade to 2.0.12 now").is_empty());
        assert!(dates("Requires lib 1.2.3 or later").is_empty());
        assert_eq!(dates("Released 1/5/24."), vec!["1/5/24"]);
    }

    #[test]
    fn test_relative_dates() {
        assert_eq!(dates("Call me tomorrow"), vec!["tomorrow"]);
        assert_eq!(dates("We shipped last week"), vec!["last week"]);
        assert_eq!(dates("It closed two days ago"), vec!["two days ago"]);
        assert_eq!(dates("See you next Friday"), vec!["next Friday"]);
    }

    #[test]
    fn test_years_after_prepositions() {
        assert_eq!(dates("Founded in 1999 by Ann"), vec!["1999"]);
        assert_eq!(dates("Open until 2030 only"), vec!["2030"]);
        assert!(dates("Room 2024 is free").is_empty());
        assert!(dates("Built after 1999 mostly").is_empty());
        assert_eq!(dates("Music of the 1990s"), vec!["1990s"]);
    }

    #[test]
    fn test_times_are_not_dates() {
        let recognizer = DateRecognizer::new().unwrap();
        let entities = recognizer.recognize("Meet at 3:30 pm on Monday");

        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].text, "3:30 pm");
        assert_eq!(entities[0].label, EntityLabel::Other("TIME".to_string()));
        assert_eq!(entities[1].text, "Monday");
        assert!(entities[1].is_date());
    }

    #[test]
    fn test_offsets_and_order() {
        let text = "From 2020-01-01 to 2021-06-30.";
        let entities = DateRecognizer::new().unwrap().recognize(text);
        assert_eq!(entities.len(), 2);
        assert_eq!(&text[entities[0].start..entities[0].end], "2020-01-01");
        assert!(entities[0].start < entities[1].start);
    }

    #[test]
    fn test_no_dates() {
        assert!(dates("Nothing to see here.").is_empty());
        assert!(dates("").is_empty());
    }
}
