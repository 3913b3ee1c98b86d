use regex::Regex;

/// A single channel-name rule. `Contains` and `StartsWith` compare
/// case-insensitively; `Pattern` matches exactly as authored.
pub enum MatchRule {
    Contains(String),
    StartsWith(String),
    Pattern(Regex),
}

impl MatchRule {
    pub fn contains(text: &str) -> MatchRule {
        MatchRule::Contains(text.to_lowercase())
    }

    pub fn starts_with(text: &str) -> MatchRule {
        MatchRule::StartsWith(text.to_lowercase())
    }

    fn is_match(&self, name: &str) -> bool {
        match self {
            MatchRule::Contains(text) => name.to_lowercase().contains(text.as_str()),
            MatchRule::StartsWith(text) => name.to_lowercase().starts_with(text.as_str()),
            MatchRule::Pattern(pattern) => pattern.is_match(name),
        }
    }
}

/// True iff any rule matches the channel name.
pub fn matches(name: &str, rules: &[MatchRule]) -> bool {
    rules.iter().any(|rule| rule.is_match(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_ignores_case() {
        let rules = vec![MatchRule::contains("Temp")];
        assert!(matches("my-TEMP-channel", &rules));
        assert!(matches("temporary", &rules));
        assert!(!matches("general", &rules));
    }

    #[test]
    fn starts_with_ignores_case_but_stays_a_prefix() {
        let rules = vec![MatchRule::starts_with("old-")];
        assert!(matches("OLD-chat", &rules));
        assert!(!matches("newold-", &rules));
    }

    #[test]
    fn pattern_matches_as_authored() {
        let rules = vec![MatchRule::Pattern(Regex::new(r"^archive-\d+$").unwrap())];
        assert!(matches("archive-42", &rules));
        assert!(!matches("Archive-42", &rules));
        assert!(!matches("archive-", &rules));
    }

    #[test]
    fn any_rule_is_enough() {
        let rules = vec![
            MatchRule::contains("spam"),
            MatchRule::starts_with("closed-"),
        ];
        assert!(matches("closed-tickets", &rules));
        assert!(matches("the-spam-pit", &rules));
        assert!(!matches("announcements", &rules));
    }

    #[test]
    fn empty_rule_set_matches_nothing() {
        assert!(!matches("anything", &[]));
    }
}
