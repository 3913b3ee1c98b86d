use std::collections::HashSet;

use serenity::model::prelude::{ChannelId, ChannelType};

use crate::rules::MatchRule;

/// A channel the bot should make sure exists.
pub struct ChannelSpec {
    pub name: &'static str,
    pub kind: ChannelType,
}

/// Static bot configuration, built once at startup and read-only afterwards.
pub struct CleanupConfig {
    pub rules: Vec<MatchRule>,
    pub dry_run: bool,
    pub max_delete_per_run: usize,
    pub whitelist: HashSet<ChannelId>,
    pub default_channels: Vec<ChannelSpec>,
}

impl CleanupConfig {
    pub fn standard() -> CleanupConfig {
        CleanupConfig {
            rules: vec![
                MatchRule::contains("ticket"),
                MatchRule::contains("old"),
                MatchRule::contains("spam"),
                MatchRule::contains("temp"),
                MatchRule::starts_with("closed-"),
                MatchRule::starts_with("log-"),
            ],
            dry_run: false,
            max_delete_per_run: 50,
            // Channel ids exempt from cleanup, e.g. ChannelId(123456789012345678)
            whitelist: HashSet::new(),
            default_channels: vec![
                ChannelSpec { name: "📢┃announcements", kind: ChannelType::Text },
                ChannelSpec { name: "💬┃general", kind: ChannelType::Text },
                ChannelSpec { name: "🎫┃tickets", kind: ChannelType::Text },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_config_is_usable() {
        let config = CleanupConfig::standard();
        assert!(!config.rules.is_empty());
        assert!(config.max_delete_per_run > 0);
        assert!(!config.default_channels.is_empty());
    }

    #[test]
    fn default_channel_names_are_unique() {
        let config = CleanupConfig::standard();
        let mut names: Vec<&str> = config.default_channels.iter().map(|c| c.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), config.default_channels.len());
    }
}
