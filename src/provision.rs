use log::error;
use serenity::http::Http;
use serenity::model::prelude::GuildId;

use crate::config::ChannelSpec;

/// The subset of `desired` with no existing channel of the exact same name.
pub fn missing<'a>(desired: &'a [ChannelSpec], existing: &[String]) -> Vec<&'a ChannelSpec> {
    desired
        .iter()
        .filter(|spec| !existing.iter().any(|name| name == spec.name))
        .collect()
}

/// Create every missing channel, one request at a time. Failures are logged
/// per channel and do not stop the batch. Returns how many were created.
pub async fn provision(
    http: &Http,
    guild_id: GuildId,
    desired: &[ChannelSpec],
    existing: &[String],
) -> usize {
    let mut created = 0;

    for spec in missing(desired, existing) {
        let result = guild_id
            .create_channel(http, |channel| channel.name(spec.name).kind(spec.kind))
            .await;
        match result {
            Ok(_) => created += 1,
            Err(error) => error!("Failed to create channel {}: {}", spec.name, error),
        }
    }

    created
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::model::prelude::ChannelType;

    fn desired() -> Vec<ChannelSpec> {
        vec![
            ChannelSpec { name: "announcements", kind: ChannelType::Text },
            ChannelSpec { name: "general", kind: ChannelType::Text },
        ]
    }

    #[test]
    fn only_absent_names_are_missing() {
        let specs = desired();
        let existing = vec!["general".to_string(), "off-topic".to_string()];
        let todo = missing(&specs, &existing);
        assert_eq!(todo.len(), 1);
        assert_eq!(todo[0].name, "announcements");
    }

    #[test]
    fn name_comparison_is_exact() {
        let specs = desired();
        let existing = vec!["General".to_string(), "general-2".to_string()];
        assert_eq!(missing(&specs, &existing).len(), 2);
    }

    #[test]
    fn second_run_has_nothing_left_to_create() {
        let specs = desired();
        let after_first_run: Vec<String> =
            specs.iter().map(|spec| spec.name.to_string()).collect();
        assert!(missing(&specs, &after_first_run).is_empty());
    }
}
