use log::{error, info};
use serenity::http::Http;
use serenity::model::prelude::ChannelId;
use string_builder::Builder;

use crate::config::CleanupConfig;
use crate::rules;

/// Channels selected for deletion, in ascending id order, plus how many
/// whitelisted channels were passed over. Computed without touching the API
/// so the selection semantics stay testable.
pub struct CleanupPlan {
    pub targets: Vec<(ChannelId, String)>,
    pub skipped: usize,
}

pub struct CleanupReport {
    pub dry_run: bool,
    pub matched: Vec<String>,
    pub skipped: usize,
    pub deleted: usize,
    pub failed: usize,
}

/// Select the channels a cleanup run would delete. Whitelisted channels count
/// as skipped; the scan stops once `max_delete_per_run` matches are found,
/// whether or not this run will actually delete anything.
pub fn plan(mut channels: Vec<(ChannelId, String)>, config: &CleanupConfig) -> CleanupPlan {
    channels.sort_by_key(|(id, _)| *id);

    let mut targets = Vec::new();
    let mut skipped = 0;
    for (id, name) in channels {
        if targets.len() >= config.max_delete_per_run {
            break;
        }
        if config.whitelist.contains(&id) {
            skipped += 1;
            continue;
        }
        if rules::matches(&name, &config.rules) {
            targets.push((id, name));
        }
    }

    CleanupPlan { targets, skipped }
}

/// Carry out a plan. Deletions are issued one at a time; a failed delete is
/// logged and counted, and the rest of the batch still runs.
pub async fn execute(http: &Http, plan: CleanupPlan, dry_run: bool) -> CleanupReport {
    let mut deleted = 0;
    let mut failed = 0;

    for (id, name) in &plan.targets {
        if dry_run {
            info!("[dry run] would delete: {}", name);
            continue;
        }
        match id.delete(http).await {
            Ok(_) => deleted += 1,
            Err(error) => {
                error!("Failed to delete channel {}: {}", name, error);
                failed += 1;
            }
        }
    }

    CleanupReport {
        dry_run,
        matched: plan.targets.into_iter().map(|(_, name)| name).collect(),
        skipped: plan.skipped,
        deleted,
        failed,
    }
}

impl CleanupReport {
    pub fn render(&self) -> String {
        let mut builder = Builder::default();
        if self.dry_run {
            builder.append("Cleanup preview, nothing was deleted.\n");
        } else {
            builder.append("Cleanup done.\n");
        }
        builder.append(format!("Matched: **{}**\n", self.matched.len()));
        builder.append(format!("Deleted: **{}**\n", self.deleted));
        builder.append(format!("Skipped: **{}**", self.skipped));
        for name in &self.matched {
            builder.append(format!("\n- {}", name));
        }
        builder.string().unwrap_or_default()
    }
}
