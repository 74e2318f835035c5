use std::path::Path;

use chrono::Local;
use wishwell_core::config::AppConfig;
use wishwell_core::remote::SupabaseIdeaStore;
use wishwell_core::services::IdeaSubmissionFlow;

use crate::commands::common::{open_preferences, resolve_idea_text};
use crate::error::CliError;

pub async fn run_submit(
    idea_parts: &[String],
    db_path: &Path,
    config: &AppConfig,
) -> Result<(), CliError> {
    let text = resolve_idea_text(idea_parts)?;

    let preferences = open_preferences(db_path).await?;
    let store = SupabaseIdeaStore::from_config(config)?;
    let flow = IdeaSubmissionFlow::new(store, preferences.notifier(), config.submit_timeout);

    let receipt = flow.submit(&text).await?;
    println!(
        "Your wish has been saved! 🎉 ({} characters, {})",
        receipt.chars,
        receipt.submitted_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
    );
    Ok(())
}
