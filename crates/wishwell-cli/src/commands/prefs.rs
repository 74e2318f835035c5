use std::path::Path;

use crate::commands::common::{format_preferences, open_preferences, preferences_view};
use crate::error::CliError;

pub async fn run_prefs(as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let preferences = open_preferences(db_path).await?;
    let view = preferences_view(preferences.preferences());

    if as_json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        for line in format_preferences(&view) {
            println!("{line}");
        }
    }

    Ok(())
}
