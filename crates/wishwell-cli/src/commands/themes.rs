use std::path::Path;

use crate::commands::common::{format_theme_lines, open_preferences, theme_list_items};
use crate::error::CliError;

pub async fn run_themes(as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let preferences = open_preferences(db_path).await?;
    let items = theme_list_items(preferences.preferences().theme);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for line in format_theme_lines(&items) {
            println!("{line}");
        }
    }

    Ok(())
}
