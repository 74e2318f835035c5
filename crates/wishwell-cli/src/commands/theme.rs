use std::path::Path;

use crate::commands::common::open_preferences;
use crate::error::CliError;

pub async fn run_theme(id: &str, db_path: &Path) -> Result<(), CliError> {
    let preferences = open_preferences(db_path).await?;
    preferences.set_theme_named(id).await?;

    let theme = preferences.theme();
    println!("{} {}", theme.glyph, theme.name);
    Ok(())
}
