use std::path::Path;
use std::time::Duration;

use wishwell_core::services::SOUND_CONFIRM_DELAY_MS;

use crate::cli::SoundSwitch;
use crate::commands::common::open_preferences;
use crate::error::CliError;

pub async fn run_sound(state: Option<SoundSwitch>, db_path: &Path) -> Result<(), CliError> {
    let preferences = open_preferences(db_path).await?;

    let enabled = match state {
        Some(switch) => {
            preferences.set_sound_enabled(switch.enabled()).await?;
            switch.enabled()
        }
        None => preferences.toggle_sound().await?,
    };

    println!("Sound {}", if enabled { "on" } else { "off" });
    if enabled {
        // Give the delayed confirmation cue a chance to play before exit
        tokio::time::sleep(Duration::from_millis(SOUND_CONFIRM_DELAY_MS * 2)).await;
    }
    Ok(())
}
