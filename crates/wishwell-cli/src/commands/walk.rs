use std::io::Write;
use std::path::Path;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use wishwell_core::config::AppConfig;
use wishwell_core::models::MIN_IDEA_CHARS;
use wishwell_core::remote::SupabaseIdeaStore;
use wishwell_core::sequencer::SPARKLE_FOLLOWUP_DELAY_MS;
use wishwell_core::services::{IdeaSubmissionFlow, Journey, JourneyTimings};

use crate::commands::common::open_preferences;
use crate::error::CliError;

/// Interactive run through all four screens.
pub async fn run_walk(db_path: &Path, config: &AppConfig) -> Result<(), CliError> {
    let preferences = open_preferences(db_path).await?;
    let theme = preferences.theme();
    let store = SupabaseIdeaStore::from_config(config)?;
    let flow = IdeaSubmissionFlow::new(store, preferences.notifier(), config.submit_timeout);
    let mut journey = Journey::start(flow, JourneyTimings::default());
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!();
    println!("  {glyph}  Happy Birthday!  {glyph}", glyph = theme.glyph);
    println!("  🎉 Hope your special day is magical! 🎉");
    println!();
    journey.next_transition().await;

    println!("  🪙  Press Enter to drop the coin into the wishing well");
    if prompt(&mut input, "").await?.is_none() {
        return Ok(());
    }
    journey.drop_coin();
    println!("  ... plop!");
    journey.next_transition().await;

    println!();
    println!("  Make a Birthday Wish! 🌟");
    println!("  Describe a website idea (at least {MIN_IDEA_CHARS} characters).");
    loop {
        let Some(line) = prompt(&mut input, "  idea> ").await? else {
            println!("  No idea submitted. Goodbye!");
            return Ok(());
        };
        match journey.submit_idea(&line).await {
            Ok(_) => break,
            Err(error) if error.is_validation() => println!("  {error}"),
            Err(error) => println!("  Failed to save your wish. Please try again. ({error})"),
        }
    }

    println!();
    println!("  🎉 Website Idea Submitted! 🚀");
    println!("  Thank you for sharing your amazing website idea!");

    // Let the follow-up sparkle play out before the journey is dropped
    tokio::time::sleep(Duration::from_millis(SPARKLE_FOLLOWUP_DELAY_MS)).await;
    tokio::task::yield_now().await;
    Ok(())
}

async fn prompt(
    input: &mut Lines<BufReader<Stdin>>,
    label: &str,
) -> Result<Option<String>, CliError> {
    if !label.is_empty() {
        print!("{label}");
        std::io::stdout().flush()?;
    }
    Ok(input.next_line().await?)
}
