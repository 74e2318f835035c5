use std::time::Duration;

use dioxus::prelude::*;

use wishwell_core::sequencer::SPARKLE_FOLLOWUP_DELAY_MS;
use wishwell_core::SoundKind;

use crate::state::AppState;

#[component]
pub fn Success() -> Element {
    let state = use_context::<AppState>();

    use_future(move || async move {
        state.play(SoundKind::Celebration);
        tokio::time::sleep(Duration::from_millis(SPARKLE_FOLLOWUP_DELAY_MS)).await;
        state.play(SoundKind::Sparkle);
    });

    rsx! {
        div {
            class: "screen success",

            div { class: "success-glyph", "🎉" }
            h2 {
                class: "success-title gradient-text",
                "Website Idea Submitted! 🚀"
            }
            p {
                class: "success-message",
                "Thank you for sharing your amazing website idea! Your creativity helps make birthdays even more special! 🌟💻"
            }
        }
    }
}
