use std::time::Duration;

use dioxus::prelude::*;

use wishwell_core::sequencer::GREETING_DURATION_MS;
use wishwell_core::ScreenEvent;

use crate::state::AppState;

const BALLOONS: usize = 8;

#[component]
pub fn Greeting() -> Element {
    let state = use_context::<AppState>();

    use_future(move || async move {
        tokio::time::sleep(Duration::from_millis(GREETING_DURATION_MS)).await;
        state.emit(ScreenEvent::GreetingElapsed);
    });

    rsx! {
        div {
            class: "screen greeting",

            div {
                class: "balloons",
                for index in 0..BALLOONS {
                    div {
                        key: "{index}",
                        class: "balloon",
                        style: format!("animation-delay: {}ms;", index * 200),
                    }
                }
            }

            h1 {
                class: "greeting-title gradient-text",
                "Happy Birthday!"
            }
            p {
                class: "greeting-subtitle",
                "🎉 Hope your special day is magical! 🎉"
            }
        }
    }
}
