use std::time::Duration;

use dioxus::prelude::*;

use wishwell_core::sequencer::COIN_DROP_DELAY_MS;
use wishwell_core::{ScreenEvent, SoundKind};

use crate::state::AppState;

#[component]
pub fn WishingCoin() -> Element {
    let state = use_context::<AppState>();
    let mut dropping = use_signal(|| false);

    let drop_coin = move |_| {
        // Only the first tap counts
        if dropping() {
            return;
        }
        dropping.set(true);
        state.play(SoundKind::Coin);
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(COIN_DROP_DELAY_MS)).await;
            state.emit(ScreenEvent::CoinDropped);
        });
    };

    let coin_class = if dropping() { "coin dropping" } else { "coin" };

    rsx! {
        div {
            class: "screen wishing-coin",

            div {
                class: "well",
                div {
                    class: "well-water",
                    if dropping() {
                        div { class: "ripple" }
                    }
                }
            }

            button {
                class: "{coin_class}",
                title: "Drop the coin",
                disabled: dropping(),
                onclick: drop_coin,
                "🪙"
            }

            p {
                class: "hint",
                "Drop me into the wishing well to continue"
            }
        }
    }
}
