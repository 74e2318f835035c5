use dioxus::prelude::*;
use dioxus_primitives::toast::{use_toast, ToastOptions};

use crate::state::AppState;

/// Corner toggle for the sound preference.
#[component]
pub fn SoundControl() -> Element {
    let state = use_context::<AppState>();
    let toasts = use_toast();
    let enabled = state.preferences.read().sound_enabled;

    let toggle = move |_| {
        let Some(services) = state.services() else {
            return;
        };
        spawn(async move {
            if let Err(error) = services.preferences.toggle_sound().await {
                tracing::error!("Failed to save sound preference: {}", error);
                toasts.error(
                    "Failed to save sound preference".to_string(),
                    ToastOptions::new().description(error.to_string()),
                );
            }
        });
    };

    let (icon, title) = if enabled {
        ("🔊", "Disable Sound")
    } else {
        ("🔇", "Enable Sound")
    };

    rsx! {
        div {
            class: "corner left",
            button {
                class: "chip",
                title: "{title}",
                disabled: state.services.read().is_none(),
                onclick: toggle,
                "{icon}"
            }
        }
    }
}
