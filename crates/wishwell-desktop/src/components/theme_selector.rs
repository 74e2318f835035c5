use dioxus::prelude::*;
use dioxus_primitives::toast::{use_toast, ToastOptions};

use wishwell_core::models::ThemeId;
use wishwell_core::ThemeRegistry;

use crate::state::AppState;

/// Corner button that opens the theme catalog.
#[component]
pub fn ThemeSelector() -> Element {
    let state = use_context::<AppState>();
    let toasts = use_toast();
    let mut open = use_signal(|| false);
    let current = state.theme();

    let mut select = move |id: ThemeId| {
        open.set(false);
        let Some(services) = state.services() else {
            return;
        };
        spawn(async move {
            if let Err(error) = services.preferences.set_theme(id).await {
                tracing::error!("Failed to save theme: {}", error);
                toasts.error(
                    "Failed to save theme".to_string(),
                    ToastOptions::new().description(error.to_string()),
                );
            }
        });
    };

    rsx! {
        div {
            class: "corner right",

            button {
                class: "chip",
                title: "Choose Theme",
                onclick: move |_| open.toggle(),
                "{current.glyph}"
            }

            if open() {
                div {
                    class: "theme-panel",
                    h3 { "Choose Theme" }

                    for theme in ThemeRegistry::list() {
                        button {
                            key: "{theme.id}",
                            class: if theme.id == current.id { "theme-option selected" } else { "theme-option" },
                            onclick: move |_| select(theme.id),
                            span {
                                class: "swatch",
                                style: "background: {theme.colors.primary};",
                            }
                            span { "{theme.glyph}" }
                            span { "{theme.name}" }
                        }
                    }
                }
            }
        }
    }
}
