//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider};

use wishwell_core::models::{Preferences, Screen};
use wishwell_core::sound::AudioSink;
use wishwell_core::ScreenSequencer;

use crate::components::{SoundControl, ThemeSelector};
use crate::screens::{Greeting, IdeaForm, Success, WishingCoin};
use crate::services::{AppServices, WebviewAudioSink};
use crate::state::AppState;
use crate::theme::{theme_variables, APP_STYLES};

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        ToastProvider {
            AppShell {}
        }
    }
}

#[component]
fn AppShell() -> Element {
    let sequencer = use_signal(ScreenSequencer::new);
    let mut preferences = use_signal(Preferences::default);
    let mut services = use_signal(|| None::<Arc<AppServices>>);
    let toasts = use_toast();
    let sink = use_hook(WebviewAudioSink::start);

    // Load services once, then mirror every preference change into the signal
    use_future(move || {
        let sink: Arc<dyn AudioSink> = sink.clone();
        async move {
            let loaded = match AppServices::init(sink).await {
                Ok(loaded) => Arc::new(loaded),
                Err(error) => {
                    tracing::error!("Failed to initialize services: {}", error);
                    toasts.error(
                        "Wishwell could not start".to_string(),
                        ToastOptions::new().description(error.to_string()),
                    );
                    return;
                }
            };

            if !loaded.remote_configured {
                toasts.info(
                    "Idea storage is offline".to_string(),
                    ToastOptions::new()
                        .description("Set SUPABASE_URL and SUPABASE_ANON_KEY to save ideas"),
                );
            }

            let mut live = loaded.preferences.subscribe();
            preferences.set(loaded.preferences.preferences());
            services.set(Some(loaded));

            while live.changed().await.is_ok() {
                let latest = *live.borrow_and_update();
                preferences.set(latest);
            }
        }
    });

    let state = use_context_provider(|| AppState {
        sequencer,
        preferences,
        services,
    });

    let theme = state.theme();
    let theme_style = theme_variables(theme);

    rsx! {
        style { "{APP_STYLES}" }

        div {
            class: "app-container",
            "data-theme": "{theme.id}",
            style: "{theme_style}",

            SoundControl {}
            ThemeSelector {}

            match state.screen() {
                Screen::Greeting => rsx! { Greeting {} },
                Screen::CoinInteraction => rsx! { WishingCoin {} },
                Screen::IdeaForm => rsx! { IdeaForm {} },
                Screen::Success => rsx! { Success {} },
            }
        }
    }
}
