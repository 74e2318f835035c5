use dioxus::prelude::*;
use dioxus_primitives::toast::{use_toast, ToastOptions};

use wishwell_core::models::MAX_IDEA_CHARS;
use wishwell_core::{ScreenEvent, SubmissionError};

use crate::state::AppState;

#[component]
pub fn IdeaForm() -> Element {
    let state = use_context::<AppState>();
    let toasts = use_toast();
    let mut idea = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let submit = move |_| {
        let Some(services) = state.services() else {
            toasts.info(
                "Still getting ready".to_string(),
                ToastOptions::new().description("Please try again in a moment"),
            );
            return;
        };
        let text = idea();
        submitting.set(true);

        spawn(async move {
            let result = services.submissions.submit(&text).await;
            submitting.set(false);

            match result {
                Ok(receipt) => {
                    tracing::debug!("Idea accepted at {}", receipt.submitted_at);
                    toasts.success(
                        "Your wish has been saved! 🎉".to_string(),
                        ToastOptions::new(),
                    );
                    state.emit(ScreenEvent::IdeaSubmitted);
                }
                Err(SubmissionError::Busy) => {}
                Err(error) if error.is_validation() => {
                    toasts.error(error.to_string(), ToastOptions::new());
                }
                Err(error) => {
                    toasts.error(
                        "Failed to save your wish. Please try again.".to_string(),
                        ToastOptions::new().description(error.to_string()),
                    );
                }
            }
        });
    };

    let char_count = idea.read().trim().chars().count();
    let count_class = if char_count > MAX_IDEA_CHARS {
        "char-count over"
    } else {
        "char-count"
    };
    let busy = submitting() || state.services.read().is_none();

    rsx! {
        div {
            class: "screen idea-form",

            div {
                class: "idea-card",

                h2 {
                    class: "gradient-text",
                    "Make a Birthday Wish! 🌟"
                }
                p { "Enter your website idea and it will be delivered as a birthday wish" }

                label {
                    r#for: "site-idea",
                    "Website Idea"
                }
                textarea {
                    id: "site-idea",
                    value: "{idea}",
                    placeholder: "Describe your website idea that you'd like to build...",
                    disabled: submitting(),
                    autofocus: true,
                    oninput: move |event: FormEvent| idea.set(event.value()),
                }
                div {
                    class: "{count_class}",
                    "{char_count}/{MAX_IDEA_CHARS}"
                }

                button {
                    class: "submit-button",
                    disabled: busy,
                    onclick: submit,
                    if submitting() {
                        "Sending Wish..."
                    } else {
                        "Submit Birthday Wish 🎂"
                    }
                }
            }
        }
    }
}
