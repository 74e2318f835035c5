//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;

use dioxus::prelude::*;

use wishwell_core::models::{Preferences, Screen, ThemeDefinition};
use wishwell_core::{ScreenEvent, ScreenSequencer, SoundKind, ThemeRegistry};

use crate::services::AppServices;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Which of the four screens is showing
    pub sequencer: Signal<ScreenSequencer>,
    /// Mirror of the preference store's live value
    pub preferences: Signal<Preferences>,
    /// Loaded services (None until startup finishes)
    pub services: Signal<Option<Arc<AppServices>>>,
}

impl AppState {
    pub fn screen(&self) -> Screen {
        self.sequencer.read().current()
    }

    /// Definition of the selected theme.
    pub fn theme(&self) -> &'static ThemeDefinition {
        ThemeRegistry::definition(self.preferences.read().theme)
    }

    /// Services for event handlers and futures. Does not subscribe.
    pub fn services(&self) -> Option<Arc<AppServices>> {
        self.services.peek().clone()
    }

    /// Forward a screen's completion event to the sequencer.
    ///
    /// Events from a screen that is no longer current are dropped there.
    pub fn emit(self, event: ScreenEvent) -> Option<Screen> {
        let mut sequencer = self.sequencer;
        let next = sequencer.write().handle(event);
        if let Some(screen) = next {
            tracing::info!("Now showing {}", screen);
        }
        next
    }

    /// Play a cue if services are ready and sound is on.
    pub fn play(&self, kind: SoundKind) {
        if let Some(services) = self.services() {
            services.notifier.notify(kind);
        }
    }
}
