//! The four journey screens.
//!
//! Each screen reports completion through `AppState::emit`; its timers are
//! component-scoped futures that die with the screen.

mod greeting;
mod idea_form;
mod success;
mod wishing_coin;

pub use greeting::Greeting;
pub use idea_form::IdeaForm;
pub use success::Success;
pub use wishing_coin::WishingCoin;
