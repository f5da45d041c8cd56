//! Prompt screen — random icebreakers plus the nudge and listening panels.

pub mod engine;
pub mod state;

pub use engine::{PromptEngine, pick_icebreaker};
pub use state::Panel;
