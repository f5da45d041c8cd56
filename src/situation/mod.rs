//! Help screen — pick the situation that fits and get tips for it.

pub mod model;
pub mod selector;

pub use model::{SITUATIONS, SituationId, SituationRecord};
pub use selector::{SituationSelector, starter_prompts, tips_for};
