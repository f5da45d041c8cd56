//! Situation selector — the help screen's state.

use serde::Serialize;

use crate::content::{CONNECT_NUDGES, STARTER_PROMPT_COUNT};

use super::model::{SITUATIONS, SituationId, SituationRecord};

/// Ordered tips for a situation.
pub fn tips_for(id: SituationId) -> &'static [&'static str] {
    id.record().tips
}

/// The generic starter prompts shown under any situation's tips.
pub fn starter_prompts() -> &'static [&'static str] {
    &CONNECT_NUDGES[..STARTER_PROMPT_COUNT]
}

/// Which situation (if any) the user picked from the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SituationSelector {
    selected: Option<SituationId>,
    show_starters: bool,
}

impl SituationSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, id: SituationId) -> &'static SituationRecord {
        tracing::debug!(situation = %id, "Situation selected");
        self.selected = Some(id);
        id.record()
    }

    /// Back to the choice grid.
    pub fn clear(&mut self) {
        self.selected = None;
        self.show_starters = false;
    }

    pub fn selected(&self) -> Option<SituationId> {
        self.selected
    }

    pub fn selected_record(&self) -> Option<&'static SituationRecord> {
        self.selected.map(|id| id.record())
    }

    /// The grid offered while nothing is selected.
    pub fn choices(&self) -> &'static [SituationRecord] {
        &SITUATIONS
    }

    /// Starter prompts, available once a situation is selected.
    pub fn starter_prompts(&self) -> Option<&'static [&'static str]> {
        self.selected.map(|_| starter_prompts())
    }

    /// Flip the starter block. Returns `None` when there is no selection to
    /// attach it to.
    pub fn toggle_starters(&mut self) -> Option<bool> {
        self.selected?;
        self.show_starters = !self.show_starters;
        Some(self.show_starters)
    }

    pub fn starters_visible(&self) -> bool {
        self.selected.is_some() && self.show_starters
    }
}
