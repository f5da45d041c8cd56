//! Prompt engine — the icebreaker screen's state.

use rand::Rng;
use serde::Serialize;

use crate::content::FAMILY_ICEBREAKERS;
use crate::navigation::EntrySignal;

use super::state::Panel;

/// Pick one icebreaker uniformly at random.
///
/// Sampling is with replacement: the result may equal the question already on
/// screen.
pub fn pick_icebreaker<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FAMILY_ICEBREAKERS[rng.gen_range(0..FAMILY_ICEBREAKERS.len())]
}

/// State of the prompt screen for the lifetime of one visit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PromptEngine {
    current: Option<&'static str>,
    started: bool,
    panel: Panel,
}

impl PromptEngine {
    /// Fresh, not-yet-started state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the state for an arrival on the prompt screen.
    ///
    /// An arrival carrying the conversation signal starts exactly once.
    pub fn enter<R: Rng + ?Sized>(signal: EntrySignal, rng: &mut R) -> Self {
        let mut engine = Self::new();
        if signal.is_conversation() {
            engine.start(rng);
        }
        engine
    }

    /// Begin the conversation with a random icebreaker.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'static str {
        let question = pick_icebreaker(rng);
        self.current = Some(question);
        self.started = true;
        self.panel = Panel::None;
        tracing::debug!(icebreaker = question, "Conversation started");
        question
    }

    /// Replace the current icebreaker. Leaves `started` alone.
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'static str {
        let question = pick_icebreaker(rng);
        self.current = Some(question);
        self.panel = Panel::None;
        tracing::debug!(icebreaker = question, "Next icebreaker");
        question
    }

    pub fn toggle_nudges(&mut self) -> Panel {
        self.panel = self.panel.toggled(Panel::Nudges);
        self.panel
    }

    pub fn toggle_listening(&mut self) -> Panel {
        self.panel = self.panel.toggled(Panel::Listening);
        self.panel
    }

    pub fn current(&self) -> Option<&'static str> {
        self.current
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn new_engine_is_idle() {
        let engine = PromptEngine::new();
        assert_eq!(engine.current(), None);
        assert!(!engine.is_started());
        assert_eq!(engine.panel(), Panel::None);
    }

    #[test]
    fn picks_are_always_known_icebreakers() {
        let mut rng = rng();
        for _ in 0..1_000 {
            assert!(FAMILY_ICEBREAKERS.contains(&pick_icebreaker(&mut rng)));
        }
    }

    #[test]
    fn picks_are_roughly_uniform() {
        let mut rng = rng();
        let samples = 80_000;
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..samples {
            *counts.entry(pick_icebreaker(&mut rng)).or_default() += 1;
        }
        assert_eq!(counts.len(), FAMILY_ICEBREAKERS.len());
        let expected = samples as f64 / FAMILY_ICEBREAKERS.len() as f64;
        for (question, count) in counts {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "{question} drawn {count} times");
        }
    }

    // Sampling is with replacement on purpose. Do not "fix" this into
    // avoiding the previous question.
    #[test]
    fn consecutive_picks_may_repeat() {
        let mut rng = rng();
        let mut engine = PromptEngine::new();
        let mut previous = engine.start(&mut rng);
        let mut repeated = false;
        for _ in 0..200 {
            let current = engine.next(&mut rng);
            repeated |= current == previous;
            previous = current;
        }
        assert!(repeated);
    }

    #[test]
    fn start_sets_question_and_started() {
        let mut rng = rng();
        let mut engine = PromptEngine::new();
        let question = engine.start(&mut rng);
        assert_eq!(engine.current(), Some(question));
        assert!(engine.is_started());
    }

    #[test]
    fn start_and_next_close_open_panel() {
        let mut rng = rng();
        let mut engine = PromptEngine::new();
        engine.start(&mut rng);
        engine.toggle_listening();
        engine.next(&mut rng);
        assert_eq!(engine.panel(), Panel::None);

        engine.toggle_nudges();
        engine.start(&mut rng);
        assert_eq!(engine.panel(), Panel::None);
    }

    #[test]
    fn next_keeps_started_flag() {
        let mut rng = rng();
        let mut engine = PromptEngine::new();
        engine.start(&mut rng);
        for _ in 0..50 {
            let q = engine.next(&mut rng);
            assert!(engine.is_started());
            assert!(FAMILY_ICEBREAKERS.contains(&q));
            assert_eq!(engine.current(), Some(q));
        }
    }

    #[test]
    fn listening_after_nudges_closes_nudges() {
        let mut rng = rng();
        let mut engine = PromptEngine::new();
        engine.start(&mut rng);
        engine.toggle_nudges();
        engine.toggle_listening();
        assert!(!engine.panel().nudges_visible());
        assert!(engine.panel().listening_visible());
    }

    #[test]
    fn toggling_same_panel_twice_closes_it() {
        let mut engine = PromptEngine::new();
        assert_eq!(engine.toggle_nudges(), Panel::Nudges);
        assert_eq!(engine.toggle_nudges(), Panel::None);
    }

    #[test]
    fn enter_with_signal_starts_once() {
        let mut rng = rng();
        let engine = PromptEngine::enter(EntrySignal::Conversation, &mut rng);
        assert!(engine.is_started());
        assert!(engine.current().is_some_and(|q| FAMILY_ICEBREAKERS.contains(&q)));
    }

    #[test]
    fn enter_without_signal_stays_idle() {
        let mut rng = rng();
        let engine = PromptEngine::enter(EntrySignal::None, &mut rng);
        assert_eq!(engine, PromptEngine::new());
    }
}
