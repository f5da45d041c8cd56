//! Plain-text rendering of the two screens.

use std::fmt;

use crate::content::{APP_NAME, CONVERSATION_NUDGES, LISTENING_TIPS, TAGLINE};
use crate::prompt::{Panel, PromptEngine};
use crate::situation::SituationSelector;

/// The prompt screen as text.
pub struct PromptScreen<'a>(pub &'a PromptEngine);

impl fmt::Display for PromptScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let engine = self.0;
        writeln!(f, "{APP_NAME}")?;
        writeln!(f, "{TAGLINE}")?;
        writeln!(f)?;

        let current = match (engine.is_started(), engine.current()) {
            (true, Some(question)) => question,
            _ => {
                writeln!(f, "Ready to connect?")?;
                return write!(f, "  [start] Start Conversation");
            }
        };

        writeln!(f, "Here's a question to get the conversation started:")?;
        writeln!(f, "  \"{current}\"")?;
        writeln!(f)?;
        writeln!(f, "  [help] Need Help?")?;
        writeln!(f, "  [next] Next Question")?;
        write!(
            f,
            "  [nudges] Curious Questions{}   [listen] Conversation Tips{}",
            active_marker(engine.panel() == Panel::Nudges),
            active_marker(engine.panel() == Panel::Listening),
        )?;

        match engine.panel() {
            Panel::None => {}
            Panel::Nudges => {
                writeln!(f)?;
                for nudge in CONVERSATION_NUDGES {
                    write!(f, "\n  - \"{nudge}\"")?;
                }
            }
            Panel::Listening => {
                writeln!(f)?;
                for tip in LISTENING_TIPS {
                    write!(f, "\n  - {tip}")?;
                }
            }
        }
        Ok(())
    }
}

/// The help screen as text.
pub struct ConnectScreen<'a>(pub &'a SituationSelector);

impl fmt::Display for ConnectScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let selector = self.0;
        writeln!(f, "How's The Conversation Going?")?;
        writeln!(f)?;

        let Some(record) = selector.selected_record() else {
            writeln!(
                f,
                "Tap the situation that best describes your conversation right now:"
            )?;
            for (i, choice) in selector.choices().iter().enumerate() {
                writeln!(f, "  [{}] {} ({})", i + 1, choice.title, choice.id)?;
                writeln!(f, "      {}", choice.description)?;
            }
            return write!(f, "  [home] Back to the conversation");
        };

        writeln!(f, "  [back] Back to help options")?;
        writeln!(f)?;
        writeln!(f, "{}", record.title)?;
        writeln!(f, "{}", record.description)?;
        writeln!(f)?;
        write!(f, "Here's what you can try:")?;
        for tip in record.tips {
            write!(f, "\n  • {tip}")?;
        }

        let starters = selector
            .starter_prompts()
            .filter(|_| selector.starters_visible());
        if let Some(starters) = starters {
            write!(f, "\n\nTry these conversation starters:")?;
            for starter in starters {
                write!(f, "\n  \"{starter}\"")?;
            }
        }
        Ok(())
    }
}

pub fn render_prompt(engine: &PromptEngine) -> String {
    PromptScreen(engine).to_string()
}

pub fn render_connect(selector: &SituationSelector) -> String {
    ConnectScreen(selector).to_string()
}

fn active_marker(active: bool) -> &'static str {
    if active { " *" } else { "" }
}
