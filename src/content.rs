//! Compiled-in conversation content.
//!
//! Every list here is fixed for the life of the process. Order matters: panels
//! and tip lists render in declaration order.

/// Icebreaker questions offered by the prompt screen.
pub const FAMILY_ICEBREAKERS: [&str; 8] = [
    "What family recipe do you hope never disappears?",
    "What's the funniest family story you've heard recently?",
    "If you could ask any family member from the past one question, what would it be?",
    "What family tradition means the most to you?",
    "What's something you learned from a family member that you still use today?",
    "What's the most adventurous thing someone in our family has done?",
    "What family photo always makes you smile?",
    "What's a family saying or phrase that always stuck with you?",
];

/// Follow-up questions shown in the "Curious Questions" panel.
pub const CONVERSATION_NUDGES: [&str; 5] = [
    "What's the story behind that?",
    "How did that make you feel?",
    "What would you do differently?",
    "What surprised you most about that experience?",
    "How has that changed over the years?",
];

/// Tips shown in the "Conversation Tips" panel.
pub const LISTENING_TIPS: [&str; 4] = [
    "Summarize what they said before adding your point",
    "Listen to understand",
    "Share from personal experience, not general claims",
    "Ask clarifying questions",
];

/// Nudges kept by the help screen. Only the first [`STARTER_PROMPT_COUNT`]
/// are ever shown.
pub const CONNECT_NUDGES: [&str; 6] = [
    "What's the story behind that?",
    "How did that make you feel?",
    "What would you do differently?",
    "Who taught you that?",
    "What surprised you most about that experience?",
    "How has that changed over the years?",
];

/// Size of the starter-prompt block on the help screen.
pub const STARTER_PROMPT_COUNT: usize = 4;

pub const APP_NAME: &str = "Connecto";
pub const TAGLINE: &str = "Fostering meaningful conversations";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_have_declared_sizes() {
        assert_eq!(FAMILY_ICEBREAKERS.len(), 8);
        assert_eq!(CONVERSATION_NUDGES.len(), 5);
        assert_eq!(LISTENING_TIPS.len(), 4);
        assert!(STARTER_PROMPT_COUNT <= CONNECT_NUDGES.len());
    }

    #[test]
    fn icebreakers_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for q in FAMILY_ICEBREAKERS {
            assert!(seen.insert(q), "duplicate icebreaker: {q}");
        }
    }
}
