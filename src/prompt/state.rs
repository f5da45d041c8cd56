//! Auxiliary panel state for the prompt screen.

use serde::{Deserialize, Serialize};

/// Which auxiliary panel is open under the current icebreaker.
///
/// One enum instead of two flags: "nudges and listening both open" cannot be
/// expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    #[default]
    None,
    Nudges,
    Listening,
}

impl Panel {
    /// Result of pressing the button for `target` while `self` is open.
    ///
    /// Pressing the open panel's button closes it; pressing the other one
    /// switches over.
    pub fn toggled(self, target: Panel) -> Panel {
        if self == target { Panel::None } else { target }
    }

    pub fn nudges_visible(&self) -> bool {
        matches!(self, Self::Nudges)
    }

    pub fn listening_visible(&self) -> bool {
        matches!(self, Self::Listening)
    }
}

impl std::fmt::Display for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::Nudges => "nudges",
            Self::Listening => "listening",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_then_closes() {
        let open = Panel::None.toggled(Panel::Nudges);
        assert_eq!(open, Panel::Nudges);
        assert_eq!(open.toggled(Panel::Nudges), Panel::None);
    }

    #[test]
    fn toggle_switches_between_panels() {
        assert_eq!(Panel::Nudges.toggled(Panel::Listening), Panel::Listening);
        assert_eq!(Panel::Listening.toggled(Panel::Nudges), Panel::Nudges);
    }

    #[test]
    fn at_most_one_panel_visible() {
        for panel in [Panel::None, Panel::Nudges, Panel::Listening] {
            assert!(!(panel.nudges_visible() && panel.listening_visible()));
        }
    }

    #[test]
    fn display_matches_serde() {
        for panel in [Panel::None, Panel::Nudges, Panel::Listening] {
            let json = serde_json::to_string(&panel).unwrap();
            assert_eq!(format!("\"{panel}\""), json);
        }
    }
}
