//! Situation records for the help screen.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SituationError;

/// The closed set of conversation situations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SituationId {
    Awkward,
    Tension,
    Surface,
}

impl SituationId {
    /// All ids in grid order.
    pub const ALL: [SituationId; 3] = [Self::Awkward, Self::Tension, Self::Surface];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Awkward => "awkward",
            Self::Tension => "tension",
            Self::Surface => "surface",
        }
    }

    /// Resolve a 1-based grid position.
    pub fn from_position(position: usize) -> Option<SituationId> {
        position
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    pub fn record(&self) -> &'static SituationRecord {
        match self {
            Self::Awkward => &SITUATIONS[0],
            Self::Tension => &SITUATIONS[1],
            Self::Surface => &SITUATIONS[2],
        }
    }
}

impl std::fmt::Display for SituationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SituationId {
    type Err = SituationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "awkward" => Ok(Self::Awkward),
            "tension" => Ok(Self::Tension),
            "surface" => Ok(Self::Surface),
            _ => Err(SituationError::Unknown(s.to_string())),
        }
    }
}

/// One entry of the situation grid and the tips it leads to.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct SituationRecord {
    pub id: SituationId,
    pub title: &'static str,
    pub description: &'static str,
    pub tips: &'static [&'static str],
}

pub static SITUATIONS: [SituationRecord; 3] = [
    SituationRecord {
        id: SituationId::Awkward,
        title: "Getting Awkward",
        description: "Conversation feels quiet or uncomfortable",
        tips: &[
            "Ask an open-ended question: \"Can you tell me more about that?\"",
            "Circle back to something interesting they mentioned earlier",
            "Ask about their current projects or what they're excited about",
        ],
    },
    SituationRecord {
        id: SituationId::Tension,
        title: "Tension Rising",
        description: "People disagree or conflict is emerging",
        tips: &[
            "Redirect to personal experiences rather than general arguments",
            "Suggest taking a break or changing topics if needed",
            "Ask questions that focus on feelings rather than positions",
        ],
    },
    SituationRecord {
        id: SituationId::Surface,
        title: "Staying Surface-Level",
        description: "Conversation isn't going deeper",
        tips: &[
            "Ask 'why' or 'how' questions to go deeper",
            "Share something vulnerable about yourself first",
            "Ask about feelings, not just facts: 'How did that affect you?'",
            "Follow up with: 'What was that like for you?'",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_line_up_with_ids() {
        for (record, id) in SITUATIONS.iter().zip(SituationId::ALL) {
            assert_eq!(record.id, id);
            assert!(std::ptr::eq(id.record(), record));
        }
    }

    #[test]
    fn parse_known_ids() {
        assert_eq!("awkward".parse::<SituationId>(), Ok(SituationId::Awkward));
        assert_eq!(" Tension ".parse::<SituationId>(), Ok(SituationId::Tension));
        assert_eq!("SURFACE".parse::<SituationId>(), Ok(SituationId::Surface));
    }

    #[test]
    fn parse_rejects_unknown_id() {
        assert_eq!(
            "chaos".parse::<SituationId>(),
            Err(SituationError::Unknown("chaos".to_string()))
        );
        assert!("".parse::<SituationId>().is_err());
    }

    #[test]
    fn grid_positions_are_one_based() {
        assert_eq!(SituationId::from_position(1), Some(SituationId::Awkward));
        assert_eq!(SituationId::from_position(3), Some(SituationId::Surface));
        assert_eq!(SituationId::from_position(0), None);
        assert_eq!(SituationId::from_position(4), None);
    }

    #[test]
    fn display_matches_serde() {
        for id in SituationId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(format!("\"{id}\""), json, "mismatch for {id:?}");
        }
    }
}
