//! User commands typed into a session.

use std::str::FromStr;

use crate::error::{CommandError, SituationError};
use crate::navigation::{Location, Route};
use crate::situation::SituationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Next,
    ToggleNudges,
    ToggleListening,
    /// "Need Help?" on the prompt screen.
    Help,
    Select(SituationId),
    ToggleStarters,
    Back,
    Home,
    Go(Location),
    Reload,
    State,
    Usage,
    Quit,
}

impl Command {
    /// Screen the command belongs to, or `None` if it works everywhere.
    pub fn screen(&self) -> Option<Route> {
        match self {
            Self::Start | Self::Next | Self::ToggleNudges | Self::ToggleListening | Self::Help => {
                Some(Route::Home)
            }
            Self::Select(_) | Self::ToggleStarters | Self::Back | Self::Home => {
                Some(Route::Connect)
            }
            Self::Go(_) | Self::Reload | Self::State | Self::Usage | Self::Quit => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Next => "next",
            Self::ToggleNudges => "nudges",
            Self::ToggleListening => "listen",
            Self::Help => "help",
            Self::Select(_) => "select",
            Self::ToggleStarters => "starters",
            Self::Back => "back",
            Self::Home => "home",
            Self::Go(_) => "go",
            Self::Reload => "reload",
            Self::State => "state",
            Self::Usage => "?",
            Self::Quit => "quit",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let cmd = match head.to_ascii_lowercase().as_str() {
            "start" => Self::Start,
            "next" => Self::Next,
            "nudges" | "curious" => Self::ToggleNudges,
            "listen" | "tips" => Self::ToggleListening,
            "help" => Self::Help,
            "starters" => Self::ToggleStarters,
            "back" => Self::Back,
            "home" => Self::Home,
            "reload" => Self::Reload,
            "state" => Self::State,
            "?" => Self::Usage,
            "quit" | "exit" | "/quit" => Self::Quit,
            "go" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "go".to_string(),
                    });
                }
                Self::Go(rest.parse()?)
            }
            "select" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "select".to_string(),
                    });
                }
                Self::Select(parse_situation(rest)?)
            }
            "" => return Err(CommandError::Unknown(String::new())),
            other => match parse_situation(other) {
                Ok(id) => Self::Select(id),
                Err(_) if other.chars().all(|c| c.is_ascii_digit()) => {
                    return Err(SituationError::Unknown(other.to_string()).into());
                }
                Err(_) => return Err(CommandError::Unknown(line.to_string())),
            },
        };
        Ok(cmd)
    }
}

/// A grid position (`1`..`3`) or a situation id.
fn parse_situation(s: &str) -> Result<SituationId, SituationError> {
    if let Ok(position) = s.parse::<usize>() {
        return SituationId::from_position(position)
            .ok_or_else(|| SituationError::Unknown(s.to_string()));
    }
    s.parse()
}

/// Help text for a screen.
pub fn usage(route: Route) -> String {
    let screen = match route {
        Route::Home => {
            "  start            Start the conversation\n\
             \x20 next             Another icebreaker\n\
             \x20 nudges           Show or hide curious questions\n\
             \x20 listen           Show or hide conversation tips\n\
             \x20 help             How's the conversation going?"
        }
        Route::Connect => {
            "  1-3 | <id>       Pick a situation (awkward, tension, surface)\n\
             \x20 starters         Show or hide conversation starters\n\
             \x20 back             Back to help options\n\
             \x20 home             Back to the conversation"
        }
    };
    format!(
        "{screen}\n  go <address>     Open an address (/, /connect, /?conversation=true)\n  reload           Reload this screen\n  state            Print session state as JSON\n  quit             Leave"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!("start".parse::<Command>(), Ok(Command::Start));
        assert_eq!("  NEXT ".parse::<Command>(), Ok(Command::Next));
        assert_eq!("curious".parse::<Command>(), Ok(Command::ToggleNudges));
        assert_eq!("tips".parse::<Command>(), Ok(Command::ToggleListening));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn parse_situation_by_position_or_id() {
        assert_eq!("2".parse::<Command>(), Ok(Command::Select(SituationId::Tension)));
        assert_eq!("surface".parse::<Command>(), Ok(Command::Select(SituationId::Surface)));
        assert_eq!(
            "select awkward".parse::<Command>(),
            Ok(Command::Select(SituationId::Awkward))
        );
    }

    #[test]
    fn out_of_range_position_is_a_situation_error() {
        assert_eq!(
            "4".parse::<Command>(),
            Err(CommandError::Situation(SituationError::Unknown("4".to_string())))
        );
        assert!(matches!(
            "select chaos".parse::<Command>(),
            Err(CommandError::Situation(_))
        ));
    }

    #[test]
    fn parse_go_address() {
        assert_eq!(
            "go /?conversation=true".parse::<Command>(),
            Ok(Command::Go(Location::conversation()))
        );
        assert!(matches!(
            "go /nowhere".parse::<Command>(),
            Err(CommandError::Navigation(_))
        ));
        assert_eq!(
            "go".parse::<Command>(),
            Err(CommandError::MissingArgument {
                command: "go".to_string()
            })
        );
    }

    #[test]
    fn unknown_words_rejected() {
        assert_eq!(
            "dance now".parse::<Command>(),
            Err(CommandError::Unknown("dance now".to_string()))
        );
    }

    #[test]
    fn screens_partition_commands() {
        assert_eq!(Command::Next.screen(), Some(Route::Home));
        assert_eq!(Command::Back.screen(), Some(Route::Connect));
        assert_eq!(Command::Reload.screen(), None);
    }

    #[test]
    fn usage_mentions_screen_commands() {
        assert!(usage(Route::Home).contains("nudges"));
        assert!(usage(Route::Connect).contains("starters"));
        assert!(usage(Route::Connect).contains("reload"));
    }
}
