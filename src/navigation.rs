//! Navigation between the prompt screen and the help screen.
//!
//! The only state that crosses screens is the one-shot "conversation" signal:
//! an arrival at `/?conversation=true` starts the prompt screen immediately.
//! The signal is taken out of the location on arrival, so the visible address
//! afterwards is plain `/` and a reload does not start again.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::NavigationError;

/// Query parameter carrying the one-shot signal.
pub const CONVERSATION_PARAM: &str = "conversation";

/// Origin that app-relative addresses are resolved against.
const ADDRESS_BASE: &str = "http://connecto.local/";

/// The two screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    Home,
    Connect,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Connect => "/connect",
        }
    }

    pub fn from_path(path: &str) -> Result<Route, NavigationError> {
        match path.trim_end_matches('/') {
            "" => Ok(Self::Home),
            "/connect" => Ok(Self::Connect),
            _ => Err(NavigationError::UnknownRoute(path.to_string())),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Home => "home",
            Self::Connect => "connect",
        };
        write!(f, "{s}")
    }
}

/// What an arrival on the prompt screen should do before the first render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntrySignal {
    #[default]
    None,
    /// Arrive already in conversation mode.
    Conversation,
}

impl EntrySignal {
    pub fn is_conversation(&self) -> bool {
        matches!(self, Self::Conversation)
    }
}

/// A parsed address: route plus the pending one-shot signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    route: Route,
    conversation: bool,
}

impl Location {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            conversation: false,
        }
    }

    /// `/?conversation=true`
    pub fn conversation() -> Self {
        Self {
            route: Route::Home,
            conversation: true,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Consume the signal. A second call on the same location yields
    /// [`EntrySignal::None`].
    pub fn take_entry(&mut self) -> EntrySignal {
        if std::mem::take(&mut self.conversation) {
            EntrySignal::Conversation
        } else {
            EntrySignal::None
        }
    }
}

impl FromStr for Location {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // "//host/..." would resolve to another origin.
        if !s.starts_with('/') || s.starts_with("//") {
            return Err(NavigationError::Malformed(s.to_string()));
        }
        let url = Url::parse(ADDRESS_BASE)
            .and_then(|base| base.join(s))
            .map_err(|e| NavigationError::Malformed(format!("{s}: {e}")))?;

        let route = Route::from_path(url.path())?;
        let conversation = url
            .query_pairs()
            .any(|(key, value)| key == CONVERSATION_PARAM && value == "true");

        Ok(Self {
            route,
            conversation,
        })
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.route.path())?;
        if self.conversation {
            write!(f, "?{CONVERSATION_PARAM}=true")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_routes() {
        let home: Location = "/".parse().unwrap();
        assert_eq!(home, Location::new(Route::Home));
        let connect: Location = "/connect".parse().unwrap();
        assert_eq!(connect.route(), Route::Connect);
        let trailing: Location = "/connect/".parse().unwrap();
        assert_eq!(trailing.route(), Route::Connect);
    }

    #[test]
    fn parse_conversation_signal() {
        let loc: Location = "/?conversation=true".parse().unwrap();
        assert_eq!(loc, Location::conversation());
    }

    #[test]
    fn signal_requires_exact_true() {
        for address in ["/?conversation=1", "/?conversation=TRUE", "/?conversation", "/?other=true"] {
            let mut loc: Location = address.parse().unwrap();
            assert_eq!(loc.take_entry(), EntrySignal::None, "{address}");
        }
    }

    #[test]
    fn signal_among_other_params() {
        let mut loc: Location = "/?utm=x&conversation=true".parse().unwrap();
        assert_eq!(loc.take_entry(), EntrySignal::Conversation);
    }

    #[test]
    fn signal_value_is_percent_decoded() {
        let mut loc: Location = "/?conversation=tru%65".parse().unwrap();
        assert_eq!(loc.take_entry(), EntrySignal::Conversation);
        let mut loc: Location = "/?conver%73ation=true".parse().unwrap();
        assert_eq!(loc.take_entry(), EntrySignal::Conversation);
    }

    #[test]
    fn fragment_is_not_part_of_signal() {
        let mut loc: Location = "/?conversation=true#top".parse().unwrap();
        assert_eq!(loc.take_entry(), EntrySignal::Conversation);
        let loc: Location = "/connect#tips".parse().unwrap();
        assert_eq!(loc.route(), Route::Connect);
    }

    #[test]
    fn protocol_relative_address_rejected() {
        assert!(matches!(
            "//evil.example/connect".parse::<Location>(),
            Err(NavigationError::Malformed(_))
        ));
    }

    #[test]
    fn unknown_route_rejected() {
        assert_eq!(
            "/settings".parse::<Location>(),
            Err(NavigationError::UnknownRoute("/settings".to_string()))
        );
    }

    #[test]
    fn relative_address_rejected() {
        assert!(matches!(
            "connect".parse::<Location>(),
            Err(NavigationError::Malformed(_))
        ));
    }

    #[test]
    fn take_entry_is_one_shot() {
        let mut loc = Location::conversation();
        assert_eq!(loc.take_entry(), EntrySignal::Conversation);
        assert_eq!(loc.take_entry(), EntrySignal::None);
        assert_eq!(loc.to_string(), "/");
    }

    #[test]
    fn display_round_trips() {
        for address in ["/", "/connect", "/?conversation=true"] {
            let loc: Location = address.parse().unwrap();
            assert_eq!(loc.to_string(), address);
        }
    }
}
