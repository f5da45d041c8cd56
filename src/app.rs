//! App — the current address, the view mounted for it, and command dispatch.

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use uuid::Uuid;

use crate::commands::{Command, usage};
use crate::config::AppConfig;
use crate::error::CommandError;
use crate::navigation::{Location, Route};
use crate::prompt::PromptEngine;
use crate::render::{render_connect, render_prompt};
use crate::situation::SituationSelector;

/// The screen currently mounted. State lives only as long as the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Prompt(PromptEngine),
    Connect(SituationSelector),
}

impl View {
    pub fn route(&self) -> Route {
        match self {
            Self::Prompt(_) => Route::Home,
            Self::Connect(_) => Route::Connect,
        }
    }
}

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show this text.
    Render(String),
    /// End the session.
    Quit,
}

/// Serializable view of the whole session, for the `state` command.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub view_id: Uuid,
    pub address: String,
    pub route: Route,
    pub entered_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<&'a PromptEngine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situation: Option<&'a SituationSelector>,
}

pub struct App {
    rng: StdRng,
    location: Location,
    view: View,
    view_id: Uuid,
    entered_at: DateTime<Utc>,
}

impl App {
    /// Open `entry` with the given random source.
    pub fn new(entry: Location, rng: StdRng) -> Self {
        let mut app = Self {
            rng,
            location: Location::default(),
            view: View::Prompt(PromptEngine::new()),
            view_id: Uuid::nil(),
            entered_at: Utc::now(),
        };
        app.navigate(entry);
        app
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config.entry, rng)
    }

    /// Mount a fresh view for `location`.
    ///
    /// The conversation signal is consumed here. The stored location no longer
    /// carries it, so [`App::reload`] mounts an idle prompt screen.
    pub fn navigate(&mut self, mut location: Location) {
        let signal = location.take_entry();
        self.view = match location.route() {
            Route::Home => View::Prompt(PromptEngine::enter(signal, &mut self.rng)),
            Route::Connect => View::Connect(SituationSelector::new()),
        };
        self.location = location;
        self.view_id = Uuid::new_v4();
        self.entered_at = Utc::now();

        tracing::info!(
            view_id = %self.view_id,
            route = %location.route(),
            auto_started = signal.is_conversation(),
            "View entered"
        );
    }

    pub fn reload(&mut self) {
        self.navigate(self.location);
    }

    /// Parse and run one line of input. Errors become a short notice.
    pub fn handle(&mut self, input: &str) -> Outcome {
        match input.parse::<Command>().and_then(|cmd| self.dispatch(cmd)) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(input, error = %e, "Command rejected");
                Outcome::Render(format!("⚠️  {e}\n   Type ? for commands."))
            }
        }
    }

    pub fn dispatch(&mut self, cmd: Command) -> Result<Outcome, CommandError> {
        if let Some(screen) = cmd.screen() {
            if screen != self.view.route() {
                return Err(self.unavailable(&cmd));
            }
        }

        match cmd {
            Command::Quit => return Ok(Outcome::Quit),
            Command::Usage => return Ok(Outcome::Render(usage(self.view.route()))),
            Command::State => return Ok(Outcome::Render(self.snapshot_json())),
            Command::Reload => self.reload(),
            Command::Go(location) => self.navigate(location),
            Command::Help => {
                self.require_started(&cmd)?;
                self.navigate(Location::new(Route::Connect));
            }
            Command::Home => self.navigate(Location::conversation()),
            Command::Back => {
                let View::Connect(selector) = &mut self.view else {
                    return Err(self.unavailable(&cmd));
                };
                if selector.selected().is_some() {
                    selector.clear();
                } else {
                    self.navigate(Location::conversation());
                }
            }
            Command::Select(id) => {
                if let View::Connect(selector) = &mut self.view {
                    selector.select(id);
                }
            }
            Command::ToggleStarters => {
                let toggled = match &mut self.view {
                    View::Connect(selector) => selector.toggle_starters(),
                    View::Prompt(_) => None,
                };
                if toggled.is_none() {
                    return Err(self.unavailable(&cmd));
                }
            }
            Command::Start => {
                let View::Prompt(engine) = &mut self.view else {
                    return Err(self.unavailable(&cmd));
                };
                // Only the idle screen offers "Start Conversation".
                if engine.is_started() {
                    return Err(self.unavailable(&cmd));
                }
                engine.start(&mut self.rng);
            }
            Command::Next | Command::ToggleNudges | Command::ToggleListening => {
                self.require_started(&cmd)?;
                if let View::Prompt(engine) = &mut self.view {
                    match cmd {
                        Command::Next => {
                            engine.next(&mut self.rng);
                        }
                        Command::ToggleNudges => {
                            engine.toggle_nudges();
                        }
                        _ => {
                            engine.toggle_listening();
                        }
                    }
                }
            }
        }

        Ok(Outcome::Render(self.render()))
    }

    pub fn render(&self) -> String {
        match &self.view {
            View::Prompt(engine) => render_prompt(engine),
            View::Connect(selector) => render_connect(selector),
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let (prompt, situation) = match &self.view {
            View::Prompt(engine) => (Some(engine), None),
            View::Connect(selector) => (None, Some(selector)),
        };
        Snapshot {
            view_id: self.view_id,
            address: self.location.to_string(),
            route: self.view.route(),
            entered_at: self.entered_at,
            prompt,
            situation,
        }
    }

    fn snapshot_json(&self) -> String {
        serde_json::to_string_pretty(&self.snapshot())
            .unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_id(&self) -> Uuid {
        self.view_id
    }

    fn require_started(&self, cmd: &Command) -> Result<(), CommandError> {
        match &self.view {
            View::Prompt(engine) if engine.is_started() => Ok(()),
            _ => Err(self.unavailable(cmd)),
        }
    }

    fn unavailable(&self, cmd: &Command) -> CommandError {
        let screen = match &self.view {
            View::Prompt(engine) if !engine.is_started() => "start".to_string(),
            view => view.route().to_string(),
        };
        CommandError::Unavailable {
            command: cmd.name().to_string(),
            screen,
        }
    }
}
