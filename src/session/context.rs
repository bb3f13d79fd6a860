use crate::config::Config;
use crate::session::converter::{ConverterSession, Outcome, SessionError};
use crate::units::Domain;
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Converter(Domain),
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::MainMenu => write!(f, "main menu"),
            Screen::Converter(domain) => write!(f, "{} converter", domain),
        }
    }
}

/// Application state handed to whatever needs to change screens.
///
/// Opening a converter always starts a fresh session, so its history lives
/// exactly as long as the screen stays open.
pub struct AppContext {
    config: Config,
    screen: Screen,
    session: Option<ConverterSession>,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            screen: Screen::MainMenu,
            session: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn navigate(&mut self, screen: Screen) {
        let discarded = self.session.as_ref().map_or(0, |s| s.history().len());
        self.session = match screen {
            Screen::MainMenu => None,
            Screen::Converter(domain) => Some(ConverterSession::new(domain, &self.config)),
        };
        info!(from = %self.screen, to = %screen, discarded, "navigate");
        self.screen = screen;
    }

    pub fn session(&self) -> Option<&ConverterSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Result<&mut ConverterSession, SessionError> {
        self.session.as_mut().ok_or(SessionError::NoActiveConverter)
    }

    pub fn submit(&mut self, text: &str) -> Result<Outcome, SessionError> {
        self.session_mut()?.submit(text)
    }
}
