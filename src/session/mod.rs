//! Session state
//!
//! A session records which database the caller has selected. Selecting a
//! database is what entitles the caller to a connection: data handlers ask
//! [`Session::acquire`] for a [`ScopedConnection`] and drop it before they
//! return, so a session never has more than one connection open.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Action, During, Result, SqlterpError};
use crate::storage::{ScopedConnection, Store};

/// Connection lifecycle of a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Disconnected,
    Connected(String),
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Disconnected => write!(f, "disconnected"),
            SessionState::Connected(name) => write!(f, "connected to {}", name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn selected_database(&self) -> Option<&str> {
        match &self.state {
            SessionState::Connected(name) => Some(name),
            SessionState::Disconnected => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.state, SessionState::Connected(_))
    }

    /// Switch to `name`, closing any prior connection first
    pub fn select(&mut self, name: &str) {
        self.close();
        tracing::debug!(database = name, "selected database");
        self.state = SessionState::Connected(name.to_string());
    }

    /// Close the connection, returning the database it pointed at
    pub fn close(&mut self) -> Option<String> {
        match std::mem::take(&mut self.state) {
            SessionState::Connected(name) => {
                tracing::debug!(database = %name, "closed connection");
                Some(name)
            }
            SessionState::Disconnected => None,
        }
    }

    /// Close the connection only if it targets `name`
    pub fn close_if_selected(&mut self, name: &str) -> bool {
        if self.selected_database() == Some(name) {
            self.close();
            true
        } else {
            false
        }
    }

    /// Open a connection to the selected database for one handler call
    pub fn acquire(&self, store: &Store, action: Action) -> Result<ScopedConnection> {
        let name = self
            .selected_database()
            .ok_or(SqlterpError::NoDatabaseSelected)?;
        store.connect(name).during(action)
    }
}
