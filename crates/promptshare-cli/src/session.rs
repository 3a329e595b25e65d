//! Session - Explicit signed-in identity
//!
//! The auth provider is external; the CLI builds a session from its
//! config and hands it to the controllers that need one.

use uuid::Uuid;

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    Authenticated,
    Unauthenticated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: Uuid,
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    status: AuthStatus,
    user: Option<SessionUser>,
}

impl Session {
    pub fn loading() -> Self {
        Self {
            status: AuthStatus::Loading,
            user: None,
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            status: AuthStatus::Unauthenticated,
            user: None,
        }
    }

    pub fn authenticated(user: SessionUser) -> Self {
        Self {
            status: AuthStatus::Authenticated,
            user: Some(user),
        }
    }

    /// Signed in when both an API key and a user id are configured
    pub fn from_config(config: &Config) -> Self {
        match (&config.api_key, config.user_id) {
            (Some(_), Some(id)) => Self::authenticated(SessionUser {
                id,
                username: config.username.clone(),
            }),
            _ => Self::unauthenticated(),
        }
    }

    pub fn status(&self) -> AuthStatus {
        self.status
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// User id, only once authentication has resolved
    pub fn authenticated_user_id(&self) -> Option<Uuid> {
        match self.status {
            AuthStatus::Authenticated => self.user.as_ref().map(|u| u.id),
            AuthStatus::Loading | AuthStatus::Unauthenticated => None,
        }
    }
}
