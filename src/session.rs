//! The logged-in user's session, shared with every view through context and
//! persisted to browser local storage so a reload keeps the user signed in.

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::api::{AuthUser, LoginResponse};

const STORAGE_KEY: &str = "food-delivery-session";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: AuthUser,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.user.is_admin
    }
}

/// Restore the previous session, if local storage holds one.
pub fn load() -> Option<Session> {
    LocalStorage::get(STORAGE_KEY).ok()
}

/// The session signal provided by the application root.
pub fn use_session() -> Signal<Option<Session>> {
    use_context()
}

pub fn log_in(mut session: Signal<Option<Session>>, response: LoginResponse) {
    let entry = Session {
        token: response.access_token,
        user: response.user,
    };
    if let Err(err) = LocalStorage::set(STORAGE_KEY, &entry) {
        warn!("failed to persist session: {err}");
    }
    info!(user = %entry.user.username, "logged in");
    session.set(Some(entry));
}

pub fn log_out(mut session: Signal<Option<Session>>) {
    LocalStorage::delete(STORAGE_KEY);
    info!("logged out");
    session.set(None);
}
