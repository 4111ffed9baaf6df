use client::{ListStatus, user::UserRecord};
use log::{debug, warn};

use crate::AppContext;

/// The single store slice: the last successfully fetched user list. No
/// incremental merge; every successful fetch replaces the snapshot
/// wholesale.
#[derive(Debug, Clone)]
pub struct AppState {
    status: ListStatus,
    users: Option<Vec<UserRecord>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            status: ListStatus::Loading,
            users: None,
        }
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    pub fn users(&self) -> Option<&[UserRecord]> {
        self.users.as_deref()
    }

    pub fn set_users(&mut self, users: Vec<UserRecord>) {
        self.users = Some(users);
        self.status = ListStatus::Loaded;
    }

    pub fn mark_failed(&mut self) {
        self.status = ListStatus::Failed;
    }

    /// Drop the held collection and return to the pre-fetch state.
    pub fn reset(&mut self) {
        self.users = None;
        self.status = ListStatus::Loading;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the expanded user list and publish it to the store. Called once
/// on first page load and exactly once whenever a create or follow
/// mutation settles, success or failure.
pub async fn refresh_users(context: &AppContext) {
    match context.directory.list_users().await {
        Ok(users) => {
            debug!("fetched {} users", users.len());
            context.state.lock().set_users(users);
        }
        Err(e) => {
            warn!("failed to fetch user list: {e}");
            let mut state = context.state.lock();
            // A stale snapshot keeps rendering; only an empty store is
            // marked failed.
            if state.users().is_none() {
                state.mark_failed();
            }
        }
    }
}
