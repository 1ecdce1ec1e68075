use crate::service::AccountSession;

/// Set up a fresh account session backed by an in-memory journal.
pub fn boot() -> AccountSession {
    let session = AccountSession::new();

    tracing::info!(state = ?session.state(), "Account session initialized");

    session
}
