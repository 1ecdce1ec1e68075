use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ActionKind;

/// Failures that stop a dispatch. Business-rule violations (inactive account,
/// second loan, closing with money left) are not errors: the transition simply
/// hands back the state it was given.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountError {
    #[error("Action unknown: {0}")]
    UnknownAction(String),
    #[error("Action {0} requires a payload")]
    MissingPayload(ActionKind),
    #[error("Script error: {0}")]
    Script(String),
    #[error(transparent)]
    Journal(#[from] JournalError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JournalError {
    #[error("Sequence gap: expected {expected}, found {found}")]
    SequenceGap { expected: u64, found: u64 },
    #[error("Replayed state diverges from recorded state at sequence {0}")]
    Divergence(u64),
}

/// Input the console front-end could not turn into an action. Reported to the
/// user and skipped; never reaches the reducer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("Empty input")]
    Empty,
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("{0} needs an amount")]
    MissingAmount(&'static str),
    #[error("Not a number: {0}")]
    InvalidAmount(String),
    #[error("{0} is not on the menu")]
    NotOnMenu(i64),
    #[error("Unexpected input after command: {0}")]
    TrailingInput(String),
    #[error("{0} is disabled")]
    Disabled(&'static str),
}
