use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AccountState, Action};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct DeduplicationKey(String);

impl DeduplicationKey {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Metadata the caller attaches to a dispatch.
///
/// The key identifies the dispatch instance so that a replayed input
/// (e.g. the same script line read twice) is recorded once:
/// "csv:script.csv:12", "console:3".
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeMetadata {
    pub deduplication_key: DeduplicationKey,
    pub timestamp: DateTime<Utc>,
}

impl EnvelopeMetadata {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            deduplication_key: DeduplicationKey::new(key),
            timestamp: Utc::now(),
        }
    }
}

/// One recorded transition with the states on either side of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEnvelope {
    /// Starts at 1, no gaps.
    pub sequence_nr: u64,
    pub action: Action,
    pub timestamp: DateTime<Utc>,
    pub deduplication_key: DeduplicationKey,
    pub before: AccountState,
    pub after: AccountState,
}

impl TransitionEnvelope {
    /// False when the action was a business-rule no-op.
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}
