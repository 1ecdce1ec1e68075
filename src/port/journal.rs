use crate::domain::{
    AccountError, AccountState, Action, DeduplicationKey, EnvelopeMetadata, TransitionEnvelope,
};

/// Journal records every dispatched action together with the states around it.
/// It lets a session be audited or rebuilt by replaying the recorded actions.
pub trait Journal {
    /// Append a transition to the log
    ///
    /// The journal constructs the TransitionEnvelope by:
    /// - Assigning the next sequence number
    /// - Adding the provided metadata
    ///
    /// Idempotent via deduplication_key - returns the existing envelope if duplicate.
    fn append(
        &mut self,
        action: Action,
        before: AccountState,
        after: AccountState,
        metadata: EnvelopeMetadata,
    ) -> Result<TransitionEnvelope, AccountError>;

    /// Find the transition recorded under a deduplication key
    fn find(&self, key: &DeduplicationKey) -> Option<TransitionEnvelope>;

    /// Replay envelopes starting from a sequence number, in order
    fn replay(&self, from_sequence: Option<u64>) -> Vec<TransitionEnvelope>;

    /// Highest assigned sequence number, `None` while empty
    fn highest_sequence(&self) -> Option<u64>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
