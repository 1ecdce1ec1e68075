use crate::{
    adapter::InMemoryJournal,
    domain::{
        AccountError, AccountState, Action, EnvelopeMetadata, JournalError, RawAction,
        TransitionEnvelope,
    },
    port::Journal,
    service::transition,
};

/// Caller-held owner of the account state.
///
/// The session is the only place the state lives between dispatches; each
/// dispatch swaps it for the value the reducer returns and records the step in
/// the journal.
pub struct AccountSession<J: Journal = InMemoryJournal> {
    state: AccountState,
    journal: J,
}

impl AccountSession<InMemoryJournal> {
    pub fn new() -> Self {
        Self::with_journal(InMemoryJournal::new())
    }
}

impl Default for AccountSession<InMemoryJournal> {
    fn default() -> Self {
        Self::new()
    }
}

impl<J: Journal> AccountSession<J> {
    /// Start from the initial state with the given (empty) journal.
    pub fn with_journal(journal: J) -> Self {
        Self {
            state: AccountState::INITIAL,
            journal,
        }
    }

    /// Rebuild a session by replaying every recorded action from the initial state.
    ///
    /// Fails if sequence numbers have gaps or if a recorded state disagrees with
    /// the replayed one.
    pub fn rebuild(journal: J) -> Result<Self, AccountError> {
        let mut state = AccountState::INITIAL;

        for (expected, envelope) in (1u64..).zip(journal.replay(None)) {
            if envelope.sequence_nr != expected {
                return Err(JournalError::SequenceGap {
                    expected,
                    found: envelope.sequence_nr,
                }
                .into());
            }

            let next = transition(&state, &envelope.action);
            if envelope.before != state || envelope.after != next {
                return Err(JournalError::Divergence(envelope.sequence_nr).into());
            }
            state = next;
        }

        Ok(Self { state, journal })
    }

    pub fn state(&self) -> &AccountState {
        &self.state
    }

    pub fn journal(&self) -> &J {
        &self.journal
    }

    pub fn into_journal(self) -> J {
        self.journal
    }

    /// Apply an action and record it.
    ///
    /// A dispatch whose deduplication key was already recorded is not applied
    /// again; the recorded envelope is returned instead.
    pub fn dispatch(
        &mut self,
        action: Action,
        metadata: EnvelopeMetadata,
    ) -> Result<TransitionEnvelope, AccountError> {
        if let Some(recorded) = self.journal.find(&metadata.deduplication_key) {
            tracing::warn!(
                key = metadata.deduplication_key.as_str(),
                sequence_nr = recorded.sequence_nr,
                "Dispatch already recorded, skipping"
            );
            return Ok(recorded);
        }

        let before = self.state;
        let after = transition(&before, &action);
        let envelope = self.journal.append(action, before, after, metadata)?;
        self.state = after;

        Ok(envelope)
    }

    /// Decode a wire action and dispatch it. An unknown kind leaves the session untouched.
    pub fn dispatch_raw(
        &mut self,
        raw: RawAction,
        metadata: EnvelopeMetadata,
    ) -> Result<TransitionEnvelope, AccountError> {
        let action = Action::try_from(raw)?;
        self.dispatch(action, metadata)
    }
}
