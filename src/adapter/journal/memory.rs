use crate::{
    domain::{
        AccountError, AccountState, Action, DeduplicationKey, EnvelopeMetadata, TransitionEnvelope,
    },
    port::Journal,
};
use std::collections::HashMap;

/// In-memory journal implementation
///
/// Owned by a single session, so plain `&mut self` access is enough.
#[derive(Debug, Default)]
pub struct InMemoryJournal {
    envelopes: Vec<TransitionEnvelope>,
    deduplication_index: HashMap<DeduplicationKey, usize>,
    sequence_counter: u64,
}

impl InMemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Journal for InMemoryJournal {
    fn append(
        &mut self,
        action: Action,
        before: AccountState,
        after: AccountState,
        metadata: EnvelopeMetadata,
    ) -> Result<TransitionEnvelope, AccountError> {
        if let Some(&index) = self.deduplication_index.get(&metadata.deduplication_key) {
            tracing::warn!(
                key = metadata.deduplication_key.as_str(),
                "Duplicate dispatch, returning recorded transition"
            );
            return Ok(self.envelopes[index].clone());
        }

        self.sequence_counter += 1;

        let envelope = TransitionEnvelope {
            sequence_nr: self.sequence_counter,
            action,
            timestamp: metadata.timestamp,
            deduplication_key: metadata.deduplication_key.clone(),
            before,
            after,
        };

        self.deduplication_index
            .insert(metadata.deduplication_key, self.envelopes.len());
        self.envelopes.push(envelope.clone());

        Ok(envelope)
    }

    fn find(&self, key: &DeduplicationKey) -> Option<TransitionEnvelope> {
        self.deduplication_index
            .get(key)
            .map(|&index| self.envelopes[index].clone())
    }

    fn replay(&self, from_sequence: Option<u64>) -> Vec<TransitionEnvelope> {
        let from = from_sequence.unwrap_or(0);

        self.envelopes
            .iter()
            .filter(|e| e.sequence_nr >= from)
            .cloned()
            .collect()
    }

    fn highest_sequence(&self) -> Option<u64> {
        if self.sequence_counter == 0 {
            None
        } else {
            Some(self.sequence_counter)
        }
    }

    fn len(&self) -> usize {
        self.envelopes.len()
    }
}
