use crate::domain::AccountState;

/// Transition computes the next account state from the current one.
///
/// `apply` is a pure function: it never mutates its input and never fails.
/// Rule violations are expressed by returning the input unchanged.
pub trait Transition {
    fn apply(&self, state: &AccountState) -> AccountState;
}
