use crate::{
    domain::{AccountError, AccountState, Action, RawAction},
    port::Transition,
};

/// Compute the next state for an action. Pure and total.
pub fn transition(state: &AccountState, action: &Action) -> AccountState {
    let next = action.apply(state);

    tracing::debug!(
        action = %action.kind(),
        payload = ?action.payload(),
        balance = next.balance,
        loan = next.loan,
        active = next.is_active,
        "Transition applied"
    );

    next
}

/// Decode a wire action and apply it.
///
/// An unrecognised action kind is a programming error on the caller's side and
/// is the only way this fails.
pub fn dispatch(state: &AccountState, raw: RawAction) -> Result<AccountState, AccountError> {
    let action = Action::try_from(raw)?;
    Ok(transition(state, &action))
}
