use crate::{
    domain::{AccountState, Withdraw},
    port::Transition,
};

impl Transition for Withdraw {
    fn apply(&self, state: &AccountState) -> AccountState {
        // Floors at zero, which also clears a balance that was already negative.
        AccountState {
            balance: state.balance.saturating_sub(self.amount).max(0),
            ..*state
        }
    }
}
