use crate::{
    domain::{AccountState, Deposit},
    port::Transition,
};

impl Transition for Deposit {
    fn apply(&self, state: &AccountState) -> AccountState {
        AccountState {
            balance: state.balance.saturating_add(self.amount),
            ..*state
        }
    }
}
