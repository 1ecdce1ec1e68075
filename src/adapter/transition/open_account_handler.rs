use crate::{
    domain::{AccountState, OPENING_DEPOSIT, OpenAccount},
    port::Transition,
};

impl Transition for OpenAccount {
    fn apply(&self, state: &AccountState) -> AccountState {
        // Re-opening an already active account also resets the balance.
        AccountState {
            is_active: true,
            balance: OPENING_DEPOSIT,
            ..*state
        }
    }
}
