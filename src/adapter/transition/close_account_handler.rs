use crate::{
    domain::{AccountState, CloseAccount},
    port::Transition,
};

impl Transition for CloseAccount {
    fn apply(&self, state: &AccountState) -> AccountState {
        // Only the activation flag moves; loan_is_active and can_close survive the close.
        AccountState {
            is_active: !state.is_settled(),
            ..*state
        }
    }
}
