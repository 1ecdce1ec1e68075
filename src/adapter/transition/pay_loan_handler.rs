use crate::{
    domain::{AccountState, PayLoan},
    port::Transition,
};

impl Transition for PayLoan {
    fn apply(&self, state: &AccountState) -> AccountState {
        tracing::debug!(loan = state.loan, payment = self.amount, "Repaying loan");

        let loan = state.loan.saturating_sub(self.amount).max(0);

        // Debits the full pre-payment loan, not the payment, and may leave the
        // balance negative.
        let balance = if state.loan_is_active {
            state.balance.saturating_sub(state.loan)
        } else {
            state.balance
        };

        AccountState {
            loan,
            balance,
            loan_is_active: false,
            ..*state
        }
    }
}
