use crate::{
    domain::{AccountState, RequestLoan},
    port::Transition,
};

impl Transition for RequestLoan {
    fn apply(&self, state: &AccountState) -> AccountState {
        let loan = if state.loan == 0 && self.amount != 0 {
            self.amount
        } else {
            state.loan
        };

        // The credit is keyed on the flag, not on the loan amount: after a partial
        // repayment the flag is clear while a loan is still outstanding, and a new
        // request credits the balance again without changing the loan.
        let balance = if state.loan_is_active {
            state.balance
        } else {
            state.balance.saturating_add(self.amount)
        };

        AccountState {
            loan,
            balance,
            loan_is_active: true,
            ..*state
        }
    }
}
