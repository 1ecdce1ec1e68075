mod close_account_handler;
mod deposit_handler;
mod loan_handler;
mod open_account_handler;
mod pay_loan_handler;
mod withdraw_handler;

use crate::domain::{AccountState, Action, CloseAccount, OpenAccount};
use crate::port::Transition;

impl Transition for Action {
    fn apply(&self, state: &AccountState) -> AccountState {
        if !state.is_active && !matches!(self, Action::OpenAccount) {
            return *state;
        }

        match self {
            Action::OpenAccount => OpenAccount.apply(state),
            Action::CloseAccount => CloseAccount.apply(state),
            Action::Deposit(cmd) => cmd.apply(state),
            Action::Withdraw(cmd) => cmd.apply(state),
            Action::RequestLoan(cmd) => cmd.apply(state),
            Action::PayLoan(cmd) => cmd.apply(state),
        }
    }
}
