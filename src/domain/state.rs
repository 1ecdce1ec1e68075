use serde::{Deserialize, Serialize};

/// Balance credited when an account is opened.
pub const OPENING_DEPOSIT: i64 = 500;

/// Snapshot of the account. Every transition produces a new value; nothing is
/// mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountState {
    /// May go negative after a loan repayment, never after a withdrawal.
    pub balance: i64,
    /// Nonzero exactly while a loan is outstanding.
    pub loan: i64,
    pub is_active: bool,
    /// Reserved. Carried from the initial value, never read or written by a transition.
    pub can_close: bool,
    /// Set by every loan request, cleared by every repayment. Not the same thing
    /// as `loan != 0`.
    pub loan_is_active: bool,
}

impl AccountState {
    pub const INITIAL: AccountState = AccountState {
        balance: 0,
        loan: 0,
        is_active: false,
        can_close: true,
        loan_is_active: false,
    };

    pub fn phase(&self) -> AccountPhase {
        if !self.is_active {
            AccountPhase::Closed
        } else if self.loan == 0 {
            AccountPhase::Open(LoanPhase::NoLoan)
        } else {
            AccountPhase::Open(LoanPhase::LoanOutstanding)
        }
    }

    /// Closing is only honoured on an empty, loan-free account.
    pub fn is_settled(&self) -> bool {
        self.balance == 0 && self.loan == 0
    }
}

impl Default for AccountState {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountPhase {
    Closed,
    Open(LoanPhase),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanPhase {
    NoLoan,
    LoanOutstanding,
}
