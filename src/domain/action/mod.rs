use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::AccountError;

/// Flat wire form of an action: `{"type": "deposit", "payload": 200}` in JSON,
/// or a `type,payload` row in a script file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: Option<i64>,
}

impl RawAction {
    pub fn new(kind: impl Into<String>, payload: Option<i64>) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    OpenAccount,
    CloseAccount,
    Deposit,
    Withdraw,
    RequestLoan,
    PayLoan,
}

impl ActionKind {
    pub const ALL: [ActionKind; 6] = [
        ActionKind::OpenAccount,
        ActionKind::CloseAccount,
        ActionKind::Deposit,
        ActionKind::Withdraw,
        ActionKind::RequestLoan,
        ActionKind::PayLoan,
    ];

    /// Tag used on the wire. Matching is exact.
    pub fn tag(&self) -> &'static str {
        match self {
            ActionKind::OpenAccount => "openAccount",
            ActionKind::CloseAccount => "closeAccount",
            ActionKind::Deposit => "deposit",
            ActionKind::Withdraw => "withdraw",
            ActionKind::RequestLoan => "loan",
            ActionKind::PayLoan => "payLoan",
        }
    }

    pub fn from_tag(tag: &str) -> Option<ActionKind> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub fn takes_payload(&self) -> bool {
        !matches!(self, ActionKind::OpenAccount | ActionKind::CloseAccount)
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
/// A request to change the account. Payload-carrying actions wrap a struct so
/// each one can carry its own transition rule.
pub enum Action {
    OpenAccount,
    CloseAccount,
    Deposit(Deposit),
    Withdraw(Withdraw),
    #[serde(rename = "loan")]
    RequestLoan(RequestLoan),
    PayLoan(PayLoan),
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawAction::deserialize(deserializer)?;
        raw.try_into().map_err(serde::de::Error::custom)
    }
}

impl TryFrom<RawAction> for Action {
    type Error = AccountError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let kind = ActionKind::from_tag(&raw.kind)
            .ok_or_else(|| AccountError::UnknownAction(raw.kind.clone()))?;

        // Payloads on open/close are ignored.
        let amount = match (kind.takes_payload(), raw.payload) {
            (true, None) => return Err(AccountError::MissingPayload(kind)),
            (true, Some(amount)) => amount,
            (false, _) => 0,
        };

        match kind {
            ActionKind::OpenAccount => Ok(Self::OpenAccount),
            ActionKind::CloseAccount => Ok(Self::CloseAccount),
            ActionKind::Deposit => Ok(Self::Deposit(Deposit { amount })),
            ActionKind::Withdraw => Ok(Self::Withdraw(Withdraw { amount })),
            ActionKind::RequestLoan => Ok(Self::RequestLoan(RequestLoan { amount })),
            ActionKind::PayLoan => Ok(Self::PayLoan(PayLoan { amount })),
        }
    }
}

impl From<&Action> for RawAction {
    fn from(action: &Action) -> Self {
        RawAction::new(action.kind().tag(), action.payload())
    }
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::OpenAccount => ActionKind::OpenAccount,
            Action::CloseAccount => ActionKind::CloseAccount,
            Action::Deposit(_) => ActionKind::Deposit,
            Action::Withdraw(_) => ActionKind::Withdraw,
            Action::RequestLoan(_) => ActionKind::RequestLoan,
            Action::PayLoan(_) => ActionKind::PayLoan,
        }
    }

    pub fn payload(&self) -> Option<i64> {
        match self {
            Action::OpenAccount | Action::CloseAccount => None,
            Action::Deposit(cmd) => Some(cmd.amount),
            Action::Withdraw(cmd) => Some(cmd.amount),
            Action::RequestLoan(cmd) => Some(cmd.amount),
            Action::PayLoan(cmd) => Some(cmd.amount),
        }
    }

    pub fn deposit(amount: i64) -> Self {
        Self::Deposit(Deposit { amount })
    }

    pub fn withdraw(amount: i64) -> Self {
        Self::Withdraw(Withdraw { amount })
    }

    pub fn request_loan(amount: i64) -> Self {
        Self::RequestLoan(RequestLoan { amount })
    }

    pub fn pay_loan(amount: i64) -> Self {
        Self::PayLoan(PayLoan { amount })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Activate the account with the opening deposit. The only action that is
/// honoured on an inactive account.
pub struct OpenAccount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Deactivate the account, provided it holds no money and no loan.
pub struct CloseAccount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Credit the balance by the payload.
pub struct Deposit {
    #[serde(rename = "payload")]
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Debit the balance by the payload. The balance floors at zero instead of
/// going negative.
pub struct Withdraw {
    #[serde(rename = "payload")]
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Register a loan and credit its amount to the balance. Only the first
/// request in a cycle moves money; later ones only re-arm the loan-active flag.
pub struct RequestLoan {
    #[serde(rename = "payload")]
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Repay the outstanding loan.
///
/// The loan is reduced by the payload and floors at zero, but the balance is
/// debited by the whole pre-payment loan, and only if the loan-active flag is
/// still set. A partial repayment therefore costs the full loan.
pub struct PayLoan {
    #[serde(rename = "payload")]
    pub amount: i64,
}
