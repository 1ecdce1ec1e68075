//! Text front-end for the account: what the buttons and dropdowns of a UI
//! would do, reduced to lines on a terminal.

use crate::domain::{AccountState, ActionKind, ConsoleError, EnvelopeMetadata, RawAction};
use crate::service::boot;
use std::io::{BufRead, Write};

/// Amounts offered for deposit, withdrawal and loan requests.
pub const PAYLOAD_MENU: [i64; 6] = [100, 200, 500, 1000, 2000, 5000];

/// The pay-loan control always sends this amount, whatever the loan is.
pub const PAY_LOAN_PAYLOAD: i64 = 5000;

/// Which controls are enabled for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub open_account: bool,
    pub deposit: bool,
    pub withdraw: bool,
    pub request_loan: bool,
    pub pay_loan: bool,
    pub close_account: bool,
}

impl Controls {
    pub fn for_state(state: &AccountState) -> Self {
        let active = state.is_active;
        Self {
            open_account: !active,
            deposit: active,
            withdraw: active,
            request_loan: active,
            pay_loan: active,
            close_account: active,
        }
    }

    pub fn is_enabled(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::OpenAccount => self.open_account,
            ActionKind::CloseAccount => self.close_account,
            ActionKind::Deposit => self.deposit,
            ActionKind::Withdraw => self.withdraw,
            ActionKind::RequestLoan => self.request_loan,
            ActionKind::PayLoan => self.pay_loan,
        }
    }
}

fn label(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::OpenAccount => "Open account",
        ActionKind::CloseAccount => "Close account",
        ActionKind::Deposit => "Deposit",
        ActionKind::Withdraw => "Withdraw",
        ActionKind::RequestLoan => "Request loan",
        ActionKind::PayLoan => "Pay loan",
    }
}

fn command_word(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::OpenAccount => "open",
        ActionKind::CloseAccount => "close",
        ActionKind::Deposit => "deposit",
        ActionKind::Withdraw => "withdraw",
        ActionKind::RequestLoan => "loan",
        ActionKind::PayLoan => "pay",
    }
}

pub fn render(state: &AccountState) -> String {
    let controls = Controls::for_state(state);

    let mut out = String::from("Bank Account\n");
    out.push_str(&format!("Balance: {}\n", state.balance));
    out.push_str(&format!("Loan: {}\n", state.loan));

    for kind in ActionKind::ALL {
        let status = if controls.is_enabled(kind) {
            ""
        } else {
            " (disabled)"
        };
        out.push_str(&format!(
            "  {:<9} {}{}\n",
            command_word(kind),
            label(kind),
            status
        ));
    }

    out
}

/// Turn one line of console input into a wire action.
///
/// `pay` takes no amount: it always sends [`PAY_LOAN_PAYLOAD`]. Amounts for the
/// other payload actions must come from [`PAYLOAD_MENU`]. Anything after the
/// expected words is rejected.
pub fn parse_command(line: &str) -> Result<RawAction, ConsoleError> {
    let mut words = line.split_whitespace();
    let word = words.next().ok_or(ConsoleError::Empty)?;

    let kind = ActionKind::ALL
        .into_iter()
        .find(|kind| command_word(*kind) == word)
        .ok_or_else(|| ConsoleError::UnknownCommand(word.to_string()))?;

    let payload = match kind {
        ActionKind::OpenAccount | ActionKind::CloseAccount => None,
        ActionKind::PayLoan => Some(PAY_LOAN_PAYLOAD),
        _ => {
            let text = words.next().ok_or(ConsoleError::MissingAmount(label(kind)))?;
            let amount: i64 = text
                .parse()
                .map_err(|_| ConsoleError::InvalidAmount(text.to_string()))?;
            if !PAYLOAD_MENU.contains(&amount) {
                return Err(ConsoleError::NotOnMenu(amount));
            }
            Some(amount)
        }
    };

    let rest: Vec<&str> = words.collect();
    if !rest.is_empty() {
        return Err(ConsoleError::TrailingInput(rest.join(" ")));
    }

    Ok(RawAction::new(kind.tag(), payload))
}

/// Run the interactive loop until `quit` or end of input. Returns the final state.
pub fn run_console<R: BufRead, W: Write>(
    input: R,
    mut output: W,
) -> std::io::Result<AccountState> {
    let mut session = boot();
    let mut counter = 0u64;

    write!(output, "{}", render(session.state()))?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line == "quit" || line == "exit" {
            break;
        }

        let raw = match parse_command(line) {
            Ok(raw) => raw,
            Err(ConsoleError::Empty) => continue,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        // Console commands only produce known kinds.
        let enabled = ActionKind::from_tag(&raw.kind)
            .map(|kind| (kind, Controls::for_state(session.state()).is_enabled(kind)));
        if let Some((kind, false)) = enabled {
            writeln!(output, "{}", ConsoleError::Disabled(label(kind)))?;
            continue;
        }

        counter += 1;
        match session.dispatch_raw(raw, EnvelopeMetadata::new(format!("console:{}", counter))) {
            Ok(_) => write!(output, "{}", render(session.state()))?,
            Err(e) => writeln!(output, "{}", e)?,
        }
    }

    Ok(*session.state())
}
