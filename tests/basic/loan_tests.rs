use crate::context::*;
use bank::domain::{AccountPhase, Action, LoanPhase};

#[test]
fn test_request_loan_credits_balance() {
    let mut ctx = TestContext::opened();

    ctx.dispatch(Action::request_loan(1000));

    ctx.assert_state(1500, 1000, true);
    ctx.assert_loan_flag(true);
    assert_eq!(
        ctx.state().phase(),
        AccountPhase::Open(LoanPhase::LoanOutstanding)
    );
}

#[test]
fn test_second_loan_request_is_ignored() {
    let mut ctx = TestContext::opened();
    ctx.dispatch(Action::request_loan(1000));

    ctx.dispatch(Action::request_loan(500));

    ctx.assert_state(1500, 1000, true);
    ctx.assert_loan_flag(true);
}

#[test]
fn test_zero_loan_request_only_sets_flag() {
    let mut ctx = TestContext::opened();

    ctx.dispatch(Action::request_loan(0));

    ctx.assert_state(500, 0, true);
    ctx.assert_loan_flag(true);

    // The flag now blocks the credit of a real request while the loan is recorded.
    ctx.dispatch(Action::request_loan(1000));
    ctx.assert_state(500, 1000, true);
}

#[test]
fn test_full_repayment() {
    let mut ctx = TestContext::opened();
    ctx.dispatch(Action::request_loan(2000));

    ctx.dispatch(Action::pay_loan(2000));

    ctx.assert_state(500, 0, true);
    ctx.assert_loan_flag(false);
    assert_eq!(ctx.state().phase(), AccountPhase::Open(LoanPhase::NoLoan));
}

#[test]
fn test_overpayment_floors_loan_and_debits_loan_only() {
    let mut ctx = TestContext::opened();
    ctx.dispatch(Action::request_loan(1000));

    ctx.dispatch(Action::pay_loan(5000));

    ctx.assert_state(500, 0, true);
}

#[test]
fn test_partial_repayment_debits_whole_loan() {
    let mut ctx = TestContext::opened();
    ctx.dispatch(Action::request_loan(1000));

    ctx.dispatch(Action::pay_loan(200));

    // Loan drops by the payment, balance drops by the full original loan.
    ctx.assert_state(500, 800, true);
    ctx.assert_loan_flag(false);
}

#[test]
fn test_second_repayment_leaves_balance() {
    let mut ctx = TestContext::opened();
    ctx.dispatch(Action::request_loan(1000));
    ctx.dispatch(Action::pay_loan(200));

    ctx.dispatch(Action::pay_loan(800));

    ctx.assert_state(500, 0, true);
}

#[test]
fn test_request_after_partial_repayment_credits_again() {
    let mut ctx = TestContext::opened();
    ctx.dispatch(Action::request_loan(1000));
    ctx.dispatch(Action::pay_loan(200));

    ctx.dispatch(Action::request_loan(2000));

    // Loan is kept because one is still outstanding, yet the balance is credited.
    ctx.assert_state(2500, 800, true);
    ctx.assert_loan_flag(true);
}

#[test]
fn test_repayment_without_loan() {
    let mut ctx = TestContext::opened();

    ctx.dispatch(Action::pay_loan(5000));

    ctx.assert_state(500, 0, true);
    ctx.assert_loan_flag(false);
}

#[test]
fn test_repayment_can_leave_negative_balance() {
    let mut ctx = TestContext::opened();
    ctx.dispatch(Action::request_loan(2000));
    ctx.dispatch(Action::withdraw(2500));

    ctx.dispatch(Action::pay_loan(5000));

    ctx.assert_state(-2000, 0, true);

    // Not closable with a negative balance.
    ctx.dispatch(Action::CloseAccount);
    ctx.assert_state(-2000, 0, true);
}
