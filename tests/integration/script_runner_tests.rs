use bank::domain::{AccountError, Action, EnvelopeMetadata};
use bank::port::Journal;
use bank::service::{AccountSession, ScriptRunner, mock::generator, output_csv, write_journal};
use std::io::Write;
use tempfile::NamedTempFile;

fn script(lines: &[&str]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "type,payload").unwrap();
    for line in lines {
        writeln!(temp_file, "{}", line).unwrap();
    }
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_replay_full_cycle() {
    let file = script(&[
        "openAccount,",
        "deposit,500",
        "loan,2000",
        "payLoan,2000",
        "withdraw,1000",
        "closeAccount,",
    ]);

    let session = ScriptRunner::new()
        .run_file(file.path().to_str().unwrap())
        .unwrap();

    let state = session.state();
    assert_eq!(state.balance, 0);
    assert_eq!(state.loan, 0);
    assert!(!state.is_active);
    assert_eq!(session.journal().len(), 6);
}

#[test]
fn test_rows_before_open_are_noops() {
    let file = script(&["deposit,1000", "loan,5000", "openAccount,", "deposit,100"]);

    let session = ScriptRunner::new()
        .run_file(file.path().to_str().unwrap())
        .unwrap();

    assert_eq!(session.state().balance, 600);
    assert_eq!(session.state().loan, 0);
    let changed = session
        .journal()
        .replay(None)
        .iter()
        .filter(|e| e.changed())
        .count();
    assert_eq!(changed, 2);
}

#[test]
fn test_unknown_action_aborts_run() {
    let file = script(&["openAccount,", "transfer,100", "deposit,100"]);

    let result = ScriptRunner::new().run_file(file.path().to_str().unwrap());

    assert!(matches!(result, Err(AccountError::UnknownAction(kind)) if kind == "transfer"));
}

#[test]
fn test_missing_payload_aborts_run() {
    let file = script(&["openAccount,", "deposit,"]);

    let result = ScriptRunner::new().run_file(file.path().to_str().unwrap());

    assert!(matches!(result, Err(AccountError::MissingPayload(_))));
}

#[test]
fn test_malformed_payload_is_a_script_error() {
    let file = script(&["openAccount,", "deposit,lots"]);

    let result = ScriptRunner::new().run_file(file.path().to_str().unwrap());

    match result {
        Err(AccountError::Script(message)) => assert!(message.starts_with("line 3")),
        _ => panic!("Expected script error"),
    }
}

#[test]
fn test_missing_file() {
    let result = ScriptRunner::new().run_file("/definitely/not/here.csv");
    assert!(matches!(result, Err(AccountError::Script(_))));
}

#[test]
fn test_run_continues_an_existing_session() {
    let mut session = AccountSession::new();
    session
        .dispatch(Action::OpenAccount, EnvelopeMetadata::new("setup"))
        .unwrap();

    let session = ScriptRunner::with_session(session)
        .run("type,payload\ndeposit,200\n".as_bytes(), "inline")
        .unwrap();

    assert_eq!(session.state().balance, 700);
}

#[test]
fn test_output_csv() {
    let file = script(&["openAccount,", "loan,1000", "payLoan,200"]);
    let session = ScriptRunner::new()
        .run_file(file.path().to_str().unwrap())
        .unwrap();

    let mut out = Vec::new();
    output_csv(session.state(), &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "balance,loan,active,loan_active\n500,800,true,false\n"
    );
}

#[test]
fn test_write_journal_as_json_lines() {
    let file = script(&["openAccount,", "deposit,200"]);
    let session = ScriptRunner::new()
        .run_file(file.path().to_str().unwrap())
        .unwrap();

    let mut out = Vec::new();
    write_journal(session.journal(), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["sequence_nr"], 2);
    assert_eq!(lines[1]["action"]["type"], "deposit");
    assert_eq!(lines[1]["after"]["balance"], 700);
    assert_eq!(lines[1]["after"]["is_active"], true);
    assert_eq!(lines[1]["after"]["loan_is_active"], false);
    assert!(lines[1]["deduplication_key"].as_str().unwrap().starts_with("csv:"));
    assert!(lines[1]["after"].get("isActive").is_none());
}

#[test]
fn test_generated_script_replays() {
    let output = NamedTempFile::new().unwrap();
    let path = output.path().to_str().unwrap().to_string();

    generator(&path, 200).unwrap();
    let session = ScriptRunner::new().run_file(&path).unwrap();

    assert_eq!(session.journal().len(), 200);
    let first = &session.journal().replay(None)[0];
    assert_eq!(first.action, Action::OpenAccount);

    let expected = *session.state();
    let rebuilt = AccountSession::rebuild(session.into_journal()).unwrap();
    assert_eq!(*rebuilt.state(), expected);
    assert_eq!(rebuilt.journal().highest_sequence(), Some(200));
}
