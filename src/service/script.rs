use crate::domain::{AccountError, AccountState, EnvelopeMetadata, RawAction};
use crate::port::Journal;
use crate::service::{AccountSession, boot};
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};

/// Replays a `type,payload` script through a fresh session.
pub struct ScriptRunner {
    session: AccountSession,
}

impl ScriptRunner {
    pub fn new() -> Self {
        Self { session: boot() }
    }

    /// Replay into an existing session, e.g. one rebuilt from a journal.
    pub fn with_session(session: AccountSession) -> Self {
        Self { session }
    }

    pub fn run_file(self, file_path: &str) -> Result<AccountSession, AccountError> {
        let file_handle = File::open(file_path)
            .map_err(|e| AccountError::Script(format!("{}: {}", file_path, e)))?;
        self.run(file_handle, file_path)
    }

    /// Replay every row of `reader`. `source` names the input in deduplication keys.
    ///
    /// Decoding problems and unknown action kinds abort the run.
    pub fn run<R: Read>(mut self, reader: R, source: &str) -> Result<AccountSession, AccountError> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        // Line 1 is the header.
        let mut line_num = 1;

        for result in rdr.deserialize() {
            line_num += 1;
            let raw: RawAction = result
                .map_err(|e| AccountError::Script(format!("line {}: {}", line_num, e)))?;

            let metadata = EnvelopeMetadata::new(format!("csv:{}:{}", source, line_num));

            if let Err(e) = self.session.dispatch_raw(raw, metadata) {
                tracing::error!(line = line_num, error = %e, "Script aborted");
                return Err(e);
            }
        }

        tracing::info!(
            rows = line_num - 1,
            recorded = self.session.journal().len(),
            "Script replayed"
        );

        Ok(self.session)
    }
}

impl Default for ScriptRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct StateRow {
    balance: i64,
    loan: i64,
    active: bool,
    loan_active: bool,
}

/// Write the account state as a one-row CSV.
pub fn output_csv<W: Write>(state: &AccountState, writer: W) -> Result<(), AccountError> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.serialize(StateRow {
        balance: state.balance,
        loan: state.loan,
        active: state.is_active,
        loan_active: state.loan_is_active,
    })
    .map_err(|e| AccountError::Script(e.to_string()))?;

    wtr.flush()
        .map_err(|e| AccountError::Script(e.to_string()))?;
    Ok(())
}

/// Write every recorded transition as one JSON object per line.
pub fn write_journal<J: Journal, W: Write>(journal: &J, mut writer: W) -> Result<(), AccountError> {
    for envelope in journal.replay(None) {
        serde_json::to_writer(&mut writer, &envelope)
            .map_err(|e| AccountError::Script(e.to_string()))?;
        writeln!(writer).map_err(|e| AccountError::Script(e.to_string()))?;
    }
    Ok(())
}
