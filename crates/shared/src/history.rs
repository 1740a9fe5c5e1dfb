use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::SessionRecord;

/// Substituted for embedded newlines when fields are read back for display.
pub const LINE_BREAK_MARKER: &str = "<br>";

const FIELD_COUNT: usize = 6;
const HEADER_ROW: [&str; FIELD_COUNT] = [
    "Timestamp",
    "Company",
    "SelfIntroduction",
    "Question1",
    "Question2",
    "Question3",
];

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history log io failure: {0}")]
    Io(#[from] io::Error),
    #[error("history log row is malformed: {0}")]
    Malformed(String),
}

impl From<csv::Error> for HistoryError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io_err) => Self::Io(io_err),
                other => Self::Malformed(format!("{other:?}")),
            }
        } else {
            Self::Malformed(err.to_string())
        }
    }
}

/// Append-only CSV log of session records. Sole owner of the backing file;
/// each append lands as one complete row, and reads snapshot whatever is on
/// disk at call time.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the log with its header row if it does not exist yet. Safe to
    /// call on every startup.
    pub fn ensure_initialized(&self) -> Result<(), HistoryError> {
        if self.path.exists() {
            return Ok(());
        }

        let mut writer = csv::Writer::from_writer(File::create(&self.path)?);
        writer.write_record(HEADER_ROW)?;
        writer.flush()?;
        Ok(())
    }

    /// Appends one record as a 6-field row, writing the header first if the
    /// log is missing.
    pub fn append(&self, record: &SessionRecord) -> Result<(), HistoryError> {
        self.ensure_initialized()?;

        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record([
            record.timestamp.as_str(),
            record.company.as_str(),
            record.self_introduction.as_str(),
            record.questions[0].as_str(),
            record.questions[1].as_str(),
            record.questions[2].as_str(),
        ])?;
        writer.flush()?;
        Ok(())
    }

    /// Reads every record, most recently appended first, with embedded
    /// newlines replaced by [`LINE_BREAK_MARKER`]. A missing log reads as
    /// empty; any other failure propagates.
    pub fn read_all_newest_first(&self) -> Result<Vec<SessionRecord>, HistoryError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        // Row width is validated in record_from_row.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut records = Vec::new();
        for row in reader.records() {
            records.push(record_from_row(&row?)?);
        }
        records.reverse();
        Ok(records)
    }
}

fn record_from_row(row: &csv::StringRecord) -> Result<SessionRecord, HistoryError> {
    if row.len() != FIELD_COUNT {
        return Err(HistoryError::Malformed(format!(
            "expected {FIELD_COUNT} fields, found {}",
            row.len()
        )));
    }

    let field = |index: usize| display_safe(&row[index]);
    Ok(SessionRecord {
        timestamp: field(0),
        company: field(1),
        self_introduction: field(2),
        questions: [field(3), field(4), field(5)],
    })
}

fn display_safe(field: &str) -> String {
    field.replace('\n', LINE_BREAK_MARKER)
}
