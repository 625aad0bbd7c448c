//! Append-only durable log of tracking sessions and note markers.
//!
//! One logical entry spans a start fragment written when tracking begins and
//! a stop fragment appended when it ends; note-marker lines are the only
//! writes that terminate a row. The log never seeks, truncates or rewrites
//! prior bytes. Every append opens the file fresh in append mode and writes
//! synchronously, so a crash can lose at most the record being written.

use crate::core::clock::Timestamp;
use crate::core::elapsed::Elapsed;
use crate::core::error::EngineError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Literal written in place of a speech-to-text transcription; the device
/// records audio separately and this marks the row that owns it.
pub const NOTE_MARKER: &str = "'Speech to text voice note'";

/// Stamp field written when the clock was unavailable at capture time.
pub const INCOMPLETE_STAMP: &str = "incomplete";

/// Appends structured session records to a durable text sink.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        ActivityLog {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a tracking row: `<zone>,<date>_<h>:<m>:<s>,`.
    ///
    /// A `None` stamp marks the row timestamp-incomplete (the clock was
    /// unreachable when the session started).
    pub fn append_start(&self, stamp: Option<&Timestamp>) -> Result<(), EngineError> {
        self.append(&Self::stamp_fields(stamp))
    }

    /// Continues the row with the stop stamp and tracked duration:
    /// `<zone>,<date>_<h>:<m>:<s>,<hours>:<minutes>:<seconds>,`.
    pub fn append_stop(&self, stamp: Option<&Timestamp>, elapsed: Option<&Elapsed>) -> Result<(), EngineError> {
        let duration = match elapsed {
            Some(elapsed) => elapsed.to_string(),
            None => INCOMPLETE_STAMP.to_string(),
        };
        self.append(&format!("{}{},", Self::stamp_fields(stamp), duration))
    }

    /// Terminates the current row with the note-marker line.
    pub fn append_note(&self) -> Result<(), EngineError> {
        self.append(&format!("{}\r\n", NOTE_MARKER))
    }

    fn stamp_fields(stamp: Option<&Timestamp>) -> String {
        match stamp {
            Some(stamp) => format!("{},{},", stamp.zone, stamp),
            None => format!(",{},", INCOMPLETE_STAMP),
        }
    }

    fn append(&self, text: &str) -> Result<(), EngineError> {
        let mut file = OpenOptions::new().append(true).create(true).open(&self.path)?;
        file.write_all(text.as_bytes())?;
        Ok(())
    }
}
