//! Reads tracked sessions back out of the activity log.
//!
//! The log is a stream of comma-terminated fragments: a start fragment
//! (`zone,stamp,`), a stop fragment (`zone,stamp,duration,`) continuing the
//! same row, and note-marker lines that are the only line breaks. The
//! parser walks the comma-separated tokens, using the `_` in stamp tokens
//! to keep its place, and tolerates a trailing open session (device lost
//! power mid-tracking) and timestamp-incomplete placeholders.

use crate::core::activity_log::{INCOMPLETE_STAMP, NOTE_MARKER};
use crate::core::elapsed::Elapsed;
use anyhow::Result;
use std::fs;
use std::path::Path;

/// One logical log row: a tracking session, possibly still open, with an
/// optional note marker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogEntry {
    pub zone_in: String,
    pub stamp_in: String,
    pub zone_out: String,
    pub stamp_out: String,
    pub duration: String,
    pub has_note: bool,
    /// False for a trailing start fragment with no matching stop.
    pub complete: bool,
}

impl LogEntry {
    /// Date component of the start stamp, `-` when unavailable.
    pub fn date(&self) -> String {
        split_stamp(&self.stamp_in).0
    }

    /// Time-of-day component of the start stamp, `-` when unavailable.
    pub fn time_in(&self) -> String {
        split_stamp(&self.stamp_in).1
    }

    pub fn time_out(&self) -> String {
        split_stamp(&self.stamp_out).1
    }

    pub fn elapsed(&self) -> Option<Elapsed> {
        parse_elapsed(&self.duration)
    }
}

fn split_stamp(stamp: &str) -> (String, String) {
    match stamp.split_once('_') {
        Some((date, time)) => (date.to_string(), time.to_string()),
        None => ("-".to_string(), "-".to_string()),
    }
}

fn parse_elapsed(duration: &str) -> Option<Elapsed> {
    let mut fields = duration.split(':');
    let hours = fields.next()?.parse().ok()?;
    let minutes = fields.next()?.parse().ok()?;
    let seconds = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Elapsed { hours, minutes, seconds })
}

fn is_stamp(token: &str) -> bool {
    token.contains('_') || token == INCOMPLETE_STAMP
}

/// Loads and parses the log file; a missing file reads as empty.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Vec<LogEntry>> {
    if !path.as_ref().exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(parse(&content))
}

/// Parses raw log text into logical entries.
pub fn parse(content: &str) -> Vec<LogEntry> {
    // Note-marker lines are not comma-terminated, so a raw token can carry
    // the marker plus the next row's zone. Flatten those up front.
    let mut tokens: Vec<String> = Vec::new();
    for raw in content.replace("\r\n", "\n").split(',') {
        match raw.split_once('\n') {
            Some((head, tail)) => {
                tokens.push(head.to_string());
                tokens.push("\n".to_string()); // row terminator
                tokens.push(tail.trim_matches('\n').to_string());
            }
            None => tokens.push(raw.to_string()),
        }
    }

    let mut entries = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let zone_in = tokens[i].clone();
        i += 1;
        if zone_in == "\n" {
            continue;
        }
        let Some(stamp_in) = tokens.get(i).cloned() else { break };
        i += 1;
        if !is_stamp(&stamp_in) {
            // Stray token; resynchronize on the next stamp.
            continue;
        }
        let mut entry = LogEntry {
            zone_in,
            stamp_in,
            ..LogEntry::default()
        };

        // A stop fragment continues the row with zone, stamp and duration.
        // An open row can also run straight into the next row's start
        // fragment (power loss mid-session), which would pass the stamp
        // check alone, so the lookahead only commits when the duration
        // token is one: a parsable h:m:s or the incomplete placeholder.
        if let (Some(zone_out), Some(stamp_out), Some(duration)) =
            (tokens.get(i), tokens.get(i + 1), tokens.get(i + 2))
        {
            let is_duration = parse_elapsed(duration).is_some() || duration.as_str() == INCOMPLETE_STAMP;
            if is_stamp(stamp_out) && is_duration {
                entry.zone_out = zone_out.clone();
                entry.stamp_out = stamp_out.clone();
                entry.duration = duration.clone();
                entry.complete = true;
                i += 3;
            }
        }

        // The note marker is written on its own terminated line.
        if tokens.get(i).map(|t| t == NOTE_MARKER).unwrap_or(false) {
            i += 1;
            entry.has_note = true;
        }

        entries.push(entry);
    }

    entries
}

/// Sums the durations of all complete entries.
pub fn total_tracked(entries: &[LogEntry]) -> Elapsed {
    let total = entries.iter().filter_map(LogEntry::elapsed).map(|e| e.total_seconds()).sum();
    Elapsed::from_seconds(total)
}
