//! Terminal table rendering for the session summary.

use crate::libs::report::LogEntry;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn sessions(entries: &Vec<LogEntry>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "IN", "OUT", "DURATION", "NOTE"]);
        for (index, entry) in entries.iter().enumerate() {
            table.add_row(row![
                index + 1,
                entry.date(),
                entry.time_in(),
                entry.time_out(),
                if entry.duration.is_empty() { "-" } else { entry.duration.as_str() },
                if entry.has_note { "yes" } else { "" }
            ]);
        }
        table.printstd();

        Ok(())
    }
}
