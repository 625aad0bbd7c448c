//! Summary command: parses the activity log back into sessions and prints
//! a table with the total tracked time.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::report;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let path = config.log_path()?;

    msg_print!(Message::SumHeader(path.display().to_string()), true);

    let entries = report::read(&path)?;
    if entries.is_empty() {
        msg_info!(Message::LogEmpty);
        return Ok(());
    }

    View::sessions(&entries)?;
    msg_print!(Message::TotalTracked(report::total_tracked(&entries).to_string()));
    Ok(())
}
