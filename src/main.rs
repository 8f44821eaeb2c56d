// main.rs

use anyhow::Result;

use calc_repl::audit::AuditLog;
use calc_repl::commands::CommandProcessor;
use calc_repl::config::Config;
use calc_repl::{logging, repl};

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;
    let audit = match AuditLog::open(&config.csv_path) {
        Ok(audit) => Some(audit),
        Err(err) => {
            tracing::warn!("audit log disabled: {err:#}");
            None
        }
    };
    repl::start_repl(&config, CommandProcessor::new(audit))
}
