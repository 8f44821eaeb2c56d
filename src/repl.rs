// repl.rs

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};
use std::io::{self, Write};

use crate::commands::{CommandProcessor, Flow};
use crate::completion::CommandCompleter;
use crate::config;
use crate::util::writeln_ignore_broken_pipe;

pub const BANNER: &str = "Welcome to the Calculator REPL. Type 'help' for instructions or 'exit' to quit.";

pub fn start_repl(settings: &config::Config, mut processor: CommandProcessor) -> Result<()> {
    let config = Config::builder().completion_type(CompletionType::List).build();
    let mut rl: Editor<CommandCompleter, DefaultHistory> =
        Editor::with_config(config).context("creating line editor")?;
    rl.set_helper(Some(CommandCompleter::new()));
    if let Some(histfile) = &settings.histfile {
        if rl.load_history(histfile).is_err() {
            tracing::debug!("no readline history at {}", histfile.display());
        }
    }
    let mut stdout = io::stdout();
    writeln_ignore_broken_pipe(&mut stdout, BANNER)?;
    loop {
        let readline = rl.readline(">>> ");
        if let Ok(line) = &readline {
            if !line.trim().is_empty() {
                let _ = rl.add_history_entry(line.as_str());
            }
        }
        if handle_input(readline, &mut processor, &mut stdout)? == Flow::Exit {
            break;
        }
    }
    stdout.flush().ok();
    if let Some(histfile) = &settings.histfile {
        if let Err(err) = rl.save_history(histfile) {
            tracing::warn!("could not save readline history to {}: {err}", histfile.display());
        }
    }
    Ok(())
}

/// Act on one readline outcome. Ctrl-C and Ctrl-D end the session like `exit`.
pub fn handle_input<W: Write>(
    readline: Result<String, ReadlineError>,
    processor: &mut CommandProcessor,
    out: &mut W,
) -> Result<Flow> {
    match readline {
        Ok(line) => processor.handle_line(&line, out),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => processor.handle_line("exit", out),
        Err(err) => {
            tracing::error!("readline failed: {err}");
            Err(err).context("reading input")
        }
    }
}
