// commands.rs

use anyhow::Result;
use std::io::Write;

use crate::audit::AuditLog;
use crate::engine::Calculator;
use crate::error::{CalcError, ParseError};
use crate::operation::Operation;
use crate::parser::{parse_command, Command};
use crate::util::writeln_ignore_broken_pipe;

pub const HELP: &str = "
Available commands:
  add a b        - Adds a and b
  subtract a b   - Subtracts b from a
  multiply a b   - Multiplies a and b
  divide a b     - Divides a by b
  history        - Shows the operation history
  undo           - Undoes the last operation
  clear          - Clears the operation history
  exit           - Exits the REPL
  help           - Shows this help message
";

/// Whether the REPL should keep reading after a command.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    Exit,
}

/// Turns input lines into calculator calls and renders the outcome.
pub struct CommandProcessor {
    calculator: Calculator,
    audit: Option<AuditLog>,
}

impl CommandProcessor {
    pub fn new(audit: Option<AuditLog>) -> Self {
        Self { calculator: Calculator::new(), audit }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        match parse_command(line) {
            Ok(command) => self.run(command, out),
            Err(ParseError::InvalidFormat(_)) => {
                tracing::error!("Invalid command format.");
                writeln_ignore_broken_pipe(&mut *out, "Invalid command format. Type 'help' for instructions.")?;
                Ok(Flow::Continue)
            }
            Err(ParseError::InvalidNumber(token)) => {
                tracing::error!("Invalid numbers inputted: {token}");
                writeln_ignore_broken_pipe(&mut *out, "Invalid numbers. Please enter valid numeric values.")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn run<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Empty => {}
            Command::Exit => {
                tracing::info!("Program exited.");
                writeln_ignore_broken_pipe(&mut *out, "Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Help => writeln_ignore_broken_pipe(&mut *out, HELP)?,
            Command::History => self.show_history(out)?,
            Command::Undo => self.undo_last(out)?,
            Command::Clear => {
                self.calculator.clear_history();
                tracing::info!("History cleared.");
                writeln_ignore_broken_pipe(&mut *out, "History cleared.")?;
            }
            Command::Calculate { operation, a, b } => self.calculate(&operation, a, b, out)?,
        }
        Ok(Flow::Continue)
    }

    fn calculate<W: Write>(&mut self, name: &str, a: f64, b: f64, out: &mut W) -> Result<()> {
        let performed = Operation::create(name, a, b)
            .and_then(|operation| self.calculator.perform(operation).map(|r| (operation, r)));
        let message = match performed {
            Ok((operation, result)) => {
                self.audit_operation(&operation, result);
                tracing::info!("Performed Operation: {operation}");
                format!("Result: {result:?}")
            }
            Err(CalcError::UnknownOperation(name)) => {
                tracing::error!("Unknown operation '{name}'.");
                format!("Unknown operation '{name}'. Type 'help' for instructions.")
            }
            Err(CalcError::DivisionByZero) => {
                tracing::error!("Error: Division by zero.");
                "Error: Division by zero.".to_string()
            }
            Err(err @ CalcError::InvalidOperand { .. }) => {
                tracing::error!("Invalid operand: {err}");
                format!("Invalid operand: {err}")
            }
            Err(err @ CalcError::NonFiniteResult { .. }) => {
                tracing::error!("Error: {err}");
                format!("Error: {err}")
            }
        };
        writeln_ignore_broken_pipe(&mut *out, message)?;
        Ok(())
    }

    // Best effort: a failed write is logged and the history keeps the entry.
    fn audit_operation(&self, operation: &Operation, result: f64) {
        let Some(audit) = &self.audit else { return };
        let (a, b) = operation.operands();
        if let Err(err) = audit.log_operation(operation.kind().name(), a, b, result) {
            tracing::warn!("audit log write failed: {err:#}");
        }
    }

    fn show_history<W: Write>(&self, out: &mut W) -> Result<()> {
        let history = self.calculator.history();
        if history.is_empty() {
            tracing::warn!("No operations in history.");
            writeln_ignore_broken_pipe(&mut *out, "No operations in history.")?;
            return Ok(());
        }
        for (index, entry) in history.iter().enumerate() {
            writeln_ignore_broken_pipe(&mut *out, format!("{}: {}", index + 1, entry.operation))?;
        }
        Ok(())
    }

    fn undo_last<W: Write>(&mut self, out: &mut W) -> Result<()> {
        match self.calculator.undo() {
            Some(entry) => {
                tracing::info!("Undid operation: {}", entry.operation);
                writeln_ignore_broken_pipe(&mut *out, format!("Undid operation: {}", entry.operation))?;
            }
            None => {
                tracing::info!("No operation to undo.");
                writeln_ignore_broken_pipe(&mut *out, "No operation to undo.")?;
            }
        }
        Ok(())
    }
}
