// completion.rs

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

use crate::operation::OperationKind;

const KEYWORDS: [&str; 6] = ["history", "undo", "clear", "help", "exit", "quit"];

/// Tab completion for the first word of a command.
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn candidates(&self, prefix: &str) -> Vec<&'static str> {
        let prefix = prefix.to_lowercase();
        let mut names: Vec<&'static str> = OperationKind::ALL
            .iter()
            .map(|kind| kind.name())
            .chain(KEYWORDS)
            .filter(|name| name.starts_with(&prefix))
            .collect();
        names.sort_unstable();
        names
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;
    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let prefix = &line[..pos];
        // Only the command word completes; operands are numbers.
        if prefix.trim_start().contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let start = prefix.len() - prefix.trim_start().len();
        let completions = self
            .candidates(&prefix[start..])
            .into_iter()
            .map(|n| Pair {
                display: n.to_string(),
                replacement: format!("{} ", n),
            })
            .collect();
        Ok((start, completions))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for CommandCompleter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_match_prefix() {
        let completer = CommandCompleter::new();
        assert_eq!(completer.candidates("d"), vec!["divide"]);
        assert_eq!(completer.candidates("h"), vec!["help", "history"]);
        assert_eq!(completer.candidates("MU"), vec!["multiply"]);
        assert!(completer.candidates("z").is_empty());
    }

    #[test]
    fn empty_prefix_lists_everything() {
        assert_eq!(CommandCompleter::new().candidates("").len(), 10);
    }
}
