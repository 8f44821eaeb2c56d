// parser.rs

use crate::error::ParseError;

/// A classified input line.
#[derive(Clone, PartialEq, Debug)]
pub enum Command {
    Empty,
    Exit,
    Help,
    History,
    Undo,
    Clear,
    /// The operation name is left for the factory to validate.
    Calculate { operation: String, a: f64, b: f64 },
}

pub fn split_words(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut cur = String::new();
    for ch in line.chars() {
        if ch.is_whitespace() {
            if !cur.is_empty() {
                tokens.push(std::mem::take(&mut cur));
            }
        } else {
            cur.push(ch);
        }
    }
    if !cur.is_empty() {
        tokens.push(cur);
    }
    tokens
}

pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim().to_lowercase();
    let tokens = split_words(&line);
    match tokens.iter().map(String::as_str).collect::<Vec<&str>>().as_slice() {
        [] => Ok(Command::Empty),
        ["exit"] | ["quit"] => Ok(Command::Exit),
        ["help"] => Ok(Command::Help),
        ["history"] => Ok(Command::History),
        ["undo"] => Ok(Command::Undo),
        ["clear"] => Ok(Command::Clear),
        [operation, a, b] => Ok(Command::Calculate {
            operation: operation.to_string(),
            a: parse_number(a)?,
            b: parse_number(b)?,
        }),
        other => Err(ParseError::InvalidFormat(other.len())),
    }
}

fn parse_number(token: &str) -> Result<f64, ParseError> {
    token
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}
