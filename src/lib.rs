// lib.rs
//
// Interactive four-function calculator. `operation`, `history` and `engine`
// are the pure core; everything else is terminal, file and log plumbing.

pub mod audit;
pub mod commands;
pub mod completion;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod logging;
pub mod operation;
pub mod parser;
pub mod repl;
pub mod util;

pub use engine::{Calculator, SharedCalculator};
pub use error::{CalcError, ParseError};
pub use history::{History, HistoryEntry};
pub use operation::{Operation, OperationKind};
