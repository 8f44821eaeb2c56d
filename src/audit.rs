// audit.rs

use anyhow::{bail, Context, Result};
use itertools::Itertools;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const HEADER: [&str; 4] = ["operation", "a", "b", "result"];

/// One row of the audit CSV.
#[derive(Clone, PartialEq, Debug)]
pub struct AuditRecord {
    pub operation: String,
    pub a: f64,
    pub b: f64,
    pub result: f64,
}

/// Append-only CSV record of successful calculations.
#[derive(Debug)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    /// Open the log at `path`, writing the header if the file is missing or empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating audit log directory {}", parent.display()))?;
        }
        let needs_header = fs::metadata(&path).map(|m| m.len() == 0).unwrap_or(true);
        if needs_header {
            fs::write(&path, format!("{}\n", HEADER.iter().join(",")))
                .with_context(|| format!("initializing audit log {}", path.display()))?;
            tracing::debug!("initialized audit log {}", path.display());
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn log_operation(&self, operation: &str, a: f64, b: f64, result: f64) -> Result<()> {
        // Rows are unquoted; a name that needs quoting would shift the columns.
        if operation.is_empty() || operation.contains([',', '"', '\n', '\r']) {
            bail!("operation name {operation:?} cannot be written as a plain CSV field");
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening audit log {}", self.path.display()))?;
        let row = [operation.to_string(), a.to_string(), b.to_string(), result.to_string()];
        writeln!(file, "{}", row.iter().join(","))
            .with_context(|| format!("appending to audit log {}", self.path.display()))?;
        tracing::debug!("logged operation: {operation} with a={a}, b={b}, result={result}");
        Ok(())
    }

    /// Every data row in file order. A missing or empty file reads as no rows;
    /// a first line other than the header is an error.
    pub fn read_operations(&self) -> Result<Vec<AuditRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("audit log {} does not exist", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading audit log {}", self.path.display()))
            }
        };
        let mut lines = content.lines().enumerate();
        match lines.next() {
            None => return Ok(Vec::new()),
            Some((_, header)) if header.trim() == HEADER.iter().join(",") => {}
            Some((_, header)) => bail!(
                "audit log {} has header '{}', expected '{}'",
                self.path.display(),
                header.trim(),
                HEADER.iter().join(",")
            ),
        }
        let records = lines
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| parse_row(line).with_context(|| format!("audit log line {}", idx + 1)))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!("read {} operations from audit log", records.len());
        Ok(records)
    }
}

fn parse_row(line: &str) -> Result<AuditRecord> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [operation, a, b, result] = fields.as_slice() else {
        bail!("expected {} fields, found {}", HEADER.len(), fields.len());
    };
    let number = |field: &str| -> Result<f64> {
        field.parse::<f64>().with_context(|| format!("'{field}' is not a number"))
    };
    Ok(AuditRecord {
        operation: operation.to_string(),
        a: number(*a)?,
        b: number(*b)?,
        result: number(*result)?,
    })
}
