// util.rs

use std::io::{ErrorKind, Result, Write};

/// Write one line, treating a closed reader (`calc-repl | head`) as success.
pub fn writeln_ignore_broken_pipe<W: Write, S: AsRef<str>>(mut w: W, s: S) -> Result<()> {
    match writeln!(w, "{}", s.as_ref()).and_then(|_| w.flush()) {
        Err(ref e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(ErrorKind::BrokenPipe))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn broken_pipe_is_swallowed() {
        assert!(writeln_ignore_broken_pipe(ClosedPipe, "lost").is_ok());
    }

    #[test]
    fn line_is_terminated() {
        let mut buf = Vec::new();
        writeln_ignore_broken_pipe(&mut buf, "Result: 5.0").unwrap();
        assert_eq!(buf, b"Result: 5.0\n");
    }
}
