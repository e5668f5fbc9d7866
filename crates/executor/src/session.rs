//! Session: the line-oriented protocol boundary.
//!
//! A session owns an [`Executor`] for the process lifetime and drives raw
//! input lines through parse → execute → render. Every internal failure,
//! whatever its variant, collapses to the single external error shape
//! `incorrect:'<first 20 bytes of the raw line>'`; failures never mutate
//! the store and never abort the run.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{parse_line, Executor};

/// Maximum number of bytes of the raw line echoed in an `incorrect` line.
const ERROR_PREFIX_LEN: usize = 20;

/// Serial command-processing loop over an exclusively owned store.
#[derive(Debug, Default)]
pub struct Session {
    executor: Executor,
}

impl Session {
    /// Create a session over an empty store.
    pub fn new() -> Session {
        Session::default()
    }

    /// Read access to the executor, mainly for tests and inspection.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Process one raw line (newline already stripped), writing protocol
    /// output to the sink. Blank lines produce no output. The only returned
    /// errors are sink I/O failures; malformed commands are reported on the
    /// protocol instead.
    pub fn process_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<()> {
        if line.is_empty() {
            return Ok(());
        }
        let cmd = match parse_line(line) {
            Ok(cmd) => cmd,
            Err(err) => {
                debug!(%err, "line rejected");
                return write_incorrect(out, line);
            }
        };
        debug!(command = cmd.name(), "executing");
        match self.executor.execute(cmd) {
            Ok(output) => output.write_lines(out),
            Err(err) => {
                debug!(%err, "command failed");
                write_incorrect(out, line)
            }
        }
    }

    /// Drive every line of `input` through [`Session::process_line`].
    /// Trailing carriage returns are stripped along with the newline.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            self.process_line(line, out)?;
        }
        Ok(())
    }
}

/// Emit the single external error shape, echoing at most the first
/// [`ERROR_PREFIX_LEN`] bytes of the untrimmed line.
fn write_incorrect<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    let end = line.len().min(ERROR_PREFIX_LEN);
    let prefix = String::from_utf8_lossy(&line.as_bytes()[..end]);
    writeln!(out, "incorrect:'{prefix}'")
}
