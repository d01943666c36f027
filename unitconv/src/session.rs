//! Read-eval-print session
//!
//! States: Reading (prompt written, waiting for a line) and Terminated
//! (exit word or end of input). Every line is handled independently.

use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

use crate::{Converter, Reply, SessionConfig};

/// The only failure that ends a session early
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Counters reported when a session terminates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub requests: usize,
    pub converted: usize,
    pub rejected: usize,
    pub parse_errors: usize,
}

impl SessionSummary {
    fn record(&mut self, reply: &Reply) {
        self.requests += 1;
        match reply {
            Reply::Converted { .. } => self.converted += 1,
            Reply::ParseError(_) => self.parse_errors += 1,
            Reply::Impossible { .. } | Reply::Negative(_) => self.rejected += 1,
        }
    }
}

/// Interactive conversion session over any line reader and writer
pub struct Session<R, W> {
    reader: R,
    writer: W,
    config: SessionConfig,
    converter: Converter,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W, config: SessionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
            converter: Converter::new(),
        }
    }

    /// Run until the exit word or end of input
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        let mut summary = SessionSummary::default();
        info!("session started");

        loop {
            self.prompt()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                info!("end of input");
                break;
            }

            if self.config.is_exit(&line) {
                info!("exit requested");
                break;
            }

            let reply = self.converter.evaluate(&line);
            debug!(line = line.trim(), reply = %reply, "handled request");
            summary.record(&reply);

            writeln!(self.writer, "{}", reply)?;
            self.writer.flush()?;
        }

        info!(
            requests = summary.requests,
            converted = summary.converted,
            rejected = summary.rejected,
            parse_errors = summary.parse_errors,
            "session finished"
        );
        Ok(summary)
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn prompt(&mut self) -> Result<(), SessionError> {
        if self.config.show_prompt {
            write!(self.writer, "{}", self.config.prompt)?;
            self.writer.flush()?;
        }
        Ok(())
    }
}
