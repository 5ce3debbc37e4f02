//! Output and logging plumbing shared by the binary
//!
//! - `PagerWriter`: adapts the minus pager to `std::io::Write`
//! - `OutputTarget`: decides between the pager and plain stdout
//! - `LogLevel`: verbosity selected on the command line

use clap::ValueEnum;
use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Wrapper that implements `Write` for the minus pager
///
/// The report is pushed line by line into the pager and shown once the
/// comparison finishes, see [`OutputTarget::finish`].
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where the report is written
pub enum OutputTarget {
    Pager(Pager),
    Stdout,
}

impl OutputTarget {
    /// Page only interactive output, and never when `NO_PAGER` is set
    pub fn select(stdout_is_terminal: bool, no_pager: bool) -> Self {
        if stdout_is_terminal && !no_pager {
            OutputTarget::Pager(Pager::new())
        } else {
            OutputTarget::Stdout
        }
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            OutputTarget::Pager(pager) => Box::new(PagerWriter::new(pager.clone())),
            OutputTarget::Stdout => Box::new(io::stdout()),
        }
    }

    pub fn finish(self) -> anyhow::Result<()> {
        if let OutputTarget::Pager(pager) = self {
            minus::page_all(pager)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    pub fn to_tracing_level(&self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}
