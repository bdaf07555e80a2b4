use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read data file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed {file} at line {line}: {reason}")]
    Parse {
        file: &'static str,
        line: usize,
        reason: String,
    },

    #[error("no solution found: {0}")]
    NoSolution(&'static str),
}

impl Error {
    pub(crate) fn parse(file: &'static str, line: usize, reason: impl Into<String>) -> Self {
        Error::Parse {
            file,
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
