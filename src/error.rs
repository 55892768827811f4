use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),

    #[error("nothing printed")]
    NothingWritten,

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ProcessError {
    /// Classify a failed write, keeping zero-length writes distinct
    pub fn from_write(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::WriteZero {
            ProcessError::NothingWritten
        } else {
            ProcessError::Write(err)
        }
    }
}
