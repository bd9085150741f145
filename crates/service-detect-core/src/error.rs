use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("Failed to write output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DetectError>;

impl DetectError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::OutputWrite { .. } => 3,
        }
    }
}
