use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type HostResult<T> = std::result::Result<T, HostQueryError>;

#[derive(Error, Debug)]
pub enum HostQueryError {
    #[error("cannot read {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed {what}: {detail}")]
    MalformedSource { what: &'static str, detail: String },

    #[error("platform query failed: {0}")]
    PlatformQuery(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl HostQueryError {
    /// Shorthand for parse failures over a named procfs source.
    pub fn malformed(what: &'static str, detail: impl Into<String>) -> Self {
        HostQueryError::MalformedSource {
            what,
            detail: detail.into(),
        }
    }
}
