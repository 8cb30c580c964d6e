use thiserror::Error;

/// Raised while constructing a pipe from invalid options. Construction
/// failures never surface during dispatch: a pipe that exists is valid.
#[derive(Debug, Error)]
pub enum PipeConfigError {
    #[error("invalid message filter pattern '{pattern}': {source}")]
    InvalidFilterPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
