use thiserror::Error;

/// Local input validation failures. Resolved before anything touches the
/// network.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("empty edge specification")]
    EmptySpecification,

    #[error("color must be non-empty")]
    EmptyColor,

    #[error("coordinate {value} is outside the 0..=4000 drawing surface")]
    CoordinateOutOfRange { value: i32 },
}

/// An incomplete landmark selection. Blocks query issuance; the user must
/// correct the selection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no start landmark selected")]
    MissingStart,

    #[error("no destination landmark selected")]
    MissingEnd,
}

/// A failure of the external routing service: transport, protocol, or a
/// response that violates its contract. Always distinguishable from a
/// legitimately empty path, which is a success.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("routing service unreachable: {0}")]
    Transport(String),

    #[error("routing service returned HTTP status {0}")]
    Status(u16),

    #[error("malformed routing service response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("routing service emitted an invalid segment: {0}")]
    Contract(#[from] ValidationError),
}

impl From<ureq::Error> for UpstreamError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(code) => UpstreamError::Status(code),
            other => UpstreamError::Transport(other.to_string()),
        }
    }
}

/// Any failure the drawing pipeline can surface, in the order checks run:
/// selection and validation are settled before a query is issued, upstream
/// failures only once one is in flight.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}
