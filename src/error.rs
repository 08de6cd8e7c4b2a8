use thiserror::Error;

/// Failures surfaced by the sculpture core.
///
/// Missing perception or audio input is never an error; it is modelled as an
/// absent `Option` and degrades to the documented fallback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("invalid argument: {what} must be positive (got {value})")]
    InvalidArgument { what: &'static str, value: usize },
}

pub type TreeResult<T> = Result<T, TreeError>;
