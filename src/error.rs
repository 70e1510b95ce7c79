use thiserror::Error;

/// Failures raised by the HTTP layer before they are absorbed at the store
/// boundary. Store operations never surface these to callers.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} is unreachable")]
    ServiceUnreachable(String),

    #[error("Unexpected status code {0}")]
    UnexpectedStatus(u16),
}
