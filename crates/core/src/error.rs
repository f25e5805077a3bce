/// Domain-level errors produced on the client side, before a request
/// ever reaches the gateway.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// An identifier could not be parsed from untrusted input.
    #[error("invalid id: {raw:?} is not an integer")]
    InvalidId { raw: String },

    /// A write intent failed client-side validation.
    #[error("validation failed: {0}")]
    Validation(String),
}
