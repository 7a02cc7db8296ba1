use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value the application does not recognise.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Invalid stored value '{value}' in column {column}")]
    InvalidStoredValue {
        /// Table and column the value was read from
        column: &'static str,
        /// The unrecognised value
        value: String,
    },

    /// Signing a bearer token failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to sign bearer token: {0}")]
    TokenSigning(#[source] jsonwebtoken::errors::Error),

    /// The token lifetime pushes the expiry past the representable date range.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Token lifetime overflows the expiry timestamp")]
    TokenLifetimeOutOfRange,
}
