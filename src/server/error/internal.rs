use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to hash or verify a password.
    ///
    /// Argon2 only fails on malformed stored hashes or parameter misuse, so
    /// this points at corrupt data rather than bad user input. Results in a
    /// 500 Internal Server Error with a generic message returned to client.
    #[error("Password hashing failure: {reason}")]
    PasswordHash {
        /// The underlying argon2 error, stringified.
        reason: String,
    },

    /// Failure to sign a password reset token.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to sign reset token: {reason}")]
    TokenSigning {
        /// The underlying jsonwebtoken error, stringified.
        reason: String,
    },

    /// A generated storage object URL was not valid.
    #[error("Constructed invalid storage URL '{url}': {source}")]
    InvalidStorageUrl {
        /// The URL string that failed to parse.
        url: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },
}
