use std::path::PathBuf;

/// Errors that might occur when using the library.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to build an [`Attachment`][`crate::Attachment`] with an empty
    /// list of fields.
    #[error("attachment fields must not be empty")]
    EmptyFields,

    /// Attempted to send a [`Message`][`crate::Message`] with an empty channel
    /// name.
    #[error("channel must not be empty")]
    EmptyChannel,

    /// The credentials file could not be read.
    #[error("failed to read credentials file {}: {source}", path.display())]
    CredentialsRead {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The credentials file is not valid JSON of the expected shape.
    #[error("failed to parse credentials file {}: {source}", path.display())]
    CredentialsParse {
        /// Path of the file that could not be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// An error while encoding the request body.
    #[error("json encode error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An HTTP client error (request construction, transport, or reading the
    /// response body).
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with the literal body `no_text`, indicating the
    /// message carried no displayable content.
    #[error("api returned `no_text`")]
    NoText,
}
