use crate::Error;
use serde::Deserialize;
use std::fmt::{self, Debug};
use std::fs;
use std::path::Path;

/// Fixed filename looked up inside the directory handed to
/// [`Credentials::from_dir`].
const CREDENTIALS_FILE: &str = "slack.json";

/// Bearer token used to authenticate API calls.
///
/// Securely storing the token on disk is an exercise left to the caller; the
/// expected file shape is `{"token": "xoxb-..."}`.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    /// The bearer token sent in the `authorization` header.
    pub token: String,
}

impl Credentials {
    /// Creates `Credentials` from a token already in hand.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Credentials {
        Credentials {
            token: token.into(),
        }
    }

    /// Reads `slack.json` from the given directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Credentials, Error> {
        let path = dir.as_ref().join(CREDENTIALS_FILE);
        let bytes = fs::read(&path).map_err(|source| Error::CredentialsRead {
            path: path.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| Error::CredentialsParse { path, source })
    }
}

// Keeps the token out of logs.
impl Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"[redacted]")
            .finish()
    }
}
