use crate::{Client, Credentials, Error, Message};
use std::path::Path;

/// A [`Client`] bound to the [`Credentials`] used to authenticate API calls.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) client: Client,
    pub(crate) credentials: Credentials,
}

impl Session {
    /// Creates a `Session` from credentials, using the default [`Client`].
    #[must_use]
    pub fn new(credentials: Credentials) -> Session {
        Session::with_client(Client::new(), credentials)
    }

    /// Creates a `Session` from credentials and a customized [`Client`].
    #[must_use]
    pub fn with_client(client: Client, credentials: Credentials) -> Session {
        Session {
            client,
            credentials,
        }
    }

    /// Creates a `Session` by reading `slack.json` from the given directory.
    pub fn from_config_dir(dir: impl AsRef<Path>) -> Result<Session, Error> {
        Ok(Session::new(Credentials::from_dir(dir)?))
    }

    /// Post a message.
    ///
    /// Succeeds for any response body other than the API's `no_text` error
    /// sentinel, which maps to [`Error::NoText`].
    #[tracing::instrument(skip(self))]
    pub async fn send_message(&self, message: &Message) -> Result<(), Error> {
        message.send(self).await
    }
}
