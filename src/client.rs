use reqwest::RequestBuilder;
use std::borrow::Cow;
use std::time::Duration;

const USER_AGENT: &str = concat!("slackmsg/", env!("CARGO_PKG_VERSION"));

/// Requests hang forever without one; the API normally answers well within
/// this.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) base_url: Cow<'static, str>,
    pub(crate) client: reqwest::Client,
}

impl Client {
    /// Creates a new `Client` with the default base URL,
    /// `https://slack.com/api/`, and a 30-second request timeout. Use
    /// [`Client::with_base_url`] and [`Client::with_timeout`] to change them.
    #[must_use]
    #[allow(clippy::missing_panics_doc)] // tested to not panic
    pub fn new() -> Client {
        Client {
            base_url: Cow::Borrowed("https://slack.com/api/"),
            client: build_http(DEFAULT_TIMEOUT),
        }
    }

    /// Creates a new `Client` with a custom base URL.
    #[must_use]
    pub fn with_base_url(mut self, mut base_url: String) -> Client {
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = Cow::Owned(base_url);
        self
    }

    /// Creates a new `Client` with a custom request timeout.
    #[must_use]
    #[allow(clippy::missing_panics_doc)] // tested to not panic
    pub fn with_timeout(mut self, timeout: Duration) -> Client {
        self.client = build_http(timeout);
        self
    }

    #[inline]
    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        tracing::info!(path, "Client::post");
        self.client.post(format!("{}{}", self.base_url, path))
    }
}

impl Default for Client {
    fn default() -> Client {
        Client::new()
    }
}

fn build_http(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .unwrap()
}
