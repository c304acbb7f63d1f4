use crate::{Attachment, Error, Session};
use serde::Serialize;
use std::fmt::{self, Debug};

pub(crate) const POST_MESSAGE_PATH: &str = "chat.postMessage";

const DEFAULT_USERNAME: &str = "Web Team";
const DEFAULT_ICON_EMOJI: &str = ":joy:";

/// The response body the API sends back when the message carried no
/// displayable content. The real API wraps errors in a JSON envelope; this
/// client only ever surfaced the bare `no_text` body, and that behavior is
/// kept as-is.
const NO_TEXT_SENTINEL: &str = "no_text";

/// Describes a message to post: the target channel, optional display
/// overrides, and exactly one [`Attachment`].
///
/// `username` and `icon_emoji` fall back to fixed defaults when left `None`.
#[derive(Debug)]
#[must_use]
pub struct Message {
    /// Channel to post into. A missing `#` prefix is added on send; an empty
    /// name fails the send.
    pub channel: String,
    /// Display name shown as the message author.
    pub username: Option<String>,
    /// Emoji code (e.g. `:tada:`) shown as the author's avatar.
    pub icon_emoji: Option<String>,
    /// The attachment panel making up the message body.
    pub attachment: Attachment,
}

impl Message {
    /// Creates a `Message` for the given channel with no display overrides.
    pub fn new(channel: impl Into<String>, attachment: Attachment) -> Message {
        Message {
            channel: channel.into(),
            username: None,
            icon_emoji: None,
            attachment,
        }
    }

    pub(crate) async fn send(&self, session: &Session) -> Result<(), Error> {
        // Re-checked here so a message whose attachment was emptied after
        // construction never reaches the wire.
        if self.attachment.fields.is_empty() {
            return Err(Error::EmptyFields);
        }

        let parameters = Parameters::new(self)?;
        tracing::debug!(?parameters);
        let body = serde_json::to_vec(&parameters)?;

        let response = session
            .client
            .post(POST_MESSAGE_PATH)
            .header("content-type", "application/json")
            .header(
                "authorization",
                format!("Bearer {}", session.credentials.token),
            )
            .body(body)
            .send()
            .await?;

        // The HTTP status is deliberately not inspected; the only failure
        // this API signals to us is the body sentinel.
        let body = response.text().await?;
        if body == NO_TEXT_SENTINEL {
            return Err(Error::NoText);
        }
        tracing::info!(channel = %parameters.channel, "message posted");
        Ok(())
    }
}

/// Wire shape of the `chat.postMessage` request.
#[derive(Serialize)]
pub(crate) struct Parameters<'a> {
    pub(crate) channel: String,
    // The API accepts a list, but this client always sends exactly one.
    pub(crate) attachments: [&'a Attachment; 1],
    pub(crate) username: &'a str,
    pub(crate) icon_emoji: &'a str,
}

impl<'a> Parameters<'a> {
    pub(crate) fn new(message: &'a Message) -> Result<Parameters<'a>, Error> {
        Ok(Parameters {
            channel: normalize_channel(&message.channel)?,
            attachments: [&message.attachment],
            username: message.username.as_deref().unwrap_or(DEFAULT_USERNAME),
            icon_emoji: message.icon_emoji.as_deref().unwrap_or(DEFAULT_ICON_EMOJI),
        })
    }
}

impl Debug for Parameters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::to_value(self).map_err(|_| fmt::Error)?)
    }
}

/// Prefixes the channel name with `#` if it is missing one.
fn normalize_channel(channel: &str) -> Result<String, Error> {
    if channel.is_empty() {
        return Err(Error::EmptyChannel);
    }
    if channel.starts_with('#') {
        Ok(channel.to_owned())
    } else {
        Ok(format!("#{channel}"))
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_channel, Message, Parameters};
    use crate::{Attachment, Error, Field};
    use serde::Deserialize;
    use serde_json::json;

    fn message() -> Message {
        let mut attachment = Attachment::new(vec![Field::new("Host", "web-1")]).unwrap();
        attachment.ts = 1_700_000_000;
        Message::new("general", attachment)
    }

    #[test]
    fn channel_prefixing_is_idempotent() {
        assert_eq!(normalize_channel("general").unwrap(), "#general");
        assert_eq!(normalize_channel("#general").unwrap(), "#general");
    }

    #[test]
    fn empty_channel_is_rejected() {
        let err = normalize_channel("").unwrap_err();
        assert!(matches!(err, Error::EmptyChannel), "{err:?}");

        let mut msg = message();
        msg.channel = String::new();
        let err = Parameters::new(&msg).unwrap_err();
        assert!(matches!(err, Error::EmptyChannel), "{err:?}");
    }

    #[test]
    fn display_defaults_apply_when_unset() {
        let msg = message();
        let parameters = Parameters::new(&msg).unwrap();

        assert_eq!(parameters.username, "Web Team");
        assert_eq!(parameters.icon_emoji, ":joy:");
    }

    #[test]
    fn display_overrides_apply_when_set() {
        let mut msg = message();
        msg.username = Some("deploybot".into());
        msg.icon_emoji = Some(":rocket:".into());
        let parameters = Parameters::new(&msg).unwrap();

        assert_eq!(parameters.username, "deploybot");
        assert_eq!(parameters.icon_emoji, ":rocket:");
    }

    #[test]
    fn wire_field_names() {
        let msg = message();
        assert_eq!(
            serde_json::to_value(Parameters::new(&msg).unwrap()).unwrap(),
            json!({
                "channel": "#general",
                "attachments": [{
                    "color": "#ff000",
                    "title": "",
                    "text": "",
                    "fields": [{"title": "Host", "value": "web-1"}],
                    "footer": "",
                    "ts": 1_700_000_000,
                }],
                "username": "Web Team",
                "icon_emoji": ":joy:",
            })
        );
    }

    #[test]
    fn parameters_round_trip() {
        #[derive(Deserialize)]
        struct WireParameters {
            channel: String,
            attachments: Vec<Attachment>,
            username: String,
            icon_emoji: String,
        }

        let mut msg = message();
        msg.channel = "#x".into();
        msg.username = Some("u".into());
        msg.icon_emoji = Some(":e:".into());
        let parameters = Parameters::new(&msg).unwrap();

        let encoded = serde_json::to_string(&parameters).unwrap();
        let decoded: WireParameters = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.channel, parameters.channel);
        assert_eq!(decoded.attachments, vec![msg.attachment.clone()]);
        assert_eq!(decoded.username, parameters.username);
        assert_eq!(decoded.icon_emoji, parameters.icon_emoji);
    }
}
