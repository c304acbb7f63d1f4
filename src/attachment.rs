use crate::Error;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Default panel color, kept as the API accepts it even though it is one hex
/// digit short of a full RGB triplet.
pub(crate) const DEFAULT_COLOR: &str = "#ff000";

/// A title/value pair displayed within an [`Attachment`].
///
/// Neither side is validated; either may be empty.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Field {
    /// Label shown above the value.
    pub title: String,
    /// The value itself.
    pub value: String,
}

impl Field {
    /// Creates a `Field`.
    #[must_use]
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Field {
        Field {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// A formatted panel within a message: a colored bar with a title, free text,
/// and structured fields.
///
/// [`Attachment::new`] fills in the defaults; individual fields can be
/// assigned afterwards to override them.
///
/// ```
/// use slackmsg::{Attachment, Field};
///
/// # fn f() -> Result<(), slackmsg::Error> {
/// let mut attachment = Attachment::new(vec![Field::new("Host", "web-1")])?;
/// attachment.color = "#36a64f".into();
/// attachment.title = "Deploy finished".into();
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[must_use]
pub struct Attachment {
    /// Color of the bar alongside the panel, as a `#`-prefixed hex string.
    pub color: String,
    /// Title displayed at the top of the panel.
    pub title: String,
    /// Free text displayed under the title.
    pub text: String,
    /// Structured fields, displayed in order. Must not be empty.
    pub fields: Vec<Field>,
    /// Footer line displayed at the bottom of the panel.
    pub footer: String,
    /// Timestamp shown next to the footer, in epoch seconds.
    pub ts: i64,
}

impl Attachment {
    /// Creates an `Attachment` with the given fields and defaults everywhere
    /// else: the default color, empty title, text, and footer, and the
    /// current time as the timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyFields`] if `fields` is empty.
    pub fn new(fields: Vec<Field>) -> Result<Attachment, Error> {
        if fields.is_empty() {
            return Err(Error::EmptyFields);
        }
        Ok(Attachment {
            color: DEFAULT_COLOR.into(),
            title: String::new(),
            text: String::new(),
            fields,
            footer: String::new(),
            ts: Utc::now().timestamp(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Attachment, Field, DEFAULT_COLOR};
    use crate::Error;
    use chrono::Utc;
    use serde_json::json;

    fn fields() -> Vec<Field> {
        vec![Field::new("Host", "web-1")]
    }

    #[test]
    fn new_applies_defaults() {
        let attachment = Attachment::new(fields()).unwrap();

        assert_eq!(attachment.color, DEFAULT_COLOR);
        assert_eq!(attachment.title, "");
        assert_eq!(attachment.text, "");
        assert_eq!(attachment.footer, "");
        assert_eq!(attachment.fields, fields());
        assert!((Utc::now().timestamp() - attachment.ts) <= 1);
    }

    #[test]
    fn new_rejects_empty_fields() {
        let err = Attachment::new(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyFields), "{err:?}");
    }

    #[test]
    fn overrides_reach_the_wire() {
        let mut attachment = Attachment::new(fields()).unwrap();
        attachment.color = "#123456".into();
        attachment.title = "Deploy finished".into();
        attachment.ts = 1_700_000_000;

        assert_eq!(
            serde_json::to_value(&attachment).unwrap(),
            json!({
                "color": "#123456",
                "title": "Deploy finished",
                "text": "",
                "fields": [{"title": "Host", "value": "web-1"}],
                "footer": "",
                "ts": 1_700_000_000,
            })
        );
    }
}
