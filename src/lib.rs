//! slackmsg is a minimal client library for posting formatted attachment
//! messages to Slack's `chat.postMessage` API.
//!
//! ```no_run
//! use slackmsg::{Attachment, Field, Message, Session};
//!
//! # async fn f() -> Result<(), Box<dyn std::error::Error>> {
//! // Load the bearer token from `./config/slack.json`
//! let session = Session::from_config_dir("./config")?;
//!
//! // Describe the attachment panel
//! let mut attachment = Attachment::new(vec![
//!     Field::new("Host", "web-1"),
//!     Field::new("Status", "healthy"),
//! ])?;
//! attachment.title = "Deploy finished".into();
//!
//! // Post it to #deploys
//! session.send_message(&Message::new("deploys", attachment)).await?;
//! # Ok(())
//! # }
//! ```

#![deny(elided_lifetimes_in_paths)]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::missing_errors_doc)]

mod attachment;
mod client;
mod credentials;
mod error;
mod message;
mod session;

pub use crate::attachment::{Attachment, Field};
pub use crate::client::Client;
pub use crate::credentials::Credentials;
pub use crate::error::Error;
pub use crate::message::Message;
pub use crate::session::Session;
