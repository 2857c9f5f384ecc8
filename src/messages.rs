//! The `/messages/*` endpoints: sending mail.

use crate::client::is_false;
use crate::time::to_mandrill_time;
use crate::{Client, Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Handle for the messages endpoints, created with [`Client::messages`].
pub struct Messages<'a> {
    client: &'a Client,
}

impl Client {
    /// Access the messages endpoints.
    pub fn messages(&self) -> Messages<'_> {
        Messages { client: self }
    }
}

impl Messages<'_> {
    /// Send a new transactional message.
    ///
    /// Returns one [`SendStatus`] per recipient.
    ///
    /// # Examples
    /// ```no_run
    /// # use mandrill_client::{Client, Message, Recipient, SendOptions};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), mandrill_client::Error> {
    /// let client = Client::new("your-api-key")?;
    /// let message = Message {
    ///     from_email: "noreply@example.com".into(),
    ///     to: vec![Recipient {
    ///         email: "user@example.com".into(),
    ///         ..Default::default()
    ///     }],
    ///     subject: Some("Welcome".into()),
    ///     text: Some("Hello!".into()),
    ///     ..Default::default()
    /// };
    /// let statuses = client
    ///     .messages()
    ///     .send(&message, &SendOptions::default())
    ///     .await?;
    /// for status in statuses {
    ///     println!("{}: {}", status.email, status.status);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send(&self, message: &Message, options: &SendOptions) -> Result<Vec<SendStatus>> {
        let payload = SendRequest {
            message,
            background: options.background,
            ip_pool: options.ip_pool.as_deref(),
            send_at: options.send_at.map(to_mandrill_time),
        };
        self.client.call("/messages/send.json", &payload).await
    }

    /// Send a plain-text message to a single recipient.
    ///
    /// Convenience over [`Messages::send`] for the common one-recipient case.
    pub async fn simple_send(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        text: &str,
    ) -> Result<SendStatus> {
        let message = Message {
            from_email: from.to_string(),
            to: vec![Recipient {
                email: to.to_string(),
                ..Default::default()
            }],
            subject: Some(subject.to_string()),
            text: Some(text.to_string()),
            ..Default::default()
        };
        let payload = SendRequest {
            message: &message,
            background: false,
            ip_pool: None,
            send_at: None,
        };
        let mut statuses: Vec<SendStatus> =
            self.client.call("/messages/send.json", &payload).await?;
        if statuses.len() != 1 {
            use serde::de::Error as _;
            return Err(Error::Deserialize(serde_json::Error::custom(format!(
                "expected exactly one send status, received {}",
                statuses.len()
            ))));
        }
        Ok(statuses.remove(0))
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    message: &'a Message,
    /// Background sending mode optimized for bulk; recipients come back as
    /// "queued" immediately. Messages with more than 10 recipients are
    /// always sent this way.
    #[serde(rename = "async", skip_serializing_if = "is_false")]
    background: bool,
    /// Dedicated IP pool to send from; ignored for accounts without
    /// dedicated IPs, and unknown pools fall back to the default pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    ip_pool: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    send_at: Option<String>,
}

/// Delivery options for [`Messages::send`].
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    /// Enable background (bulk) sending mode.
    pub background: bool,
    /// Name of the dedicated IP pool to send from.
    pub ip_pool: Option<String>,
    /// When to deliver the message; UTC, whole-second precision.
    pub send_at: Option<DateTime<Utc>>,
}

/// Per-recipient result of a send call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SendStatus {
    /// The recipient's email address.
    pub email: String,
    /// One of "sent", "queued", "scheduled", "rejected", or "invalid".
    pub status: String,
    /// Why the recipient was rejected, when `status` is "rejected".
    #[serde(default)]
    pub reject_reason: Option<String>,
    /// The message's unique id.
    #[serde(rename = "_id")]
    pub id: String,
}

/// A message to send.
///
/// Only `from_email` and `to` are required; every unset optional field is
/// omitted from the request entirely, which the API treats differently from
/// an empty value on several endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Message {
    /// Full HTML content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Full text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Message subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Sender email address.
    pub from_email: String,
    /// Sender display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
    /// Recipients.
    pub to: Vec<Recipient>,
    /// Extra headers; most headers are allowed.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    /// Deliver ahead of non-important messages.
    #[serde(skip_serializing_if = "is_false")]
    pub important: bool,
    /// Track opens for this message.
    #[serde(skip_serializing_if = "is_false")]
    pub track_opens: bool,
    /// Track clicks for this message.
    #[serde(skip_serializing_if = "is_false")]
    pub track_clicks: bool,
    /// Generate a text part when only HTML is given.
    #[serde(skip_serializing_if = "is_false")]
    pub auto_text: bool,
    /// Generate an HTML part when only text is given.
    #[serde(skip_serializing_if = "is_false")]
    pub auto_html: bool,
    /// Inline CSS styles in the HTML; only applied below 256KB.
    #[serde(skip_serializing_if = "is_false")]
    pub inline_css: bool,
    /// Strip query strings from URLs when aggregating tracked URL data.
    #[serde(rename = "url_strip_qs", skip_serializing_if = "is_false")]
    pub url_strip_queries: bool,
    /// Expose all recipients in the "To" header of each email.
    #[serde(skip_serializing_if = "is_false")]
    pub preserve_recipients: bool,
    /// Set to false to remove content logging for sensitive emails.
    #[serde(skip_serializing_if = "is_false")]
    pub view_content_link: bool,
    /// Address that receives an exact copy of each recipient's email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc_address: Option<String>,
    /// Custom domain for open/click tracking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_domain: Option<String>,
    /// Custom domain for SPF/DKIM signing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_domain: Option<String>,
    /// Custom domain for the message's return-path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_path_domain: Option<String>,
    /// Evaluate merge tags; set automatically when merge vars are given.
    #[serde(skip_serializing_if = "is_false")]
    pub merge: bool,
    /// Merge tag language, "mailchimp" or "handlebars".
    #[serde(rename = "merge_language", skip_serializing_if = "Option::is_none")]
    pub merge_lang: Option<String>,
    /// Merge variables applied to all recipients.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub global_merge_vars: Vec<MergeVar>,
    /// Per-recipient merge variables, overriding global ones by name.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub merge_vars: Vec<RecipientMergeVar>,
    /// Tags for stats aggregation; 50 characters or less, and names starting
    /// with an underscore are reserved.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Unique id of an existing subaccount to send through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    /// Domains whose matching URLs get Google Analytics parameters appended.
    #[serde(
        rename = "google_analytics_domains",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub google_analytics_domains: Vec<String>,
    /// Values for the utm_campaign tracking parameter; defaults to the from
    /// address when not provided.
    #[serde(
        rename = "google_analytics_campaign",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub google_analytics_campaign: Vec<String>,
    /// User metadata stored by the API and available for retrieval and
    /// search.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
    /// Per-recipient metadata overriding the global `metadata` values.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recipient_metadata: Vec<RecipientMetadata>,
    /// Attachments.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Embedded images.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<EmbeddedImage>,
}

/// A single message recipient.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Recipient {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// "to" (default), "cc", or "bcc".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub header_type: Option<String>,
}

/// A merge variable.
///
/// Names are case-insensitive, may not start with `_`, and may not
/// contain `:`.
#[derive(Debug, Clone, Serialize)]
pub struct MergeVar {
    pub name: String,
    pub content: serde_json::Value,
}

/// Merge variables scoped to one recipient.
#[derive(Debug, Clone, Serialize)]
pub struct RecipientMergeVar {
    /// The recipient these variables apply to.
    #[serde(rename = "rcpt")]
    pub recipient: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vars: Vec<MergeVar>,
}

/// Metadata scoped to one recipient.
#[derive(Debug, Clone, Serialize)]
pub struct RecipientMetadata {
    #[serde(rename = "rcpt")]
    pub recipient: String,
    pub values: HashMap<String, String>,
}

/// A file attachment, base64-encoded.
#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    /// File name of the attachment.
    pub name: String,
    /// MIME type.
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Content as a base64-encoded string.
    pub content: String,
}

/// An embedded image, base64-encoded.
///
/// Reference it from HTML content as `<img src="cid:NAME">`.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddedImage {
    /// The Content ID of the image.
    pub name: String,
    /// MIME type; must start with `image/`.
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Content as a base64-encoded string.
    pub content: String,
}
