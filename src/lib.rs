//! # Mandrill Client
//! Asynchronous wrapper around the Mandrill transactional email HTTP API, providing one typed method per remote endpoint from Rust using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers sending transactional mail through Mandrill: send messages ([`Message`]), manage templates, tags, senders, subaccounts, webhooks, inbound routing, dedicated IPs, exports, and the rejection blacklist/whitelist, all with typed requests and responses.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`, so ensure the chosen Tokio features (`rt-multi-thread` or `current_thread`) are available in your application.
//!
//! ## Out of scope
//! Not a mail server or SMTP client, and no retry or rate-limit logic: it only wraps the Mandrill HTTP API and inherits its quotas, reputation scoring, and delivery behavior. Webhook receipt and signature verification are the receiving application's concern.
//!
//! ## Errors
//! The API reports failures as a structured error document, on error statuses and sometimes on 200; these surface as [`Error::Api`] carrying an [`ApiError`] whose [`kind`](ApiError::kind) classifies the condition. Transport failures become [`Error::Transport`], and decode issues [`Error::Serialize`] or [`Error::Deserialize`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use mandrill_client::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mandrill_client::Error> {
//!     let client = Client::new("your-api-key")?;
//!     assert!(client.users().ping().await?);
//!
//!     let status = client
//!         .messages()
//!         .simple_send(
//!             "noreply@example.com",
//!             "user@example.com",
//!             "Welcome",
//!             "Hello from Rust!",
//!         )
//!         .await?;
//!     println!("{}: {}", status.email, status.status);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod time;

pub mod exports;
pub mod inbound;
pub mod ips;
pub mod messages;
pub mod metadata;
pub mod rejects;
pub mod senders;
pub mod subaccounts;
pub mod tags;
pub mod templates;
pub mod urls;
pub mod users;
pub mod webhooks;
pub mod whitelists;

pub use client::{API_BASE_URL, Client, ClientBuilder};
pub use error::{ApiError, ApiErrorKind, Error};
pub use messages::{Message, Recipient, SendOptions, SendStatus};
pub use time::{MANDRILL_TIME_FORMAT, from_mandrill_time, to_mandrill_time};

/// Result type alias for Mandrill operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
