//! The `/users/*` endpoints: account information and connectivity checks.

use crate::client::KeyOnlyRequest;
use crate::{Client, Result};
use serde::Deserialize;

/// Handle for the users endpoints, created with [`Client::users`].
pub struct Users<'a> {
    client: &'a Client,
}

impl Client {
    /// Access the users endpoints.
    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }
}

impl Users<'_> {
    /// Return information about the account tied to the API key.
    pub async fn info(&self) -> Result<UserInfo> {
        self.client.call("/users/info.json", &KeyOnlyRequest {}).await
    }

    /// Validate the API key and the connection to the API.
    ///
    /// Returns `true` when the server answers with its literal `"PONG!"`
    /// acknowledgement.
    ///
    /// # Examples
    /// ```no_run
    /// # use mandrill_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), mandrill_client::Error> {
    /// let client = Client::new("your-api-key")?;
    /// assert!(client.users().ping().await?);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn ping(&self) -> Result<bool> {
        let raw = self
            .client
            .execute("/users/ping.json", &KeyOnlyRequest {})
            .await?;
        Ok(raw == b"\"PONG!\"")
    }

    /// Return the senders that have tried to use this account, both verified
    /// and unverified.
    pub async fn senders(&self) -> Result<Vec<SenderAddress>> {
        self.client
            .call("/users/senders.json", &KeyOnlyRequest {})
            .await
    }
}

/// Account information: username, reputation, quota, and sending stats.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserInfo {
    /// The username of the account, used for SMTP authentication.
    pub username: String,
    /// When the account was created, as a Mandrill UTC timestamp.
    pub created_at: String,
    /// A unique, permanent identifier for this account.
    pub public_id: String,
    /// Reputation on a scale from 0 to 100.
    pub reputation: i64,
    /// The maximum number of emails delivered per hour; mail beyond the
    /// quota is accepted and queued.
    pub hourly_quota: i64,
    /// The number of emails queued because a quota was exceeded.
    pub backlog: i64,
    /// Aggregate sending stats for the account.
    pub stats: UserStats,
}

/// Sending stats aggregated over the standard reporting windows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserStats {
    pub today: UserStat,
    pub last_7_days: UserStat,
    pub last_30_days: UserStat,
    pub last_60_days: UserStat,
    pub last_90_days: UserStat,
    pub all_time: UserStat,
}

/// Sending stats for a single reporting window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserStat {
    pub sent: i64,
    pub hard_bounces: i64,
    pub soft_bounces: i64,
    pub rejects: i64,
    pub complaints: i64,
    pub unsubs: i64,
    pub opens: i64,
    pub unique_opens: i64,
    pub clicks: i64,
    pub unique_clicks: i64,
}

/// Per-address sending history, as reported for account senders, the
/// senders list, and rejection entries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SenderAddress {
    /// The sender's email address.
    pub address: String,
    /// When the sender was first seen, as a Mandrill UTC timestamp.
    pub created_at: String,
    pub sent: i64,
    pub hard_bounces: i64,
    pub soft_bounces: i64,
    pub rejects: i64,
    pub complaints: i64,
    pub unsubs: i64,
    pub opens: i64,
    pub clicks: i64,
    pub unique_opens: i64,
    pub unique_clicks: i64,
}
