//! The `/tags/*` endpoints: per-tag sending stats.

use crate::client::KeyOnlyRequest;
use crate::{Client, Result};
use serde::{Deserialize, Serialize};

/// Handle for the tags endpoints, created with [`Client::tags`].
pub struct Tags<'a> {
    client: &'a Client,
}

impl Client {
    /// Access the tags endpoints.
    pub fn tags(&self) -> Tags<'_> {
        Tags { client: self }
    }
}

#[derive(Serialize)]
struct TagRequest<'a> {
    tag: &'a str,
}

impl Tags<'_> {
    /// Return all user-defined tags and their stats.
    pub async fn list(&self) -> Result<Vec<TagInfo>> {
        self.client.call("/tags/list.json", &KeyOnlyRequest {}).await
    }

    /// Permanently remove a tag, its stats, and the tag from any messages
    /// that have been sent. There is no way to undo this.
    pub async fn delete(&self, tag: &str) -> Result<TagInfo> {
        self.client.call("/tags/delete.json", &TagRequest { tag }).await
    }

    /// Return detailed information about a single tag, including aggregates
    /// of recent stats.
    pub async fn info(&self, tag: &str) -> Result<TagStats> {
        self.client.call("/tags/info.json", &TagRequest { tag }).await
    }

    /// Return hourly stats for the last 30 days for a tag.
    pub async fn time_series(&self, tag: &str) -> Result<Vec<TagTimeSeries>> {
        self.client
            .call("/tags/time-series.json", &TagRequest { tag })
            .await
    }

    /// Return hourly stats for the last 30 days for all tags.
    pub async fn all_time_series(&self) -> Result<Vec<TagTimeSeries>> {
        self.client
            .call("/tags/all-time-series.json", &KeyOnlyRequest {})
            .await
    }
}

/// A tag and its all-time stats.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagInfo {
    /// The tag itself.
    pub tag: String,
    /// The tag's current reputation on a scale from 0 to 100.
    pub reputation: i64,
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

/// Detailed tag information with aggregates over the reporting windows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagStats {
    pub tag: String,
    pub reputation: i64,
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
    #[serde(rename = "stat")]
    pub stats: TagWindows,
}

/// Tag stats broken down by reporting window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagWindows {
    pub today: TagWindowStat,
    pub last_7_days: TagWindowStat,
    pub last_30_days: TagWindowStat,
    pub last_60_days: TagWindowStat,
    pub last_90_days: TagWindowStat,
}

/// Tag stats for a single reporting window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagWindowStat {
    pub reputation: i64,
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

/// One hour of tag stats.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagTimeSeries {
    /// The hour, as a Mandrill UTC timestamp.
    pub time: String,
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
