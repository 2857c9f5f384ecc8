//! The `/urls/*` endpoints: tracked URLs and tracking domains.

use crate::client::KeyOnlyRequest;
use crate::senders::{DnsRecord, DomainRequest};
use crate::{Client, Result};
use serde::{Deserialize, Serialize};

/// Handle for the urls endpoints, created with [`Client::urls`].
pub struct Urls<'a> {
    client: &'a Client,
}

impl Client {
    /// Access the tracked URL endpoints.
    pub fn urls(&self) -> Urls<'_> {
        Urls { client: self }
    }
}

impl Urls<'_> {
    /// Return the 100 most clicked URLs.
    pub async fn list(&self) -> Result<Vec<UrlStats>> {
        self.client.call("/urls/list.json", &KeyOnlyRequest {}).await
    }

    /// Return the 100 most clicked URLs matching a search query.
    pub async fn search(&self, query: &str) -> Result<Vec<UrlStats>> {
        #[derive(Serialize)]
        struct SearchRequest<'a> {
            q: &'a str,
        }
        self.client
            .call("/urls/search.json", &SearchRequest { q: query })
            .await
    }

    /// Return hourly stats for the last 30 days for a tracked URL.
    pub async fn time_series(&self, url: &str) -> Result<Vec<UrlTimeSeries>> {
        #[derive(Serialize)]
        struct UrlRequest<'a> {
            url: &'a str,
        }
        self.client
            .call("/urls/time-series.json", &UrlRequest { url })
            .await
    }

    /// Return the tracking domains configured for the account.
    pub async fn tracking_domains(&self) -> Result<Vec<TrackingDomain>> {
        self.client
            .call("/urls/tracking-domains.json", &KeyOnlyRequest {})
            .await
    }

    /// Add a tracking domain to the account.
    pub async fn add_tracking_domain(&self, domain: &str) -> Result<TrackingDomain> {
        self.client
            .call("/urls/add-tracking-domain.json", &DomainRequest { domain })
            .await
    }

    /// Check the CNAME settings of an existing tracking domain.
    pub async fn check_tracking_domain(&self, domain: &str) -> Result<TrackingDomain> {
        self.client
            .call("/urls/check-tracking-domain.json", &DomainRequest { domain })
            .await
    }
}

/// Aggregate click stats for one tracked URL.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UrlStats {
    /// The tracked URL.
    pub url: String,
    /// The number of emails that contained the URL.
    pub sent: i64,
    /// The number of times the URL has been clicked.
    pub clicks: i64,
    /// The number of unique emails that generated clicks for the URL.
    pub unique_clicks: i64,
}

/// One hour of click stats for a tracked URL.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UrlTimeSeries {
    /// The hour, as a Mandrill UTC timestamp.
    pub time: String,
    pub sent: i64,
    pub clicks: i64,
    pub unique_clicks: i64,
}

/// A tracking domain and its CNAME state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrackingDomain {
    pub domain: String,
    pub created_at: String,
    /// When the domain's DNS settings were last tested.
    #[serde(default)]
    pub last_tested_at: Option<String>,
    /// State of the domain's CNAME record.
    pub cname: DnsRecord,
    /// Whether the domain can currently be used for tracking.
    pub valid_tracking: bool,
}
