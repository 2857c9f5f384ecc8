//! The `/senders/*` endpoints: sending addresses and domains.

use crate::client::KeyOnlyRequest;
use crate::users::{SenderAddress, UserStats};
use crate::{Client, Result};
use serde::{Deserialize, Serialize};

/// Handle for the senders endpoints, created with [`Client::senders`].
pub struct Senders<'a> {
    client: &'a Client,
}

impl Client {
    /// Access the senders endpoints.
    pub fn senders(&self) -> Senders<'_> {
        Senders { client: self }
    }
}

#[derive(Serialize)]
pub(crate) struct DomainRequest<'a> {
    pub(crate) domain: &'a str,
}

#[derive(Serialize)]
struct AddressRequest<'a> {
    address: &'a str,
}

impl Senders<'_> {
    /// Return the senders that have tried to use this account.
    pub async fn list(&self) -> Result<Vec<SenderAddress>> {
        self.client
            .call("/senders/list.json", &KeyOnlyRequest {})
            .await
    }

    /// Return the sender domains that have been added to this account.
    pub async fn domains(&self) -> Result<Vec<SenderDomain>> {
        self.client
            .call("/senders/domains.json", &KeyOnlyRequest {})
            .await
    }

    /// Add a sender domain to the account.
    ///
    /// Sender domains are added automatically as mail is sent; this call
    /// adds one ahead of time.
    pub async fn add_domain(&self, domain: &str) -> Result<SenderDomain> {
        self.client
            .call("/senders/add-domain.json", &DomainRequest { domain })
            .await
    }

    /// Check the SPF and DKIM settings for a domain, adding it to the
    /// account first if needed.
    pub async fn check_domain(&self, domain: &str) -> Result<SenderDomain> {
        self.client
            .call("/senders/check-domain.json", &DomainRequest { domain })
            .await
    }

    /// Send a verification email to `mailbox@domain` to confirm ownership
    /// of the domain.
    ///
    /// Once verified in one account, other accounts cannot have their
    /// messages signed by the domain without verifying it themselves.
    pub async fn verify_domain(&self, domain: &str, mailbox: &str) -> Result<DomainVerification> {
        let payload = VerifyDomainRequest { domain, mailbox };
        self.client
            .call("/senders/verify-domain.json", &payload)
            .await
    }

    /// Return detailed information about a single sender, including
    /// aggregates of recent stats.
    pub async fn info(&self, address: &str) -> Result<SenderInfo> {
        self.client
            .call("/senders/info.json", &AddressRequest { address })
            .await
    }

    /// Return hourly stats for the last 30 days for a sender.
    pub async fn time_series(&self, address: &str) -> Result<Vec<SenderTimeSeries>> {
        self.client
            .call("/senders/time-series.json", &AddressRequest { address })
            .await
    }
}

#[derive(Serialize)]
struct VerifyDomainRequest<'a> {
    domain: &'a str,
    mailbox: &'a str,
}

/// Validation state of a DNS record (SPF, DKIM, or tracking CNAME).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DnsRecord {
    /// Whether the record is valid for use with the API.
    pub valid: bool,
    /// When the record becomes usable: set when the record is valid now but
    /// was previously invalid, and the API is waiting out the record's TTL.
    #[serde(default)]
    pub valid_after: Option<String>,
    /// A description of what is wrong with the record, when anything is.
    #[serde(default)]
    pub error: Option<String>,
}

/// A sending domain and its authentication state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SenderDomain {
    /// The domain name.
    pub domain: String,
    pub created_at: String,
    /// When the domain's DNS settings were last tested.
    #[serde(default)]
    pub last_tested_at: Option<String>,
    /// State of the domain's SPF record.
    pub spf: DnsRecord,
    /// State of the domain's DKIM record.
    pub dkim: DnsRecord,
    /// When the domain was verified, if it has been.
    #[serde(default)]
    pub verified_at: Option<String>,
    /// Whether the domain can be used to authenticate mail. When false with
    /// valid SPF and DKIM, the domain still needs verification.
    pub valid_signing: bool,
}

/// Result of a domain verification request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DomainVerification {
    /// "sent" when the verification email went out.
    pub status: String,
    pub domain: String,
    /// The address the verification email was sent to.
    pub email: String,
}

/// Detailed sender information with aggregates of recent stats.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SenderInfo {
    pub address: String,
    pub created_at: String,
    pub sent: i64,
    pub hard_bounces: i64,
    pub soft_bounces: i64,
    pub rejects: i64,
    pub complaints: i64,
    pub unsubs: i64,
    pub opens: i64,
    pub clicks: i64,
    pub stats: UserStats,
}

/// One hour of sender stats.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SenderTimeSeries {
    /// The hour, as a Mandrill UTC timestamp.
    pub time: String,
    pub sent: i64,
    pub hard_bounces: i64,
    pub soft_bounces: i64,
    pub rejects: i64,
    pub complaints: i64,
    pub opens: i64,
    pub unique_opens: i64,
    pub clicks: i64,
    pub unique_clicks: i64,
}
