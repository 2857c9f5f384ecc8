//! The `/ips/*` endpoints: dedicated IPs, warmup, pools, and custom DNS.

use crate::client::{KeyOnlyRequest, is_false};
use crate::{Client, Result};
use serde::{Deserialize, Serialize};

/// Handle for the dedicated IP endpoints, created with [`Client::ips`].
pub struct Ips<'a> {
    client: &'a Client,
}

impl Client {
    /// Access the dedicated IP endpoints.
    pub fn ips(&self) -> Ips<'_> {
        Ips { client: self }
    }
}

#[derive(Serialize)]
struct IpRequest<'a> {
    ip: &'a str,
}

#[derive(Serialize)]
struct PoolRequest<'a> {
    pool: &'a str,
}

#[derive(Serialize)]
struct IpDomainRequest<'a> {
    ip: &'a str,
    domain: &'a str,
}

impl Ips<'_> {
    /// Return the dedicated IPs assigned to the account.
    pub async fn list(&self) -> Result<Vec<DedicatedIp>> {
        self.client.call("/ips/list.json", &KeyOnlyRequest {}).await
    }

    /// Return information about a single dedicated IP.
    pub async fn info(&self, ip: &str) -> Result<DedicatedIp> {
        self.client.call("/ips/info.json", &IpRequest { ip }).await
    }

    /// Request an additional dedicated IP.
    ///
    /// Accounts may have one outstanding request at a time; requests are
    /// processed within 24 hours.
    pub async fn provision(&self, warmup: bool, pool: Option<&str>) -> Result<ProvisionedIp> {
        let payload = ProvisionRequest { warmup, pool };
        self.client.call("/ips/provision.json", &payload).await
    }

    /// Begin the warmup process for a dedicated IP.
    ///
    /// Over roughly 30 days an increasing share of mail is routed over the
    /// warming-up IP; the rest goes over shared IPs or other IPs in the
    /// same pool.
    pub async fn start_warmup(&self, ip: &str) -> Result<DedicatedIp> {
        self.client
            .call("/ips/start-warmup.json", &IpRequest { ip })
            .await
    }

    /// Cancel the warmup process for a dedicated IP.
    pub async fn cancel_warmup(&self, ip: &str) -> Result<DedicatedIp> {
        self.client
            .call("/ips/cancel-warmup.json", &IpRequest { ip })
            .await
    }

    /// Move a dedicated IP to a different pool.
    pub async fn set_pool(&self, ip: &str, pool: &str, create_pool: bool) -> Result<DedicatedIp> {
        let payload = SetPoolRequest {
            ip,
            pool,
            create_pool,
        };
        self.client.call("/ips/set-pool.json", &payload).await
    }

    /// Delete a dedicated IP. This is permanent and cannot be undone.
    pub async fn delete(&self, ip: &str) -> Result<IpDeleted> {
        self.client.call("/ips/delete.json", &IpRequest { ip }).await
    }

    /// Return the dedicated IP pools on the account.
    pub async fn list_pools(&self) -> Result<Vec<IpPool>> {
        self.client
            .call("/ips/list-pools.json", &KeyOnlyRequest {})
            .await
    }

    /// Return information about a single dedicated IP pool.
    pub async fn pool_info(&self, pool: &str) -> Result<IpPool> {
        self.client
            .call("/ips/pool-info.json", &PoolRequest { pool })
            .await
    }

    /// Create a new dedicated IP pool.
    pub async fn create_pool(&self, pool: &str) -> Result<IpPool> {
        self.client
            .call("/ips/create-pool.json", &PoolRequest { pool })
            .await
    }

    /// Delete an empty dedicated IP pool.
    pub async fn delete_pool(&self, pool: &str) -> Result<PoolDeleted> {
        self.client
            .call("/ips/delete-pool.json", &PoolRequest { pool })
            .await
    }

    /// Test whether a domain name is set up as a valid custom DNS name for
    /// a dedicated IP.
    pub async fn check_custom_dns(&self, ip: &str, domain: &str) -> Result<DnsCheck> {
        self.client
            .call("/ips/check-custom-dns.json", &IpDomainRequest { ip, domain })
            .await
    }

    /// Configure the custom DNS name for a dedicated IP.
    pub async fn set_custom_dns(&self, ip: &str, domain: &str) -> Result<DedicatedIp> {
        self.client
            .call("/ips/set-custom-dns.json", &IpDomainRequest { ip, domain })
            .await
    }
}

#[derive(Serialize)]
struct ProvisionRequest<'a> {
    #[serde(skip_serializing_if = "is_false")]
    warmup: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pool: Option<&'a str>,
}

#[derive(Serialize)]
struct SetPoolRequest<'a> {
    ip: &'a str,
    pool: &'a str,
    #[serde(skip_serializing_if = "is_false")]
    create_pool: bool,
}

/// A dedicated IP and its current state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DedicatedIp {
    /// The IP address.
    pub ip: String,
    pub created_at: String,
    /// The pool the IP belongs to.
    pub pool: String,
    /// The reverse DNS domain configured for the IP.
    #[serde(default)]
    pub domain: Option<String>,
    /// Custom DNS state for the IP.
    pub custom_dns: CustomDns,
    /// Warmup state for the IP.
    pub warmup: WarmupStatus,
}

/// Custom DNS state of a dedicated IP.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomDns {
    /// Whether custom DNS is enabled.
    pub enabled: bool,
    /// Whether the custom DNS name points back at the IP.
    pub valid: bool,
    /// The error found with the custom DNS name, if any.
    #[serde(default)]
    pub error: Option<String>,
}

/// Warmup state of a dedicated IP.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WarmupStatus {
    /// Whether the IP is currently warming up.
    pub warming_up: bool,
    /// When warmup started, if it has.
    #[serde(default)]
    pub start_at: Option<String>,
    /// When warmup completes, if it is running.
    #[serde(default)]
    pub end_at: Option<String>,
}

/// Acknowledgement of a provisioning request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProvisionedIp {
    /// When the IP was requested, as a Mandrill UTC timestamp.
    pub requested_at: String,
}

/// Result of deleting a dedicated IP.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IpDeleted {
    pub ip: String,
    pub deleted: bool,
}

/// A dedicated IP pool and its members.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IpPool {
    /// The pool name.
    pub name: String,
    pub created_at: String,
    /// The dedicated IPs in the pool.
    #[serde(default)]
    pub ips: Vec<DedicatedIp>,
}

/// Result of deleting a pool.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PoolDeleted {
    pub pool: String,
    pub deleted: bool,
}

/// Result of a custom DNS check.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DnsCheck {
    /// Whether the domain name resolves correctly.
    pub valid: bool,
    /// The error found with the domain name, if any.
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provision_request_omits_unset_fields() {
        let payload = ProvisionRequest {
            warmup: false,
            pool: None,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({})
        );

        let payload = ProvisionRequest {
            warmup: true,
            pool: Some("transactional"),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["warmup"], true);
        assert_eq!(value["pool"], "transactional");
    }

    #[test]
    fn set_pool_request_omits_unset_create_flag() {
        let payload = SetPoolRequest {
            ip: "192.0.2.1",
            pool: "main",
            create_pool: false,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("create_pool").is_none());
        assert_eq!(value["ip"], "192.0.2.1");
        assert_eq!(value["pool"], "main");
    }
}
