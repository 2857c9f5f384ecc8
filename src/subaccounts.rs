//! The `/subaccounts/*` endpoints: isolated sending subaccounts.

use crate::users::UserStat;
use crate::{Client, Result};
use serde::{Deserialize, Serialize};

/// Handle for the subaccounts endpoints, created with [`Client::subaccounts`].
pub struct Subaccounts<'a> {
    client: &'a Client,
}

impl Client {
    /// Access the subaccounts endpoints.
    pub fn subaccounts(&self) -> Subaccounts<'_> {
        Subaccounts { client: self }
    }
}

#[derive(Serialize)]
struct SubaccountIdRequest<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct ListSubaccountsRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    q: Option<&'a str>,
}

impl Subaccounts<'_> {
    /// Return up to 1000 subaccounts, optionally filtered by an id prefix.
    pub async fn list(&self, prefix: Option<&str>) -> Result<Vec<Subaccount>> {
        self.client
            .call("/subaccounts/list.json", &ListSubaccountsRequest { q: prefix })
            .await
    }

    /// Add a new subaccount.
    ///
    /// `id` may be up to 255 characters.
    pub async fn add(&self, id: &str, details: &SubaccountDetails) -> Result<Subaccount> {
        let payload = MutateSubaccountRequest { id, details };
        self.client.call("/subaccounts/add.json", &payload).await
    }

    /// Return detailed information about a subaccount.
    pub async fn info(&self, id: &str) -> Result<SubaccountInfo> {
        self.client
            .call("/subaccounts/info.json", &SubaccountIdRequest { id })
            .await
    }

    /// Update an existing subaccount.
    pub async fn update(&self, id: &str, details: &SubaccountDetails) -> Result<Subaccount> {
        let payload = MutateSubaccountRequest { id, details };
        self.client.call("/subaccounts/update.json", &payload).await
    }

    /// Delete a subaccount. Associated mail is released to the primary
    /// account and cannot be re-scoped.
    pub async fn delete(&self, id: &str) -> Result<Subaccount> {
        self.client
            .call("/subaccounts/delete.json", &SubaccountIdRequest { id })
            .await
    }

    /// Pause a subaccount's sending. Mail delivered to the subaccount is
    /// queued for up to 3 days until it is resumed.
    pub async fn pause(&self, id: &str) -> Result<Subaccount> {
        self.client
            .call("/subaccounts/pause.json", &SubaccountIdRequest { id })
            .await
    }

    /// Resume a paused subaccount's sending.
    pub async fn resume(&self, id: &str) -> Result<Subaccount> {
        self.client
            .call("/subaccounts/resume.json", &SubaccountIdRequest { id })
            .await
    }
}

/// Optional attributes for creating or updating a subaccount.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubaccountDetails {
    /// Display name, up to 1024 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Manual hourly quota; when unset, the quota is managed based on
    /// reputation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_quota: Option<i64>,
}

#[derive(Serialize)]
struct MutateSubaccountRequest<'a> {
    id: &'a str,
    #[serde(flatten)]
    details: &'a SubaccountDetails,
}

/// A subaccount summary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subaccount {
    /// Unique identifier.
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Manual hourly quota, when one is set.
    #[serde(default)]
    pub custom_quota: Option<i64>,
    /// Current sending status, "active" or "paused".
    pub status: String,
    /// Reputation on a scale from 0 to 100.
    pub reputation: i64,
    pub created_at: String,
    /// When the subaccount first sent, if it has.
    #[serde(default)]
    pub first_sent_at: Option<String>,
    /// Emails sent so far this week (weeks start midnight Monday, UTC).
    pub sent_weekly: i64,
    /// Emails sent so far this month (months start midnight of the 1st, UTC).
    pub sent_monthly: i64,
    /// Emails sent since the subaccount was created.
    pub sent_total: i64,
}

/// Detailed subaccount information.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubaccountInfo {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub custom_quota: Option<i64>,
    pub status: String,
    pub reputation: i64,
    pub created_at: String,
    #[serde(default)]
    pub first_sent_at: Option<String>,
    pub sent_weekly: i64,
    pub sent_monthly: i64,
    pub sent_total: i64,
    pub sent_hourly: i64,
    pub hourly_quota: i64,
    /// Aggregate stats for the last 30 days.
    pub last_30_days: UserStat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutate_request_omits_unset_details() {
        let payload = MutateSubaccountRequest {
            id: "acct-1",
            details: &SubaccountDetails::default(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, serde_json::json!({"id": "acct-1"}));
    }

    #[test]
    fn mutate_request_flattens_set_details() {
        let details = SubaccountDetails {
            name: Some("Customer A".into()),
            notes: None,
            custom_quota: Some(500),
        };
        let payload = MutateSubaccountRequest {
            id: "acct-1",
            details: &details,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["id"], "acct-1");
        assert_eq!(value["name"], "Customer A");
        assert_eq!(value["custom_quota"], 500);
        assert!(value.get("notes").is_none());
    }

    #[test]
    fn list_request_omits_unset_prefix() {
        let value = serde_json::to_value(&ListSubaccountsRequest { q: None }).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }
}
