//! The `/rejects/*` endpoints: the rejection blacklist.

use crate::users::SenderAddress;
use crate::{Client, Result};
use serde::{Deserialize, Serialize};

/// Handle for the rejects endpoints, created with [`Client::rejects`].
pub struct Rejects<'a> {
    client: &'a Client,
}

impl Client {
    /// Access the rejection blacklist endpoints.
    pub fn rejects(&self) -> Rejects<'_> {
        Rejects { client: self }
    }
}

impl Rejects<'_> {
    /// Add an email address to the rejection blacklist.
    ///
    /// `comment` optionally describes the rejection; `subaccount` limits the
    /// entry to one subaccount's blacklist.
    pub async fn add(
        &self,
        email: &str,
        comment: Option<&str>,
        subaccount: Option<&str>,
    ) -> Result<RejectAdded> {
        let payload = AddRejectRequest {
            email,
            comment,
            subaccount,
        };
        self.client.call("/rejects/add.json", &payload).await
    }

    /// Delete a rejection blacklist entry.
    ///
    /// There is no limit to how many rejections can be removed, but each
    /// deletion affects the account's reputation.
    pub async fn delete(&self, email: &str, subaccount: Option<&str>) -> Result<RejectDeleted> {
        let payload = DeleteRejectRequest { email, subaccount };
        self.client.call("/rejects/delete.json", &payload).await
    }

    /// Retrieve up to 1000 rejection blacklist entries, optionally filtered
    /// by an email address or search prefix.
    pub async fn list(
        &self,
        email: Option<&str>,
        include_expired: bool,
        subaccount: Option<&str>,
    ) -> Result<Vec<RejectEntry>> {
        let payload = ListRejectsRequest {
            email,
            include_expired,
            subaccount,
        };
        self.client.call("/rejects/list.json", &payload).await
    }
}

#[derive(Serialize)]
struct AddRejectRequest<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subaccount: Option<&'a str>,
}

#[derive(Serialize)]
struct DeleteRejectRequest<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    subaccount: Option<&'a str>,
}

#[derive(Serialize)]
struct ListRejectsRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "crate::client::is_false")]
    include_expired: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    subaccount: Option<&'a str>,
}

/// Result of adding a blacklist entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RejectAdded {
    /// The email address that was provided.
    pub email: String,
    /// Whether the address was added to the blacklist.
    pub added: bool,
}

/// Result of deleting a blacklist entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RejectDeleted {
    /// The email address that was removed.
    pub email: String,
    /// Whether the address was deleted successfully.
    pub deleted: bool,
    /// The subaccount blacklist the address was removed from, if any.
    #[serde(default)]
    pub subaccount: Option<String>,
}

/// A rejection blacklist entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RejectEntry {
    pub email: String,
    /// Why the email was added: "hard-bounce", "soft-bounce", "spam",
    /// "unsub", or "custom".
    pub reason: String,
    #[serde(default)]
    pub detail: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub last_event_at: Option<String>,
    /// When the entry's expiration elapses, if it expires.
    #[serde(default)]
    pub expires_at: Option<String>,
    /// Whether the entry has expired.
    pub expired: bool,
    #[serde(default)]
    pub subaccount: Option<String>,
    /// Sending history of the address, when available.
    #[serde(default)]
    pub sender: Option<SenderAddress>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // The list payload's subaccount field is the one whose struct tag was
    // silently broken upstream; pin the intended omission behavior here.
    #[test]
    fn list_request_omits_unset_fields() {
        let payload = ListRejectsRequest {
            email: None,
            include_expired: false,
            subaccount: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn list_request_carries_set_fields() {
        let payload = ListRejectsRequest {
            email: Some("user@example.com"),
            include_expired: true,
            subaccount: Some("acct-1"),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["email"], "user@example.com");
        assert_eq!(value["include_expired"], true);
        assert_eq!(value["subaccount"], "acct-1");
    }

    #[test]
    fn add_request_omits_unset_fields() {
        let payload = AddRejectRequest {
            email: "user@example.com",
            comment: None,
            subaccount: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        let fields = value.as_object().unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(value["email"], "user@example.com");
    }

    #[test]
    fn delete_request_omits_unset_subaccount() {
        let payload = DeleteRejectRequest {
            email: "user@example.com",
            subaccount: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("subaccount").is_none());
    }
}
