//! The `/whitelists/*` endpoints: the rejection whitelist.

use crate::{Client, Result};
use serde::{Deserialize, Serialize};

/// Handle for the whitelists endpoints, created with [`Client::whitelists`].
pub struct Whitelists<'a> {
    client: &'a Client,
}

impl Client {
    /// Access the rejection whitelist endpoints.
    pub fn whitelists(&self) -> Whitelists<'_> {
        Whitelists { client: self }
    }
}

impl Whitelists<'_> {
    /// Add an email address to the rejection whitelist.
    ///
    /// If the address is currently on the blacklist, that entry is removed
    /// automatically.
    pub async fn add(&self, email: &str, comment: Option<&str>) -> Result<WhitelistAdded> {
        let payload = AddWhitelistRequest { email, comment };
        self.client.call("/whitelists/add.json", &payload).await
    }

    /// Remove an email address from the whitelist.
    pub async fn delete(&self, email: &str) -> Result<WhitelistDeleted> {
        let payload = EmailRequest { email };
        self.client.call("/whitelists/delete.json", &payload).await
    }

    /// Retrieve up to 1000 whitelist entries, optionally filtered by an
    /// email address or search prefix.
    pub async fn list(&self, email: Option<&str>) -> Result<Vec<WhitelistEntry>> {
        let payload = ListWhitelistRequest { email };
        self.client.call("/whitelists/list.json", &payload).await
    }
}

#[derive(Serialize)]
struct AddWhitelistRequest<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
}

#[derive(Serialize)]
struct EmailRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct ListWhitelistRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

/// Result of adding a whitelist entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WhitelistAdded {
    pub email: String,
    /// Whether the address was added.
    pub added: bool,
}

/// Result of deleting a whitelist entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WhitelistDeleted {
    pub email: String,
    /// Whether the address was deleted.
    pub deleted: bool,
}

/// A whitelist entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WhitelistEntry {
    /// The whitelisted email address.
    pub email: String,
    /// Why the address was whitelisted.
    #[serde(default)]
    pub detail: Option<String>,
    /// When the address was added, as a Mandrill UTC timestamp.
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_request_omits_unset_comment() {
        let payload = AddWhitelistRequest {
            email: "user@example.com",
            comment: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("comment").is_none());

        let payload = AddWhitelistRequest {
            email: "user@example.com",
            comment: Some("vip"),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["comment"], "vip");
    }

    #[test]
    fn list_request_omits_unset_email() {
        let payload = ListWhitelistRequest { email: None };
        assert_eq!(serde_json::to_value(&payload).unwrap(), serde_json::json!({}));
    }
}
