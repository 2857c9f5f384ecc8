//! The `/webhooks/*` endpoints: outgoing event webhooks.

use crate::client::KeyOnlyRequest;
use crate::{Client, Result};
use serde::{Deserialize, Serialize};

/// Handle for the webhooks endpoints, created with [`Client::webhooks`].
pub struct Webhooks<'a> {
    client: &'a Client,
}

impl Client {
    /// Access the webhooks endpoints.
    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks { client: self }
    }
}

#[derive(Serialize)]
struct WebhookIdRequest {
    id: i64,
}

impl Webhooks<'_> {
    /// Return the webhooks defined on the account.
    pub async fn list(&self) -> Result<Vec<WebhookInfo>> {
        self.client
            .call("/webhooks/list.json", &KeyOnlyRequest {})
            .await
    }

    /// Add a new webhook.
    ///
    /// `events` selects the message events to post: "send", "hard_bounce",
    /// "soft_bounce", "open", "click", "spam", "unsub", or "reject".
    pub async fn add(
        &self,
        url: &str,
        description: Option<&str>,
        events: &[&str],
    ) -> Result<WebhookInfo> {
        let payload = AddWebhookRequest {
            url,
            description,
            events,
        };
        self.client.call("/webhooks/add.json", &payload).await
    }

    /// Return information about a webhook.
    pub async fn info(&self, id: i64) -> Result<WebhookInfo> {
        self.client
            .call("/webhooks/info.json", &WebhookIdRequest { id })
            .await
    }

    /// Update an existing webhook.
    pub async fn update(
        &self,
        id: i64,
        url: &str,
        description: Option<&str>,
        events: &[&str],
    ) -> Result<WebhookInfo> {
        let payload = UpdateWebhookRequest {
            id,
            url,
            description,
            events,
        };
        self.client.call("/webhooks/update.json", &payload).await
    }

    /// Delete a webhook.
    pub async fn delete(&self, id: i64) -> Result<WebhookInfo> {
        self.client
            .call("/webhooks/delete.json", &WebhookIdRequest { id })
            .await
    }
}

#[derive(Serialize)]
struct AddWebhookRequest<'a> {
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    events: &'a [&'a str],
}

#[derive(Serialize)]
struct UpdateWebhookRequest<'a> {
    id: i64,
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    events: &'a [&'a str],
}

/// A webhook and its delivery history.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WebhookInfo {
    /// Unique integer identifier.
    pub id: i64,
    /// The URL event data is posted to.
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    /// The key used to sign requests for this webhook.
    pub auth_key: String,
    /// The message events posted to the hook.
    #[serde(default)]
    pub events: Vec<String>,
    pub created_at: String,
    /// When the webhook last successfully received events.
    #[serde(default)]
    pub last_sent_at: Option<String>,
    /// The number of event batches ever sent to this webhook.
    pub batches_sent: i64,
    /// The total number of events ever sent to this webhook.
    pub events_sent: i64,
    /// The last error seen when posting to this webhook, if any.
    #[serde(default)]
    pub last_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_request_omits_unset_fields() {
        let payload = AddWebhookRequest {
            url: "https://example.com/hook",
            description: None,
            events: &[],
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"url": "https://example.com/hook"})
        );
    }

    #[test]
    fn update_request_carries_set_fields() {
        let payload = UpdateWebhookRequest {
            id: 42,
            url: "https://example.com/hook",
            description: Some("bounces"),
            events: &["hard_bounce", "soft_bounce"],
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["id"], 42);
        assert_eq!(value["description"], "bounces");
        assert_eq!(value["events"][1], "soft_bounce");
    }
}
