//! The `/inbound/*` endpoints: inbound domains and routing.

use crate::client::KeyOnlyRequest;
use crate::senders::DomainRequest;
use crate::{Client, Result};
use serde::{Deserialize, Serialize};

/// Handle for the inbound endpoints, created with [`Client::inbound`].
pub struct Inbound<'a> {
    client: &'a Client,
}

impl Client {
    /// Access the inbound mail endpoints.
    pub fn inbound(&self) -> Inbound<'_> {
        Inbound { client: self }
    }
}

#[derive(Serialize)]
struct RouteIdRequest<'a> {
    id: &'a str,
}

impl Inbound<'_> {
    /// Return the inbound domains registered on the account.
    pub async fn domains(&self) -> Result<Vec<InboundDomain>> {
        self.client
            .call("/inbound/domains.json", &KeyOnlyRequest {})
            .await
    }

    /// Add an inbound domain.
    pub async fn add_domain(&self, domain: &str) -> Result<InboundDomain> {
        self.client
            .call("/inbound/add-domain.json", &DomainRequest { domain })
            .await
    }

    /// Check the MX settings for an inbound domain.
    pub async fn check_domain(&self, domain: &str) -> Result<InboundDomain> {
        self.client
            .call("/inbound/check-domain.json", &DomainRequest { domain })
            .await
    }

    /// Delete an inbound domain; mail to it will no longer be accepted.
    pub async fn delete_domain(&self, domain: &str) -> Result<InboundDomain> {
        self.client
            .call("/inbound/delete-domain.json", &DomainRequest { domain })
            .await
    }

    /// Return the mailbox routes defined for an inbound domain.
    pub async fn routes(&self, domain: &str) -> Result<Vec<InboundRoute>> {
        self.client
            .call("/inbound/routes.json", &DomainRequest { domain })
            .await
    }

    /// Add a new mailbox route to an inbound domain.
    ///
    /// `pattern` may use `*` as a wildcard over the mailbox part; matching
    /// messages are posted to `url`.
    pub async fn add_route(&self, domain: &str, pattern: &str, url: &str) -> Result<InboundRoute> {
        let payload = AddRouteRequest {
            domain,
            pattern,
            url,
        };
        self.client.call("/inbound/add-route.json", &payload).await
    }

    /// Update the pattern or webhook of an existing route; unset parts keep
    /// their current value.
    pub async fn update_route(
        &self,
        id: &str,
        pattern: Option<&str>,
        url: Option<&str>,
    ) -> Result<InboundRoute> {
        let payload = UpdateRouteRequest { id, pattern, url };
        self.client
            .call("/inbound/update-route.json", &payload)
            .await
    }

    /// Delete an existing inbound route.
    pub async fn delete_route(&self, id: &str) -> Result<InboundRoute> {
        self.client
            .call("/inbound/delete-route.json", &RouteIdRequest { id })
            .await
    }

    /// Take a raw MIME document destined for an inbound domain and run it
    /// through the routing hooks exactly as if it had arrived over SMTP.
    pub async fn send_raw(
        &self,
        raw_message: &str,
        options: &SendRawOptions,
    ) -> Result<Vec<RouteMatch>> {
        let payload = SendRawRequest {
            raw_message,
            to: &options.to,
            mail_from: options.mail_from.as_deref(),
            helo: options.helo.as_deref(),
            client_address: options.client_address.as_deref(),
        };
        self.client.call("/inbound/send-raw.json", &payload).await
    }
}

#[derive(Serialize)]
struct AddRouteRequest<'a> {
    domain: &'a str,
    pattern: &'a str,
    url: &'a str,
}

#[derive(Serialize)]
struct UpdateRouteRequest<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

#[derive(Serialize)]
struct SendRawRequest<'a> {
    raw_message: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    to: &'a Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mail_from: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    helo: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_address: Option<&'a str>,
}

/// Envelope overrides for [`Inbound::send_raw`].
#[derive(Debug, Clone, Default)]
pub struct SendRawOptions {
    /// Recipient addresses; defaults to the To header of the message.
    pub to: Vec<String>,
    /// Envelope sender; defaults to the From header of the message.
    pub mail_from: Option<String>,
    /// HELO hostname the message should appear to come from.
    pub helo: Option<String>,
    /// IP address the message should appear to come from.
    pub client_address: Option<String>,
}

/// An inbound domain and its MX state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InboundDomain {
    pub domain: String,
    pub created_at: String,
    /// Whether the domain's MX records point at the inbound servers.
    pub valid_mx: bool,
}

/// A mailbox route on an inbound domain.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InboundRoute {
    /// Unique identifier of the route.
    pub id: String,
    /// The mailbox pattern the route matches.
    pub pattern: String,
    /// The webhook URL matching messages are posted to.
    pub url: String,
}

/// The route a raw message matched, per recipient.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteMatch {
    /// The matched recipient address.
    pub email: String,
    pub pattern: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_route_omits_unset_parts() {
        let payload = UpdateRouteRequest {
            id: "route-1",
            pattern: None,
            url: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, serde_json::json!({"id": "route-1"}));
    }

    #[test]
    fn send_raw_omits_unset_envelope_overrides() {
        let to = Vec::new();
        let payload = SendRawRequest {
            raw_message: "From: a@b.c\n\nhello",
            to: &to,
            mail_from: None,
            helo: None,
            client_address: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        let fields = value.as_object().unwrap();
        assert_eq!(fields.len(), 1);
        assert!(fields.contains_key("raw_message"));
    }

    #[test]
    fn send_raw_carries_set_envelope_overrides() {
        let to = vec!["mailbox@inbound.example.com".to_string()];
        let payload = SendRawRequest {
            raw_message: "From: a@b.c\n\nhello",
            to: &to,
            mail_from: Some("a@b.c"),
            helo: Some("mail.b.c"),
            client_address: Some("127.0.0.1"),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["to"][0], "mailbox@inbound.example.com");
        assert_eq!(value["mail_from"], "a@b.c");
        assert_eq!(value["helo"], "mail.b.c");
        assert_eq!(value["client_address"], "127.0.0.1");
    }
}
