//! The `/exports/*` endpoints: background data export jobs.

use crate::client::KeyOnlyRequest;
use crate::{Client, Result};
use serde::{Deserialize, Serialize};

/// Handle for the exports endpoints, created with [`Client::exports`].
pub struct Exports<'a> {
    client: &'a Client,
}

impl Client {
    /// Access the exports endpoints.
    pub fn exports(&self) -> Exports<'_> {
        Exports { client: self }
    }
}

#[derive(Serialize)]
struct NotifyRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    notify_email: Option<&'a str>,
}

impl Exports<'_> {
    /// Return information about an export job.
    ///
    /// When the job is complete, the response carries the URL of the result
    /// archive.
    pub async fn info(&self, id: &str) -> Result<ExportJob> {
        #[derive(Serialize)]
        struct ExportIdRequest<'a> {
            id: &'a str,
        }
        self.client
            .call("/exports/info.json", &ExportIdRequest { id })
            .await
    }

    /// Return the account's export jobs, most recent first.
    pub async fn list(&self) -> Result<Vec<ExportJob>> {
        self.client
            .call("/exports/list.json", &KeyOnlyRequest {})
            .await
    }

    /// Begin an export of the rejection blacklist, optionally notifying an
    /// address when the job finishes.
    pub async fn rejects(&self, notify_email: Option<&str>) -> Result<ExportJob> {
        self.client
            .call("/exports/rejects.json", &NotifyRequest { notify_email })
            .await
    }

    /// Begin an export of the rejection whitelist.
    pub async fn whitelist(&self, notify_email: Option<&str>) -> Result<ExportJob> {
        self.client
            .call("/exports/whitelist.json", &NotifyRequest { notify_email })
            .await
    }

    /// Begin an export of the account's activity history.
    ///
    /// The result is a zip archive with a single `activity.csv` in the same
    /// format the dashboard's activity view exports, including any custom
    /// metadata fields.
    pub async fn activity(&self, request: &ActivityExportRequest) -> Result<ExportJob> {
        self.client.call("/exports/activity.json", request).await
    }
}

/// Filters for an activity history export.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActivityExportRequest {
    /// Address to notify when the export job has finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_email: Option<String>,
    /// Start date, as a Mandrill UTC timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    /// End date, as a Mandrill UTC timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    /// Narrow to messages that carry any of these tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Narrow to messages from any of these senders.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub senders: Vec<String>,
    /// Narrow to messages in any of these states.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<String>,
    /// Narrow to messages sent with any of these API keys.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub api_keys: Vec<String>,
}

/// An export job and its progress.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportJob {
    /// Unique identifier of the job.
    pub id: String,
    pub created_at: String,
    /// The kind of export, e.g. "activity", "reject", or "whitelist".
    #[serde(rename = "type")]
    pub export_type: String,
    /// When the job finished, if it has.
    #[serde(default)]
    pub finished_at: Option<String>,
    /// Job state: "waiting", "working", "complete", "error", or "expired".
    pub state: String,
    /// URL of the result archive, once the job is complete.
    #[serde(default)]
    pub result_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_request_omits_unset_email() {
        let value = serde_json::to_value(&NotifyRequest { notify_email: None }).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn activity_request_omits_unset_filters() {
        let value = serde_json::to_value(ActivityExportRequest::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn activity_request_carries_set_filters() {
        let request = ActivityExportRequest {
            date_from: Some("2025-01-01 00:00:00".into()),
            tags: vec!["welcome".into()],
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["date_from"], "2025-01-01 00:00:00");
        assert_eq!(value["tags"][0], "welcome");
        assert!(value.get("senders").is_none());
    }

    #[test]
    fn export_job_decodes_wire_type() {
        let job: ExportJob = serde_json::from_str(
            r#"{
                "id": "2025012345",
                "created_at": "2025-01-15 10:00:00",
                "type": "activity",
                "finished_at": null,
                "state": "working",
                "result_url": null
            }"#,
        )
        .unwrap();
        assert_eq!(job.export_type, "activity");
        assert_eq!(job.result_url, None);
    }
}
