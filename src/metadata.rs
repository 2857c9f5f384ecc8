//! The `/metadata/*` endpoints: custom metadata field definitions.

use crate::client::KeyOnlyRequest;
use crate::{Client, Result};
use serde::{Deserialize, Serialize};

/// Handle for the metadata endpoints, created with [`Client::metadata`].
pub struct Metadata<'a> {
    client: &'a Client,
}

impl Client {
    /// Access the custom metadata endpoints.
    pub fn metadata(&self) -> Metadata<'_> {
        Metadata { client: self }
    }
}

impl Metadata<'_> {
    /// Return the custom metadata fields indexed for the account.
    pub async fn list(&self) -> Result<Vec<MetadataField>> {
        self.client
            .call("/metadata/list.json", &KeyOnlyRequest {})
            .await
    }

    /// Add a new custom metadata field to be indexed for the account.
    pub async fn add(&self, name: &str, view_template: Option<&str>) -> Result<MetadataField> {
        #[derive(Serialize)]
        struct AddMetadataRequest<'a> {
            name: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            view_template: Option<&'a str>,
        }
        let payload = AddMetadataRequest {
            name,
            view_template,
        };
        self.client.call("/metadata/add.json", &payload).await
    }

    /// Update the view template of an existing metadata field.
    pub async fn update(&self, name: &str, view_template: &str) -> Result<MetadataField> {
        #[derive(Serialize)]
        struct UpdateMetadataRequest<'a> {
            name: &'a str,
            view_template: &'a str,
        }
        let payload = UpdateMetadataRequest {
            name,
            view_template,
        };
        self.client.call("/metadata/update.json", &payload).await
    }

    /// Delete an existing metadata field definition.
    pub async fn delete(&self, name: &str) -> Result<MetadataField> {
        #[derive(Serialize)]
        struct DeleteMetadataRequest<'a> {
            name: &'a str,
        }
        self.client
            .call("/metadata/delete.json", &DeleteMetadataRequest { name })
            .await
    }
}

/// A custom metadata field definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetadataField {
    /// The field name.
    pub name: String,
    /// Indexing state: "active", "delete", or "index".
    pub state: String,
    /// Mustache template used to render the field in the dashboard.
    #[serde(default)]
    pub view_template: Option<String>,
}
