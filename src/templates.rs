//! The `/templates/*` endpoints: stored message templates.

use crate::{Client, Result};
use serde::{Deserialize, Serialize};

/// Handle for the templates endpoints, created with [`Client::templates`].
pub struct Templates<'a> {
    client: &'a Client,
}

impl Client {
    /// Access the templates endpoints.
    pub fn templates(&self) -> Templates<'_> {
        Templates { client: self }
    }
}

#[derive(Serialize)]
struct NameRequest<'a> {
    name: &'a str,
}

impl Templates<'_> {
    /// Add a new template.
    pub async fn add(&self, template: &Template) -> Result<TemplateInfo> {
        self.client.call("/templates/add.json", template).await
    }

    /// Return information about an existing template.
    pub async fn info(&self, name: &str) -> Result<TemplateInfo> {
        self.client
            .call("/templates/info.json", &NameRequest { name })
            .await
    }

    /// Update the draft version of an existing template.
    pub async fn update(&self, template: &Template) -> Result<TemplateInfo> {
        self.client.call("/templates/update.json", template).await
    }

    /// Publish the stored draft of a template; the draft becomes the
    /// published content used when sending.
    pub async fn publish(&self, name: &str) -> Result<TemplateInfo> {
        self.client
            .call("/templates/publish.json", &NameRequest { name })
            .await
    }

    /// Delete a template.
    pub async fn delete(&self, name: &str) -> Result<TemplateInfo> {
        self.client
            .call("/templates/delete.json", &NameRequest { name })
            .await
    }

    /// Return templates on the account, optionally filtered by label.
    pub async fn list(&self, label: Option<&str>) -> Result<Vec<TemplateInfo>> {
        #[derive(Serialize)]
        struct ListTemplatesRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            label: Option<&'a str>,
        }
        self.client
            .call("/templates/list.json", &ListTemplatesRequest { label })
            .await
    }

    /// Return hourly aggregated stats for the last 30 days for a template.
    pub async fn time_series(&self, name: &str) -> Result<Vec<TemplateTimeSeries>> {
        self.client
            .call("/templates/time-series.json", &NameRequest { name })
            .await
    }

    /// Inject content and merge variables into a template and return the
    /// rendered HTML.
    pub async fn render(&self, request: &RenderRequest) -> Result<String> {
        #[derive(Deserialize)]
        struct Rendered {
            html: String,
        }
        let rendered: Rendered = self.client.call("/templates/render.json", request).await?;
        Ok(rendered.html)
    }
}

/// A template draft to add or update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Template {
    /// The template name; also used to generate the immutable slug.
    pub name: String,
    /// Default sender address for messages sent with the template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    /// Default sender from-name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
    /// Default subject line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// The HTML code of the template, with `mc:edit` attributes marking the
    /// editable elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Default text part.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Publish immediately instead of storing a draft.
    #[serde(skip_serializing_if = "crate::client::is_false")]
    pub publish: bool,
    /// Labels for filtering, up to 10.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

/// Stored template state: draft fields plus the published versions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateInfo {
    /// The immutable unique code name of the template.
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub labels: Vec<String>,
    /// Draft HTML code.
    #[serde(default)]
    pub code: Option<String>,
    /// Draft subject line.
    #[serde(default)]
    pub subject: Option<String>,
    /// Draft sender address.
    #[serde(default)]
    pub from_email: Option<String>,
    /// Draft sender from-name.
    #[serde(default)]
    pub from_name: Option<String>,
    /// Draft text part.
    #[serde(default)]
    pub text: Option<String>,
    /// The same as `name`, kept for backwards compatibility.
    #[serde(default)]
    pub publish_name: Option<String>,
    /// Published HTML code, if the template has been published.
    #[serde(default)]
    pub publish_code: Option<String>,
    #[serde(default)]
    pub publish_subject: Option<String>,
    #[serde(default)]
    pub publish_from_email: Option<String>,
    #[serde(default)]
    pub publish_from_name: Option<String>,
    #[serde(default)]
    pub publish_text: Option<String>,
    /// When the template was last published, or `None` if it never was.
    #[serde(default)]
    pub published_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// One hour of template stats.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateTimeSeries {
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

/// A template render request.
#[derive(Debug, Clone, Serialize)]
pub struct RenderRequest {
    /// The slug or name of the template to render.
    pub template_name: String,
    /// Content to inject into the template's `mc:edit` regions.
    pub template_content: Vec<TemplateVar>,
    /// Merge variables to evaluate.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub merge_vars: Vec<TemplateVar>,
}

/// A named content block or merge variable for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateVar {
    pub name: String,
    pub content: String,
}
