use std::path::Path;
use std::sync::Arc;

use log::{debug, warn};
use mmcoms_core::net::{FormPart, HttpClient, HttpRequest};
use mmcoms_core::payload::TemplateInfo;
use mmcoms_core::response::interpret_response;
use mmcoms_core::{ApiError, MessagePayload, Result};
use mmcoms_ureq_http_client::UreqHttpClient;
use serde_json::Value;

use crate::attachment::{self, ATTACHMENT_CONTENT_TYPE};
use crate::config::ClientConfig;

/// Client for the MetMetric communications API.
///
/// Every `send_*` call performs exactly one blocking POST and reports the
/// outcome directly; nothing is retried.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    http_client: Arc<dyn HttpClient>,
}

impl ApiClient {
    /// Client for the production endpoint. The token is not validated here.
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(auth_token))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_http_client(config, Arc::new(UreqHttpClient::new()))
    }

    pub fn with_http_client(config: ClientConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends the `grid_change_notification` WhatsApp template.
    ///
    /// `file_path` is attached only if it names an existing file; otherwise
    /// the notification is sent without it.
    pub fn send_whatsapp_grid_change_notification(
        &self,
        recipients: impl IntoIterator<Item = impl Into<String>>,
        building_id: &str,
        power_status: &str,
        file_path: Option<&Path>,
    ) -> Result<Value> {
        let payload = MessagePayload::whatsapp_template(
            collect_recipients(recipients),
            TemplateInfo::grid_change_notification(building_id, power_status),
        );
        self.dispatch(&payload, file_path)
    }

    pub fn send_email(
        &self,
        recipients: impl IntoIterator<Item = impl Into<String>>,
        subject: &str,
        html_content: &str,
    ) -> Result<Value> {
        let payload = MessagePayload::email(collect_recipients(recipients), subject, html_content);
        self.dispatch(&payload, None)
    }

    pub fn send_email_with_files(
        &self,
        recipients: impl IntoIterator<Item = impl Into<String>>,
        subject: &str,
        html_content: &str,
        file_path: &Path,
    ) -> Result<Value> {
        let payload = MessagePayload::email(collect_recipients(recipients), subject, html_content);
        self.dispatch(&payload, Some(file_path))
    }

    pub fn send_sms(
        &self,
        recipients: impl IntoIterator<Item = impl Into<String>>,
        text_content: &str,
    ) -> Result<Value> {
        let payload = MessagePayload::sms(collect_recipients(recipients), text_content);
        self.dispatch(&payload, None)
    }

    /// Sends an arbitrary payload through the same path as the `send_*` helpers.
    pub fn send(&self, payload: &MessagePayload, file_path: Option<&Path>) -> Result<Value> {
        self.dispatch(payload, file_path)
    }

    fn dispatch(&self, payload: &MessagePayload, file_path: Option<&Path>) -> Result<Value> {
        let json = payload.to_json().map_err(ApiError::Encode)?;
        let request = HttpRequest::post(&self.config.endpoint)
            .with_header("Authorization", &self.config.auth_token);

        let attachment = match file_path {
            Some(path) => attachment::load(path)?,
            None => None,
        };

        let request = match attachment {
            Some(attachment) => {
                debug!(
                    "Attaching {} ({} bytes)",
                    attachment.filename,
                    attachment.data.len()
                );
                request.with_form(vec![
                    FormPart::Text {
                        name: "data".to_string(),
                        value: json,
                    },
                    FormPart::File {
                        name: "files".to_string(),
                        filename: attachment.filename,
                        content_type: ATTACHMENT_CONTENT_TYPE.to_string(),
                        data: attachment.data,
                    },
                ])
            }
            None => {
                if let Some(path) = file_path {
                    debug!("No file at {}, sending without attachment", path.display());
                }
                request
                    .with_header("Content-Type", "application/json")
                    .with_body(json.into_bytes())
            }
        };

        debug!(
            "Sending {} message to {} recipient(s)",
            payload.message_type(),
            payload.recipients().len()
        );

        let response = self.http_client.execute(request).map_err(|e| {
            warn!("Request to {} failed: {:#}", self.config.endpoint, e);
            ApiError::Transport(e)
        })?;

        if response.status_code != 200 {
            warn!(
                "{} message rejected with status {}",
                payload.message_type(),
                response.status_code
            );
        }

        interpret_response(response)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn collect_recipients(recipients: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    recipients.into_iter().map(Into::into).collect()
}
