//! Request bodies understood by the communications endpoint.
//!
//! Every payload is a JSON object tagged by `message_type`, carrying the
//! recipient list plus one object named after the message type.

use serde::{Deserialize, Serialize};

pub const GRID_CHANGE_TEMPLATE: &str = "grid_change_notification";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Whatsapp,
    Email,
    Sms,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Whatsapp => "whatsapp",
            MessageType::Email => "email",
            MessageType::Sms => "sms",
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "message_type", rename_all = "lowercase")]
pub enum MessagePayload {
    Whatsapp {
        recipients: Vec<String>,
        whatsapp: WhatsappMessage,
    },
    Email {
        recipients: Vec<String>,
        email: EmailContent,
    },
    Sms {
        recipients: Vec<String>,
        sms: SmsContent,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "message_type", rename_all = "lowercase")]
pub enum WhatsappMessage {
    Template { template_info: TemplateInfo },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInfo {
    pub template_name: String,
    pub header_parameters: Vec<String>,
    pub body_parameters: Vec<String>,
    pub number_of_buttons: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailContent {
    pub subject: String,
    pub html_content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsContent {
    pub text_content: String,
}

impl TemplateInfo {
    /// The grid change template takes the power status as its only header
    /// parameter and `[building_id, power_status]` as body parameters.
    pub fn grid_change_notification(building_id: &str, power_status: &str) -> Self {
        Self {
            template_name: GRID_CHANGE_TEMPLATE.to_string(),
            header_parameters: vec![power_status.to_string()],
            body_parameters: vec![building_id.to_string(), power_status.to_string()],
            number_of_buttons: 0,
        }
    }
}

impl MessagePayload {
    pub fn whatsapp_template(recipients: Vec<String>, template_info: TemplateInfo) -> Self {
        MessagePayload::Whatsapp {
            recipients,
            whatsapp: WhatsappMessage::Template { template_info },
        }
    }

    pub fn email(
        recipients: Vec<String>,
        subject: impl Into<String>,
        html_content: impl Into<String>,
    ) -> Self {
        MessagePayload::Email {
            recipients,
            email: EmailContent {
                subject: subject.into(),
                html_content: html_content.into(),
            },
        }
    }

    pub fn sms(recipients: Vec<String>, text_content: impl Into<String>) -> Self {
        MessagePayload::Sms {
            recipients,
            sms: SmsContent {
                text_content: text_content.into(),
            },
        }
    }

    pub fn message_type(&self) -> MessageType {
        match self {
            MessagePayload::Whatsapp { .. } => MessageType::Whatsapp,
            MessagePayload::Email { .. } => MessageType::Email,
            MessagePayload::Sms { .. } => MessageType::Sms,
        }
    }

    pub fn recipients(&self) -> &[String] {
        match self {
            MessagePayload::Whatsapp { recipients, .. }
            | MessagePayload::Email { recipients, .. }
            | MessagePayload::Sms { recipients, .. } => recipients,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
