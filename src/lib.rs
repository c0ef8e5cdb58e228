//! Blocking client for the MetMetric communications API: WhatsApp template
//! notifications, email (optionally with one attachment) and SMS.

pub use mmcoms_core::{error, net, payload};
pub use mmcoms_core::{ApiError, Error, MessagePayload, MessageType, Result};
pub use mmcoms_ureq_http_client::UreqHttpClient;

mod attachment;
pub mod client;
pub mod config;

pub use client::ApiClient;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};

#[cfg(test)]
pub mod test_utils;
