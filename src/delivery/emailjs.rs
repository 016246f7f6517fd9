use std::env;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use super::channel::{DeliveryChannel, Receipt};
use super::error::{ConfigError, DeliveryError};
use super::payload::FormPayload;

/// Canonical EmailJS send endpoint.
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Longest response body kept, success receipt or rejection alike.
/// The text is display-only in both cases.
const MAX_BODY_BYTES: usize = 1024;

/// The three opaque credentials identifying the delivery channel, plus
/// the endpoint (overridable so tests can point at a local server).
#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub api_url: String,
}

impl EmailJsConfig {
    /// Reads the credentials from `EMAILJS_SERVICE_ID`,
    /// `EMAILJS_TEMPLATE_ID`, and `EMAILJS_PUBLIC_KEY`.
    ///
    /// Empty variables count as missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            service_id: require_var("EMAILJS_SERVICE_ID")?,
            template_id: require_var("EMAILJS_TEMPLATE_ID")?,
            public_key: require_var("EMAILJS_PUBLIC_KEY")?,
            api_url: EMAILJS_SEND_URL.to_string(),
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

/// Request body for the EmailJS send endpoint.
///
/// `user_id` is what EmailJS calls the public key; the form contents
/// travel nested under `template_params`.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a FormPayload,
}

/// Production [`DeliveryChannel`] backed by the EmailJS REST API.
pub struct EmailJsChannel {
    http: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsChannel {
    /// Creates a channel with its own HTTP client.
    pub fn new(config: EmailJsConfig) -> Result<Self, DeliveryError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl DeliveryChannel for EmailJsChannel {
    async fn send(&self, payload: &FormPayload) -> Result<Receipt, DeliveryError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: payload,
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let mut text = response.text().await.unwrap_or_default();
        truncate_on_char_boundary(&mut text, MAX_BODY_BYTES);

        if status.is_success() {
            Ok(Receipt { status: text })
        } else {
            Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body: text,
            })
        }
    }
}

/// Truncates `text` to at most `max` bytes without splitting a
/// character; a naive byte truncation would panic on a multibyte
/// character straddling the limit.
fn truncate_on_char_boundary(text: &mut String, max: usize) {
    if text.len() <= max {
        return;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}
