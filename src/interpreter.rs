use thiserror::Error;
use url::Url;

use crate::{
    messages::MessageConfig,
    oneclick::{ClickEvent, EventError, WEBHOOK_URL_KEY},
};

pub const DEFAULT_USERNAME: &str = "SORACOM LTE-M Button";

/// Everything the dispatcher needs for one click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub webhook_url: Url,
    pub message: String,
    pub username: String,
}

/// Reasons a click produces no notification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Abort {
    #[error("Slack Webhook URL is not defined")]
    MissingWebhookUrl,

    #[error("Slack Webhook URL is incorrect format: {0}")]
    InvalidWebhookUrl(String),

    #[error("malformed input: placement attribute `{key}` is not a string")]
    MalformedAttribute { key: &'static str },

    #[error("click type is not defined: {0}")]
    UndefinedClickType(EventError),
}

impl From<EventError> for Abort {
    fn from(err: EventError) -> Self {
        match err {
            EventError::MalformedAttribute(key) => Abort::MalformedAttribute { key },
            other => Abort::UndefinedClickType(other),
        }
    }
}

pub fn interpret(event: &ClickEvent, messages: &MessageConfig) -> Result<Notification, Abort> {
    let raw_url = event
        .placement_attribute(WEBHOOK_URL_KEY)?
        .ok_or(Abort::MissingWebhookUrl)?;
    let webhook_url = parse_webhook_url(&raw_url)?;

    // Slots are cached before the click type is checked, so an aborted click still warms them.
    let resolved = messages.resolve(|key| event.placement_attribute(key))?;

    let click_type = event.click_type()?;
    let message = resolved.select(&click_type).to_string();

    let username = match event.project_name() {
        "" => DEFAULT_USERNAME.to_string(),
        name => name.to_string(),
    };

    Ok(Notification {
        webhook_url,
        message,
        username,
    })
}

/// Accepts absolute hierarchical URLs only, like an HTTP request target.
fn parse_webhook_url(raw: &str) -> Result<Url, Abort> {
    let url = Url::parse(raw).map_err(|e| Abort::InvalidWebhookUrl(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(Abort::InvalidWebhookUrl(
            "invalid URI for request".to_string(),
        ));
    }

    Ok(url)
}
