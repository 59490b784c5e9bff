use serde::{Deserialize, Serialize};

/// Incoming-webhook chat message. Optional overrides are left off the wire when empty.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SlackMessage {
    pub text: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon_emoji: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub channel: String,
}

impl SlackMessage {
    pub fn new(text: String, username: String) -> Self {
        Self {
            text,
            username,
            ..Default::default()
        }
    }
}
