use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub const WEBHOOK_URL_KEY: &str = "slack_webhook_url";
pub const SINGLE_CLICK_MESSAGE_KEY: &str = "single_click_message";
pub const DOUBLE_CLICK_MESSAGE_KEY: &str = "double_click_message";
pub const LONG_CLICK_MESSAGE_KEY: &str = "long_click_message";

/// AWS IoT 1-Click button event. Every level is optional on the wire.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ClickEvent {
    pub device_info: DeviceInfo,
    pub device_event: DeviceEvent,
    pub placement_info: PlacementInfo,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceInfo {
    pub device_id: String,
    pub r#type: String,
    pub remaining_life: Option<f64>,
    pub attributes: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceEvent {
    pub button_clicked: ButtonClicked,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonClicked {
    // Kept loose so a missing or wrong-typed value can be told apart from an unknown code.
    pub click_type: Option<Value>,
    pub reported_time: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PlacementInfo {
    pub project_name: String,
    pub placement_name: String,
    pub attributes: Map<String, Value>,
    pub devices: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickType {
    Single,
    Double,
    Long,
    Unsupported(String),
}

impl From<&str> for ClickType {
    fn from(code: &str) -> Self {
        match code {
            "SINGLE" => ClickType::Single,
            "DOUBLE" => ClickType::Double,
            "LONG" => ClickType::Long,
            other => ClickType::Unsupported(other.to_string()),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("click type is not defined")]
    MissingClickType,

    #[error("click type is not a string: {0}")]
    MalformedClickType(String),

    #[error("placement attribute `{0}` is not a string")]
    MalformedAttribute(&'static str),
}

/// Reads one placement attribute as a string. Empty strings and `null` read as absent.
fn string_attribute(
    attributes: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<String>, EventError> {
    match attributes.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(EventError::MalformedAttribute(key)),
    }
}

impl ClickEvent {
    /// Only the key asked for is type-checked.
    pub fn placement_attribute(&self, key: &'static str) -> Result<Option<String>, EventError> {
        string_attribute(&self.placement_info.attributes, key)
    }

    pub fn click_type(&self) -> Result<ClickType, EventError> {
        match &self.device_event.button_clicked.click_type {
            None | Some(Value::Null) => Err(EventError::MissingClickType),
            Some(Value::String(code)) => Ok(ClickType::from(code.as_str())),
            Some(other) => Err(EventError::MalformedClickType(other.to_string())),
        }
    }

    pub fn project_name(&self) -> &str {
        &self.placement_info.project_name
    }
}
