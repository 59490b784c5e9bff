use std::sync::OnceLock;

use crate::oneclick::{
    ClickType, EventError, DOUBLE_CLICK_MESSAGE_KEY, LONG_CLICK_MESSAGE_KEY,
    SINGLE_CLICK_MESSAGE_KEY,
};

pub const DEFAULT_SINGLE_CLICK_MESSAGE: &str = "single clicked!";
pub const DEFAULT_DOUBLE_CLICK_MESSAGE: &str = "double clicked!";
pub const DEFAULT_LONG_CLICK_MESSAGE: &str = "long clicked!";
pub const UNSUPPORTED_CLICK_TYPE_MESSAGE: &str = "unsupported click type";

/// Process-wide click messages.
///
/// Each slot is written at most once: the first non-empty value (environment
/// override, then event attribute, then the built-in default) stays for the
/// life of the process, even when later events carry different attributes.
#[derive(Debug, Default)]
pub struct MessageConfig {
    single: OnceLock<String>,
    double: OnceLock<String>,
    long: OnceLock<String>,
}

/// The three messages as resolved for one click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickMessages<'a> {
    pub single: &'a str,
    pub double: &'a str,
    pub long: &'a str,
}

impl<'a> ClickMessages<'a> {
    pub fn select(&self, click_type: &ClickType) -> &'a str {
        match click_type {
            ClickType::Single => self.single,
            ClickType::Double => self.double,
            ClickType::Long => self.long,
            ClickType::Unsupported(_) => UNSUPPORTED_CLICK_TYPE_MESSAGE,
        }
    }
}

impl MessageConfig {
    /// Seeds the slots from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::default();
        seed(&config.single, lookup(SINGLE_CLICK_MESSAGE_KEY));
        seed(&config.double, lookup(DOUBLE_CLICK_MESSAGE_KEY));
        seed(&config.long, lookup(LONG_CLICK_MESSAGE_KEY));
        config
    }

    /// Fills every unset slot from `attribute` or the defaults.
    ///
    /// `attribute` is only consulted for slots that are still unset, so a
    /// malformed value under an already cached key is never looked at.
    pub fn resolve<F>(&self, attribute: F) -> Result<ClickMessages<'_>, EventError>
    where
        F: Fn(&'static str) -> Result<Option<String>, EventError>,
    {
        Ok(ClickMessages {
            single: resolve_slot(
                &self.single,
                SINGLE_CLICK_MESSAGE_KEY,
                DEFAULT_SINGLE_CLICK_MESSAGE,
                &attribute,
            )?,
            double: resolve_slot(
                &self.double,
                DOUBLE_CLICK_MESSAGE_KEY,
                DEFAULT_DOUBLE_CLICK_MESSAGE,
                &attribute,
            )?,
            long: resolve_slot(
                &self.long,
                LONG_CLICK_MESSAGE_KEY,
                DEFAULT_LONG_CLICK_MESSAGE,
                &attribute,
            )?,
        })
    }
}

fn seed(slot: &OnceLock<String>, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        let _ = slot.set(value);
    }
}

fn resolve_slot<'a, F>(
    slot: &'a OnceLock<String>,
    key: &'static str,
    default: &str,
    attribute: &F,
) -> Result<&'a str, EventError>
where
    F: Fn(&'static str) -> Result<Option<String>, EventError>,
{
    if let Some(message) = slot.get() {
        return Ok(message.as_str());
    }

    let message = attribute(key)?
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string());

    // A concurrent writer may have won in the meantime; its value is kept.
    Ok(slot.get_or_init(|| message).as_str())
}
