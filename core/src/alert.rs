use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Danger,
    Warning,
    #[default]
    Info,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Danger => "danger",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
        }
    }

    /// Font Awesome icon name, without the `fa-` prefix.
    pub fn icon(&self) -> &'static str {
        match self {
            AlertKind::Success => "check-circle",
            AlertKind::Danger => "exclamation-circle",
            AlertKind::Warning => "exclamation-triangle",
            AlertKind::Info => "info-circle",
        }
    }

    pub fn class_name(&self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.as_str())
    }
}

impl FromStr for AlertKind {
    type Err = std::convert::Infallible;

    /// Unknown kinds fall back to `Info`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "success" => AlertKind::Success,
            "danger" | "error" => AlertKind::Danger,
            "warning" => AlertKind::Warning,
            _ => AlertKind::Info,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    /// Zero keeps the alert until it is dismissed.
    pub duration_ms: u32,
}

impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            kind,
            message: message.into(),
            duration_ms,
        }
    }

    pub fn is_sticky(&self) -> bool {
        self.duration_ms == 0
    }
}
