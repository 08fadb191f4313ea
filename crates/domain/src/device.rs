//! Device identifier — opaque client-supplied name of a reporting device.
//!
//! Device ids are not authenticated and not unique per record: a device may
//! report many times. Reports that carry no identifier fall back to the
//! `"anonymous"` sentinel.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a reporting device.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    /// Sentinel identifier used when a report carries no device id.
    pub const ANONYMOUS: &'static str = "anonymous";

    /// Wrap a raw identifier. Empty strings collapse to the anonymous sentinel.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.is_empty() {
            Self::anonymous()
        } else {
            Self(raw)
        }
    }

    /// The anonymous sentinel identifier.
    #[must_use]
    pub fn anonymous() -> Self {
        Self(Self::ANONYMOUS.to_string())
    }

    /// Build an identifier from an optional client-supplied value.
    ///
    /// Missing and empty values both collapse to the anonymous sentinel.
    #[must_use]
    pub fn from_client(raw: Option<String>) -> Self {
        match raw {
            Some(value) => Self::new(value),
            None => Self::anonymous(),
        }
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the anonymous sentinel.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.0 == Self::ANONYMOUS
    }
}

impl Default for DeviceId {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for DeviceId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_non_empty_identifier() {
        let id = DeviceId::new("tracker-7");
        assert_eq!(id.as_str(), "tracker-7");
        assert!(!id.is_anonymous());
    }

    #[test]
    fn should_collapse_empty_identifier_to_anonymous() {
        let id = DeviceId::new("");
        assert!(id.is_anonymous());
        assert_eq!(id.as_str(), "anonymous");
    }

    #[test]
    fn should_collapse_missing_client_value_to_anonymous() {
        assert!(DeviceId::from_client(None).is_anonymous());
        assert!(DeviceId::from_client(Some(String::new())).is_anonymous());
    }

    #[test]
    fn should_keep_client_value_when_present() {
        let id = DeviceId::from_client(Some("d1".to_string()));
        assert_eq!(id.as_str(), "d1");
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let id = DeviceId::new("d1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"d1\"");
        let parsed: DeviceId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
