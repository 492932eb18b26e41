//! Marker declarations and name resolution.
//!
//! Variants are declared in registry (insertion) order. The order is kept
//! stable for enumeration but carries no semantic weight.

use serde::{Deserialize, Serialize};

use crate::attach::AppliedMarker;
use crate::error::{MarkerError, MarkerResult};

/// Handle flavor of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    /// Presence/absence only.
    Boolean,
    /// Carries one opaque value per attachment.
    Parameterized,
}

impl MarkerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerKind::Boolean => "boolean",
            MarkerKind::Parameterized => "parameterized",
        }
    }
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered test marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    /// TestRail case id carried by the tagged test.
    TestrailCaseId,
    /// TestRail id for atomic tests.
    TestrailId,
    Critical,
    High,
    Medium,
    Low,
    Account,
    Upgrade,
    Flaky,
    Api,
    All,
    Chat,
    ChatManagement,
    Dapps,
    MessageReliability,
    Transaction,
    Wallet,
    SignIn,
    Skip,
    Logcat,
    Performance,
    BatteryConsumption,
    Translations,
}

impl Marker {
    /// Every registered marker, in declaration order.
    pub const ALL: [Marker; 23] = [
        Marker::TestrailCaseId,
        Marker::TestrailId,
        Marker::Critical,
        Marker::High,
        Marker::Medium,
        Marker::Low,
        Marker::Account,
        Marker::Upgrade,
        Marker::Flaky,
        Marker::Api,
        Marker::All,
        Marker::Chat,
        Marker::ChatManagement,
        Marker::Dapps,
        Marker::MessageReliability,
        Marker::Transaction,
        Marker::Wallet,
        Marker::SignIn,
        Marker::Skip,
        Marker::Logcat,
        Marker::Performance,
        Marker::BatteryConsumption,
        Marker::Translations,
    ];

    /// Registry name of the marker.
    pub fn name(&self) -> &'static str {
        match self {
            Marker::TestrailCaseId => "testrail_case_id",
            Marker::TestrailId => "testrail_id",
            Marker::Critical => "critical",
            Marker::High => "high",
            Marker::Medium => "medium",
            Marker::Low => "low",
            Marker::Account => "account",
            Marker::Upgrade => "upgrade",
            Marker::Flaky => "flaky",
            Marker::Api => "api",
            Marker::All => "all",
            Marker::Chat => "chat",
            Marker::ChatManagement => "chat_management",
            Marker::Dapps => "dapps",
            Marker::MessageReliability => "message_reliability",
            Marker::Transaction => "transaction",
            Marker::Wallet => "wallet",
            Marker::SignIn => "sign_in",
            Marker::Skip => "skip",
            Marker::Logcat => "logcat",
            Marker::Performance => "performance",
            Marker::BatteryConsumption => "battery_consumption",
            Marker::Translations => "translations",
        }
    }

    /// Handle flavor: the TestRail markers carry a value, everything else
    /// is presence-only.
    pub fn kind(&self) -> MarkerKind {
        match self {
            Marker::TestrailCaseId | Marker::TestrailId => MarkerKind::Parameterized,
            _ => MarkerKind::Boolean,
        }
    }

    /// Check if this marker carries a value per attachment.
    pub fn is_parameterized(&self) -> bool {
        self.kind() == MarkerKind::Parameterized
    }

    /// Check if this marker is presence-only.
    pub fn is_boolean(&self) -> bool {
        self.kind() == MarkerKind::Boolean
    }

    /// Look up a marker by its registry name.
    ///
    /// Names are exact: lookups are case- and separator-sensitive, and an
    /// unregistered name fails with [`MarkerError::UnknownMarker`] so that
    /// typos in test annotations surface at suite-load time instead of
    /// silently escaping the intended filtering.
    pub fn from_name(name: &str) -> MarkerResult<Marker> {
        match name {
            "testrail_case_id" => Ok(Marker::TestrailCaseId),
            "testrail_id" => Ok(Marker::TestrailId),
            "critical" => Ok(Marker::Critical),
            "high" => Ok(Marker::High),
            "medium" => Ok(Marker::Medium),
            "low" => Ok(Marker::Low),
            "account" => Ok(Marker::Account),
            "upgrade" => Ok(Marker::Upgrade),
            "flaky" => Ok(Marker::Flaky),
            "api" => Ok(Marker::Api),
            "all" => Ok(Marker::All),
            "chat" => Ok(Marker::Chat),
            "chat_management" => Ok(Marker::ChatManagement),
            "dapps" => Ok(Marker::Dapps),
            "message_reliability" => Ok(Marker::MessageReliability),
            "transaction" => Ok(Marker::Transaction),
            "wallet" => Ok(Marker::Wallet),
            "sign_in" => Ok(Marker::SignIn),
            "skip" => Ok(Marker::Skip),
            "logcat" => Ok(Marker::Logcat),
            "performance" => Ok(Marker::Performance),
            "battery_consumption" => Ok(Marker::BatteryConsumption),
            "translations" => Ok(Marker::Translations),
            _ => {
                tracing::debug!(name, "marker lookup failed");
                Err(MarkerError::unknown(name))
            }
        }
    }

    /// Apply this marker to a test case with presence-only semantics.
    pub fn applied(self) -> AppliedMarker {
        AppliedMarker::new(self, None)
    }

    /// Apply this marker to a test case with an attached value.
    ///
    /// The value is an opaque identifier (e.g. a TestRail case id); the
    /// registry never interprets it.
    pub fn with_value(self, value: impl Into<String>) -> AppliedMarker {
        AppliedMarker::new(self, Some(value.into()))
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Marker {
    type Err = MarkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for marker in Marker::ALL {
            assert_eq!(Marker::from_name(marker.name()).unwrap(), marker);
        }
    }

    #[test]
    fn test_kind_split() {
        assert_eq!(Marker::TestrailCaseId.kind(), MarkerKind::Parameterized);
        assert_eq!(Marker::TestrailId.kind(), MarkerKind::Parameterized);
        assert_eq!(Marker::Critical.kind(), MarkerKind::Boolean);
        assert_eq!(Marker::Translations.kind(), MarkerKind::Boolean);
        assert!(Marker::TestrailId.is_parameterized());
        assert!(Marker::Wallet.is_boolean());
    }

    #[test]
    fn test_from_name_unknown() {
        let result = Marker::from_name("bogus");
        assert!(matches!(result, Err(MarkerError::UnknownMarker { .. })));
    }

    #[test]
    fn test_from_name_is_exact() {
        assert!(Marker::from_name("Critical").is_err());
        assert!(Marker::from_name("chat-management").is_err());
        assert!(Marker::from_name(" wallet").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Marker::ChatManagement.to_string(), "chat_management");
        assert_eq!(MarkerKind::Parameterized.to_string(), "parameterized");
    }

    #[test]
    fn test_from_str() {
        let marker: Marker = "message_reliability".parse().unwrap();
        assert_eq!(marker, Marker::MessageReliability);
    }
}
