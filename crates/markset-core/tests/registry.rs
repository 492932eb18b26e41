use markset_core::{registry, AppliedMarker, Marker, MarkerError, MarkerKind};

/// Declaration order of the registry, spelled out so a reordered or
/// renamed variant fails loudly.
const EXPECTED_NAMES: [&str; 23] = [
    "testrail_case_id",
    "testrail_id",
    "critical",
    "high",
    "medium",
    "low",
    "account",
    "upgrade",
    "flaky",
    "api",
    "all",
    "chat",
    "chat_management",
    "dapps",
    "message_reliability",
    "transaction",
    "wallet",
    "sign_in",
    "skip",
    "logcat",
    "performance",
    "battery_consumption",
    "translations",
];

#[test]
fn every_declared_name_resolves() {
    for name in EXPECTED_NAMES {
        let marker = registry::get(name).unwrap();
        assert_eq!(marker.name(), name);
    }
}

#[test]
fn enumeration_is_exact_and_ordered() {
    let names: Vec<&str> = registry::names().collect();
    assert_eq!(names, EXPECTED_NAMES);
    assert_eq!(registry::all().len(), registry::LEN);
    assert_eq!(registry::LEN, 23);
}

#[test]
fn enumeration_has_no_duplicates() {
    let mut names: Vec<&str> = registry::names().collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), registry::LEN);
}

#[test]
fn only_testrail_markers_are_parameterized() {
    let parameterized: Vec<&str> = registry::all()
        .iter()
        .filter(|m| m.kind() == MarkerKind::Parameterized)
        .map(|m| m.name())
        .collect();
    assert_eq!(parameterized, ["testrail_case_id", "testrail_id"]);
}

#[test]
fn unknown_name_fails_fast() {
    let err = registry::get("nonexistent_marker").unwrap_err();
    assert!(matches!(err, MarkerError::UnknownMarker { .. }));
    assert!(err.to_string().contains("nonexistent_marker"));
}

#[test]
fn near_miss_carries_a_suggestion() {
    let err = registry::get("walet").unwrap_err();
    assert_eq!(err.suggestion(), Some("wallet"));

    let err = registry::get("chat-management").unwrap_err();
    assert_eq!(err.suggestion(), Some("chat_management"));
}

#[test]
fn distant_name_has_no_suggestion() {
    let err = registry::get("zzzzzz").unwrap_err();
    assert_eq!(err.suggestion(), None);
}

#[test]
fn lookup_is_idempotent() {
    assert_eq!(
        registry::get("critical").unwrap(),
        registry::get("critical").unwrap()
    );
}

#[test]
fn contains_matches_lookup() {
    assert!(registry::contains("wallet"));
    assert!(!registry::contains("Wallet"));
    assert!(!registry::contains("bogus"));
}

#[test]
fn scenario_lookup_flavors() {
    let critical = registry::get("critical").unwrap();
    assert_eq!(critical, Marker::Critical);
    assert_eq!(critical.kind(), MarkerKind::Boolean);

    let case_id = registry::get("testrail_case_id").unwrap();
    assert_eq!(case_id, Marker::TestrailCaseId);
    assert_eq!(case_id.kind(), MarkerKind::Parameterized);

    assert!(registry::get("bogus").is_err());
}

#[test]
fn attachments_introspect_by_value() {
    let first = Marker::TestrailCaseId.with_value("702157");
    let second = Marker::TestrailCaseId.with_value("702158");
    assert_ne!(first, second);
    assert_eq!(first.value(), Some("702157"));

    let bare = Marker::Wallet.applied();
    assert_eq!(bare.value(), None);
}

#[test]
fn markers_deserialize_by_registry_name() {
    let marker: Marker = serde_json::from_str("\"wallet\"").unwrap();
    assert_eq!(marker, Marker::Wallet);

    let result: Result<Marker, _> = serde_json::from_str("\"bogus\"");
    assert!(result.is_err());
}

#[test]
fn applied_marker_serde_shape() {
    let applied = Marker::TestrailId.with_value("1234");
    let json = serde_json::to_value(&applied).unwrap();
    assert_eq!(json["marker"], "testrail_id");
    assert_eq!(json["value"], "1234");

    let bare = serde_json::to_value(Marker::Skip.applied()).unwrap();
    assert_eq!(bare["marker"], "skip");
    assert!(bare.get("value").is_none());

    let back: AppliedMarker = serde_json::from_value(json).unwrap();
    assert_eq!(back, applied);
}
