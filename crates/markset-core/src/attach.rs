//! Attachment handles minted when a marker is applied to a test case.

use serde::{Deserialize, Serialize};

use crate::marker::Marker;

/// A marker applied to a test case.
///
/// Boolean markers are applied bare; parameterized markers carry one opaque
/// value per attachment. Two attachments of the same marker with different
/// values stay distinguishable under introspection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppliedMarker {
    marker: Marker,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl AppliedMarker {
    pub(crate) fn new(marker: Marker, value: Option<String>) -> Self {
        Self { marker, value }
    }

    /// The marker this attachment was minted from.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Registry name of the underlying marker.
    pub fn name(&self) -> &'static str {
        self.marker.name()
    }

    /// Value supplied at the attachment site, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl std::fmt::Display for AppliedMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}({})", self.marker.name(), value),
            None => f.write_str(self.marker.name()),
        }
    }
}
