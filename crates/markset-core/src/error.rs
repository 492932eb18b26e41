//! Error types for the marker registry.

use crate::marker::Marker;

/// Registry errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkerError {
    /// Name not present in the registry.
    #[error("unknown marker: {name}")]
    UnknownMarker {
        name: String,
        /// Closest registered name, when one is near enough to be a typo.
        suggestion: Option<&'static str>,
    },
}

impl MarkerError {
    pub(crate) fn unknown(name: &str) -> Self {
        Self::UnknownMarker {
            name: name.to_string(),
            suggestion: suggest(name),
        }
    }

    /// Closest registered name for an unknown-marker error, if any.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnknownMarker { suggestion, .. } => *suggestion,
        }
    }
}

/// Result type for registry operations.
pub type MarkerResult<T> = Result<T, MarkerError>;

// Threshold for suggestion. 0.55 is a reasonable heuristic.
const THRESHOLD: f64 = 0.55;

fn suggest(needle: &str) -> Option<&'static str> {
    let mut best: Option<(&'static str, f64)> = None;

    for marker in Marker::ALL {
        let candidate = marker.name();
        let sim = strsim::normalized_levenshtein(needle, candidate);
        if sim >= THRESHOLD && best.map_or(true, |(_, b)| sim > b) {
            best = Some((candidate, sim));
        }
    }
    best.map(|(name, _)| name)
}
