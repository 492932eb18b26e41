//! Test-marker registry for the mobile suite.
//!
//! This crate holds the fixed set of markers that test cases are tagged
//! with: severity levels, feature-area tags, TestRail traceability markers,
//! and run-characteristics tags. Test-authoring code attaches these handles
//! to test cases; external selection tooling filters the collection by the
//! names this crate resolves.
//!
//! The registry is a compile-time constant. There is no init call, no
//! teardown, and no mutation; lookups are synchronous, allocation-free and
//! safe from any number of threads.
//!
//! # Quick Start
//!
//! ```
//! use markset_core::{registry, Marker, MarkerKind};
//!
//! let marker = registry::get("critical")?;
//! assert_eq!(marker, Marker::Critical);
//! assert_eq!(marker.kind(), MarkerKind::Boolean);
//!
//! // TestRail markers carry a case id at the attachment site.
//! let applied = Marker::TestrailCaseId.with_value("702157");
//! assert_eq!(applied.value(), Some("702157"));
//!
//! // Unknown names fail fast so typos surface at suite-load time.
//! assert!(registry::get("bogus").is_err());
//! # Ok::<(), markset_core::MarkerError>(())
//! ```

pub mod attach;
pub mod error;
pub mod marker;
pub mod registry;

// Re-export main types
pub use attach::AppliedMarker;
pub use error::{MarkerError, MarkerResult};
pub use marker::{Marker, MarkerKind};
