//! Registry façade: lookup and enumeration over the constant marker table.
//!
//! The table is populated for the whole life of the process; nothing is
//! ever added, mutated, or torn down.

use crate::error::MarkerResult;
use crate::marker::Marker;

/// Number of registered markers.
pub const LEN: usize = Marker::ALL.len();

/// Look up the marker registered under `name`.
///
/// Fails with [`crate::MarkerError::UnknownMarker`] when `name` is not in
/// the registry.
pub fn get(name: &str) -> MarkerResult<Marker> {
    Marker::from_name(name)
}

/// All markers, in declaration order.
pub fn all() -> &'static [Marker] {
    &Marker::ALL
}

/// Registered names, in declaration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    Marker::ALL.iter().map(Marker::name)
}

/// Check whether `name` is registered, without constructing an error.
pub fn contains(name: &str) -> bool {
    Marker::ALL.iter().any(|m| m.name() == name)
}
