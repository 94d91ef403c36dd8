//! Shared identifier vocabulary for the implementor index.
//!
//! Fragment producers and the rendering layer agree on these names; the
//! registry core treats both as opaque keys.

/// Identifier naming a trait, unique within the aggregated index.
///
/// The value is whatever the fragment producer emitted (typically the
/// trait's display path, e.g. `"Hash"` or `"core::fmt::Debug"`); the core
/// never parses it.
pub type TraitId = String;

/// Identifier naming the module (crate) a fragment originated from.
///
/// Used only as a grouping label while merging. It is not part of
/// implementor identity and is not retained in the merged index.
pub type ModuleName = String;
