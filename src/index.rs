//! The unified implementor index: every module's contributions, merged.
//!
//! The index is append-only. Merging a payload concatenates its per-trait
//! entries onto the existing lists in payload order; nothing already merged
//! is ever reordered, rewritten, or deduplicated across modules. Within a
//! single module's contribution the documentation compiler never emits
//! duplicates, so the core does not look for them.

use rustc_hash::FxHashMap;

use crate::descriptor::Implementor;
use crate::payload::FragmentPayload;
use crate::types::TraitId;

/// Merged mapping from trait identifier to the cross-module implementor
/// list, in merge order.
///
/// ```
/// use traitdex::descriptor::Implementor;
/// use traitdex::index::TraitIndex;
/// use traitdex::payload::FragmentPayload;
///
/// let mut index = TraitIndex::new();
/// index.merge(
///     &FragmentPayload::builder()
///         .with_implementor("num_bigint", "Hash", Implementor::new("impl Hash for Sign"))
///         .build(),
/// );
/// index.merge(
///     &FragmentPayload::builder()
///         .with_implementor("num_bigint", "Hash", Implementor::new("impl Hash for BigInt"))
///         .build(),
/// );
///
/// let texts: Vec<_> = index.get("Hash").iter().map(|imp| imp.text.as_str()).collect();
/// assert_eq!(texts, ["impl Hash for Sign", "impl Hash for BigInt"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TraitIndex {
    entries: FxHashMap<TraitId, Vec<Implementor>>,
    revision: u32,
}

impl TraitIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every entry of `payload` to the index, creating trait
    /// entries as needed.
    ///
    /// Entries land in payload order: module by module, trait by trait,
    /// implementor by implementor. Merging the same payload twice appends
    /// twice; deduplication is deliberately not this layer's job.
    ///
    /// Returns the number of implementor entries appended. Empty payloads
    /// leave the index (and its revision) untouched.
    pub fn merge(&mut self, payload: &FragmentPayload) -> usize {
        if payload.is_empty() {
            return 0;
        }

        let mut appended = 0;
        for (_, entries) in payload.modules() {
            for (trait_id, implementors) in entries {
                if implementors.is_empty() {
                    continue;
                }
                self.entries
                    .entry(trait_id.clone())
                    .or_default()
                    .extend(implementors.iter().cloned());
                appended += implementors.len();
            }
        }
        self.revision += 1;
        appended
    }

    /// The merged implementor list for `trait_id`, or an empty slice if the
    /// trait is unknown. Absence of implementors is a valid state, not an
    /// error.
    #[must_use]
    pub fn get(&self, trait_id: &str) -> &[Implementor] {
        self.entries.get(trait_id).map_or(&[], Vec::as_slice)
    }

    /// True when at least one entry exists for `trait_id`.
    #[must_use]
    pub fn contains(&self, trait_id: &str) -> bool {
        !self.get(trait_id).is_empty()
    }

    /// Number of merged entries for `trait_id`.
    #[must_use]
    pub fn implementor_count(&self, trait_id: &str) -> usize {
        self.get(trait_id).len()
    }

    /// Number of traits with at least one merged entry.
    #[must_use]
    pub fn trait_count(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been merged yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Known trait identifiers, sorted for deterministic listings.
    #[must_use]
    pub fn traits(&self) -> Vec<TraitId> {
        let mut traits: Vec<_> = self.entries.keys().cloned().collect();
        traits.sort_unstable();
        traits
    }

    /// Iterates all (trait, implementors) entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&TraitId, &[Implementor])> {
        self.entries
            .iter()
            .map(|(trait_id, list)| (trait_id, list.as_slice()))
    }

    /// Monotonic merge counter. Bumped once per non-empty merge; lets the
    /// rendering layer cheaply detect whether anything changed since its
    /// last snapshot.
    #[must_use]
    pub fn revision(&self) -> u32 {
        self.revision
    }
}

/// Point-in-time copy of the index, safe to render from without holding
/// the registry lock.
#[derive(Clone, Debug)]
pub struct IndexSnapshot {
    /// Merged entries at snapshot time.
    pub entries: FxHashMap<TraitId, Vec<Implementor>>,
    /// Index revision at snapshot time.
    pub revision: u32,
    /// Whether the registry had already transitioned to ready.
    pub ready: bool,
}

impl IndexSnapshot {
    pub(crate) fn capture(index: &TraitIndex, ready: bool) -> Self {
        Self {
            entries: index.entries.clone(),
            revision: index.revision,
            ready,
        }
    }

    /// The implementor list for `trait_id` at snapshot time.
    #[must_use]
    pub fn get(&self, trait_id: &str) -> &[Implementor] {
        self.entries.get(trait_id).map_or(&[], Vec::as_slice)
    }
}
