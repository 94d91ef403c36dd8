//! The registry controller: merges fragment payloads into the unified index
//! and resolves the bootstrap race.
//!
//! Fragments load in whatever order the page happens to fetch them, and the
//! page bootstrap that constructs the index-ready machinery runs at an
//! equally unpredictable point. The controller resolves this with a
//! two-state lifecycle and a single-slot buffer: a payload delivered before
//! [`ImplementorRegistry::initialize`] waits in the [`PendingSlot`]; the
//! transition to ready drains the slot exactly once, and everything after
//! that merges directly.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info, instrument, trace};

use crate::descriptor::Implementor;
use crate::index::{IndexSnapshot, TraitIndex};
use crate::payload::FragmentPayload;
use crate::types::TraitId;

/// Lifecycle of the registry.
///
/// The only transition is `Uninitialized → Ready`, taken exactly once by
/// [`ImplementorRegistry::initialize`]. There is no teardown state; the
/// registry lives as long as the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, not yet initialized; deliveries park in the pending
    /// slot.
    #[default]
    Uninitialized,
    /// Initialized; the pending slot has been drained and deliveries merge
    /// directly.
    Ready,
}

/// Single-slot holding area for a payload that arrived before the registry
/// initialized.
///
/// The slot holds at most one payload. Parking over an occupied slot
/// replaces the occupant and hands the displaced payload back to the
/// caller; fragment arrival order relative to bootstrap is unspecified, so
/// replacement is tolerated rather than treated as an error. Once drained
/// at the ready transition, the slot is never used again.
#[derive(Debug, Default)]
pub struct PendingSlot {
    slot: Option<FragmentPayload>,
}

impl PendingSlot {
    /// Parks `payload`, returning the displaced occupant if the slot was
    /// already full.
    pub fn park(&mut self, payload: FragmentPayload) -> Option<FragmentPayload> {
        self.slot.replace(payload)
    }

    /// Takes the parked payload, leaving the slot empty.
    pub fn drain(&mut self) -> Option<FragmentPayload> {
        self.slot.take()
    }

    /// True when a payload is waiting.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.slot.is_some()
    }
}

#[derive(Debug, Default)]
pub(crate) struct RegistryState {
    pub(crate) lifecycle: Lifecycle,
    pub(crate) pending: PendingSlot,
    pub(crate) index: TraitIndex,
}

impl RegistryState {
    pub(crate) fn merge(&mut self, payload: &FragmentPayload) -> usize {
        let appended = self.index.merge(payload);
        debug!(
            modules = payload.module_count(),
            appended,
            revision = self.index.revision(),
            "merged fragment payload"
        );
        appended
    }
}

/// The registry controller: single point of truth for the merged index.
///
/// `ImplementorRegistry` is a cheaply cloneable handle over shared state.
/// Construct it once at page bootstrap and hand clones to every fragment
/// receiver and to the rendering layer; the shared state has exactly one
/// writer at a time by way of the internal mutex, so the protocol survives
/// hosts with real threads even though the intended host is a
/// single-threaded cooperative script environment.
///
/// # Examples
///
/// ```
/// use traitdex::descriptor::Implementor;
/// use traitdex::payload::FragmentPayload;
/// use traitdex::registry::ImplementorRegistry;
///
/// let registry = ImplementorRegistry::new();
/// registry.initialize();
/// registry.register(
///     &FragmentPayload::builder()
///         .with_implementor("syn", "Hash", Implementor::new("impl Hash for Lifetime"))
///         .build(),
/// );
///
/// let listing = registry.query("Hash");
/// assert_eq!(listing.len(), 1);
/// assert!(registry.query("Clone").is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ImplementorRegistry {
    state: Arc<Mutex<RegistryState>>,
}

impl ImplementorRegistry {
    /// Creates a registry in the [`Lifecycle::Uninitialized`] state with an
    /// empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn state(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().expect("registry state poisoned")
    }

    /// Merges every entry of `payload` into the unified index.
    ///
    /// Not idempotent: registering the same payload twice duplicates its
    /// entries. Each module's generated fragment registers exactly once in
    /// the intended usage; the protocol keeps no record of
    /// already-registered modules.
    ///
    /// This entry point merges unconditionally, whatever the lifecycle
    /// state. Fragment scripts should go through
    /// [`FragmentReceiver::deliver`](crate::bootstrap::FragmentReceiver::deliver),
    /// which parks pre-initialization payloads instead.
    #[instrument(skip_all, fields(modules = payload.module_count()))]
    pub fn register(&self, payload: &FragmentPayload) {
        self.state().merge(payload);
    }

    /// Transitions the registry to [`Lifecycle::Ready`] and drains the
    /// pending slot.
    ///
    /// The first call flips the lifecycle and merges the parked payload, if
    /// any. Every later call is a no-op: the slot is drained at most once,
    /// so accidental duplicate bootstrap calls cannot re-merge content.
    #[instrument(skip_all)]
    pub fn initialize(&self) {
        let mut state = self.state();
        if state.lifecycle == Lifecycle::Ready {
            trace!("already initialized");
            return;
        }
        state.lifecycle = Lifecycle::Ready;

        match state.pending.drain() {
            Some(parked) => {
                let appended = state.merge(&parked);
                info!(appended, "registry ready, drained pending fragment");
            }
            None => info!("registry ready, no pending fragment"),
        }
    }

    /// True once [`initialize`](Self::initialize) has run.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state().lifecycle == Lifecycle::Ready
    }

    /// The merged implementor list for `trait_id` at this moment, cloned.
    ///
    /// Unknown traits yield an empty list; most traits have few or no
    /// cross-module implementors, so absence is the common case and never
    /// an error. Reflects only fragments merged so far; nothing blocks
    /// waiting for stragglers.
    #[must_use]
    pub fn query(&self, trait_id: &str) -> Vec<Implementor> {
        self.state().index.get(trait_id).to_vec()
    }

    /// True when at least one implementor is merged for `trait_id`.
    #[must_use]
    pub fn contains(&self, trait_id: &str) -> bool {
        self.state().index.contains(trait_id)
    }

    /// Number of merged implementors for `trait_id`, without cloning the
    /// list.
    #[must_use]
    pub fn implementor_count(&self, trait_id: &str) -> usize {
        self.state().index.implementor_count(trait_id)
    }

    /// Known trait identifiers, sorted.
    #[must_use]
    pub fn traits(&self) -> Vec<TraitId> {
        self.state().index.traits()
    }

    /// Point-in-time copy of the whole index plus lifecycle state, for
    /// rendering a full cross-reference page without holding the lock.
    #[must_use]
    pub fn snapshot(&self) -> IndexSnapshot {
        let state = self.state();
        IndexSnapshot::capture(&state.index, state.lifecycle == Lifecycle::Ready)
    }
}
