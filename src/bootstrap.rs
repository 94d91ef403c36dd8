//! Bootstrap glue: the per-fragment entry point.
//!
//! Each module's generated fragment script performs exactly one branch when
//! it executes: if the registry is ready, register the payload directly;
//! otherwise park it in the pending slot. That branch is the whole
//! race-resolution mechanism: no fragment is silently dropped regardless
//! of whether fragment scripts or the page bootstrap run first.
//!
//! The receiver is also the validation boundary. Raw fragments are
//! machine-generated and trusted in the intended deployment, but a
//! malformed one must not poison the page: it is rejected here with a
//! logged warning and everything else keeps working.

use serde_json::Value;
use tracing::warn;

use crate::payload::{FragmentPayload, PayloadError};
use crate::registry::{ImplementorRegistry, Lifecycle};

/// Outcome of one fragment delivery.
#[derive(Debug)]
pub enum Delivery {
    /// The registry was ready; the payload merged immediately.
    Merged,
    /// The registry was not yet initialized; the payload is parked and will
    /// merge when [`ImplementorRegistry::initialize`] runs. `displaced` is
    /// the previous occupant of the pending slot, if parking replaced one.
    Parked {
        displaced: Option<FragmentPayload>,
    },
    /// The raw fragment failed shape validation and was dropped.
    Rejected(PayloadError),
}

impl Delivery {
    /// True when the payload reached the index immediately.
    #[must_use]
    pub fn is_merged(&self) -> bool {
        matches!(self, Delivery::Merged)
    }

    /// True when the payload is waiting in the pending slot.
    #[must_use]
    pub fn is_parked(&self) -> bool {
        matches!(self, Delivery::Parked { .. })
    }
}

/// Per-fragment entry point over a shared registry handle.
///
/// One receiver serves every fragment on a page; construct it at bootstrap
/// next to the registry and let each fragment's loading code call
/// [`deliver_json`](Self::deliver_json) (raw fragments) or
/// [`deliver`](Self::deliver) (already-validated payloads).
///
/// # Examples
///
/// ```
/// use traitdex::bootstrap::FragmentReceiver;
/// use traitdex::registry::ImplementorRegistry;
///
/// let registry = ImplementorRegistry::new();
/// let receiver = FragmentReceiver::new(registry.clone());
///
/// // Fragment arrives before bootstrap: parked, not lost.
/// let early = receiver.deliver_json(
///     r#"{"crate1": {"Hash": [{"text": "impl Hash for Foo"}]}}"#,
/// );
/// assert!(early.is_parked());
/// assert!(registry.query("Hash").is_empty());
///
/// // Bootstrap runs: the parked fragment merges.
/// registry.initialize();
/// assert_eq!(registry.query("Hash").len(), 1);
///
/// // Fragments arriving afterward merge directly.
/// let late = receiver.deliver_json(
///     r#"{"crate2": {"Hash": [{"text": "impl Hash for Bar"}]}}"#,
/// );
/// assert!(late.is_merged());
/// assert_eq!(registry.query("Hash").len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct FragmentReceiver {
    registry: ImplementorRegistry,
}

impl FragmentReceiver {
    /// Creates a receiver delivering into `registry`.
    #[must_use]
    pub fn new(registry: ImplementorRegistry) -> Self {
        Self { registry }
    }

    /// Delivers a validated payload: merge if the registry is ready, park
    /// otherwise.
    ///
    /// The lifecycle check and the park happen under a single lock
    /// acquisition; a concurrent `initialize` cannot interleave between
    /// them.
    pub fn deliver(&self, payload: FragmentPayload) -> Delivery {
        let mut state = self.registry.state();
        match state.lifecycle {
            Lifecycle::Ready => {
                state.merge(&payload);
                Delivery::Merged
            }
            Lifecycle::Uninitialized => {
                let displaced = state.pending.park(payload);
                if displaced.is_some() {
                    warn!("pending fragment replaced before initialization");
                }
                Delivery::Parked { displaced }
            }
        }
    }

    /// Parses, validates, and delivers a raw JSON fragment.
    ///
    /// Malformed fragments are dropped with a warning; the registry state
    /// is left untouched so fragments from other modules stay usable.
    pub fn deliver_json(&self, raw: &str) -> Delivery {
        match FragmentPayload::from_json(raw) {
            Ok(payload) => self.deliver(payload),
            Err(error) => {
                warn!(%error, "dropping malformed fragment");
                Delivery::Rejected(error)
            }
        }
    }

    /// Validates and delivers an already-parsed JSON value.
    pub fn deliver_value(&self, value: &Value) -> Delivery {
        match FragmentPayload::from_value(value) {
            Ok(payload) => self.deliver(payload),
            Err(error) => {
                warn!(%error, "dropping malformed fragment");
                Delivery::Rejected(error)
            }
        }
    }

    /// The registry this receiver delivers into.
    #[must_use]
    pub fn registry(&self) -> &ImplementorRegistry {
        &self.registry
    }
}
