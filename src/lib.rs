//! # Traitdex: Cross-Module Trait Implementor Index
//!
//! Traitdex is the registry core of a documentation-site cross-reference
//! feature: for every known trait, list every type across a multi-module
//! codebase that implements it. Each module's documentation build emits an
//! independent *fragment* naming its contributions; fragments load in
//! arbitrary order, and the registry merges them into one queryable index
//! without knowing that order in advance.
//!
//! ## Core Concepts
//!
//! - **Implementors**: Rendered impl entries with text identity
//! - **Fragment payloads**: Validated per-module `module → trait →
//!   implementors` contributions
//! - **Registry**: Shared controller with a two-state lifecycle merging
//!   payloads into the unified index
//! - **Pending slot**: Single-slot buffer resolving the race between
//!   fragment arrival and page bootstrap
//! - **Receiver**: Per-fragment entry point that validates raw JSON and
//!   merges or parks
//!
//! ## Quick Start
//!
//! ```
//! use traitdex::bootstrap::FragmentReceiver;
//! use traitdex::registry::ImplementorRegistry;
//!
//! // Page bootstrap constructs the registry and hands a receiver to the
//! // fragment loading machinery.
//! let registry = ImplementorRegistry::new();
//! let receiver = FragmentReceiver::new(registry.clone());
//!
//! // A fragment script happens to execute before bootstrap finishes; its
//! // payload parks in the pending slot instead of being lost.
//! receiver.deliver_json(r#"{"crate1": {"Hash": [{"text": "impl Hash for Foo"}]}}"#);
//!
//! // Bootstrap completes: the registry becomes ready and drains the slot.
//! registry.initialize();
//!
//! // Later fragments merge directly.
//! receiver.deliver_json(r#"{"crate2": {"Hash": [{"text": "impl Hash for Bar"}]}}"#);
//!
//! let texts: Vec<_> = registry
//!     .query("Hash")
//!     .into_iter()
//!     .map(|imp| imp.text)
//!     .collect();
//! assert_eq!(texts, ["impl Hash for Foo", "impl Hash for Bar"]);
//! ```
//!
//! ## Protocol Notes
//!
//! Merging is append-only concatenation in delivery order, with one
//! deliberate exception: a payload delivered before
//! [`initialize`](registry::ImplementorRegistry::initialize) merges at
//! initialization time rather than at arrival time. Registration is *not*
//! idempotent: a payload registered twice contributes twice, and each
//! generated fragment registers exactly once in the intended usage.
//! Querying an unknown trait returns an empty list, never an error.
//!
//! ## Module Guide
//!
//! - [`descriptor`] - Implementor entries and their text identity
//! - [`payload`] - Fragment payloads, parsing, validation, and builders
//! - [`index`] - The unified trait→implementors index and snapshots
//! - [`registry`] - The controller: lifecycle, pending slot, merge, query
//! - [`bootstrap`] - The per-fragment delivery entry point
//! - [`telemetry`] - Tracing subscriber setup for executables

pub mod bootstrap;
pub mod descriptor;
pub mod index;
pub mod payload;
pub mod registry;
pub mod telemetry;
pub mod types;
