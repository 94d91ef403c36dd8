//! Fragment payloads: the per-module contribution one generated script
//! delivers to the registry.
//!
//! A payload maps module names to that module's trait→implementor entries.
//! Both maps preserve insertion order, because the order entries appear in a
//! payload is the order they are appended to the merged index.
//!
//! Payloads arriving from the outside world are untyped JSON; parsing and
//! shape validation happen here, at the boundary, so the registry core only
//! ever sees well-formed data.

use indexmap::IndexMap;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::descriptor::Implementor;
use crate::types::{ModuleName, TraitId};

/// The trait→implementors entries contributed by a single module.
pub type ModuleEntries = IndexMap<TraitId, Vec<Implementor>>;

/// An immutable per-module contribution to the implementor index.
///
/// Structurally a mapping `module → { trait → [implementor, …] }`. The
/// wire format is the JSON object the documentation compiler generates:
///
/// ```
/// use traitdex::payload::FragmentPayload;
///
/// let payload = FragmentPayload::from_json(
///     r#"{"num_bigint": {"Hash": [
///         {"text": "impl Hash for Sign", "synthetic": false, "types": []},
///         {"text": "impl Hash for BigInt", "synthetic": false, "types": []}
///     ]}}"#,
/// )
/// .unwrap();
/// assert_eq!(payload.module_count(), 1);
/// assert_eq!(payload.entry_count(), 2);
/// ```
///
/// Hand-built payloads use the builder:
///
/// ```
/// use traitdex::descriptor::Implementor;
/// use traitdex::payload::FragmentPayload;
///
/// let payload = FragmentPayload::builder()
///     .with_implementor("ggbc", "Hash", Implementor::new("impl Hash for Pointer"))
///     .with_implementor("ggbc", "Hash", Implementor::new("impl Hash for Location"))
///     .build();
/// assert_eq!(payload.entry_count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FragmentPayload {
    modules: IndexMap<ModuleName, ModuleEntries>,
}

impl FragmentPayload {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for assembling a payload entry by entry.
    pub fn builder() -> FragmentPayloadBuilder {
        FragmentPayloadBuilder::default()
    }

    /// Parses and validates a payload from raw JSON text.
    ///
    /// This is the boundary where untrusted shape meets the typed core:
    /// every structural problem is reported as a [`PayloadError`] naming
    /// the offending module/trait, and nothing partially parsed escapes.
    pub fn from_json(raw: &str) -> Result<Self, PayloadError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(&value)
    }

    /// Validates an already-parsed JSON value as a payload.
    pub fn from_value(value: &Value) -> Result<Self, PayloadError> {
        let root = value.as_object().ok_or_else(|| PayloadError::RootShape {
            found: json_type_name(value),
        })?;

        let mut modules = IndexMap::with_capacity(root.len());
        for (module, entries) in root {
            let traits = entries.as_object().ok_or_else(|| PayloadError::ModuleShape {
                module: module.clone(),
                found: json_type_name(entries),
            })?;

            let mut parsed = ModuleEntries::with_capacity(traits.len());
            for (trait_id, implementors) in traits {
                let items = implementors
                    .as_array()
                    .ok_or_else(|| PayloadError::TraitShape {
                        module: module.clone(),
                        trait_id: trait_id.clone(),
                        found: json_type_name(implementors),
                    })?;

                let mut list = Vec::with_capacity(items.len());
                for (position, item) in items.iter().enumerate() {
                    let implementor: Implementor =
                        serde_json::from_value(item.clone()).map_err(|source| {
                            PayloadError::ImplementorShape {
                                module: module.clone(),
                                trait_id: trait_id.clone(),
                                position,
                                problem: source.to_string(),
                            }
                        })?;
                    list.push(implementor);
                }
                parsed.insert(trait_id.clone(), list);
            }
            modules.insert(module.clone(), parsed);
        }

        Ok(Self { modules })
    }

    /// Iterates modules in payload order.
    pub fn modules(&self) -> impl Iterator<Item = (&ModuleName, &ModuleEntries)> {
        self.modules.iter()
    }

    /// Number of modules contributing in this payload.
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Total number of implementor entries across all modules and traits.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.modules
            .values()
            .flat_map(|entries| entries.values())
            .map(Vec::len)
            .sum()
    }

    /// True when the payload contributes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}

/// Fluent builder for [`FragmentPayload`].
///
/// Entries accumulate in insertion order, mirroring how the documentation
/// compiler writes fragment objects.
#[derive(Debug, Default)]
pub struct FragmentPayloadBuilder {
    modules: IndexMap<ModuleName, ModuleEntries>,
}

impl FragmentPayloadBuilder {
    /// Appends one implementor to a module's entry for a trait.
    #[must_use]
    pub fn with_implementor(
        mut self,
        module: &str,
        trait_id: &str,
        implementor: Implementor,
    ) -> Self {
        self.modules
            .entry(module.to_string())
            .or_default()
            .entry(trait_id.to_string())
            .or_default()
            .push(implementor);
        self
    }

    /// Appends several implementors to a module's entry for a trait.
    #[must_use]
    pub fn with_implementors<I>(mut self, module: &str, trait_id: &str, implementors: I) -> Self
    where
        I: IntoIterator<Item = Implementor>,
    {
        self.modules
            .entry(module.to_string())
            .or_default()
            .entry(trait_id.to_string())
            .or_default()
            .extend(implementors);
        self
    }

    /// Builds the final payload.
    pub fn build(self) -> FragmentPayload {
        FragmentPayload {
            modules: self.modules,
        }
    }
}

/// Structural problems in a delivered fragment.
///
/// Raised only at the bootstrap boundary; the registry core never sees a
/// malformed payload. One bad fragment is dropped (logged by the receiver)
/// and must not affect fragments from other modules.
#[derive(Debug, Error, Diagnostic)]
pub enum PayloadError {
    /// The fragment root was not a JSON object.
    #[error("fragment root must be a JSON object mapping module names, found {found}")]
    #[diagnostic(
        code(traitdex::payload::root_shape),
        help("generated fragments have the shape {{\"module\": {{\"Trait\": [implementors]}}}}")
    )]
    RootShape { found: &'static str },

    /// A module key did not map to a trait→implementors object.
    #[error("module '{module}' must map trait identifiers to implementor arrays, found {found}")]
    #[diagnostic(code(traitdex::payload::module_shape))]
    ModuleShape {
        module: String,
        found: &'static str,
    },

    /// A trait key did not map to an array of implementors.
    #[error("trait '{trait_id}' in module '{module}' must hold an implementor array, found {found}")]
    #[diagnostic(code(traitdex::payload::trait_shape))]
    TraitShape {
        module: String,
        trait_id: String,
        found: &'static str,
    },

    /// An individual implementor entry failed to deserialize.
    #[error("implementor {position} for trait '{trait_id}' in module '{module}': {problem}")]
    #[diagnostic(
        code(traitdex::payload::implementor_shape),
        help("each implementor needs a string `text`; `synthetic` and `types` are optional")
    )]
    ImplementorShape {
        module: String,
        trait_id: String,
        position: usize,
        problem: String,
    },

    /// The fragment was not valid JSON at all.
    #[error("fragment is not valid JSON: {source}")]
    #[diagnostic(code(traitdex::payload::json))]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
