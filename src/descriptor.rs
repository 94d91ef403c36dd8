//! Implementor descriptors: the entries an implementor listing is made of.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// One implementing type for a trait, as rendered by the documentation
/// compiler.
///
/// An `Implementor` carries the rendered impl signature (`text`), a flag
/// marking descriptions that were synthesized rather than literally declared
/// (`synthetic`), and the associated type parameters of the impl (`types`,
/// possibly empty). The serialized field names match the generated fragment
/// format, so descriptors deserialize straight out of fragment JSON:
///
/// ```
/// use traitdex::descriptor::Implementor;
///
/// let imp: Implementor =
///     serde_json::from_str(r#"{"text":"impl Hash for Sign","synthetic":false,"types":[]}"#)
///         .unwrap();
/// assert_eq!(imp.text, "impl Hash for Sign");
/// assert!(!imp.synthetic);
/// ```
///
/// # Identity
///
/// Two implementors are equal when their rendered text is equal. The
/// `synthetic` flag and type parameters are display metadata and never
/// participate in equality or hashing:
///
/// ```
/// use traitdex::descriptor::Implementor;
///
/// let declared = Implementor::new("impl Hash for Pointer");
/// let synthesized = Implementor::new("impl Hash for Pointer").synthesized();
/// assert_eq!(declared, synthesized);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Implementor {
    /// Rendered impl signature, e.g. `"impl Hash for BigInt"`. May contain
    /// markup entities produced by the documentation compiler; the core
    /// passes them through untouched.
    pub text: String,
    /// Whether the description was synthesized rather than literally
    /// declared. Opaque to the core; the rendering layer decides its
    /// meaning.
    #[serde(default)]
    pub synthetic: bool,
    /// Associated type parameters of the impl, in declaration order.
    #[serde(default)]
    pub types: Vec<String>,
}

impl Implementor {
    /// Creates a declared (non-synthetic) implementor with the given
    /// rendered text.
    ///
    /// # Examples
    /// ```
    /// use traitdex::descriptor::Implementor;
    ///
    /// let imp = Implementor::new("impl Hash for Span");
    /// assert_eq!(imp.text, "impl Hash for Span");
    /// assert!(imp.types.is_empty());
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            synthetic: false,
            types: Vec::new(),
        }
    }

    /// Marks this implementor as synthesized.
    #[must_use]
    pub fn synthesized(mut self) -> Self {
        self.synthetic = true;
        self
    }

    /// Sets the associated type parameters.
    ///
    /// # Examples
    /// ```
    /// use traitdex::descriptor::Implementor;
    ///
    /// let imp = Implementor::new("impl<T: Hash> Hash for Source<T>")
    ///     .with_types(["T"]);
    /// assert_eq!(imp.types, vec!["T"]);
    /// ```
    #[must_use]
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }
}

// Identity is the rendered signature text; see the type docs.
impl PartialEq for Implementor {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Implementor {}

impl Hash for Implementor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Implementor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
