//! In-memory document tree.
//!
//! A [`Document`] is independent of the serialization format it was read
//! from. Mapping entries keep their source order; sorting is the job of
//! [`crate::canonical::canonicalize`], never of construction.

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    /// Integer outside the `i64` range, as its exact decimal digits
    BigInteger(String),
    Float(f64),
    String(String),
}

/// A recursively nested template, parameter set or tag set.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// Explicit null. Never coerced to a string.
    Null,
    Scalar(Scalar),
    Sequence(Vec<Document>),
    /// Ordered mapping of string keys.
    Mapping(Vec<(String, Document)>),
}

impl Document {
    /// An empty mapping, the shape of a missing remote document.
    pub fn empty() -> Self {
        Document::Mapping(Vec::new())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Document::Scalar(Scalar::String(value.into()))
    }

    /// True for empty mappings and empty sequences.
    pub fn is_empty(&self) -> bool {
        match self {
            Document::Mapping(entries) => entries.is_empty(),
            Document::Sequence(items) => items.is_empty(),
            _ => false,
        }
    }

    pub fn as_mapping(&self) -> Option<&[(String, Document)]> {
        match self {
            Document::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Document::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a key in a mapping. Returns `None` for non-mappings.
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.as_mapping()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Remove a key from a mapping, returning its value.
    ///
    /// A no-op on anything that is not a mapping.
    pub fn remove(&mut self, key: &str) -> Option<Document> {
        match self {
            Document::Mapping(entries) => {
                let idx = entries.iter().position(|(k, _)| k == key)?;
                Some(entries.remove(idx).1)
            }
            _ => None,
        }
    }

    /// Insert or replace a key in a mapping. Non-mappings are left untouched.
    pub fn insert(&mut self, key: impl Into<String>, value: Document) {
        if let Document::Mapping(entries) = self {
            let key = key.into();
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => entries.push((key, value)),
            }
        }
    }
}

impl From<Scalar> for Document {
    fn from(s: Scalar) -> Self {
        Document::Scalar(s)
    }
}
