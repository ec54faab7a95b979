//! Bound values and ordered binding lists.
//!
//! A [`Value`] is what gets bound to one selector: nothing, one string, or
//! a sequence of strings that fans the matched element out into one copy
//! per item. [`Bindings`] is an ordered list of `(selector, value)` pairs
//! applied one after another.
//!
//! Both types map onto JSON naturally, which is how bindings are usually
//! authored as data:
//!
//! ```
//! use hbind::{Bindings, Value};
//!
//! let bindings = Bindings::from_json(
//!     r#"{ "form:action": "/login", "p.error": null, "li": ["a", "b"] }"#,
//! ).unwrap();
//!
//! let selectors: Vec<&str> = bindings.iter().map(|(s, _)| s).collect();
//! assert_eq!(selectors, vec!["form:action", "p.error", "li"]);
//! assert_eq!(bindings.get("p.error"), Some(&Value::Absent));
//! ```

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A value bound to a selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// No value. Clears matched elements in content mode, leaves attributes
    /// untouched in attribute mode.
    #[default]
    Absent,
    /// A single string.
    Scalar(String),
    /// One string per repeated copy of the matched element.
    Sequence(Vec<String>),
}

impl Value {
    /// The values to bind, one per emitted copy of a matched segment.
    ///
    /// `Absent` is a single absent item, so it still produces exactly one
    /// (empty or unchanged) copy; an empty `Sequence` produces none.
    pub fn items(&self) -> Vec<Option<&str>> {
        match self {
            Value::Absent => vec![None],
            Value::Scalar(value) => vec![Some(value.as_str())],
            Value::Sequence(values) => values.iter().map(|v| Some(v.as_str())).collect(),
        }
    }

    /// Returns `true` for [`Value::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(value)
    }
}

impl<T: Into<String>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Absent, |v| Value::Scalar(v.into()))
    }
}

impl<T: Into<String>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<String>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Value::Sequence(values.into_iter().map(Into::into).collect())
    }
}

/// An ordered list of selector/value pairs.
///
/// Order matters: each binding is applied to the output of the previous
/// one, so a later selector can match markup that an earlier embed
/// inserted. Duplicate selectors are kept and applied in turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    entries: Vec<(String, Value)>,
}

impl Bindings {
    /// Creates an empty binding list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads bindings from a JSON object, keeping the document's key order.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::HbindError::InvalidBindings`] when the input is not
    /// an object of `null`, string, or string-array values.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Appends a binding, builder style.
    pub fn with(mut self, selector: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(selector, value);
        self
    }

    /// Appends a binding.
    pub fn push(&mut self, selector: impl Into<String>, value: impl Into<Value>) {
        self.entries.push((selector.into(), value.into()));
    }

    /// The first value bound to `selector`, if any.
    pub fn get(&self, selector: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, value)| value)
    }

    /// Iterates the bindings in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(s, v)| (s.as_str(), v))
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no bindings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Bindings {
            entries: iter
                .into_iter()
                .map(|(selector, value)| (selector.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Bindings {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Bindings {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (selector, value) in &self.entries {
            map.serialize_entry(selector, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Bindings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct BindingsVisitor;

        impl<'de> Visitor<'de> for BindingsVisitor {
            type Value = Bindings;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of selector to null, string or sequence of strings")
            }

            fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, crate::value::Value>()? {
                    entries.push(entry);
                }
                Ok(Bindings { entries })
            }
        }

        deserializer.deserialize_map(BindingsVisitor)
    }
}
