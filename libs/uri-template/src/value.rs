//! Value sources for template expansion
//!
//! A [`VarSource`] answers variable lookups by name. Lookup is
//! case-insensitive: an exact match wins, otherwise the first name equal
//! under ASCII case folding is used.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// A resolved variable value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateValue<'a> {
    /// Present in the source but contributes nothing (null)
    Undefined,
    Scalar(Cow<'a, str>),
    List(Vec<Cow<'a, str>>),
    /// Associative array, in source order
    Assoc(Vec<(Cow<'a, str>, Cow<'a, str>)>),
}

impl TemplateValue<'_> {
    /// Null, empty lists and empty maps are undefined per RFC 6570 §2.3
    pub fn is_undefined(&self) -> bool {
        match self {
            TemplateValue::Undefined => true,
            TemplateValue::Scalar(_) => false,
            TemplateValue::List(items) => items.is_empty(),
            TemplateValue::Assoc(pairs) => pairs.is_empty(),
        }
    }
}

/// Anything exposing named values to a template
pub trait VarSource {
    /// Look up a variable. `None` means the source does not know the name.
    fn lookup(&self, name: &str) -> Option<TemplateValue<'_>>;
}

impl<T: VarSource + ?Sized> VarSource for &T {
    fn lookup(&self, name: &str) -> Option<TemplateValue<'_>> {
        (**self).lookup(name)
    }
}

/// Find `name` among `keys`, exact first then ASCII case-insensitive
fn find_key<'k, I>(keys: I, name: &str) -> Option<&'k str>
where
    I: Iterator<Item = &'k str> + Clone,
{
    keys.clone()
        .find(|k| *k == name)
        .or_else(|| keys.into_iter().find(|k| k.eq_ignore_ascii_case(name)))
}

/// Stringify a JSON scalar; composite values are written as compact JSON
fn json_scalar(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        other => Some(Cow::Owned(other.to_string())),
    }
}

fn json_value(value: &Value) -> TemplateValue<'_> {
    match value {
        Value::Null => TemplateValue::Undefined,
        Value::Array(items) => TemplateValue::List(items.iter().filter_map(json_scalar).collect()),
        Value::Object(map) => TemplateValue::Assoc(
            map.iter()
                .filter_map(|(k, v)| json_scalar(v).map(|v| (Cow::Borrowed(k.as_str()), v)))
                .collect(),
        ),
        scalar => json_scalar(scalar).map_or(TemplateValue::Undefined, TemplateValue::Scalar),
    }
}

impl VarSource for Map<String, Value> {
    fn lookup(&self, name: &str) -> Option<TemplateValue<'_>> {
        if let Some(value) = self.get(name) {
            return Some(json_value(value));
        }
        let key = find_key(self.keys().map(String::as_str), name)?;
        self.get(key).map(json_value)
    }
}

/// Only objects expose variables
impl VarSource for Value {
    fn lookup(&self, name: &str) -> Option<TemplateValue<'_>> {
        match self {
            Value::Object(map) => map.lookup(name),
            _ => None,
        }
    }
}

impl<S: std::hash::BuildHasher> VarSource for HashMap<String, String, S> {
    fn lookup(&self, name: &str) -> Option<TemplateValue<'_>> {
        let value = match self.get(name) {
            Some(value) => value,
            None => {
                let key = find_key(self.keys().map(String::as_str), name)?;
                self.get(key)?
            }
        };
        Some(TemplateValue::Scalar(Cow::Borrowed(value)))
    }
}

impl VarSource for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<TemplateValue<'_>> {
        let value = match self.get(name) {
            Some(value) => value,
            None => {
                let key = find_key(self.keys().map(String::as_str), name)?;
                self.get(key)?
            }
        };
        Some(TemplateValue::Scalar(Cow::Borrowed(value)))
    }
}

impl<'s> VarSource for [(&'s str, &'s str)] {
    fn lookup(&self, name: &str) -> Option<TemplateValue<'_>> {
        let key = find_key(self.iter().map(|(k, _)| *k), name)?;
        self.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| TemplateValue::Scalar(Cow::Borrowed(*v)))
    }
}

impl<'s, const N: usize> VarSource for [(&'s str, &'s str); N] {
    fn lookup(&self, name: &str) -> Option<TemplateValue<'_>> {
        self.as_slice().lookup(name)
    }
}

/// An owned, ordered bag of template variables.
///
/// ```
/// use halcyon_uri_template::{UriTemplate, Variables};
///
/// let vars = Variables::new()
///     .scalar("id", "42")
///     .list("tags", ["red", "blue"]);
/// let template = UriTemplate::parse("/items/{id}{?tags*}").unwrap();
/// assert_eq!(template.expand(&vars), "/items/42?tags=red&tags=blue");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: IndexMap<String, Value>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), Value::String(value.into()));
        self
    }

    pub fn list<I, V>(mut self, name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let items = items.into_iter().map(|v| Value::String(v.into())).collect();
        self.values.insert(name.into(), Value::Array(items));
        self
    }

    pub fn assoc<I, K, V>(mut self, name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        self.values.insert(name.into(), Value::Object(map));
        self
    }

    /// Declare a variable that is present but undefined
    pub fn undefined(mut self, name: impl Into<String>) -> Self {
        self.values.insert(name.into(), Value::Null);
        self
    }

    /// Insert any JSON value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl VarSource for Variables {
    fn lookup(&self, name: &str) -> Option<TemplateValue<'_>> {
        if let Some(value) = self.values.get(name) {
            return Some(json_value(value));
        }
        let key = find_key(self.values.keys().map(String::as_str), name)?;
        self.values.get(key).map(json_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let source = json!({ "Id": 7, "id_exact": "x" });
        assert_eq!(
            source.lookup("id"),
            Some(TemplateValue::Scalar(Cow::Borrowed("7")))
        );
        assert!(source.lookup("missing").is_none());
    }

    #[test]
    fn test_exact_match_wins() {
        let source = json!({ "NAME": "upper", "name": "lower" });
        assert_eq!(
            source.lookup("name"),
            Some(TemplateValue::Scalar(Cow::Borrowed("lower")))
        );
    }

    #[test]
    fn test_null_and_empty_are_undefined() {
        let source = json!({ "a": null, "b": [], "c": {} });
        for name in ["a", "b", "c"] {
            assert!(source.lookup(name).unwrap().is_undefined());
        }
    }

    #[test]
    fn test_slice_source() {
        let pairs = [("page", "2")];
        assert_eq!(
            pairs.lookup("PAGE"),
            Some(TemplateValue::Scalar(Cow::Borrowed("2")))
        );
    }
}
