//! Links
//!
//! A [`LinkCollection`] maps relation names to a non-empty [`LinkValueSet`].
//! A set with one value serializes as a JSON object, a set with several
//! values as an array.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the self relation
pub const SELF_REL: &str = "self";

fn is_false(value: &bool) -> bool {
    !*value
}

/// One concrete link target
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkValue {
    pub href: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The href is an unexpanded URI Template
    #[serde(default, skip_serializing_if = "is_false")]
    pub templated: bool,

    /// Media type hint
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// URL describing why the link is deprecated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href_lang: Option<String>,

    /// Additional properties beyond the HAL link fields
    #[serde(flatten)]
    pub properties: IndexMap<String, Value>,
}

impl LinkValue {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Default::default()
        }
    }

    /// A link whose href is a URI Template left for the client to expand
    pub fn templated_href(template: impl Into<String>) -> Self {
        Self::new(template).templated(true)
    }

    pub fn templated(mut self, templated: bool) -> Self {
        self.templated = templated;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    pub fn with_deprecation(mut self, deprecation: impl Into<String>) -> Self {
        self.deprecation = Some(deprecation.into());
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn with_href_lang(mut self, href_lang: impl Into<String>) -> Self {
        self.href_lang = Some(href_lang.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// Ordered, non-empty values under one relation. The first value is the
/// primary one.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkValueSet {
    values: Vec<LinkValue>,
}

impl LinkValueSet {
    pub fn new(first: LinkValue) -> Self {
        Self {
            values: vec![first],
        }
    }

    /// Returns `None` when `values` is empty
    pub fn from_values(values: Vec<LinkValue>) -> Option<Self> {
        if values.is_empty() {
            None
        } else {
            Some(Self { values })
        }
    }

    pub fn push(&mut self, value: LinkValue) {
        self.values.push(value);
    }

    pub fn first(&self) -> &LinkValue {
        &self.values[0]
    }

    pub fn values(&self) -> &[LinkValue] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LinkValue> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Sets built through this API are never empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when the set renders as a single object rather than an array
    pub fn is_single(&self) -> bool {
        self.values.len() == 1
    }
}

impl<'a> IntoIterator for &'a LinkValueSet {
    type Item = &'a LinkValue;
    type IntoIter = std::slice::Iter<'a, LinkValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl Serialize for LinkValueSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_single() {
            self.first().serialize(serializer)
        } else {
            self.values.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for LinkValueSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            One(LinkValue),
            Many(Vec<LinkValue>),
        }

        match OneOrMany::deserialize(deserializer)? {
            OneOrMany::One(value) => Ok(LinkValueSet::new(value)),
            OneOrMany::Many(values) => LinkValueSet::from_values(values)
                .ok_or_else(|| de::Error::custom("link relation has no values")),
        }
    }
}

/// A relation name together with its values
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub rel: String,
    pub values: LinkValueSet,
}

impl Link {
    pub fn new(rel: impl Into<String>, value: LinkValue) -> Self {
        Self {
            rel: rel.into(),
            values: LinkValueSet::new(value),
        }
    }
}

/// Relation name to link values, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkCollection {
    links: IndexMap<String, LinkValueSet>,
}

impl LinkCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value under `rel`. An existing relation keeps its position and
    /// gains another value.
    pub fn insert(&mut self, rel: impl Into<String>, value: LinkValue) {
        match self.links.entry(rel.into()) {
            indexmap::map::Entry::Occupied(mut entry) => entry.get_mut().push(value),
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(LinkValueSet::new(value));
            }
        }
    }

    /// Add several values under `rel`, refusing an empty list
    pub fn insert_set(&mut self, rel: impl Into<String>, values: Vec<LinkValue>) -> Result<()> {
        let rel = rel.into();
        if values.is_empty() {
            return Err(Error::EmptyLinkSet(rel));
        }
        for value in values {
            self.insert(rel.clone(), value);
        }
        Ok(())
    }

    /// Merge a [`Link`], appending to an existing relation
    pub fn push(&mut self, link: Link) {
        for value in link.values.values {
            self.insert(link.rel.clone(), value);
        }
    }

    pub fn get(&self, rel: &str) -> Option<&LinkValueSet> {
        self.links.get(rel)
    }

    pub fn contains(&self, rel: &str) -> bool {
        self.links.contains_key(rel)
    }

    /// First value of the `self` relation
    pub fn self_link(&self) -> Option<&LinkValue> {
        self.get(SELF_REL).map(LinkValueSet::first)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LinkValueSet)> {
        self.links.iter().map(|(rel, set)| (rel.as_str(), set))
    }

    pub fn rels(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl FromIterator<Link> for LinkCollection {
    fn from_iter<I: IntoIterator<Item = Link>>(iter: I) -> Self {
        let mut links = LinkCollection::new();
        for link in iter {
            links.push(link);
        }
        links
    }
}
