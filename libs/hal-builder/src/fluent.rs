//! Fluent construction of resource descriptions without descriptors
//!
//! ```
//! use halcyon_builder::ResourceBuilder;
//! use serde_json::json;
//!
//! let resource = ResourceBuilder::new()
//!     .add_self_link("/customers/1")
//!     .add_link("orders", |links| {
//!         links.with_href("/customers/1/orders?page=1");
//!         links.with_href("/customers/1/orders?page=2");
//!     })
//!     .with_state(&json!({ "name": "Ada" }))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(resource.links().get("orders").unwrap().len(), 2);
//! ```

use crate::descriptor::simple_type_name;
use crate::error::{Error, Result};
use halcyon_models::{EmbeddedGroup, Link, LinkValue, LinkValueSet, ResourceDescription, SELF_REL};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// Collects the values of one relation. Values are unique by href; adding
/// an href again replaces the earlier value in place.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    rel: String,
    values: IndexMap<String, LinkValue>,
}

impl LinkBuilder {
    pub fn new(rel: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            values: IndexMap::new(),
        }
    }

    pub fn with_value(&mut self, value: LinkValue) -> &mut Self {
        self.values.insert(value.href.clone(), value);
        self
    }

    pub fn with_href(&mut self, href: impl Into<String>) -> &mut Self {
        self.with_value(LinkValue::new(href))
    }

    pub fn with_named_href(&mut self, href: impl Into<String>, name: impl Into<String>) -> &mut Self {
        self.with_value(LinkValue::new(href).with_name(name))
    }

    pub fn has_values(&self) -> bool {
        !self.values.is_empty()
    }

    /// `None` when no value was added
    pub fn build(self) -> Option<Link> {
        let values = LinkValueSet::from_values(self.values.into_values().collect())?;
        Some(Link {
            rel: self.rel,
            values,
        })
    }
}

/// Collects the resources of one embedded group
#[derive(Debug, Default)]
pub struct EmbeddedBuilder {
    resources: Vec<Result<ResourceDescription>>,
}

impl EmbeddedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource configured by `factory`
    pub fn add<F>(&mut self, factory: F) -> &mut Self
    where
        F: FnOnce(ResourceBuilder) -> ResourceBuilder,
    {
        self.resources.push(factory(ResourceBuilder::new()).build());
        self
    }

    /// Add an already built resource
    pub fn add_description(&mut self, resource: ResourceDescription) -> &mut Self {
        self.resources.push(Ok(resource));
        self
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    fn build(self) -> Result<Vec<ResourceDescription>> {
        self.resources.into_iter().collect()
    }
}

/// Fluent resource builder.
///
/// Errors raised while serializing state are kept and returned by
/// [`ResourceBuilder::build`] so calls can be chained.
#[derive(Debug, Default)]
pub struct ResourceBuilder {
    state_type: Option<String>,
    state: Map<String, Value>,
    links: Vec<Link>,
    embedded: Vec<EmbeddedGroup>,
    extensions: Map<String, Value>,
    error: Option<Error>,
}

impl ResourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relation whose values are configured by `factory`. A relation
    /// left without values is not stored.
    pub fn add_link<F>(mut self, rel: impl Into<String>, factory: F) -> Self
    where
        F: FnOnce(&mut LinkBuilder),
    {
        let mut builder = LinkBuilder::new(rel);
        factory(&mut builder);
        if let Some(link) = builder.build() {
            self.links.push(link);
        }
        self
    }

    pub fn add_self_link(self, href: impl Into<String>) -> Self {
        let href = href.into();
        self.add_link(SELF_REL, |links| {
            links.with_href(href);
        })
    }

    /// Merge the serialized properties of `state`. Earlier calls win on
    /// conflicting keys; the state type becomes `T`.
    pub fn with_state<T: Serialize + ?Sized>(mut self, state: &T) -> Self {
        if self.error.is_some() {
            return self;
        }
        match serde_json::to_value(state) {
            Ok(Value::Object(map)) => {
                for (key, value) in map {
                    self.state.entry(key).or_insert(value);
                }
                self.state_type = Some(simple_type_name(std::any::type_name::<T>()));
            }
            Ok(other) => {
                self.error = Some(Error::InvalidState(format!(
                    "state must serialize to an object, got {}",
                    other
                )));
            }
            Err(err) => self.error = Some(err.into()),
        }
        self
    }

    /// Name the state type explicitly
    pub fn with_state_type(mut self, name: impl Into<String>) -> Self {
        self.state_type = Some(name.into());
        self
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }

    /// Embed one resource per item as a collection named `name`
    pub fn with_embedded_resources<I, F>(mut self, name: impl Into<String>, items: I, mut factory: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item, &mut EmbeddedBuilder),
    {
        let mut builder = EmbeddedBuilder::new();
        for item in items {
            factory(item, &mut builder);
        }
        match builder.build() {
            Ok(resources) => self.embedded.push(EmbeddedGroup::collection(name, resources)),
            Err(err) => self.error = self.error.or(Some(err)),
        }
        self
    }

    /// Embed one resource as a single nested resource named `name`
    pub fn with_embedded_resource<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: FnOnce(ResourceBuilder) -> ResourceBuilder,
    {
        match factory(ResourceBuilder::new()).build() {
            Ok(resource) => self.embedded.push(EmbeddedGroup::single(name, resource)),
            Err(err) => self.error = self.error.or(Some(err)),
        }
        self
    }

    pub fn build(self) -> Result<ResourceDescription> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let mut description = match self.state_type {
            Some(name) => ResourceDescription::of_type(name),
            None => ResourceDescription::new(),
        };
        description = description.with_links(self.links.into_iter().collect());
        for group in self.embedded {
            description = description.with_embedded(group);
        }
        description = description.with_state(self.state);
        for (key, value) in self.extensions {
            description = description.with_extension(key, value);
        }
        Ok(description)
    }
}
