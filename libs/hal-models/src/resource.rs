//! The resource description tree node

use crate::embedded::EmbeddedGroup;
use crate::link::{LinkCollection, LinkValue, SELF_REL};
use heck::ToLowerCamelCase;
use serde_json::{Map, Value};

/// Suffix stripped from type names when deriving the self relation
const VIEW_MODEL_SUFFIX: &str = "viewmodel";

/// A HAL resource: links, embedded groups, flat state and extension data.
///
/// Built once, then only read. The `with_*` methods consume and return the
/// description so construction reads as a chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceDescription {
    state_type: Option<String>,
    links: LinkCollection,
    embedded: Vec<EmbeddedGroup>,
    state: Map<String, Value>,
    extensions: Map<String, Value>,
}

impl ResourceDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Description of a value of the named type
    pub fn of_type(state_type: impl Into<String>) -> Self {
        Self {
            state_type: Some(state_type.into()),
            ..Default::default()
        }
    }

    pub fn with_state_type(mut self, state_type: impl Into<String>) -> Self {
        self.state_type = Some(state_type.into());
        self
    }

    pub fn with_links(mut self, links: LinkCollection) -> Self {
        self.links = links;
        self
    }

    pub fn with_link(mut self, rel: impl Into<String>, value: LinkValue) -> Self {
        self.links.insert(rel, value);
        self
    }

    /// Append a group. Empty groups are dropped.
    pub fn with_embedded(mut self, group: EmbeddedGroup) -> Self {
        if !group.is_empty() {
            self.embedded.push(group);
        }
        self
    }

    pub fn with_state(mut self, state: Map<String, Value>) -> Self {
        self.state = state;
        self
    }

    /// Set one state property, replacing an existing value
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.state.insert(key.into(), value.into());
        self
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }

    pub fn state_type(&self) -> Option<&str> {
        self.state_type.as_deref()
    }

    pub fn links(&self) -> &LinkCollection {
        &self.links
    }

    pub fn embedded(&self) -> &[EmbeddedGroup] {
        &self.embedded
    }

    pub fn embedded_group(&self, name: &str) -> Option<&EmbeddedGroup> {
        self.embedded.iter().find(|g| g.name() == name)
    }

    /// Every embedded resource across all groups, in group order
    pub fn embedded_resources(&self) -> impl Iterator<Item = &ResourceDescription> {
        self.embedded.iter().flat_map(|g| g.resources().iter())
    }

    pub fn state(&self) -> &Map<String, Value> {
        &self.state
    }

    pub fn extensions(&self) -> &Map<String, Value> {
        &self.extensions
    }

    pub fn self_link(&self) -> Option<&LinkValue> {
        self.links.self_link()
    }

    /// Relation name describing this resource inside a parent, derived from
    /// the state type name.
    ///
    /// `CustomerViewModel` becomes `customer`, `OrderLine` becomes
    /// `orderLine`. Missing or generic type names yield `self`.
    pub fn self_relation_name(&self) -> String {
        match self.state_type.as_deref() {
            Some(name) => self_relation_for(name),
            None => SELF_REL.to_string(),
        }
    }
}

/// Derive the self relation name from a type name
pub fn self_relation_for(type_name: &str) -> String {
    if type_name.contains('<') {
        return SELF_REL.to_string();
    }

    let simple = type_name.rsplit("::").next().unwrap_or(type_name);
    let lower = simple.to_ascii_lowercase();
    let stem = if lower.ends_with(VIEW_MODEL_SUFFIX) {
        &simple[..simple.len() - VIEW_MODEL_SUFFIX.len()]
    } else {
        simple
    };

    let rel = stem.to_lower_camel_case();
    if rel.is_empty() {
        SELF_REL.to_string()
    } else {
        rel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedded::EmbeddedGroup;
    use serde_json::json;

    #[test]
    fn test_self_relation_name() {
        assert_eq!(self_relation_for("CustomerViewModel"), "customer");
        assert_eq!(self_relation_for("Order"), "order");
        assert_eq!(self_relation_for("OrderLine"), "orderLine");
        assert_eq!(self_relation_for("shop::model::Basket"), "basket");
        assert_eq!(self_relation_for("BasketViewmodel"), "basket");
        assert_eq!(self_relation_for("Vec<Order>"), "self");
        assert_eq!(self_relation_for("ViewModel"), "self");
        assert_eq!(ResourceDescription::new().self_relation_name(), "self");
    }

    #[test]
    fn test_empty_group_is_dropped() {
        let resource = ResourceDescription::of_type("Orders")
            .with_embedded(EmbeddedGroup::collection("orders", Vec::new()));
        assert!(resource.embedded().is_empty());
    }

    #[test]
    fn test_embedded_resources_flatten_groups() {
        let resource = ResourceDescription::of_type("Order")
            .with_embedded(EmbeddedGroup::single(
                "basket",
                ResourceDescription::of_type("Basket"),
            ))
            .with_embedded(EmbeddedGroup::collection(
                "lines",
                vec![
                    ResourceDescription::of_type("Line"),
                    ResourceDescription::of_type("Line"),
                ],
            ))
            .with_property("id", json!(1));

        let types: Vec<_> = resource
            .embedded_resources()
            .filter_map(ResourceDescription::state_type)
            .collect();
        assert_eq!(types, vec!["Basket", "Line", "Line"]);
        assert_eq!(resource.state()["id"], json!(1));
    }
}
