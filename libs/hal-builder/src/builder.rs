//! Building resource descriptions from serializable values
//!
//! An instance is serialized with serde into a JSON value, which then acts as
//! both the flat state and the value source for link templates. The
//! registry supplies link and embed declarations per type.
//!
//! Shapes handled:
//!
//! - objects: declared links are expanded against the object's properties,
//!   declared embed properties become `_embedded` groups and everything else
//!   is state
//! - arrays (e.g. a newtype over `Vec<T>`): every `embed_items` declaration
//!   groups all elements; without one the elements go to an `items` group

use crate::descriptor::{simple_type_name, EmbedDeclaration, EmbedSource, TypeKey};
use crate::error::{Error, Result};
use crate::options::{BuildOptions, UnresolvedVariablePolicy};
use crate::registry::{RegisteredType, ResourceRegistry};
use halcyon_models::{EmbeddedGroup, EmbeddedKind, LinkCollection, ResourceDescription};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Group name for array elements when the type declares no items embed
pub const DEFAULT_ITEMS_GROUP: &str = "items";

/// Builds [`ResourceDescription`]s against a registry
#[derive(Debug, Clone)]
pub struct DescriptionBuilder<'r> {
    registry: &'r ResourceRegistry,
    options: BuildOptions,
}

impl<'r> DescriptionBuilder<'r> {
    pub fn new(registry: &'r ResourceRegistry) -> Self {
        Self::with_options(registry, BuildOptions::default())
    }

    pub fn with_options(registry: &'r ResourceRegistry, options: BuildOptions) -> Self {
        Self { registry, options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Describe `instance` as a value of type `T`
    pub fn build<T: Serialize + 'static>(&self, instance: &T) -> Result<ResourceDescription> {
        let value = serde_json::to_value(instance)?;
        self.build_value(&value, Some(TypeKey::of::<T>()))
    }

    /// Describe an already serialized value. Without a type key the value is
    /// described with no links and no embeds.
    pub fn build_value(&self, value: &Value, key: Option<TypeKey>) -> Result<ResourceDescription> {
        self.build_node(value, key, 0)
    }

    fn build_node(
        &self,
        value: &Value,
        key: Option<TypeKey>,
        depth: usize,
    ) -> Result<ResourceDescription> {
        let entry = key.and_then(|k| self.registry.get(k));
        let type_name = match (entry, key) {
            (Some(entry), _) => Some(entry.name().to_string()),
            (None, Some(key)) => Some(simple_type_name(key.type_name())),
            (None, None) => None,
        };

        if depth > self.options.max_depth {
            return Err(Error::CycleDetected {
                type_name: type_name.unwrap_or_else(|| "<unknown>".to_string()),
                depth,
            });
        }

        tracing::trace!(type_name = type_name.as_deref(), depth, "building resource description");

        let description = match type_name {
            Some(name) => ResourceDescription::of_type(name),
            None => ResourceDescription::new(),
        };

        match value {
            Value::Object(map) => self.describe_object(description, map, entry, depth),
            Value::Array(items) => self.describe_items(description, items, entry, depth),
            Value::Null if description.state_type().is_some() => {
                let links = self.expand_links(entry, &Map::new())?;
                Ok(description.with_links(links))
            }
            Value::Null => Err(Error::InvalidState(
                "no instance and no type to describe".to_string(),
            )),
            other => Err(Error::InvalidState(format!(
                "{} serializes to a scalar ({}), expected an object or array",
                description.state_type().unwrap_or("value"),
                other
            ))),
        }
    }

    fn describe_object(
        &self,
        description: ResourceDescription,
        map: &Map<String, Value>,
        entry: Option<&RegisteredType>,
        depth: usize,
    ) -> Result<ResourceDescription> {
        let links = self.expand_links(entry, map)?;
        let mut description = description.with_links(links);

        let embeds = entry
            .map(|e| self.registry.embeds_for(e))
            .unwrap_or_default();
        let mut consumed: HashSet<&str> = HashSet::new();

        for embed in embeds {
            let EmbedSource::Property(property) = &embed.source else {
                tracing::debug!(
                    group = embed.name.as_str(),
                    "items embed ignored for a value that serializes to an object"
                );
                continue;
            };
            consumed.insert(property.as_str());

            match map.get(property) {
                None | Some(Value::Null) => continue,
                Some(value) => {
                    if let Some(group) = self.embed_value(embed, value, depth)? {
                        description = description.with_embedded(group);
                    }
                }
            }
        }

        let state: Map<String, Value> = map
            .iter()
            .filter(|(k, _)| !consumed.contains(k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(description.with_state(state))
    }

    fn describe_items(
        &self,
        description: ResourceDescription,
        items: &[Value],
        entry: Option<&RegisteredType>,
        depth: usize,
    ) -> Result<ResourceDescription> {
        let links = self.expand_links(entry, &Map::new())?;
        let mut description = description.with_links(links);

        let item_embeds: Vec<&EmbedDeclaration> = entry
            .map(|e| self.registry.embeds_for(e))
            .unwrap_or_default()
            .into_iter()
            .filter(|embed| embed.source == EmbedSource::Items)
            .collect();

        if item_embeds.is_empty() {
            let children = self.build_children(items, None, depth)?;
            return Ok(description.with_embedded(EmbeddedGroup::collection(
                DEFAULT_ITEMS_GROUP,
                children,
            )));
        }

        for embed in item_embeds {
            let children = self.build_children(items, embed.item_type, depth)?;
            description = description.with_embedded(EmbeddedGroup::collection(&embed.name, children));
        }
        Ok(description)
    }

    fn embed_value(
        &self,
        embed: &EmbedDeclaration,
        value: &Value,
        depth: usize,
    ) -> Result<Option<EmbeddedGroup>> {
        let group = match value {
            Value::Array(items) => {
                let children = self.build_children(items, embed.item_type, depth)?;
                EmbeddedGroup::collection(&embed.name, children)
            }
            single => {
                let child = self.build_node(single, embed.item_type, depth + 1)?;
                match embed.kind {
                    EmbeddedKind::Single => EmbeddedGroup::single(&embed.name, child),
                    EmbeddedKind::Collection => EmbeddedGroup::collection(&embed.name, vec![child]),
                }
            }
        };
        Ok(if group.is_empty() { None } else { Some(group) })
    }

    fn build_children(
        &self,
        items: &[Value],
        key: Option<TypeKey>,
        depth: usize,
    ) -> Result<Vec<ResourceDescription>> {
        items
            .iter()
            .filter(|item| !item.is_null())
            .map(|item| self.build_node(item, key, depth + 1))
            .collect()
    }

    fn expand_links(
        &self,
        entry: Option<&RegisteredType>,
        source: &Map<String, Value>,
    ) -> Result<LinkCollection> {
        let mut links = LinkCollection::new();
        let Some(entry) = entry else {
            return Ok(links);
        };

        for link in self.registry.links_for(entry) {
            let declaration = &link.declaration;
            if declaration.templated {
                links.insert(&declaration.rel, declaration.to_link_value(declaration.href.clone()));
                continue;
            }

            let expansion = link.template.expand_with_report(source);
            let unresolved = link
                .template
                .required_variable_names()
                .find(|name| expansion.missing.iter().any(|m| m == name));

            if let Some(variable) = unresolved {
                match self.options.unresolved_variables {
                    UnresolvedVariablePolicy::Omit => {
                        tracing::warn!(
                            type_name = entry.name(),
                            rel = declaration.rel.as_str(),
                            variable,
                            "omitting link with unresolved template variable"
                        );
                        continue;
                    }
                    UnresolvedVariablePolicy::Fail => {
                        return Err(Error::UnresolvedVariable {
                            rel: declaration.rel.clone(),
                            variable: variable.to_string(),
                        });
                    }
                    UnresolvedVariablePolicy::Partial => {}
                }
            }

            links.insert(&declaration.rel, declaration.to_link_value(expansion.href));
        }

        Ok(links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ResourceDescriptor;
    use serde_json::json;

    #[derive(Serialize)]
    struct Node {
        id: u32,
        child: Option<Box<Node>>,
    }

    fn chain(len: u32) -> Node {
        (1..len).fold(Node { id: 0, child: None }, |child, id| Node {
            id,
            child: Some(Box::new(child)),
        })
    }

    fn registry() -> ResourceRegistry {
        ResourceRegistry::new()
            .with(
                ResourceDescriptor::new::<Node>()
                    .link("self", "/nodes/{id}")
                    .embed_single::<Node>("child", "child"),
            )
            .unwrap()
    }

    #[test]
    fn test_depth_bound_raises_cycle_detected() {
        let registry = registry();
        let builder = DescriptionBuilder::with_options(&registry, BuildOptions::default().with_max_depth(3));

        assert!(builder.build(&chain(4)).is_ok());
        let err = builder.build(&chain(5)).unwrap_err();
        assert!(matches!(err, Error::CycleDetected { depth: 4, ref type_name } if type_name == "Node"));
    }

    #[test]
    fn test_null_without_type_is_invalid_state() {
        let registry = ResourceRegistry::new();
        let builder = DescriptionBuilder::new(&registry);
        assert!(matches!(
            builder.build_value(&Value::Null, None),
            Err(Error::InvalidState(_))
        ));
        assert!(matches!(
            builder.build_value(&json!(3), None),
            Err(Error::InvalidState(_))
        ));
    }

    #[test]
    fn test_untyped_object_is_plain_state() {
        let registry = ResourceRegistry::new();
        let builder = DescriptionBuilder::new(&registry);
        let description = builder
            .build_value(&json!({ "a": 1, "b": "x" }), None)
            .unwrap();
        assert!(description.links().is_empty());
        assert_eq!(description.state().len(), 2);
        assert_eq!(description.state_type(), None);
    }
}
