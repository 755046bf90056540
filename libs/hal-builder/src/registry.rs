//! Descriptor registry
//!
//! Descriptors live in an arena indexed by `TypeId` and by their simple
//! name. Link templates are parsed once at registration.

use crate::descriptor::{EmbedDeclaration, LinkDeclaration, ResourceDescriptor, TypeKey};
use crate::error::{Error, Result};
use halcyon_uri_template::UriTemplate;
use std::any::TypeId;
use std::collections::{HashMap, HashSet};

/// A link declaration with its parsed template
#[derive(Debug, Clone)]
pub struct CompiledLink {
    pub declaration: LinkDeclaration,
    pub template: UriTemplate,
}

/// A registered descriptor
#[derive(Debug, Clone)]
pub struct RegisteredType {
    descriptor: ResourceDescriptor,
    links: Vec<CompiledLink>,
}

impl RegisteredType {
    pub fn key(&self) -> TypeKey {
        self.descriptor.key()
    }

    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    pub fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    /// Links declared directly on this type
    pub fn own_links(&self) -> &[CompiledLink] {
        &self.links
    }
}

#[derive(Debug, Default, Clone)]
pub struct ResourceRegistry {
    entries: Vec<RegisteredType>,
    by_type: HashMap<TypeId, usize>,
    by_name: HashMap<String, usize>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor, parsing its link templates
    pub fn register(&mut self, descriptor: ResourceDescriptor) -> Result<TypeKey> {
        let key = descriptor.key();
        if self.by_type.contains_key(&key.id()) {
            return Err(Error::DuplicateType(descriptor.name().to_string()));
        }

        let links = descriptor
            .links()
            .iter()
            .map(|declaration| -> Result<CompiledLink> {
                Ok(CompiledLink {
                    template: UriTemplate::parse(&declaration.href)?,
                    declaration: declaration.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            type_name = descriptor.name(),
            links = links.len(),
            embeds = descriptor.embeds().len(),
            "registered resource descriptor"
        );

        let index = self.entries.len();
        self.by_type.insert(key.id(), index);
        self.by_name.insert(descriptor.name().to_string(), index);
        self.entries.push(RegisteredType { descriptor, links });
        Ok(key)
    }

    /// Builder-style registration
    pub fn with(mut self, descriptor: ResourceDescriptor) -> Result<Self> {
        self.register(descriptor)?;
        Ok(self)
    }

    pub fn get(&self, key: TypeKey) -> Option<&RegisteredType> {
        self.get_by_id(key.id())
    }

    pub fn get_by_id(&self, id: TypeId) -> Option<&RegisteredType> {
        self.by_type.get(&id).map(|&index| &self.entries[index])
    }

    pub fn get_by_name(&self, name: &str) -> Option<&RegisteredType> {
        self.by_name.get(name).map(|&index| &self.entries[index])
    }

    pub fn contains(&self, key: TypeKey) -> bool {
        self.by_type.contains_key(&key.id())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredType> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The type followed by its registered bases, depth first, each once
    fn lineage<'a>(&'a self, entry: &'a RegisteredType) -> Vec<&'a RegisteredType> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        let mut stack = vec![entry];

        while let Some(current) = stack.pop() {
            if !seen.insert(current.key().id()) {
                continue;
            }
            out.push(current);
            for base in current.descriptor.bases().iter().rev() {
                if let Some(base_entry) = self.get(*base) {
                    stack.push(base_entry);
                }
            }
        }
        out
    }

    /// Own links followed by inherited ones, in declaration order
    pub fn links_for<'a>(&'a self, entry: &'a RegisteredType) -> Vec<&'a CompiledLink> {
        self.lineage(entry)
            .into_iter()
            .flat_map(|e| e.links.iter())
            .collect()
    }

    /// Own embed declarations followed by inherited ones
    pub fn embeds_for<'a>(&'a self, entry: &'a RegisteredType) -> Vec<&'a EmbedDeclaration> {
        self.lineage(entry)
            .into_iter()
            .flat_map(|e| e.descriptor.embeds().iter())
            .collect()
    }

    /// Relation names documented for the type: declared links first, then
    /// documentation-only relations, without duplicates
    pub fn rels_for(&self, entry: &RegisteredType) -> Vec<String> {
        let lineage = self.lineage(entry);
        let mut rels: Vec<String> = Vec::new();
        let declared = lineage
            .iter()
            .flat_map(|e| e.links.iter().map(|l| l.declaration.rel.as_str()));
        let documented = lineage
            .iter()
            .flat_map(|e| e.descriptor.documented_rels().iter().map(String::as_str));
        for rel in declared.chain(documented) {
            if !rels.iter().any(|r| r == rel) {
                rels.push(rel.to_string());
            }
        }
        rels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entity;
    struct Customer;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ResourceRegistry::new();
        let key = registry
            .register(ResourceDescriptor::new::<Customer>().link("self", "/customers/{id}"))
            .unwrap();

        assert!(registry.contains(key));
        assert_eq!(registry.get_by_name("Customer").unwrap().key(), key);
        assert_eq!(registry.get(key).unwrap().own_links().len(), 1);
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = ResourceRegistry::new();
        registry.register(ResourceDescriptor::new::<Customer>()).unwrap();
        assert!(matches!(
            registry.register(ResourceDescriptor::new::<Customer>()),
            Err(Error::DuplicateType(name)) if name == "Customer"
        ));
    }

    #[test]
    fn test_malformed_template_fails_registration() {
        let mut registry = ResourceRegistry::new();
        let result = registry.register(ResourceDescriptor::new::<Customer>().link("self", "/c/{id"));
        assert!(matches!(result, Err(Error::Template(_))));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_inherited_links_follow_own() {
        let registry = ResourceRegistry::new()
            .with(ResourceDescriptor::new::<Entity>().link("audit", "/audit/{id}"))
            .unwrap()
            .with(
                ResourceDescriptor::new::<Customer>()
                    .link("self", "/customers/{id}")
                    .inherits::<Entity>()
                    .documents("orders"),
            )
            .unwrap();

        let customer = registry.get(TypeKey::of::<Customer>()).unwrap();
        let rels: Vec<_> = registry
            .links_for(customer)
            .iter()
            .map(|l| l.declaration.rel.clone())
            .collect();
        assert_eq!(rels, vec!["self", "audit"]);
        assert_eq!(registry.rels_for(customer), vec!["self", "audit", "orders"]);
    }
}
