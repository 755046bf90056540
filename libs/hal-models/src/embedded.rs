//! Embedded resource groups

use crate::error::{Error, Result};
use crate::resource::ResourceDescription;

/// Whether a group was declared as one nested resource or a collection.
///
/// The kind is explicit: a collection holding one resource is still a
/// collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmbeddedKind {
    Single,
    Collection,
}

/// Named group of embedded resources
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedGroup {
    name: String,
    kind: EmbeddedKind,
    resources: Vec<ResourceDescription>,
}

impl EmbeddedGroup {
    pub fn single(name: impl Into<String>, resource: ResourceDescription) -> Self {
        Self {
            name: name.into(),
            kind: EmbeddedKind::Single,
            resources: vec![resource],
        }
    }

    pub fn collection(name: impl Into<String>, resources: Vec<ResourceDescription>) -> Self {
        Self {
            name: name.into(),
            kind: EmbeddedKind::Collection,
            resources,
        }
    }

    /// Build a group of the given kind, checking that single groups hold
    /// exactly one resource
    pub fn with_kind(
        name: impl Into<String>,
        kind: EmbeddedKind,
        resources: Vec<ResourceDescription>,
    ) -> Result<Self> {
        let name = name.into();
        if kind == EmbeddedKind::Single && resources.len() != 1 {
            return Err(Error::InvalidSingleGroup(name, resources.len()));
        }
        Ok(Self {
            name,
            kind,
            resources,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EmbeddedKind {
        self.kind
    }

    pub fn is_single(&self) -> bool {
        self.kind == EmbeddedKind::Single
    }

    pub fn resources(&self) -> &[ResourceDescription] {
        &self.resources
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
