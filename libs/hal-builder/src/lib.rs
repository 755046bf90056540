//! Resource description builder
//!
//! Turns typed values into [`ResourceDescription`] trees. Types are described
//! once with a [`ResourceDescriptor`] (links, embedded properties, inherited
//! declarations) and registered in a [`ResourceRegistry`]; a
//! [`DescriptionBuilder`] then serializes instances with serde and applies
//! the declarations.
//!
//! ```
//! use halcyon_builder::{DescriptionBuilder, ResourceDescriptor, ResourceRegistry};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct SimpleResource {
//!     id: u32,
//!     title: Option<String>,
//! }
//!
//! let registry = ResourceRegistry::new()
//!     .with(ResourceDescriptor::new::<SimpleResource>().link("self", "/simple/{id}"))
//!     .unwrap();
//!
//! let resource = DescriptionBuilder::new(&registry)
//!     .build(&SimpleResource { id: 1234, title: None })
//!     .unwrap();
//!
//! assert_eq!(resource.self_link().unwrap().href, "/simple/1234");
//! ```
//!
//! The [`fluent`] module builds descriptions by hand instead.

pub mod builder;
pub mod descriptor;
pub mod error;
pub mod fluent;
pub mod options;
pub mod registry;

pub use builder::{DescriptionBuilder, DEFAULT_ITEMS_GROUP};
pub use descriptor::{
    simple_type_name, EmbedDeclaration, EmbedSource, LinkDeclaration, ResourceDescriptor, TypeKey,
};
pub use error::{Error, Result};
pub use fluent::{EmbeddedBuilder, LinkBuilder, ResourceBuilder};
pub use halcyon_models::ResourceDescription;
pub use options::{BuildOptions, UnresolvedVariablePolicy, DEFAULT_MAX_DEPTH};
pub use registry::{CompiledLink, RegisteredType, ResourceRegistry};
