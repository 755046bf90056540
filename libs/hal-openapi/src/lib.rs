//! OpenAPI schemas for HAL resources
//!
//! Generates, without an instance, the schema of the JSON a resource renders
//! to: a `_links` object listing every declared relation, the state
//! properties, and an `_embedded` object for embedded groups. Link and embed
//! declarations come from the same [`ResourceRegistry`] the description
//! builder uses.
//!
//! ```
//! use halcyon_builder::{ResourceDescriptor, ResourceRegistry};
//! use halcyon_openapi::{ObjectKind, SchemaGenerator, SchemaKind, SchemaType};
//!
//! struct Customer {
//!     id: u8,
//! }
//!
//! impl SchemaType for Customer {
//!     fn schema_kind() -> SchemaKind {
//!         ObjectKind::of::<Self>().property::<u8>("id").into()
//!     }
//! }
//!
//! let registry = ResourceRegistry::new()
//!     .with(ResourceDescriptor::new::<Customer>().link("self", "/customers/{id}"))
//!     .unwrap();
//!
//! let schema = SchemaGenerator::new(&registry).generate::<Customer>().unwrap();
//! assert!(schema.property("_links").unwrap().property("self").is_some());
//! assert_eq!(schema.property("id").unwrap().maximum, Some(serde_json::Number::from(255u8)));
//! ```
//!
//! [`ResourceRegistry`]: halcyon_builder::ResourceRegistry

pub mod error;
pub mod generator;
pub mod kind;
pub mod primitives;
pub mod schema;

pub use error::{Error, Result};
pub use generator::{SchemaGenerator, SchemaOptions, EMBEDDED_PROPERTY, LINKS_PROPERTY};
pub use kind::{ObjectKind, PropertyKind, SchemaKind, SchemaType};
pub use primitives::Primitive;
pub use schema::{Schema, XmlObject};
