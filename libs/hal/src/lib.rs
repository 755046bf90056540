//! HAL hypermedia for Rust.
//!
//! This crate bundles the workspace libraries behind one entry point:
//!
//! - [`uri_template`]: RFC 6570 URI Template parsing and expansion
//! - [`models`]: the resource description tree (links, embedded groups, state)
//! - [`builder`]: descriptors, the type registry and description building
//! - [`format`]: `application/hal+json` and `application/hal+xml` rendering
//! - [`openapi`]: OpenAPI schemas mirroring the rendered JSON
//!
//! [`Hal`] ties a registry to a [`HalConfig`]:
//!
//! ```
//! use halcyon::{Hal, MediaType, ResourceDescriptor, ResourceRegistry};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Customer {
//!     id: u32,
//!     display_name: String,
//! }
//!
//! let registry = ResourceRegistry::new()
//!     .with(ResourceDescriptor::new::<Customer>().link("self", "/customers/{id}"))
//!     .unwrap();
//! let hal = Hal::new(registry);
//!
//! let customer = Customer { id: 7, display_name: "Ada".into() };
//! assert_eq!(
//!     hal.render(&customer, MediaType::HalJson).unwrap(),
//!     r#"{"_links":{"self":{"href":"/customers/7"}},"id":7,"displayName":"Ada"}"#
//! );
//! assert_eq!(
//!     hal.render(&customer, MediaType::HalXml).unwrap(),
//!     r#"<resource rel="customer" href="/customers/7"><id>7</id><displayName>Ada</displayName></resource>"#
//! );
//! ```

pub mod config;
pub mod error;
mod hal;
pub mod media_type;

pub use halcyon_builder as builder;
pub use halcyon_format as format;
pub use halcyon_models as models;
pub use halcyon_openapi as openapi;
pub use halcyon_uri_template as uri_template;

pub use config::{CompiledConfig, ConfigError, HalConfig};
pub use error::{Error, Result};
pub use hal::Hal;
pub use media_type::MediaType;

pub use halcyon_builder::{
    DescriptionBuilder, ResourceBuilder, ResourceDescriptor, ResourceRegistry,
};
pub use halcyon_models::{LinkValue, NamingConvention, ResourceDescription};
pub use halcyon_openapi::{ObjectKind, Schema, SchemaKind, SchemaType};
pub use halcyon_uri_template::UriTemplate;
