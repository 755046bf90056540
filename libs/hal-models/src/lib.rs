//! HAL document model
//!
//! Value types describing a hypermedia resource independent of its wire
//! format:
//!
//! - [`LinkValue`], [`LinkValueSet`] and [`LinkCollection`] for `_links`
//! - [`EmbeddedGroup`] for `_embedded`
//! - [`ResourceDescription`], the tree node tying links, embedded groups,
//!   state and extension data together
//!
//! # Example
//!
//! ```rust
//! use halcyon_models::{EmbeddedGroup, LinkValue, ResourceDescription};
//! use serde_json::json;
//!
//! let order = ResourceDescription::of_type("Order")
//!     .with_link("self", LinkValue::new("/orders/1"))
//!     .with_property("total", json!(30.0));
//!
//! let orders = ResourceDescription::of_type("Orders")
//!     .with_link("self", LinkValue::new("/orders"))
//!     .with_embedded(EmbeddedGroup::collection("orders", vec![order]));
//!
//! assert_eq!(orders.embedded_resources().count(), 1);
//! assert_eq!(orders.self_relation_name(), "orders");
//! ```

pub mod embedded;
pub mod error;
pub mod link;
pub mod naming;
pub mod resource;

pub use embedded::{EmbeddedGroup, EmbeddedKind};
pub use error::{Error, Result};
pub use link::{Link, LinkCollection, LinkValue, LinkValueSet, SELF_REL};
pub use naming::{NamingConvention, NamingPolicy, Verbatim};
pub use resource::{self_relation_for, ResourceDescription};
