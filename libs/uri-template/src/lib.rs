//! RFC 6570 URI Templates
//!
//! Templates are parsed once into literal and expression parts and can then
//! be expanded any number of times against a [`VarSource`].
//!
//! ```
//! use halcyon_uri_template::UriTemplate;
//! use serde_json::json;
//!
//! let template = UriTemplate::parse("/orders/{id}{?page,size}").unwrap();
//! let href = template.expand(&json!({ "id": 7, "page": 2 }));
//! assert_eq!(href, "/orders/7?page=2");
//! ```
//!
//! Parsing is strict: unbalanced braces, empty expressions and reserved
//! operators are reported as [`Error::MalformedTemplate`].

mod encode;
pub mod error;
mod expand;
pub mod operator;
mod parser;
pub mod template;
pub mod value;

pub use error::{Error, Result};
pub use expand::Expansion;
pub use operator::Operator;
pub use template::{Expression, Part, UriTemplate, VarSpec};
pub use value::{TemplateValue, VarSource, Variables};
