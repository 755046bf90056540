//! HAL JSON and XML rendering.
//!
//! Renderers are plain functions over an immutable
//! [`ResourceDescription`]; the same description can be rendered any number
//! of times, from any thread, with identical output.
//!
//! The two formats deliberately differ:
//! - JSON (`application/hal+json`) names embedded groups under `_embedded`
//!   and renders multi-valued relations as arrays.
//! - XML (`application/hal+xml`) flattens embedded resources into nested
//!   `<resource>` elements and writes one `<link>` per relation.

pub mod error;
pub mod json;
pub mod reader;
pub mod xml;

pub use error::{Error, Result};
pub use halcyon_models::ResourceDescription;
pub use json::{render_json, render_json_value, write_json, JsonOptions, EMBEDDED_KEY, LINKS_KEY};
pub use reader::{parse_json, parse_json_value};
pub use xml::{render_xml, write_xml, XmlOptions};

/// Convert a HAL JSON document into HAL XML
pub fn json_to_xml(input: &str, options: &XmlOptions) -> Result<String> {
    let resource = parse_json(input)?;
    tracing::debug!(
        links = resource.links().len(),
        embedded = resource.embedded().len(),
        "converting HAL JSON to XML"
    );
    render_xml(&resource, options)
}
