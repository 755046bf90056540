//! HAL JSON rendering
//!
//! Member order is `_links`, `_embedded`, state, extensions. A relation with
//! one value renders as an object and with several as an array; embedded
//! groups always render as arrays. The naming policy applies to state and
//! extension keys only. A state or extension key that names `_links` or
//! `_embedded` after conversion is skipped.

use crate::error::Result;
use halcyon_models::{NamingConvention, NamingPolicy, ResourceDescription};
use serde_json::{Map, Value};
use std::io::Write;

pub const LINKS_KEY: &str = "_links";
pub const EMBEDDED_KEY: &str = "_embedded";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonOptions {
    pub naming: NamingConvention,
    pub pretty: bool,
}

impl JsonOptions {
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_naming(mut self, naming: NamingConvention) -> Self {
        self.naming = naming;
        self
    }
}

/// Render a description to a JSON value using any naming policy
pub fn render_json_value(
    resource: &ResourceDescription,
    naming: &dyn NamingPolicy,
) -> Result<Value> {
    let mut out = Map::new();

    if !resource.links().is_empty() {
        out.insert(LINKS_KEY.to_string(), serde_json::to_value(resource.links())?);
    }

    if !resource.embedded().is_empty() {
        // Groups sharing a name render into one array
        let mut groups: Vec<(&str, Vec<Value>)> = Vec::new();
        for group in resource.embedded() {
            let rendered = group
                .resources()
                .iter()
                .map(|child| render_json_value(child, naming))
                .collect::<Result<Vec<_>>>()?;
            match groups.iter_mut().find(|(name, _)| *name == group.name()) {
                Some((_, items)) => items.extend(rendered),
                None => groups.push((group.name(), rendered)),
            }
        }
        let embedded: Map<String, Value> = groups
            .into_iter()
            .map(|(name, items)| (name.to_string(), Value::Array(items)))
            .collect();
        out.insert(EMBEDDED_KEY.to_string(), Value::Object(embedded));
    }

    for (key, value) in resource.state().iter().chain(resource.extensions()) {
        let name = naming.convert_name(key);
        if is_reserved_key(&name) {
            tracing::warn!(key = key.as_str(), "skipping member that collides with a HAL envelope key");
            continue;
        }
        out.insert(name, value.clone());
    }

    Ok(Value::Object(out))
}

fn is_reserved_key(name: &str) -> bool {
    name == LINKS_KEY || name == EMBEDDED_KEY
}

/// Render to a JSON string
pub fn render_json(resource: &ResourceDescription, options: &JsonOptions) -> Result<String> {
    let value = render_json_value(resource, &options.naming)?;
    let json = if options.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(json)
}

/// Render into any writer
pub fn write_json<W: Write>(
    resource: &ResourceDescription,
    options: &JsonOptions,
    writer: W,
) -> Result<()> {
    let value = render_json_value(resource, &options.naming)?;
    if options.pretty {
        serde_json::to_writer_pretty(writer, &value)?;
    } else {
        serde_json::to_writer(writer, &value)?;
    }
    Ok(())
}
