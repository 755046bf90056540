//! HAL JSON reading
//!
//! `_links` entries may be an object or an array of objects. `_embedded`
//! entries may be an object (a single resource) or an array (a collection).
//! Every other member becomes state.

use crate::error::{Error, Result};
use crate::json::{EMBEDDED_KEY, LINKS_KEY};
use halcyon_models::{EmbeddedGroup, LinkCollection, ResourceDescription};
use serde_json::{Map, Value};

/// Parse a HAL JSON document
pub fn parse_json(input: &str) -> Result<ResourceDescription> {
    let value: Value = serde_json::from_str(input)?;
    parse_json_value(&value)
}

/// Read a description from an already parsed JSON value
pub fn parse_json_value(value: &Value) -> Result<ResourceDescription> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::InvalidDocument("expected a JSON object for the resource".into()))?;
    read_resource(object)
}

fn read_resource(object: &Map<String, Value>) -> Result<ResourceDescription> {
    let mut resource = ResourceDescription::new();
    let mut state = Map::new();

    for (key, value) in object {
        match key.as_str() {
            LINKS_KEY => {
                let links: LinkCollection = serde_json::from_value(value.clone())?;
                resource = resource.with_links(links);
            }
            EMBEDDED_KEY => {
                let groups = value.as_object().ok_or_else(|| {
                    Error::InvalidDocument(format!("{} must be an object", EMBEDDED_KEY))
                })?;
                for (name, entry) in groups {
                    resource = resource.with_embedded(read_group(name, entry)?);
                }
            }
            _ => {
                state.insert(key.clone(), value.clone());
            }
        }
    }

    Ok(resource.with_state(state))
}

fn read_group(name: &str, entry: &Value) -> Result<EmbeddedGroup> {
    match entry {
        Value::Object(object) => Ok(EmbeddedGroup::single(name, read_resource(object)?)),
        Value::Array(items) => {
            let resources = items
                .iter()
                .map(|item| match item {
                    Value::Object(object) => read_resource(object),
                    _ => Err(Error::InvalidDocument(format!(
                        "embedded '{}' must contain objects",
                        name
                    ))),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(EmbeddedGroup::collection(name, resources))
        }
        _ => Err(Error::InvalidDocument(format!(
            "embedded '{}' must be an object or an array",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halcyon_models::EmbeddedKind;

    #[test]
    fn test_parse_links_and_embedded() {
        let resource = parse_json(
            r#"{
                "_links": {
                    "self": { "href": "/orders" },
                    "item": [{ "href": "/orders/1" }, { "href": "/orders/2" }]
                },
                "_embedded": {
                    "customer": { "_links": { "self": { "href": "/customers/1" } }, "name": "Ada" },
                    "orders": [{ "total": 30 }]
                },
                "shippedToday": 20
            }"#,
        )
        .unwrap();

        assert_eq!(resource.self_link().unwrap().href, "/orders");
        assert_eq!(resource.links().get("item").unwrap().len(), 2);
        assert_eq!(
            resource.embedded_group("customer").unwrap().kind(),
            EmbeddedKind::Single
        );
        assert_eq!(
            resource.embedded_group("orders").unwrap().kind(),
            EmbeddedKind::Collection
        );
        assert_eq!(resource.state()["shippedToday"], serde_json::json!(20));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(matches!(parse_json("[1]"), Err(Error::InvalidDocument(_))));
        assert!(matches!(parse_json("{"), Err(Error::Json(_))));
        assert!(matches!(
            parse_json(r#"{"_embedded": {"x": 1}}"#),
            Err(Error::InvalidDocument(_))
        ));
    }
}
