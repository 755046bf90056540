//! Schema generation
//!
//! Object schemas follow the JSON renderer: `_links` first, then the state
//! properties, then `_embedded`. A property goes to `_embedded` when the
//! registry declares it as embedded (under the group name, always as an
//! array) or when its own schema is an array (under its converted name).

use crate::error::{Error, Result};
use crate::kind::{ObjectKind, SchemaKind, SchemaType};
use crate::schema::{Schema, XmlObject};
use halcyon_builder::{
    EmbedSource, RegisteredType, ResourceRegistry, TypeKey, DEFAULT_ITEMS_GROUP, DEFAULT_MAX_DEPTH,
};
use halcyon_models::{NamingConvention, NamingPolicy};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub const LINKS_PROPERTY: &str = "_links";
pub const EMBEDDED_PROPERTY: &str = "_embedded";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaOptions {
    /// Naming for state property names; relation and group names are verbatim
    pub naming: NamingConvention,
    /// Object nesting bound; deeper (self-referencing) types are not supported
    pub max_depth: usize,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            naming: NamingConvention::CamelCase,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Derives schemas from [`SchemaType`]s and the declarations in a registry
#[derive(Debug, Clone)]
pub struct SchemaGenerator<'r> {
    registry: &'r ResourceRegistry,
    options: SchemaOptions,
}

impl<'r> SchemaGenerator<'r> {
    pub fn new(registry: &'r ResourceRegistry) -> Self {
        Self::with_options(registry, SchemaOptions::default())
    }

    pub fn with_options(registry: &'r ResourceRegistry, options: SchemaOptions) -> Self {
        Self { registry, options }
    }

    pub fn options(&self) -> &SchemaOptions {
        &self.options
    }

    /// Schema for `T`. A registered type that maps onto an array is a
    /// collection resource: its elements go to `_embedded`.
    pub fn generate<T: SchemaType + 'static>(&self) -> Result<Schema> {
        let kind = T::schema_kind();
        if let SchemaKind::Array(items) = kind.unwrap_optional() {
            if let Some(entry) = self.registry.get(TypeKey::of::<T>()) {
                return self.collection_schema(entry, items);
            }
        }
        self.generate_kind(&kind)
    }

    pub fn generate_kind(&self, kind: &SchemaKind) -> Result<Schema> {
        self.schema_for(kind, 0)
    }

    /// `{ _links, _embedded: { group: [item] } }`
    pub fn generate_collection<I, S>(
        &self,
        item: &SchemaKind,
        group_name: &str,
        rels: I,
    ) -> Result<Schema>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items = self.schema_for(item, 1)?;
        Ok(Schema::object()
            .with_property(LINKS_PROPERTY, links_schema(rels))
            .with_property(
                EMBEDDED_PROPERTY,
                Schema::object().with_property(group_name, Schema::array(items)),
            ))
    }

    fn collection_schema(&self, entry: &RegisteredType, item: &SchemaKind) -> Result<Schema> {
        let mut groups: Vec<&str> = self
            .registry
            .embeds_for(entry)
            .into_iter()
            .filter(|embed| embed.source == EmbedSource::Items)
            .map(|embed| embed.name.as_str())
            .collect();
        if groups.is_empty() {
            groups.push(DEFAULT_ITEMS_GROUP);
        }

        let items = self.schema_for(item, 1)?;
        let mut embedded = Schema::object();
        for group in groups {
            embedded
                .properties
                .insert(group.to_string(), Schema::array(items.clone()));
        }

        Ok(Schema::object()
            .with_property(LINKS_PROPERTY, links_schema(&self.registry.rels_for(entry)))
            .with_property(EMBEDDED_PROPERTY, embedded))
    }

    fn schema_for(&self, kind: &SchemaKind, depth: usize) -> Result<Schema> {
        match kind {
            SchemaKind::Primitive(primitive) => Ok(primitive.schema()),
            SchemaKind::Optional(inner) => Ok(self.schema_for(inner, depth)?.nullable(true)),
            SchemaKind::Array(items) => Ok(Schema::array(self.schema_for(items, depth)?)),
            SchemaKind::Object(object) => self.object_schema(object, depth),
            SchemaKind::Tuple(_) => Err(Error::NotSupported(format!(
                "tuple type {}",
                kind.describe()
            ))),
        }
    }

    fn object_schema(&self, object: &ObjectKind, depth: usize) -> Result<Schema> {
        if depth > self.options.max_depth {
            return Err(Error::NotSupported(format!(
                "'{}' nested deeper than {} levels",
                object.name(),
                self.options.max_depth
            )));
        }
        tracing::trace!(type_name = %object.name(), depth, "generating object schema");

        let entry = self.registry.get(object.key());
        let rels = entry
            .map(|e| self.registry.rels_for(e))
            .unwrap_or_default();
        let embeds = entry
            .map(|e| self.registry.embeds_for(e))
            .unwrap_or_default();

        let mut schema = Schema::object().with_property(LINKS_PROPERTY, links_schema(&rels));
        let mut embedded = Schema::object();

        for property in object.properties() {
            let mut property_schema = self.schema_for(&property.kind(), depth + 1)?;
            let declared = embeds
                .iter()
                .find(|embed| embed.property() == Some(property.name.as_str()));

            match declared {
                Some(embed) => {
                    // Absent groups are omitted rather than null
                    property_schema.nullable = false;
                    let group = if property_schema.is_array() {
                        property_schema
                    } else {
                        Schema::array(property_schema)
                    };
                    embedded.properties.insert(embed.name.clone(), group);
                }
                None => {
                    let name = self.options.naming.convert_name(&property.name);
                    if property_schema.is_array() {
                        embedded.properties.insert(name, property_schema);
                    } else {
                        schema.properties.insert(name, property_schema);
                    }
                }
            }
        }

        if !embedded.properties.is_empty() {
            schema.properties.insert(EMBEDDED_PROPERTY.to_string(), embedded);
        }
        Ok(schema)
    }
}

fn link_value_schema() -> Schema {
    let text = || Schema::typed("string").nullable(true);
    Schema::object()
        .with_property("href", Schema::typed("string"))
        .with_property("name", text())
        .with_property(
            "templated",
            Schema::typed("boolean").with_default(json!(false)),
        )
        .with_property("type", text())
        .with_property("deprecation", text())
        .with_property("profile", text())
        .with_property("title", text())
        .with_property("hrefLang", text())
        .with_additional_properties(true)
}

/// `_links` object: every relation is one link value or an array of them
fn links_schema<I, S>(rels: I) -> Schema
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let value = link_value_schema();
    let relation = Schema::one_of(vec![Schema::array(value.clone()), value]);

    let mut schema = Schema::object().with_additional_properties(true);
    schema.xml = Some(XmlObject {
        name: Some("link".to_string()),
        wrapped: false,
    });

    let mut example = Map::new();
    for rel in rels {
        let rel = rel.as_ref();
        schema.properties.insert(rel.to_string(), relation.clone());
        example.insert(rel.to_string(), json!({ "href": "string" }));
    }
    schema.example = Some(Value::Object(example));
    schema
}
