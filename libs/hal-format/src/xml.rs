//! HAL XML rendering.
//!
//! Mapping rules:
//! - Every resource is a `<resource>` element whose `rel` attribute is the
//!   self relation derived from the state type and whose `href` is the first
//!   `self` link value.
//! - Other relations become empty `<link>` elements carrying only the
//!   attributes that are set. Only the first value of a relation is written
//!   unless `all_link_values` is enabled.
//! - Embedded resources are written as nested `<resource>` elements in group
//!   order, without any element for the group itself.
//! - State and extension entries become child elements; nulls are skipped,
//!   objects nest and arrays repeat the element.
//!
//! Element and attribute names taken from state keys, nested object keys and
//! link properties must be XML NCNames; any other name fails with
//! [`Error::InvalidName`] rather than producing an ill-formed document.

use crate::error::{Error, Result};
use halcyon_models::{LinkValue, NamingConvention, NamingPolicy, ResourceDescription, SELF_REL};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde_json::Value;
use std::io::{Cursor, Write};

const RESOURCE_ELEMENT: &str = "resource";
const LINK_ELEMENT: &str = "link";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlOptions {
    /// Naming for state and extension element names
    pub naming: NamingConvention,
    /// Write every value of a multi-valued relation instead of the first
    pub all_link_values: bool,
    /// Indent width; `None` writes everything on one line
    pub indent: Option<usize>,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            naming: NamingConvention::CamelCase,
            all_link_values: false,
            indent: None,
        }
    }
}

/// Render to an XML string
pub fn render_xml(resource: &ResourceDescription, options: &XmlOptions) -> Result<String> {
    let mut buffer = Cursor::new(Vec::new());
    write_xml(resource, options, &mut buffer)?;
    Ok(String::from_utf8(buffer.into_inner())?)
}

/// Render into any writer
pub fn write_xml<W: Write>(
    resource: &ResourceDescription,
    options: &XmlOptions,
    inner: W,
) -> Result<()> {
    let mut writer = match options.indent {
        Some(width) => Writer::new_with_indent(inner, b' ', width),
        None => Writer::new(inner),
    };
    write_resource(&mut writer, resource, options)
}

fn write_resource<W: Write>(
    writer: &mut Writer<W>,
    resource: &ResourceDescription,
    options: &XmlOptions,
) -> Result<()> {
    let self_rel = resource.self_relation_name();
    let mut start = BytesStart::new(RESOURCE_ELEMENT);
    start.push_attribute(("rel", self_rel.as_str()));
    if let Some(self_link) = resource.self_link() {
        start.push_attribute(("href", self_link.href.as_str()));
    }
    writer.write_event(Event::Start(start))?;

    for (rel, set) in resource.links().iter() {
        if rel == SELF_REL {
            continue;
        }
        let values = if options.all_link_values {
            set.values()
        } else {
            &set.values()[..1]
        };
        for value in values {
            write_link(writer, rel, value)?;
        }
    }

    for child in resource.embedded_resources() {
        write_resource(writer, child, options)?;
    }

    for (key, value) in resource.state().iter().chain(resource.extensions()) {
        let name = options.naming.convert_name(key);
        write_state(writer, &name, value)?;
    }

    writer.write_event(Event::End(BytesEnd::new(RESOURCE_ELEMENT)))?;
    Ok(())
}

fn write_link<W: Write>(writer: &mut Writer<W>, rel: &str, value: &LinkValue) -> Result<()> {
    let mut link = BytesStart::new(LINK_ELEMENT);
    link.push_attribute(("rel", rel));
    link.push_attribute(("href", value.href.as_str()));

    push_text(&mut link, "name", &value.name);
    if value.templated {
        link.push_attribute(("templated", "true"));
    }
    push_text(&mut link, "type", &value.media_type);
    push_text(&mut link, "title", &value.title);
    push_text(&mut link, "profile", &value.profile);
    push_text(&mut link, "hrefLang", &value.href_lang);
    push_text(&mut link, "deprecation", &value.deprecation);

    for (key, extra) in &value.properties {
        if let Some(text) = scalar_text(extra) {
            link.push_attribute((xml_name(key)?, text.as_str()));
        }
    }

    writer.write_event(Event::Empty(link))?;
    Ok(())
}

/// Attributes are written only for non-blank values
fn push_text(element: &mut BytesStart<'_>, key: &str, field: &Option<String>) {
    if let Some(text) = field.as_deref().filter(|t| !t.trim().is_empty()) {
        element.push_attribute((key, text));
    }
}

fn write_state<W: Write>(writer: &mut Writer<W>, name: &str, value: &Value) -> Result<()> {
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for item in items {
                write_state(writer, name, item)?;
            }
        }
        Value::Object(map) => {
            let name = xml_name(name)?;
            writer.write_event(Event::Start(BytesStart::new(name)))?;
            for (key, nested) in map {
                write_state(writer, key, nested)?;
            }
            writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
        scalar => {
            let name = xml_name(name)?;
            let text = scalar_text(scalar).unwrap_or_default();
            writer.write_event(Event::Start(BytesStart::new(name)))?;
            writer.write_event(Event::Text(BytesText::new(&text)))?;
            writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
    }
    Ok(())
}

/// Pass `name` through when it is an NCName (a name without a colon)
fn xml_name(name: &str) -> Result<&str> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => is_name_start_char(first) && chars.all(is_name_char),
        None => false,
    };
    if valid {
        Ok(name)
    } else {
        Err(Error::InvalidName(name.to_string()))
    }
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9'
            | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}

/// String form of a scalar; `None` for null and composite values
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
