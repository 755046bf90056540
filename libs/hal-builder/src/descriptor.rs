//! Resource descriptors
//!
//! A [`ResourceDescriptor`] declares, for one Rust type, the links rendered
//! with each instance and which serialized properties become embedded
//! resources. Descriptors are plain data; templates are parsed when the
//! descriptor is registered.

use halcyon_models::{EmbeddedKind, LinkValue};
use std::any::TypeId;
use std::fmt;

/// Identity of a described type
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name
    pub fn type_name(&self) -> &'static str {
        self.name
    }

    /// Type name without its module path; generic arguments are kept
    pub fn simple_name(&self) -> String {
        simple_type_name(self.name)
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl std::hash::Hash for TypeKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeKey").field(&self.name).finish()
    }
}

/// `shop::model::Order` -> `Order`, `alloc::vec::Vec<shop::Order>` -> `Vec<shop::Order>`
pub fn simple_type_name(full: &str) -> String {
    let (head, generics) = match full.find('<') {
        Some(idx) => full.split_at(idx),
        None => (full, ""),
    };
    let simple = head.rsplit("::").next().unwrap_or(head);
    format!("{}{}", simple, generics)
}

/// A link attached to every instance of a type
#[derive(Debug, Clone, PartialEq)]
pub struct LinkDeclaration {
    pub rel: String,
    /// URI Template expanded against the instance
    pub href: String,
    /// Emit `href` unexpanded and flag the link as templated
    pub templated: bool,
    pub name: Option<String>,
    pub media_type: Option<String>,
    pub deprecation: Option<String>,
    pub profile: Option<String>,
    pub title: Option<String>,
    pub href_lang: Option<String>,
}

impl LinkDeclaration {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            templated: false,
            name: None,
            media_type: None,
            deprecation: None,
            profile: None,
            title: None,
            href_lang: None,
        }
    }

    pub fn templated(mut self, templated: bool) -> Self {
        self.templated = templated;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    pub fn with_deprecation(mut self, deprecation: impl Into<String>) -> Self {
        self.deprecation = Some(deprecation.into());
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_href_lang(mut self, href_lang: impl Into<String>) -> Self {
        self.href_lang = Some(href_lang.into());
        self
    }

    /// Link value carrying this declaration's metadata
    pub fn to_link_value(&self, href: String) -> LinkValue {
        LinkValue {
            href,
            name: self.name.clone(),
            templated: self.templated,
            media_type: self.media_type.clone(),
            deprecation: self.deprecation.clone(),
            profile: self.profile.clone(),
            title: self.title.clone(),
            href_lang: self.href_lang.clone(),
            properties: Default::default(),
        }
    }
}

/// Where embedded resources come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedSource {
    /// The elements of a value that serializes to an array
    Items,
    /// A named property of the serialized value
    Property(String),
}

/// An embedded group declared on a type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedDeclaration {
    /// Group name under `_embedded`
    pub name: String,
    pub source: EmbedSource,
    /// Requested kind; array values always produce collections
    pub kind: EmbeddedKind,
    /// Type of the embedded values
    pub item_type: Option<TypeKey>,
}

impl EmbedDeclaration {
    pub fn property(&self) -> Option<&str> {
        match &self.source {
            EmbedSource::Property(property) => Some(property),
            EmbedSource::Items => None,
        }
    }
}

/// Everything declared for one type.
///
/// ```
/// use halcyon_builder::ResourceDescriptor;
///
/// #[derive(serde::Serialize)]
/// struct Basket { id: u32 }
///
/// #[derive(serde::Serialize)]
/// struct Order { id: u32, basket: Option<Basket> }
///
/// let descriptor = ResourceDescriptor::new::<Order>()
///     .link("self", "/orders/{id}")
///     .templated_link("find", "/orders/{id}")
///     .embed_single::<Basket>("basket", "basket");
/// assert_eq!(descriptor.links().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ResourceDescriptor {
    key: TypeKey,
    name: String,
    links: Vec<LinkDeclaration>,
    embeds: Vec<EmbedDeclaration>,
    documented_rels: Vec<String>,
    bases: Vec<TypeKey>,
}

impl ResourceDescriptor {
    pub fn new<T: ?Sized + 'static>() -> Self {
        let key = TypeKey::of::<T>();
        Self {
            name: key.simple_name(),
            key,
            links: Vec::new(),
            embeds: Vec::new(),
            documented_rels: Vec::new(),
            bases: Vec::new(),
        }
    }

    /// Override the name used for the self relation and schema titles
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Link whose template is expanded against each instance
    pub fn link(self, rel: impl Into<String>, template: impl Into<String>) -> Self {
        self.link_with(LinkDeclaration::new(rel, template))
    }

    /// Link rendered with its unexpanded template and `templated: true`
    pub fn templated_link(self, rel: impl Into<String>, template: impl Into<String>) -> Self {
        self.link_with(LinkDeclaration::new(rel, template).templated(true))
    }

    pub fn link_with(mut self, declaration: LinkDeclaration) -> Self {
        self.links.push(declaration);
        self
    }

    /// Embed every element of a value that serializes to an array
    pub fn embed_items<T: ?Sized + 'static>(mut self, name: impl Into<String>) -> Self {
        self.embeds.push(EmbedDeclaration {
            name: name.into(),
            source: EmbedSource::Items,
            kind: EmbeddedKind::Collection,
            item_type: Some(TypeKey::of::<T>()),
        });
        self
    }

    /// Embed a property as a collection (a scalar value becomes a
    /// one-element collection)
    pub fn embed_property<T: ?Sized + 'static>(
        mut self,
        property: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.embeds.push(EmbedDeclaration {
            name: name.into(),
            source: EmbedSource::Property(property.into()),
            kind: EmbeddedKind::Collection,
            item_type: Some(TypeKey::of::<T>()),
        });
        self
    }

    /// Embed a property as a single nested resource
    pub fn embed_single<T: ?Sized + 'static>(
        mut self,
        property: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.embeds.push(EmbedDeclaration {
            name: name.into(),
            source: EmbedSource::Property(property.into()),
            kind: EmbeddedKind::Single,
            item_type: Some(TypeKey::of::<T>()),
        });
        self
    }

    /// Include the links and embeds declared for `Base` after this type's own
    pub fn inherits<Base: ?Sized + 'static>(mut self) -> Self {
        self.bases.push(TypeKey::of::<Base>());
        self
    }

    /// Relation documented in schemas without a link declaration
    pub fn documents(mut self, rel: impl Into<String>) -> Self {
        self.documented_rels.push(rel.into());
        self
    }

    pub fn key(&self) -> TypeKey {
        self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn links(&self) -> &[LinkDeclaration] {
        &self.links
    }

    pub fn embeds(&self) -> &[EmbedDeclaration] {
        &self.embeds
    }

    pub fn documented_rels(&self) -> &[String] {
        &self.documented_rels
    }

    pub fn bases(&self) -> &[TypeKey] {
        &self.bases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ViewModel;

    #[test]
    fn test_simple_type_name() {
        assert_eq!(simple_type_name("shop::model::Order"), "Order");
        assert_eq!(simple_type_name("Order"), "Order");
        assert_eq!(
            simple_type_name("alloc::vec::Vec<shop::Order>"),
            "Vec<shop::Order>"
        );
    }

    #[test]
    fn test_type_key_identity() {
        assert_eq!(TypeKey::of::<ViewModel>(), TypeKey::of::<ViewModel>());
        assert_ne!(TypeKey::of::<ViewModel>(), TypeKey::of::<u8>());
        assert_eq!(TypeKey::of::<ViewModel>().simple_name(), "ViewModel");
    }

    #[test]
    fn test_declaration_metadata_is_copied() {
        let value = LinkDeclaration::new("find", "/orders/{id}")
            .templated(true)
            .with_title("Find")
            .to_link_value("/orders/{id}".into());
        assert!(value.templated);
        assert_eq!(value.title.as_deref(), Some("Find"));
    }
}
