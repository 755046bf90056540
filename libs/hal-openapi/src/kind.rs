//! Semantic kinds that Rust types map onto.
//!
//! Schema generation never inspects types at runtime. Each type states its
//! shape through [`SchemaType`]: primitives and containers are covered here,
//! resource types describe their properties with [`ObjectKind`].
//!
//! ```
//! use halcyon_openapi::{ObjectKind, SchemaKind, SchemaType};
//!
//! struct Customer {
//!     id: u32,
//!     name: Option<String>,
//! }
//!
//! impl SchemaType for Customer {
//!     fn schema_kind() -> SchemaKind {
//!         ObjectKind::of::<Self>()
//!             .property::<u32>("id")
//!             .property::<Option<String>>("name")
//!             .into()
//!     }
//! }
//! ```

use crate::primitives::Primitive;
use halcyon_builder::TypeKey;
use std::collections::{BTreeSet, HashSet, VecDeque};

#[derive(Debug, Clone)]
pub enum SchemaKind {
    Primitive(Primitive),
    Optional(Box<SchemaKind>),
    Array(Box<SchemaKind>),
    Object(ObjectKind),
    /// Never generated; tuples fail with `NotSupported`
    Tuple(Vec<SchemaKind>),
}

impl SchemaKind {
    pub fn optional(inner: SchemaKind) -> Self {
        SchemaKind::Optional(Box::new(inner))
    }

    pub fn array(items: SchemaKind) -> Self {
        SchemaKind::Array(Box::new(items))
    }

    /// The kind with any optional wrappers removed
    pub fn unwrap_optional(&self) -> &SchemaKind {
        match self {
            SchemaKind::Optional(inner) => inner.unwrap_optional(),
            other => other,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            SchemaKind::Primitive(p) => format!("{:?}", p),
            SchemaKind::Optional(inner) => format!("Option<{}>", inner.describe()),
            SchemaKind::Array(items) => format!("[{}]", items.describe()),
            SchemaKind::Object(object) => object.name().to_string(),
            SchemaKind::Tuple(items) => format!(
                "({})",
                items.iter().map(SchemaKind::describe).collect::<Vec<_>>().join(", ")
            ),
        }
    }
}

impl From<Primitive> for SchemaKind {
    fn from(primitive: Primitive) -> Self {
        SchemaKind::Primitive(primitive)
    }
}

impl From<ObjectKind> for SchemaKind {
    fn from(object: ObjectKind) -> Self {
        SchemaKind::Object(object)
    }
}

/// A named property of an object. The kind is resolved lazily so types may
/// refer to themselves.
#[derive(Debug, Clone)]
pub struct PropertyKind {
    pub name: String,
    kind: fn() -> SchemaKind,
}

impl PropertyKind {
    pub fn kind(&self) -> SchemaKind {
        (self.kind)()
    }
}

/// An object type: its identity for registry lookups plus its properties in
/// serialization order
#[derive(Debug, Clone)]
pub struct ObjectKind {
    key: TypeKey,
    properties: Vec<PropertyKind>,
}

impl ObjectKind {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            properties: Vec::new(),
        }
    }

    /// Add a property named as it serializes
    pub fn property<P: SchemaType>(mut self, name: impl Into<String>) -> Self {
        self.properties.push(PropertyKind {
            name: name.into(),
            kind: P::schema_kind,
        });
        self
    }

    pub fn key(&self) -> TypeKey {
        self.key
    }

    pub fn name(&self) -> String {
        self.key.simple_name()
    }

    pub fn properties(&self) -> &[PropertyKind] {
        &self.properties
    }
}

/// Maps a Rust type onto a [`SchemaKind`]
pub trait SchemaType {
    fn schema_kind() -> SchemaKind;
}

macro_rules! primitive_schema_type {
    ($($ty:ty => $primitive:ident),* $(,)?) => {
        $(
            impl SchemaType for $ty {
                fn schema_kind() -> SchemaKind {
                    SchemaKind::Primitive(Primitive::$primitive)
                }
            }
        )*
    };
}

primitive_schema_type! {
    String => String,
    str => String,
    char => Char,
    bool => Bool,
    u8 => U8,
    i8 => I8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    isize => I64,
    usize => U64,
    f32 => F32,
    f64 => F64,
    uuid::Uuid => Uuid,
    std::time::Duration => Duration,
    chrono::Duration => Duration,
    chrono::NaiveDate => Date,
    chrono::NaiveDateTime => DateTime,
    url::Url => Url,
}

impl<Tz: chrono::TimeZone> SchemaType for chrono::DateTime<Tz> {
    fn schema_kind() -> SchemaKind {
        SchemaKind::Primitive(Primitive::DateTime)
    }
}

impl<T: SchemaType + ?Sized> SchemaType for &T {
    fn schema_kind() -> SchemaKind {
        T::schema_kind()
    }
}

impl<T: SchemaType + ?Sized> SchemaType for Box<T> {
    fn schema_kind() -> SchemaKind {
        T::schema_kind()
    }
}

impl<T: SchemaType> SchemaType for Option<T> {
    fn schema_kind() -> SchemaKind {
        SchemaKind::optional(T::schema_kind())
    }
}

macro_rules! array_schema_type {
    ($($container:ty),* $(,)?) => {
        $(
            impl<T: SchemaType> SchemaType for $container {
                fn schema_kind() -> SchemaKind {
                    SchemaKind::array(T::schema_kind())
                }
            }
        )*
    };
}

array_schema_type!(Vec<T>, [T], VecDeque<T>, HashSet<T>, BTreeSet<T>);

impl<T: SchemaType, const N: usize> SchemaType for [T; N] {
    fn schema_kind() -> SchemaKind {
        SchemaKind::array(T::schema_kind())
    }
}

macro_rules! tuple_schema_type {
    ($($name:ident),+) => {
        impl<$($name: SchemaType),+> SchemaType for ($($name,)+) {
            fn schema_kind() -> SchemaKind {
                SchemaKind::Tuple(vec![$($name::schema_kind()),+])
            }
        }
    };
}

tuple_schema_type!(A);
tuple_schema_type!(A, B);
tuple_schema_type!(A, B, C);
tuple_schema_type!(A, B, C, D);
