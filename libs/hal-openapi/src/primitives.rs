//! Schemas for primitive and well-known types

use crate::schema::Schema;
use serde_json::{json, Number};

/// Primitive and well-known value types with a fixed schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Char,
    Bool,
    U8,
    I8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    Uuid,
    Duration,
    Date,
    DateTime,
    Url,
}

impl Primitive {
    pub fn schema(self) -> Schema {
        match self {
            Primitive::String => Schema::typed("string").with_default(json!("string")),
            Primitive::Char => {
                let mut schema = Schema::typed("string").with_default(json!("A"));
                schema.min_length = Some(1);
                schema.max_length = Some(1);
                schema
            }
            Primitive::Bool => Schema::typed("boolean").with_default(json!(false)),
            Primitive::U8 => integer("int32", Some(u8::MIN.into()), Some(u8::MAX.into())),
            Primitive::I8 => integer("int32", Some(i8::MIN.into()), Some(i8::MAX.into())),
            Primitive::I16 => integer("int32", Some(i16::MIN.into()), Some(i16::MAX.into())),
            Primitive::U16 => integer("int32", Some(u16::MIN.into()), Some(u16::MAX.into())),
            Primitive::I32 => integer("int32", None, None),
            // int32 cannot hold the upper half of u32
            Primitive::U32 => integer("int64", Some(0u32.into()), Some(u32::MAX.into())),
            Primitive::I64 => integer("int64", None, None),
            Primitive::U64 => integer("int64", Some(0u64.into()), None),
            Primitive::F32 => Schema::typed("number")
                .with_format("float")
                .with_default(json!(0)),
            Primitive::F64 => Schema::typed("number")
                .with_format("double")
                .with_default(json!(0)),
            Primitive::Uuid => Schema::typed("string")
                .with_format("uuid")
                .with_example(json!(uuid::Uuid::new_v4().to_string())),
            Primitive::Duration => Schema::typed("string")
                .with_format("time")
                .with_example(json!("00:00:00")),
            Primitive::Date => Schema::typed("string")
                .with_format("date")
                .with_example(json!(chrono::Utc::now().date_naive().to_string())),
            Primitive::DateTime => Schema::typed("string")
                .with_format("date-time")
                .with_example(json!(chrono::Utc::now().to_rfc3339())),
            Primitive::Url => Schema::typed("string")
                .with_format("uri")
                .with_example(json!("/")),
        }
    }
}

fn integer(format: &str, minimum: Option<Number>, maximum: Option<Number>) -> Schema {
    let mut schema = Schema::typed("integer")
        .with_format(format)
        .with_default(json!(0));
    schema.minimum = minimum;
    schema.maximum = maximum;
    schema
}
