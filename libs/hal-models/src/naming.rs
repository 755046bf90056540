//! Property naming policies
//!
//! Renderers and the schema generator pass state and extension keys through a
//! [`NamingPolicy`]. Relation names and embedded group names are never
//! converted.

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};
use serde::{Deserialize, Serialize};

/// Converts a property name for output
pub trait NamingPolicy {
    fn convert_name(&self, name: &str) -> String;
}

impl<F> NamingPolicy for F
where
    F: Fn(&str) -> String,
{
    fn convert_name(&self, name: &str) -> String {
        self(name)
    }
}

/// Built-in naming conventions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamingConvention {
    /// Keep names as they are
    None,
    #[default]
    CamelCase,
    SnakeCase,
    PascalCase,
    KebabCase,
}

impl NamingPolicy for NamingConvention {
    fn convert_name(&self, name: &str) -> String {
        match self {
            NamingConvention::None => name.to_string(),
            NamingConvention::CamelCase => name.to_lower_camel_case(),
            NamingConvention::SnakeCase => name.to_snake_case(),
            NamingConvention::PascalCase => name.to_upper_camel_case(),
            NamingConvention::KebabCase => name.to_kebab_case(),
        }
    }
}

/// Leaves names untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl NamingPolicy for Verbatim {
    fn convert_name(&self, name: &str) -> String {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conventions() {
        assert_eq!(NamingConvention::CamelCase.convert_name("order_id"), "orderId");
        assert_eq!(NamingConvention::CamelCase.convert_name("OrderId"), "orderId");
        assert_eq!(NamingConvention::SnakeCase.convert_name("orderId"), "order_id");
        assert_eq!(NamingConvention::PascalCase.convert_name("order_id"), "OrderId");
        assert_eq!(NamingConvention::KebabCase.convert_name("orderId"), "order-id");
        assert_eq!(NamingConvention::None.convert_name("order_id"), "order_id");
    }

    #[test]
    fn test_closure_policy() {
        let upper = |name: &str| name.to_uppercase();
        assert_eq!(upper.convert_name("id"), "ID");
    }

    #[test]
    fn test_convention_serde_names() {
        let parsed: NamingConvention = serde_json::from_str("\"snakeCase\"").unwrap();
        assert_eq!(parsed, NamingConvention::SnakeCase);
        assert_eq!(
            serde_json::to_string(&NamingConvention::None).unwrap(),
            "\"none\""
        );
    }
}
