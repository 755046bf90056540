//! HAL media types

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    HalJson,
    HalXml,
}

impl MediaType {
    pub const HAL_JSON: &'static str = "application/hal+json";
    pub const HAL_XML: &'static str = "application/hal+xml";

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::HalJson => Self::HAL_JSON,
            MediaType::HalXml => Self::HAL_XML,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the media types (parameters such as `charset` are ignored) and
/// the short forms `json` and `xml`
impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let essence = s.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case(Self::HAL_JSON) || essence.eq_ignore_ascii_case("json") {
            Ok(MediaType::HalJson)
        } else if essence.eq_ignore_ascii_case(Self::HAL_XML) || essence.eq_ignore_ascii_case("xml")
        {
            Ok(MediaType::HalXml)
        } else {
            Err(Error::UnsupportedMediaType(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("application/hal+json".parse::<MediaType>().unwrap(), MediaType::HalJson);
        assert_eq!(
            "Application/HAL+XML; charset=utf-8".parse::<MediaType>().unwrap(),
            MediaType::HalXml
        );
        assert_eq!("json".parse::<MediaType>().unwrap(), MediaType::HalJson);
        assert!(matches!(
            "application/json".parse::<MediaType>(),
            Err(Error::UnsupportedMediaType(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(MediaType::HalXml.to_string(), "application/hal+xml");
    }
}
