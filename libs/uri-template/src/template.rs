//! Parsed template structure

use crate::error::{Error, Result};
use crate::expand::{self, Expansion};
use crate::operator::Operator;
use crate::parser::Parser;
use crate::value::VarSource;
use std::fmt;
use std::str::FromStr;

/// A variable reference inside an expression, e.g. `list*` or `name:3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarSpec {
    pub name: String,
    /// Maximum number of characters kept from a string value
    pub prefix: Option<u16>,
    pub explode: bool,
}

impl VarSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: None,
            explode: false,
        }
    }
}

/// A `{...}` expression: operator plus ordered variable list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub operator: Operator,
    pub variables: Vec<VarSpec>,
}

/// One piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Literal(String),
    Expression(Expression),
}

/// A parsed URI Template.
///
/// Parsing happens once; expansion is a pure function of the template and a
/// value source, so one instance can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate {
    source: String,
    parts: Vec<Part>,
}

impl UriTemplate {
    /// Parse a template string
    pub fn parse(template: &str) -> Result<Self> {
        let parts = Parser::new(template).parse()?;
        Ok(Self {
            source: template.to_string(),
            parts,
        })
    }

    /// The original, unexpanded template string
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// True when the template contains no expressions
    pub fn is_literal(&self) -> bool {
        self.parts.iter().all(|p| matches!(p, Part::Literal(_)))
    }

    /// Names of every referenced variable, in order of appearance
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Expression(expr) => Some(expr),
                Part::Literal(_) => None,
            })
            .flat_map(|expr| expr.variables.iter())
            .map(|v| v.name.as_str())
    }

    /// Names of variables outside query expressions. A link built from this
    /// template is incomplete when one of these is missing.
    pub fn required_variable_names(&self) -> impl Iterator<Item = &str> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Expression(expr) if !expr.operator.is_query() => Some(expr),
                _ => None,
            })
            .flat_map(|expr| expr.variables.iter())
            .map(|v| v.name.as_str())
    }

    /// Expand against a value source. Variables that are absent or undefined
    /// contribute nothing.
    pub fn expand<S: VarSource + ?Sized>(&self, source: &S) -> String {
        self.expand_with_report(source).href
    }

    /// Expand, failing on the first variable the source does not know about.
    ///
    /// Variables that are present but undefined (null, empty list, empty map)
    /// are not errors.
    pub fn expand_strict<S: VarSource + ?Sized>(&self, source: &S) -> Result<String> {
        let expansion = self.expand_with_report(source);
        match expansion.missing.into_iter().next() {
            Some(name) => Err(Error::UnresolvedVariable(name)),
            None => Ok(expansion.href),
        }
    }

    /// Expand and report which variables were absent from the source
    pub fn expand_with_report<S: VarSource + ?Sized>(&self, source: &S) -> Expansion {
        expand::expand(self, source)
    }
}

impl FromStr for UriTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        UriTemplate::parse(s)
    }
}

impl fmt::Display for UriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl TryFrom<&str> for UriTemplate {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        UriTemplate::parse(value)
    }
}
