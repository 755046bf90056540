//! URI Template parser
//!
//! Single pass over the template characters. Literal text is accumulated
//! until an opening brace, then the expression grammar is read:
//!
//! ```text
//! expression    =  "{" [ operator ] variable-list "}"
//! variable-list =  varspec *( "," varspec )
//! varspec       =  varname [ modifier-level4 ]
//! varname       =  varchar *( ["."] varchar )
//! modifier      =  ":" max-length / "*"
//! ```

use crate::error::{Error, Result};
use crate::operator::Operator;
use crate::template::{Expression, Part, VarSpec};

/// Longest prefix modifier allowed by RFC 6570
const MAX_PREFIX: u16 = 9999;

/// Parser for URI Templates
pub struct Parser {
    chars: Vec<char>,
    position: usize,
    current_char: Option<char>,
}

impl Parser {
    /// Create a new parser for the given template
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let current_char = chars.first().copied();

        Self {
            chars,
            position: 0,
            current_char,
        }
    }

    /// Advance to the next character
    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.chars.get(self.position).copied();
    }

    /// Look `offset` characters ahead without advancing
    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.position + offset).copied()
    }

    /// Parse the whole template into parts
    pub fn parse(mut self) -> Result<Vec<Part>> {
        let mut parts = Vec::new();
        let mut literal = String::new();

        while let Some(c) = self.current_char {
            match c {
                '{' => {
                    if !literal.is_empty() {
                        parts.push(Part::Literal(std::mem::take(&mut literal)));
                    }
                    parts.push(Part::Expression(self.read_expression()?));
                }
                '}' => {
                    return Err(Error::malformed(self.position, "unmatched '}'"));
                }
                other => {
                    literal.push(other);
                    self.advance();
                }
            }
        }

        if !literal.is_empty() {
            parts.push(Part::Literal(literal));
        }

        Ok(parts)
    }

    /// Read a `{...}` expression; the current character is the opening brace
    fn read_expression(&mut self) -> Result<Expression> {
        let start = self.position;
        self.advance(); // Skip '{'

        let operator = match self.current_char {
            None => return Err(Error::malformed(start, "unterminated expression")),
            Some('}') => return Err(Error::malformed(start, "empty expression")),
            Some(c) if Operator::is_reserved_for_extension(c) => {
                return Err(Error::malformed(
                    self.position,
                    format!("operator '{}' is reserved", c),
                ));
            }
            Some(c) => match Operator::from_char(c) {
                Some(op) => {
                    self.advance();
                    op
                }
                None => Operator::Simple,
            },
        };

        let mut variables = Vec::new();
        loop {
            variables.push(self.read_varspec(start)?);

            match self.current_char {
                Some(',') => self.advance(),
                Some('}') => {
                    self.advance();
                    break;
                }
                None => return Err(Error::malformed(start, "unterminated expression")),
                Some(other) => {
                    return Err(Error::malformed(
                        self.position,
                        format!("unexpected character '{}' in expression", other),
                    ));
                }
            }
        }

        Ok(Expression {
            operator,
            variables,
        })
    }

    fn read_varspec(&mut self, start: usize) -> Result<VarSpec> {
        let mut spec = VarSpec::new(self.read_varname(start)?);

        match self.current_char {
            Some(':') => {
                self.advance();
                spec.prefix = Some(self.read_prefix()?);
            }
            Some('*') => {
                self.advance();
                spec.explode = true;
            }
            _ => {}
        }

        Ok(spec)
    }

    fn read_varname(&mut self, start: usize) -> Result<String> {
        let begin = self.position;
        let mut name = String::new();

        while let Some(c) = self.current_char {
            if c.is_ascii_alphanumeric() || c == '_' {
                name.push(c);
                self.advance();
            } else if c == '.' && !name.is_empty() && !name.ends_with('.') {
                name.push(c);
                self.advance();
            } else if c == '%' {
                let (Some(h1), Some(h2)) = (self.peek_at(1), self.peek_at(2)) else {
                    return Err(Error::malformed(self.position, "incomplete pct-encoding"));
                };
                if !h1.is_ascii_hexdigit() || !h2.is_ascii_hexdigit() {
                    return Err(Error::malformed(self.position, "invalid pct-encoding"));
                }
                name.push('%');
                name.push(h1);
                name.push(h2);
                self.advance();
                self.advance();
                self.advance();
            } else {
                break;
            }
        }

        if name.is_empty() {
            return Err(match self.current_char {
                None => Error::malformed(start, "unterminated expression"),
                Some(c) => Error::malformed(begin, format!("expected variable name, found '{}'", c)),
            });
        }

        if name.ends_with('.') {
            return Err(Error::malformed(
                self.position - 1,
                "variable name cannot end with '.'",
            ));
        }

        Ok(name)
    }

    fn read_prefix(&mut self) -> Result<u16> {
        let begin = self.position;
        let mut digits = String::new();

        while let Some(c) = self.current_char {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.advance();
        }

        if digits.is_empty() {
            return Err(Error::malformed(begin, "prefix modifier requires a length"));
        }
        if digits.starts_with('0') {
            return Err(Error::malformed(begin, "prefix length must start with 1-9"));
        }

        match digits.parse::<u16>() {
            Ok(len) if len <= MAX_PREFIX => Ok(len),
            _ => Err(Error::malformed(
                begin,
                format!("prefix length must be at most {}", MAX_PREFIX),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Vec<Part>> {
        Parser::new(input).parse()
    }

    #[test]
    fn test_literal_only() {
        let parts = parse("/orders").unwrap();
        assert_eq!(parts, vec![Part::Literal("/orders".into())]);
    }

    #[test]
    fn test_operator_and_modifiers() {
        let parts = parse("{?list*,var:3}").unwrap();
        let Part::Expression(expr) = &parts[0] else {
            panic!("expected expression");
        };
        assert_eq!(expr.operator, Operator::Query);
        assert!(expr.variables[0].explode);
        assert_eq!(expr.variables[1].prefix, Some(3));
    }

    #[test]
    fn test_unterminated_expression_fails() {
        let err = parse("/orders/{id").unwrap_err();
        assert_eq!(
            err,
            Error::MalformedTemplate {
                position: 8,
                reason: "unterminated expression".into()
            }
        );
    }
}
