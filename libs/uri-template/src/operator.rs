//! Expression operators
//!
//! Each operator owns the characters used while joining expanded values
//! (RFC 6570, Appendix A).

/// Operator of a template expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `{var}`
    Simple,
    /// `{+var}`
    Reserved,
    /// `{#var}`
    Fragment,
    /// `{.var}`
    Label,
    /// `{/var}`
    Path,
    /// `{;var}`
    Parameter,
    /// `{?var}`
    Query,
    /// `{&var}`
    QueryContinuation,
}

impl Operator {
    /// Resolve the operator from the first character of an expression.
    ///
    /// Returns `None` for characters that are not operators, in which case
    /// the expression is a simple expansion.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Reserved),
            '#' => Some(Operator::Fragment),
            '.' => Some(Operator::Label),
            '/' => Some(Operator::Path),
            ';' => Some(Operator::Parameter),
            '?' => Some(Operator::Query),
            '&' => Some(Operator::QueryContinuation),
            _ => None,
        }
    }

    /// Operator characters reserved by RFC 6570 for future extensions
    pub fn is_reserved_for_extension(c: char) -> bool {
        matches!(c, '=' | ',' | '!' | '@' | '|')
    }

    /// The character written in the template source
    pub fn symbol(self) -> Option<char> {
        match self {
            Operator::Simple => None,
            Operator::Reserved => Some('+'),
            Operator::Fragment => Some('#'),
            Operator::Label => Some('.'),
            Operator::Path => Some('/'),
            Operator::Parameter => Some(';'),
            Operator::Query => Some('?'),
            Operator::QueryContinuation => Some('&'),
        }
    }

    /// Prefix written before the first defined variable
    pub fn first(self) -> &'static str {
        match self {
            Operator::Simple | Operator::Reserved => "",
            Operator::Fragment => "#",
            Operator::Label => ".",
            Operator::Path => "/",
            Operator::Parameter => ";",
            Operator::Query => "?",
            Operator::QueryContinuation => "&",
        }
    }

    /// Separator written between defined variables and exploded members
    pub fn separator(self) -> &'static str {
        match self {
            Operator::Simple | Operator::Reserved | Operator::Fragment => ",",
            Operator::Label => ".",
            Operator::Path => "/",
            Operator::Parameter => ";",
            Operator::Query | Operator::QueryContinuation => "&",
        }
    }

    /// Whether values are emitted as `name=value` pairs
    pub fn is_named(self) -> bool {
        matches!(
            self,
            Operator::Parameter | Operator::Query | Operator::QueryContinuation
        )
    }

    /// `{?var}` and `{&var}`, whose variables are optional by nature
    pub fn is_query(self) -> bool {
        matches!(self, Operator::Query | Operator::QueryContinuation)
    }

    /// Written after the name when a named value is empty
    pub fn if_empty(self) -> &'static str {
        match self {
            Operator::Query | Operator::QueryContinuation => "=",
            _ => "",
        }
    }

    /// Whether reserved characters pass through unencoded
    pub fn allows_reserved(self) -> bool {
        matches!(self, Operator::Reserved | Operator::Fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_round_trips_symbol() {
        for c in ['+', '#', '.', '/', ';', '?', '&'] {
            let op = Operator::from_char(c).unwrap();
            assert_eq!(op.symbol(), Some(c));
        }
        assert_eq!(Operator::from_char('x'), None);
    }

    #[test]
    fn test_query_operators_are_named() {
        assert!(Operator::Query.is_named());
        assert_eq!(Operator::Query.first(), "?");
        assert_eq!(Operator::Query.separator(), "&");
        assert_eq!(Operator::QueryContinuation.first(), "&");
        assert!(!Operator::Path.is_named());
    }
}
