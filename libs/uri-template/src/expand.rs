//! Template expansion (RFC 6570 §3.2)

use crate::encode::{push_encoded, truncate};
use crate::operator::Operator;
use crate::template::{Expression, Part, UriTemplate, VarSpec};
use crate::value::{TemplateValue, VarSource};

/// Result of an expansion together with the variables the source lacked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub href: String,
    /// Variables absent from the source, in template order
    pub missing: Vec<String>,
}

impl Expansion {
    /// True when every referenced variable was known to the source
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

pub(crate) fn expand<S: VarSource + ?Sized>(template: &UriTemplate, source: &S) -> Expansion {
    let mut href = String::with_capacity(template.as_str().len());
    let mut missing = Vec::new();

    for part in template.parts() {
        match part {
            Part::Literal(text) => href.push_str(text),
            Part::Expression(expr) => expand_expression(expr, source, &mut href, &mut missing),
        }
    }

    tracing::trace!(
        template = template.as_str(),
        href = href.as_str(),
        missing = missing.len(),
        "expanded URI template"
    );

    Expansion { href, missing }
}

fn expand_expression<S: VarSource + ?Sized>(
    expr: &Expression,
    source: &S,
    out: &mut String,
    missing: &mut Vec<String>,
) {
    let op = expr.operator;
    let mut emitted = false;

    for var in &expr.variables {
        let value = match source.lookup(&var.name) {
            Some(value) => value,
            None => {
                missing.push(var.name.clone());
                continue;
            }
        };
        if value.is_undefined() {
            continue;
        }

        out.push_str(if emitted { op.separator() } else { op.first() });
        emitted = true;

        match value {
            TemplateValue::Undefined => {}
            TemplateValue::Scalar(text) => push_scalar(out, op, var, &text),
            TemplateValue::List(items) if var.explode => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(op.separator());
                    }
                    push_named_item(out, op, &var.name, item);
                }
            }
            TemplateValue::List(items) => {
                push_name_prefix(out, op, &var.name);
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    push_encoded(out, item, op.allows_reserved());
                }
            }
            TemplateValue::Assoc(pairs) if var.explode => {
                for (i, (key, val)) in pairs.iter().enumerate() {
                    if i > 0 {
                        out.push_str(op.separator());
                    }
                    push_encoded(out, key, op.allows_reserved());
                    if op.is_named() && val.is_empty() {
                        out.push_str(op.if_empty());
                    } else {
                        out.push('=');
                        push_encoded(out, val, op.allows_reserved());
                    }
                }
            }
            TemplateValue::Assoc(pairs) => {
                push_name_prefix(out, op, &var.name);
                for (i, (key, val)) in pairs.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    push_encoded(out, key, op.allows_reserved());
                    out.push(',');
                    push_encoded(out, val, op.allows_reserved());
                }
            }
        }
    }
}

fn push_scalar(out: &mut String, op: Operator, var: &VarSpec, text: &str) {
    let text = match var.prefix {
        Some(max) => truncate(text, usize::from(max)),
        None => text,
    };
    if op.is_named() {
        out.push_str(&var.name);
        if text.is_empty() {
            out.push_str(op.if_empty());
            return;
        }
        out.push('=');
    }
    push_encoded(out, text, op.allows_reserved());
}

/// One member of an exploded list: `name=value` for named operators
fn push_named_item(out: &mut String, op: Operator, name: &str, item: &str) {
    if op.is_named() {
        out.push_str(name);
        if item.is_empty() {
            out.push_str(op.if_empty());
            return;
        }
        out.push('=');
    }
    push_encoded(out, item, op.allows_reserved());
}

/// `name=` ahead of a non-exploded composite value
fn push_name_prefix(out: &mut String, op: Operator, name: &str) {
    if op.is_named() {
        out.push_str(name);
        out.push('=');
    }
}
