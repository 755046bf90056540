//! Unit tests for template parsing

use halcyon_uri_template::{Error, Operator, Part, UriTemplate, VarSpec};

fn malformed_at(template: &str) -> usize {
    match UriTemplate::parse(template) {
        Err(Error::MalformedTemplate { position, .. }) => position,
        other => panic!("expected MalformedTemplate for {:?}, got {:?}", template, other),
    }
}

#[test]
fn test_parts_in_order() {
    let template = UriTemplate::parse("/orders/{id}/lines{?page}").unwrap();
    let parts = template.parts();
    assert_eq!(parts.len(), 4);
    assert_eq!(parts[0], Part::Literal("/orders/".into()));
    match &parts[1] {
        Part::Expression(expr) => {
            assert_eq!(expr.operator, Operator::Simple);
            assert_eq!(expr.variables, vec![VarSpec::new("id")]);
        }
        other => panic!("unexpected part {:?}", other),
    }
    assert_eq!(parts[2], Part::Literal("/lines".into()));
    match &parts[3] {
        Part::Expression(expr) => assert_eq!(expr.operator, Operator::Query),
        other => panic!("unexpected part {:?}", other),
    }
}

#[test]
fn test_all_operators_recognised() {
    let cases = [
        ("{var}", Operator::Simple),
        ("{+var}", Operator::Reserved),
        ("{#var}", Operator::Fragment),
        ("{.var}", Operator::Label),
        ("{/var}", Operator::Path),
        ("{;var}", Operator::Parameter),
        ("{?var}", Operator::Query),
        ("{&var}", Operator::QueryContinuation),
    ];
    for (source, operator) in cases {
        let template = UriTemplate::parse(source).unwrap();
        match &template.parts()[0] {
            Part::Expression(expr) => assert_eq!(expr.operator, operator, "{}", source),
            other => panic!("unexpected part {:?}", other),
        }
    }
}

#[test]
fn test_variable_names() {
    let template = UriTemplate::parse("{/a,b:2}{?c*}{&d.e,f%20g}").unwrap();
    let names: Vec<&str> = template.variable_names().collect();
    assert_eq!(names, vec!["a", "b", "c", "d.e", "f%20g"]);
}

#[test]
fn test_literal_template() {
    let template = UriTemplate::parse("/orders").unwrap();
    assert!(template.is_literal());
    assert_eq!(template.variable_names().count(), 0);
    assert!(!UriTemplate::parse("/orders/{id}").unwrap().is_literal());
}

#[test]
fn test_display_and_from_str() {
    let template: UriTemplate = "/orders{?page}".parse().unwrap();
    assert_eq!(template.to_string(), "/orders{?page}");
    assert_eq!(template.as_str(), "/orders{?page}");
    assert_eq!(UriTemplate::try_from("/x").unwrap().as_str(), "/x");
}

#[test]
fn test_malformed_templates() {
    assert_eq!(malformed_at("/orders/{id"), 8);
    assert_eq!(malformed_at("/orders/id}"), 10);
    assert_eq!(malformed_at("{}"), 0);
    assert_eq!(malformed_at("{=var}"), 1);
    assert_eq!(malformed_at("{|var}"), 1);
    assert_eq!(malformed_at("{var-name}"), 4);
    assert_eq!(malformed_at("{a,}"), 3);
    assert_eq!(malformed_at("{var:0}"), 5);
    assert_eq!(malformed_at("{var:10000}"), 5);
    assert_eq!(malformed_at("{var:}"), 5);
    assert_eq!(malformed_at("{a.}"), 2);
    assert_eq!(malformed_at("{%zz}"), 1);
}

#[test]
fn test_prefix_bounds() {
    let template = UriTemplate::parse("{var:9999}").unwrap();
    match &template.parts()[0] {
        Part::Expression(expr) => assert_eq!(expr.variables[0].prefix, Some(9999)),
        other => panic!("unexpected part {:?}", other),
    }
}

#[test]
fn test_required_variables_exclude_query() {
    let template = UriTemplate::parse("/customers/{customerId}/orders{/id}{?page}{&size}").unwrap();
    let required: Vec<&str> = template.required_variable_names().collect();
    assert_eq!(required, vec!["customerId", "id"]);
}
