//! Building descriptions of the sample resources

mod test_support;

use halcyon_builder::{
    BuildOptions, DescriptionBuilder, Error, ResourceDescriptor, ResourceRegistry,
    UnresolvedVariablePolicy,
};
use halcyon_models::EmbeddedKind;
use serde::Serialize;
use serde_json::{json, Value};
use test_support::*;

#[test]
fn test_default_simple_resource() {
    let registry = registry();
    let resource = DescriptionBuilder::new(&registry)
        .build(&SimpleResource::default())
        .unwrap();

    assert_eq!(resource.links().get("self").unwrap().first().href, "/simple/0");
    assert_eq!(resource.state()["id"], json!(0));
    assert_eq!(resource.state()["title"], Value::Null);
    assert_eq!(resource.state()["author"], Value::Null);
    assert_eq!(resource.state_type(), Some("SimpleResource"));
}

#[test]
fn test_assigned_simple_resource() {
    let registry = registry();
    let simple = SimpleResource {
        id: 1234,
        title: Some("Foundation".into()),
        author: Some("Asimov".into()),
    };
    let resource = DescriptionBuilder::new(&registry).build(&simple).unwrap();

    assert_eq!(resource.self_link().unwrap().href, "/simple/1234");
    assert_eq!(resource.state()["id"], json!(1234));
    assert_eq!(resource.state()["title"], json!("Foundation"));
    assert_eq!(resource.state()["author"], json!("Asimov"));
}

#[test]
fn test_order_embeds_single_resources() {
    let registry = registry();
    let resource = DescriptionBuilder::new(&registry).build(&order(1)).unwrap();

    let rels: Vec<_> = resource.links().rels().collect();
    assert_eq!(rels, vec!["self", "basket", "customer"]);
    assert_eq!(resource.links().get("basket").unwrap().first().href, "/baskets/1");

    let basket = resource.embedded_group("basket").unwrap();
    assert_eq!(basket.kind(), EmbeddedKind::Single);
    assert_eq!(basket.resources()[0].self_link().unwrap().href, "/baskets/97");
    assert_eq!(basket.resources()[0].state()["number_of_items"], json!(2));

    let customer = resource.embedded_group("customer").unwrap();
    assert_eq!(customer.resources()[0].self_link().unwrap().href, "/customers/12");

    let keys: Vec<_> = resource.state().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["id", "currency", "status", "total"]);
}

#[test]
fn test_null_embedded_property_is_omitted() {
    let registry = registry();
    let mut without_basket = order(2);
    without_basket.basket = None;

    let resource = DescriptionBuilder::new(&registry).build(&without_basket).unwrap();
    assert!(resource.embedded_group("basket").is_none());
    assert!(resource.embedded_group("customer").is_some());
    assert!(!resource.state().contains_key("basket"));
}

#[test]
fn test_collection_root_embeds_items() {
    let registry = registry();
    let orders = Orders(vec![order(1), order(2)]);
    let resource = DescriptionBuilder::new(&registry).build(&orders).unwrap();

    assert_eq!(resource.self_link().unwrap().href, "/orders");
    assert_eq!(resource.links().get("next").unwrap().first().href, "/orders");

    let find = resource.links().get("find").unwrap().first();
    assert_eq!(find.href, "/orders/{id}");
    assert!(find.templated);

    let group = resource.embedded_group("orders").unwrap();
    assert_eq!(group.kind(), EmbeddedKind::Collection);
    let hrefs: Vec<_> = group
        .resources()
        .iter()
        .map(|r| r.self_link().unwrap().href.clone())
        .collect();
    assert_eq!(hrefs, vec!["/orders/1", "/orders/2"]);
    assert!(group.resources()[0].embedded_group("basket").is_some());
    assert_eq!(resource.self_relation_name(), "orders");
}

#[test]
fn test_empty_collection_has_no_embedded_group() {
    let registry = registry();
    let resource = DescriptionBuilder::new(&registry)
        .build(&Orders(Vec::new()))
        .unwrap();
    assert!(resource.embedded().is_empty());
    assert_eq!(resource.links().len(), 3);
}

#[derive(Serialize)]
struct CustomerOrder {
    id: u32,
    customer_id: Option<u32>,
}

fn customer_order_registry() -> ResourceRegistry {
    ResourceRegistry::new()
        .with(
            ResourceDescriptor::new::<CustomerOrder>()
                .link("self", "/orders/{id}")
                .link("owner", "/customers/{customer_id}/orders/{id}")
                .link("related", "/customers/{missing}"),
        )
        .unwrap()
}

#[test]
fn test_unresolved_variable_omits_link_by_default() {
    let registry = customer_order_registry();
    let resource = DescriptionBuilder::new(&registry)
        .build(&CustomerOrder {
            id: 3,
            customer_id: None,
        })
        .unwrap();

    // Null is defined-but-empty, absent is unresolved
    assert_eq!(resource.links().get("owner").unwrap().first().href, "/customers//orders/3");
    assert!(resource.links().get("related").is_none());
    assert!(resource.links().contains("self"));
}

#[test]
fn test_unresolved_variable_fail_policy() {
    let registry = customer_order_registry();
    let builder = DescriptionBuilder::with_options(
        &registry,
        BuildOptions::default().with_unresolved_variables(UnresolvedVariablePolicy::Fail),
    );
    let err = builder
        .build(&CustomerOrder {
            id: 3,
            customer_id: Some(5),
        })
        .unwrap_err();
    match err {
        Error::UnresolvedVariable { rel, variable } => {
            assert_eq!(rel, "related");
            assert_eq!(variable, "missing");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_unresolved_variable_partial_policy() {
    let registry = customer_order_registry();
    let builder = DescriptionBuilder::with_options(
        &registry,
        BuildOptions::default().with_unresolved_variables(UnresolvedVariablePolicy::Partial),
    );
    let resource = builder
        .build(&CustomerOrder {
            id: 3,
            customer_id: Some(5),
        })
        .unwrap();
    assert_eq!(resource.links().get("related").unwrap().first().href, "/customers/");
}

#[derive(Serialize)]
struct Auditable;

#[derive(Serialize)]
struct Invoice {
    id: u32,
    lines: Vec<Line>,
}

#[derive(Serialize)]
struct Line {
    sku: String,
}

#[test]
fn test_inherited_duplicate_rel_becomes_additional_value() {
    let registry = ResourceRegistry::new()
        .with(
            ResourceDescriptor::new::<Auditable>()
                .link("self", "/audit/invoices/{id}")
                .link("history", "/history/{id}"),
        )
        .unwrap()
        .with(
            ResourceDescriptor::new::<Invoice>()
                .link("self", "/invoices/{id}")
                .inherits::<Auditable>()
                .embed_property::<Line>("lines", "lines"),
        )
        .unwrap();

    let invoice = Invoice {
        id: 8,
        lines: vec![Line { sku: "A-1".into() }],
    };
    let resource = DescriptionBuilder::new(&registry).build(&invoice).unwrap();

    let self_values: Vec<_> = resource
        .links()
        .get("self")
        .unwrap()
        .iter()
        .map(|v| v.href.as_str())
        .collect();
    assert_eq!(self_values, vec!["/invoices/8", "/audit/invoices/8"]);
    assert_eq!(resource.links().rels().collect::<Vec<_>>(), vec!["self", "history"]);

    // One-element collection keeps its collection kind
    let lines = resource.embedded_group("lines").unwrap();
    assert_eq!(lines.kind(), EmbeddedKind::Collection);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines.resources()[0].state()["sku"], json!("A-1"));
    assert_eq!(lines.resources()[0].self_relation_name(), "line");
}
