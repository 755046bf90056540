//! Sample resources shared by the builder tests

#![allow(dead_code)]

use halcyon_builder::{ResourceDescriptor, ResourceRegistry};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SimpleResource {
    pub id: u32,
    pub title: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Basket {
    pub id: u32,
    pub number_of_items: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Customer {
    pub id: u32,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Order {
    pub id: u32,
    pub basket: Option<Basket>,
    pub customer: Option<Customer>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub total: f64,
}

/// Serializes to an array of orders
#[derive(Debug, Clone, Default, Serialize)]
pub struct Orders(pub Vec<Order>);

pub fn order(id: u32) -> Order {
    Order {
        id,
        basket: Some(Basket {
            id: 97,
            number_of_items: 2,
        }),
        customer: Some(Customer {
            id: 12,
            name: Some("Ada".into()),
        }),
        currency: Some("EUR".into()),
        status: Some("shipped".into()),
        total: 30.0,
    }
}

pub fn registry() -> ResourceRegistry {
    ResourceRegistry::new()
        .with(ResourceDescriptor::new::<SimpleResource>().link("self", "/simple/{id}"))
        .unwrap()
        .with(ResourceDescriptor::new::<Basket>().link("self", "/baskets/{id}"))
        .unwrap()
        .with(ResourceDescriptor::new::<Customer>().link("self", "/customers/{id}"))
        .unwrap()
        .with(
            ResourceDescriptor::new::<Order>()
                .link("self", "/orders/{id}")
                .link("basket", "/baskets/{id}")
                .link("customer", "/customers/{id}")
                .embed_single::<Basket>("basket", "basket")
                .embed_single::<Customer>("customer", "customer"),
        )
        .unwrap()
        .with(
            ResourceDescriptor::new::<Orders>()
                .link("self", "/orders")
                .link("next", "/orders{?page}")
                .templated_link("find", "/orders/{id}")
                .embed_items::<Order>("orders"),
        )
        .unwrap()
}
