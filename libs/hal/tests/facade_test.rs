use halcyon::builder::UnresolvedVariablePolicy;
use halcyon::{
    Error, Hal, HalConfig, MediaType, ObjectKind, ResourceDescriptor, ResourceRegistry, SchemaKind,
    SchemaType,
};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
struct CustomerViewModel {
    id: u32,
    first_name: String,
    account_id: Option<u32>,
}

impl SchemaType for CustomerViewModel {
    fn schema_kind() -> SchemaKind {
        ObjectKind::of::<Self>()
            .property::<u32>("id")
            .property::<String>("first_name")
            .property::<Option<u32>>("account_id")
            .into()
    }
}

fn registry() -> ResourceRegistry {
    ResourceRegistry::new()
        .with(
            ResourceDescriptor::new::<CustomerViewModel>()
                .link("self", "/customers/{id}")
                .link("account", "/accounts/{account_id}"),
        )
        .unwrap()
}

fn customer(account_id: Option<u32>) -> CustomerViewModel {
    CustomerViewModel {
        id: 7,
        first_name: "Ada".into(),
        account_id,
    }
}

#[test]
fn test_render_both_media_types() {
    let hal = Hal::new(registry());

    let json: Value =
        serde_json::from_str(&hal.render(&customer(Some(3)), MediaType::HalJson).unwrap()).unwrap();
    assert_eq!(
        json,
        json!({
            "_links": {
                "self": { "href": "/customers/7" },
                "account": { "href": "/accounts/3" }
            },
            "id": 7,
            "firstName": "Ada",
            "accountId": 3
        })
    );

    let xml = hal.render(&customer(Some(3)), MediaType::HalXml).unwrap();
    assert!(xml.starts_with(r#"<resource rel="customer" href="/customers/7"><link rel="account" href="/accounts/3"/>"#));
}

#[test]
fn test_null_variable_is_present() {
    let hal = Hal::new(registry());
    let description = hal.describe(&customer(None)).unwrap();
    assert_eq!(description.links().get("account").unwrap().first().href, "/accounts/");
}

#[test]
fn test_config_drives_every_stage() {
    let config = HalConfig::from_yaml_str(
        r#"
naming: snakeCase
json:
  pretty: true
xml:
  naming: pascalCase
"#,
    )
    .unwrap();
    let hal = Hal::with_config(registry(), &config).unwrap();

    let json = hal.render(&customer(Some(1)), MediaType::HalJson).unwrap();
    assert!(json.contains('\n'));
    assert!(json.contains("\"first_name\""));

    let xml = hal.render(&customer(Some(1)), MediaType::HalXml).unwrap();
    assert!(xml.contains("<FirstName>Ada</FirstName>"));

    let schema = hal.schema::<CustomerViewModel>().unwrap();
    assert!(schema.property("account_id").unwrap().nullable);
}

#[test]
fn test_unresolved_policy_from_config() {
    #[derive(Serialize)]
    struct Invoice {
        number: u32,
    }

    let registry = ResourceRegistry::new()
        .with(ResourceDescriptor::new::<Invoice>().link("customer", "/customers/{customer_id}"))
        .unwrap();
    let config = HalConfig::from_yaml_str("build:\n  unresolvedVariables: fail\n").unwrap();
    assert_eq!(
        config.compile().unwrap().build.unresolved_variables,
        UnresolvedVariablePolicy::Fail
    );

    let hal = Hal::with_config(registry, &config).unwrap();
    let err = hal.render(&Invoice { number: 1 }, MediaType::HalJson).unwrap_err();
    assert!(matches!(
        err,
        Error::Build(halcyon::builder::Error::UnresolvedVariable { ref variable, .. }) if variable == "customer_id"
    ));
}

#[test]
fn test_write_matches_render() {
    let hal = Hal::new(registry());
    let mut buffer = Vec::new();
    hal.write(&customer(Some(2)), MediaType::HalXml, &mut buffer)
        .unwrap();
    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        hal.render(&customer(Some(2)), MediaType::HalXml).unwrap()
    );
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = HalConfig::from_yaml_str("build:\n  maxDepth: 0\n").unwrap();
    assert!(matches!(
        Hal::with_config(registry(), &config),
        Err(Error::Config(_))
    ));
}
