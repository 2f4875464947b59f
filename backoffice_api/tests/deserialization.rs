use backoffice_api::types::{ApiResponse, CollateralRoll, Customer};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_customers() {
    let json = load_fixture("customers.json");
    let resp: ApiResponse<Customer> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.items.len(), 2);
    assert_eq!(resp.total_count, Some(2));
    assert_eq!(resp.offset, Some(0));
    assert_eq!(resp.limit, Some(10));
    assert!(!resp.has_next());

    let acme = &resp.items[0];
    assert_eq!(acme.id, Some(1));
    assert_eq!(acme.code.as_deref(), Some("ACME"));
    assert_eq!(acme.active, Some(true));
    assert_eq!(acme.tags, ["vip"]);
    assert_eq!(acme.internal_reference.as_deref(), Some("REF-001"));
    assert_eq!(acme.extra.get("segment").and_then(|v| v.as_str()), Some("corporate"));

    let globex = &resp.items[1];
    assert_eq!(globex.email, None);
    assert!(globex.tags.is_empty());
}

#[test]
fn deserialize_customers_with_null_fields() {
    let json = load_fixture("customers_sparse.json");
    let resp: ApiResponse<Customer> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.items.len(), 2);

    let initech = &resp.items[0];
    assert_eq!(initech.code.as_deref(), Some("INITECH"));
    assert_eq!(initech.name, None);
    assert_eq!(initech.active, None);
    assert!(initech.tags.is_empty());
    assert!(initech.extra.is_empty());

    assert_eq!(resp.items[1].tags, ["eu", "watchlist"]);
}

#[test]
fn deserialize_collateral_rolls() {
    let json = load_fixture("collateral_rolls.json");
    let resp: ApiResponse<CollateralRoll> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.items.len(), 1);
    assert_eq!(resp.total_count, Some(31));
    assert_eq!(resp.next.as_deref(), Some("/collateral-rolls?limit=1&offset=1"));
    assert_eq!(resp.first.as_deref(), Some("/collateral-rolls?limit=1&offset=0"));

    let roll = &resp.items[0];
    assert_eq!(roll.arp_code.as_deref(), Some("ARP-7"));
    assert_eq!(roll.amount, Some(125000.5));
    assert_eq!(roll.currency.as_deref(), Some("EUR"));
    assert_eq!(roll.maturity_date.as_deref(), Some("2027-03-31"));
}

#[test]
fn deserialize_count_only() {
    let json = load_fixture("count_only.json");
    let resp: ApiResponse<Customer> = serde_json::from_str(&json).unwrap();
    assert!(resp.items.is_empty());
    assert_eq!(resp.total_or_zero(), 0);
}
