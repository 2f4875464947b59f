use backoffice_api::criteria::UpperSnakeCase;
use backoffice_api::query::encode_component;
use backoffice_api::types::CUSTOMER_FIELDS;
use backoffice_api::{
    build, translate, with_query, Condition, FieldValue, Query, QueryOptions, SearchCriteria,
    Sort, SortDirection,
};
use percent_encoding::percent_decode_str;
use serde_json::json;

fn decoded_pairs(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap();
            (
                key.to_string(),
                percent_decode_str(value).decode_utf8().unwrap().into_owned(),
            )
        })
        .collect()
}

#[test]
fn customers_listing_query() {
    let options = QueryOptions::default()
        .with_limit(10)
        .with_offset(0)
        .with_sort(Sort::by("ACTIVE"));
    let path = options.append_to_path("/customers");
    insta::assert_snapshot!(path, @"/customers?limit=10&offset=0&sort=ACTIVE");
}

#[test]
fn hand_written_filter() {
    let options = QueryOptions::default().with_q("CODE like 'test*'");
    assert_eq!(
        with_query("/customers", &build(&options)),
        "/customers?q=CODE%20like%20'test*'"
    );
}

#[test]
fn shared_direction_sort_value() {
    let options = QueryOptions::default().with_sort(Sort::fields(["TITLE", "CODE"], SortDirection::Desc));
    let pairs = decoded_pairs(&build(&options));
    assert_eq!(pairs, [("sort".to_string(), "TITLE desc,CODE desc".to_string())]);
}

#[test]
fn fields_are_one_comma_joined_pair() {
    let options = QueryOptions::default().with_fields(&["CODE", "NAME", "ID"]);
    let pairs = decoded_pairs(&build(&options));
    assert_eq!(pairs, [("fields".to_string(), "CODE,NAME,ID".to_string())]);
}

#[test]
fn translated_filter_round_trips_through_query_string() {
    let samples = [
        json!({}),
        json!({ "code": null }),
        json!({ "code": "ABC" }),
        json!({ "code": "ABC", "status": 1 }),
        json!({ "code": { "like": "AB*" } }),
        json!({ "price": { "gte": 100, "lte": 500.5 } }),
        json!({ "status": { "in": [1, 2, 3] }, "tags": ["A&B", "C=D"] }),
        json!({ "name": "Zoë O'Hara, Ltd. #1" }),
    ];
    for sample in samples {
        let criteria = SearchCriteria::from_json(&sample).unwrap();
        let filter = translate(&criteria, &UpperSnakeCase).unwrap();
        let query = build(&QueryOptions::default().with_filter(filter.clone()));
        let q_pairs: Vec<String> = decoded_pairs(&query)
            .into_iter()
            .filter(|(key, _)| key == "q")
            .map(|(_, value)| value)
            .collect();
        match filter {
            Some(filter) => assert_eq!(q_pairs, [filter]),
            None => assert_eq!(query, ""),
        }
    }
}

#[test]
fn criteria_from_entity_field_map() {
    let criteria = SearchCriteria::new()
        .with("internalReference", "REF-9")
        .with("status", FieldValue::all([Condition::gte(1), Condition::lt(4)]))
        .with("tags", FieldValue::any_of(["vip", "new"]));
    let filter = translate(&criteria, &CUSTOMER_FIELDS).unwrap().unwrap();
    insta::assert_snapshot!(
        filter,
        @"INTERNAL_REFERENCE eq 'REF-9' and (STATUS gte 1 and STATUS lt 4) and (TAGS eq 'vip' or TAGS eq 'new')"
    );
    let query = build(&QueryOptions::default().with_limit(25).with_q(&filter));
    assert!(query.starts_with("limit=25&q="));
    assert!(query.contains(&encode_component(&filter)));
}

#[test]
fn identical_input_identical_output() {
    let make = || {
        QueryOptions::default()
            .with_limit(50)
            .with_offset(100)
            .with_fields(&["ID", "CODE"])
            .with_sort(Sort::by("CODE").then("ID", SortDirection::Desc))
            .with_q("ACTIVE eq true")
            .with_count(true)
            .with_expand_level("full")
    };
    assert_eq!(build(&make()), build(&make()));
}
