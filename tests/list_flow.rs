//! End-to-end flow of a paginated list request: raw query in, skip/limit
//! against a backing collection, envelope out.

use page_params::{PageQuery, Paginated};
use serde_json::json;

fn fetch(items: &[u32], skip: u64, limit: u64) -> Vec<u32> {
    items
        .iter()
        .skip(skip as usize)
        .take(limit as usize)
        .copied()
        .collect()
}

#[test]
fn second_page_of_a_collection() {
    let store: Vec<u32> = (1..=25).collect();

    let query: PageQuery = serde_json::from_value(json!({"page": 2, "page_size": 10})).unwrap();
    let params = query.normalize();

    let items = fetch(&store, params.skip(), params.limit());
    assert_eq!(items, (11..=20).collect::<Vec<u32>>());

    let response = Paginated::new(items, params, store.len() as u64);
    let body = serde_json::to_value(&response).unwrap();
    assert_eq!(body["total"], 25);
    assert_eq!(body["pages"], 3);
    assert_eq!(body["has_next"], true);
    assert_eq!(body["has_prev"], true);
}

#[test]
fn page_beyond_data_yields_empty_items() {
    let store: Vec<u32> = (1..=5).collect();

    let query: PageQuery = serde_json::from_value(json!({"page": 9})).unwrap();
    let params = query.normalize();

    let items = fetch(&store, params.skip(), params.limit());
    assert!(items.is_empty());

    let response = Paginated::new(items, params, store.len() as u64);
    assert_eq!(response.info.pages, 1);
    assert!(!response.info.has_next);
    assert!(response.info.has_prev);
}

#[test]
fn oversized_page_size_is_capped_before_fetch() {
    let store: Vec<u32> = (1..=300).collect();

    let query: PageQuery = serde_json::from_value(json!({"page_size": 5000})).unwrap();
    let params = query.normalize();

    let items = fetch(&store, params.skip(), params.limit());
    assert_eq!(items.len(), 100);
    assert_eq!(params.info(store.len() as u64).pages, 3);
}
