//! Integration tests for `RestProductStore` using wiremock HTTP mocks.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wrap_data::{LoadError, ProductQuery, ProductStore, RestProductStore};

fn test_store(base_url: &str) -> RestProductStore {
    RestProductStore::new(base_url, 30)
        .expect("client construction should not fail")
        .with_api_key("test-key")
}

#[tokio::test]
async fn fetch_products_returns_normalized_products() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        {
            "id": "p1",
            "name": "Sterile Gauze Pads",
            "category": "Wound Care",
            "brand": "MediWrap",
            "rating": 4.5,
            "features": ["Individually wrapped", "Latex free"],
            "offers": [
                { "name": "Amazon", "price": 8.49 },
                { "name": "MedSupply", "price": 7.99 }
            ],
            "created_at": "2024-10-01T12:00:00Z"
        },
        {
            "$id": "p2",
            "name": "Burn Gel",
            "category": "Burn Treatment",
            "brand": "Soothex",
            "features": "Cooling relief; Sting free",
            "price": 11.25,
            "affiliateLink": "https://amzn.example/p2",
            "$createdAt": "2024-12-05T08:30:00Z"
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("category", "dressings"))
        .and(query_param("order", "created_at.desc"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let store = test_store(&server.uri());
    let query = ProductQuery::new().with_category("dressings");
    let products = store
        .fetch_products(&query)
        .await
        .expect("should parse products");

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id.as_str(), "p1");
    assert_eq!(products[0].category, "dressings");
    assert_eq!(products[0].best_price(), Some(7.99));
    assert_eq!(products[1].id.as_str(), "p2");
    assert_eq!(products[1].offers.len(), 1);
    assert_eq!(products[1].offers[0].name, "Amazon");
}

#[tokio::test]
async fn fetch_products_passes_search_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("search", "gauze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let store = test_store(&server.uri());
    let query = ProductQuery::new().with_search("gauze");
    let products = store
        .fetch_products(&query)
        .await
        .expect("empty result set is fine");
    assert!(products.is_empty());
}

#[tokio::test]
async fn server_error_maps_to_http_variant() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = test_store(&server.uri());
    let err = store
        .fetch_products(&ProductQuery::new())
        .await
        .expect_err("500 should be an error");

    match err {
        LoadError::Http { status, .. } => assert_eq!(status, 500),
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_deserialize_variant() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let store = test_store(&server.uri());
    let err = store
        .fetch_products(&ProductQuery::new())
        .await
        .expect_err("garbage body should be an error");

    assert!(matches!(err, LoadError::Deserialize(_)));
}

#[tokio::test]
async fn unreachable_backend_maps_to_connection_variant() {
    // Nothing listens on this port.
    let store = RestProductStore::new("http://127.0.0.1:9", 2).expect("client construction");
    let err = store
        .fetch_products(&ProductQuery::new())
        .await
        .expect_err("connection refused should be an error");

    assert!(matches!(
        err,
        LoadError::Connection(_) | LoadError::Timeout(_)
    ));
}
