//! Mock gateway tests for the REST store.
//!
//! These tests use wiremock to simulate a PostgREST gateway and verify the
//! wire dialect — query composition, range headers, count parsing and error
//! surfacing — without network access or real credentials.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use registro_core::entities::{Candidate, ElectedFilter, NewPerson, Person, PersonPatch};
use registro_core::error::Error;
use registro_core::{ListQuery, PageRequest, RecordId, RecordStore};
use registro_rest::RestStore;

/// Helper to build a store against a mock gateway.
fn mock_store(server: &MockServer) -> RestStore {
    let base = registro_core::GatewayUrl::new(format!(
        "http://127.0.0.1:{}",
        server.address().port()
    ))
    .unwrap();
    RestStore::new(base, "test-key")
}

fn person_query(page: u32, per_page: u32) -> ListQuery<Person> {
    ListQuery::new(PageRequest::new(page, per_page).unwrap())
}

#[tokio::test]
async fn select_first_page_with_exact_count() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people"))
        .and(query_param("select", "*"))
        .and(query_param("order", "created_at.desc"))
        .and(header("Range", "0-4"))
        .and(header("Range-Unit", "items"))
        .and(header("Prefer", "count=exact"))
        .and(header("apikey", "test-key"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(
            ResponseTemplate::new(206)
                .insert_header("Content-Range", "0-4/47")
                .set_body_json(json!([
                    {"id": 1, "name": "Ana Reis"},
                    {"id": 2, "name": "Bento Alves"},
                    {"id": 3, "name": "Clara Dias"},
                    {"id": 4, "name": "Davi Rocha"},
                    {"id": 5, "name": "Elisa Melo"}
                ])),
        )
        .mount(&server)
        .await;

    let store = mock_store(&server);
    let page = store.select(&person_query(1, 5)).await.unwrap();

    assert_eq!(page.rows.len(), 5);
    assert_eq!(page.total_count, 47);
    assert_eq!(page.rows[0].id, RecordId::new(1));
    assert_eq!(page.rows[0].name.as_deref(), Some("Ana Reis"));
}

#[tokio::test]
async fn select_sends_inclusive_range_for_later_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people"))
        .and(header("Range", "10-14"))
        .respond_with(
            ResponseTemplate::new(206)
                .insert_header("Content-Range", "10-14/47")
                .set_body_json(json!([{"id": 11, "name": "Kaua Lopes"}])),
        )
        .mount(&server)
        .await;

    let store = mock_store(&server);
    let page = store.select(&person_query(3, 5)).await.unwrap();
    assert_eq!(page.total_count, 47);
}

#[tokio::test]
async fn select_composes_or_clause_for_search() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people"))
        .and(query_param(
            "or",
            "(name.ilike.*ana*,email.ilike.*ana*,phone.ilike.*ana*)",
        ))
        .respond_with(
            ResponseTemplate::new(206)
                .insert_header("Content-Range", "0-0/1")
                .set_body_json(json!([{"id": 1, "name": "Ana Reis"}])),
        )
        .mount(&server)
        .await;

    let store = mock_store(&server);
    let mut query = person_query(1, 5);
    query.search = "ana".into();
    let page = store.select(&query).await.unwrap();
    assert_eq!(page.rows.len(), 1);
    assert_eq!(page.total_count, 1);
}

#[tokio::test]
async fn select_applies_structured_filter_predicate() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/candidates"))
        .and(query_param("elected", "eq.true"))
        .and(query_param("order", "full_name.asc"))
        .respond_with(
            ResponseTemplate::new(206)
                .insert_header("Content-Range", "0-0/1")
                .set_body_json(json!([
                    {"id": 9, "full_name": "Ana Lima", "elected": true}
                ])),
        )
        .mount(&server)
        .await;

    let store = mock_store(&server);
    let mut query = ListQuery::<Candidate>::new(PageRequest::first(5).unwrap());
    query.filter = ElectedFilter::Elected;
    let page = store.select(&query).await.unwrap();
    assert_eq!(page.rows[0].elected, Some(true));
}

#[tokio::test]
async fn select_empty_set() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Range", "*/0")
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let store = mock_store(&server);
    let page = store.select(&person_query(1, 5)).await.unwrap();
    assert!(page.rows.is_empty());
    assert_eq!(page.total_count, 0);
}

#[tokio::test]
async fn insert_returns_authoritative_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/people"))
        .and(header("Prefer", "return=representation"))
        .and(header("accept", "application/vnd.pgrst.object+json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 101,
            "created_at": "2026-03-02T12:00:00Z",
            "name": "Zuleide Costa",
            "phone": "559900"
        })))
        .mount(&server)
        .await;

    let store = mock_store(&server);
    let new = NewPerson {
        name: "Zuleide Costa".into(),
        phone: Some("559900".into()),
        ..Default::default()
    };
    let created: Person = store.insert(&new).await.unwrap();
    assert_eq!(created.id, RecordId::new(101));
    assert!(created.created_at.is_some());
}

#[tokio::test]
async fn update_addresses_record_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/people"))
        .and(query_param("id", "eq.7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "name": "Maria Souza",
            "phone": "558811"
        })))
        .mount(&server)
        .await;

    let store = mock_store(&server);
    let patch = PersonPatch { phone: Some("558811".into()), ..Default::default() };
    let updated: Person = store.update(RecordId::new(7), &patch).await.unwrap();
    assert_eq!(updated.phone.as_deref(), Some("558811"));
}

#[tokio::test]
async fn delete_addresses_record_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/people"))
        .and(query_param("id", "eq.7"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let store = mock_store(&server);
    store.delete::<Person>(RecordId::new(7)).await.unwrap();
}

#[tokio::test]
async fn gateway_error_body_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "PGRST100",
            "message": "unexpected value in filter",
            "details": null,
            "hint": null
        })))
        .mount(&server)
        .await;

    let store = mock_store(&server);
    let err = store.select(&person_query(1, 5)).await.unwrap_err();
    match err {
        Error::Gateway(gateway) => {
            assert_eq!(gateway.status, 400);
            assert_eq!(gateway.code.as_deref(), Some("PGRST100"));
            assert!(gateway.to_string().contains("unexpected value"));
        }
        other => panic!("expected gateway error, got {other:?}"),
    }
}

#[tokio::test]
async fn auth_failure_is_classified() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "JWT expired"
        })))
        .mount(&server)
        .await;

    let store = mock_store(&server);
    let err = store.select(&person_query(1, 5)).await.unwrap_err();
    match err {
        Error::Gateway(gateway) => assert!(gateway.is_auth_error()),
        other => panic!("expected gateway error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_response_is_handled() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let store = mock_store(&server);
    let err = store.select(&person_query(1, 5)).await.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn missing_exact_count_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Range", "0-4/*")
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let store = mock_store(&server);
    let err = store.select(&person_query(1, 5)).await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}
