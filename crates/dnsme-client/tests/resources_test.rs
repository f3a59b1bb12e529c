// Integration tests for the zone, secondary zone and record endpoints.

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dnsme_client::{DnsmeClient, DnsmeError, RetryConfig};
use dnsme_core::{Domain, Record, RecordType, SecondaryDomain};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, DnsmeClient) {
    let server = MockServer::start().await;
    let client = DnsmeClient::builder("test-key", "test-secret")
        .base_url(server.uri())
        .retry(RetryConfig::new().backoff(Duration::from_millis(10)))
        .build()
        .unwrap();
    (server, client)
}

// ── Zones ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_domain() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/domains/example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "example.com",
            "nameServer": ["ns1.dnsmadeeasy.com", "ns2.dnsmadeeasy.com"],
            "vanityNameServers": [],
            "gtdEnabled": false
        })))
        .mount(&server)
        .await;

    let domain = client.domains().get("example.com").await.unwrap();
    assert_eq!(domain.name, "example.com");
    assert_eq!(domain.name_servers.len(), 2);
    assert!(!domain.gtd_enabled);
}

#[tokio::test]
async fn test_get_domain_with_error_list_fails() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/domains/example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "example.com",
            "error": ["Domain is pending deletion.", "Try again later."]
        })))
        .mount(&server)
        .await;

    let err = client.domains().get("example.com").await.unwrap_err();
    match err {
        DnsmeError::Api { messages } => assert_eq!(messages.len(), 2),
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_domain_puts_definition() {
    let (server, client) = setup().await;

    let definition = Domain::new("example.com")
        .name_servers(["ns1.example.net"])
        .gtd_enabled(true);

    Mock::given(method("PUT"))
        .and(path("/domains/example.com"))
        .and(body_json(json!({
            "name": "example.com",
            "nameServer": ["ns1.example.net"],
            "vanityNameServers": [],
            "gtdEnabled": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "example.com",
            "nameServer": ["ns1.example.net"],
            "gtdEnabled": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client.domains().create(&definition).await.unwrap();
    assert_eq!(created.name_servers, vec!["ns1.example.net"]);
    assert!(created.gtd_enabled);
}

#[tokio::test]
async fn test_create_domain_reported_failure() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/domains/example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "example.com",
            "error": ["Domain already exists."]
        })))
        .mount(&server)
        .await;

    let err = client
        .domains()
        .create(&Domain::new("example.com"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Domain already exists.");
}

#[tokio::test]
async fn test_delete_domain_ignores_body() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/domains/example.com"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    tokio_test::assert_ok!(client.domains().delete("example.com").await);
}

#[tokio::test]
async fn test_list_domains_sorted() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/domains/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "list": ["b.com", "c.com", "a.com"] })),
        )
        .mount(&server)
        .await;

    assert_eq!(client.domains().list().await.unwrap(), vec!["b.com", "c.com", "a.com"]);
    assert_eq!(
        client.domains().list_sorted().await.unwrap(),
        vec!["a.com", "b.com", "c.com"]
    );
}

// ── Secondary zones ─────────────────────────────────────────────────

#[tokio::test]
async fn test_secondary_lifecycle() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/secondary/example.com"))
        .and(body_json(json!({ "name": "example.com", "ip": ["127.0.0.1", "127.0.0.2"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "example.com",
            "ip": ["127.0.0.2", "127.0.0.1"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/secondary/example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "example.com",
            "ip": ["127.0.0.2", "127.0.0.1"]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/secondary/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "list": ["example.com"] })))
        .mount(&server)
        .await;

    let created = client
        .secondaries()
        .create(&SecondaryDomain::new("example.com", ["127.0.0.1", "127.0.0.2"]))
        .await
        .unwrap();
    assert_eq!(created.ips.len(), 2);

    let fetched = client.secondaries().get("example.com").await.unwrap();
    assert_eq!(fetched.ips, vec!["127.0.0.2", "127.0.0.1"]);

    assert_eq!(client.secondaries().list().await.unwrap(), vec!["example.com"]);
}

#[tokio::test]
async fn test_secondary_error_list_fails() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/secondary/example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "example.com",
            "error": ["Secondary not configured."]
        })))
        .mount(&server)
        .await;

    let err = client.secondaries().get("example.com").await.unwrap_err();
    assert_eq!(err.to_string(), "Secondary not configured.");
}

// ── Records ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_records_normalizes_cname() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/domains/example.com/records/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "www", "id": 1, "type": "CNAME", "data": "", "gtdLocation": "DEFAULT", "ttl": 300 },
            { "name": "ftp", "id": 2, "type": "CNAME", "data": "files.example.net.", "gtdLocation": "DEFAULT", "ttl": 300 },
            { "name": "", "id": 3, "type": "A", "data": "10.0.0.1", "gtdLocation": "DEFAULT", "ttl": 86400 }
        ])))
        .mount(&server)
        .await;

    let records = client.records("example.com").list().await.unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].data, "example.com.");
    assert_eq!(records[1].data, "files.example.net.");
    assert_eq!(records[2].display_name(), "@");
}

#[tokio::test]
async fn test_query_records_with_filters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/domains/example.com/records/"))
        .and(query_param("type", "MX"))
        .and(query_param("gtdLocation", "US_EAST"))
        .and(query_param("valueContains", "mail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "", "id": 10, "type": "MX", "data": "10 mail.example.com.", "gtdLocation": "US_EAST", "ttl": 3600 }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let records = client
        .records("example.com")
        .query()
        .record_type(RecordType::Mx)
        .gtd_location("US_EAST")
        .value_contains("mail")
        .send()
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].record_type, RecordType::Mx);
}

#[tokio::test]
async fn test_get_record_normalizes_cname() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/domains/example.com/records/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "alias", "id": 42, "type": "CNAME", "data": "", "gtdLocation": "DEFAULT", "ttl": 600
        })))
        .mount(&server)
        .await;

    let record = client.records("example.com").get(42).await.unwrap();
    assert_eq!(record.id, 42);
    assert_eq!(record.data, "example.com.");
}

#[tokio::test]
async fn test_get_record_with_error_list_fails() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/domains/example.com/records/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "A", "error": ["Record does not belong to domain."]
        })))
        .mount(&server)
        .await;

    let err = client.records("example.com").get(42).await.unwrap_err();
    assert!(matches!(err, DnsmeError::Api { .. }));
}

#[tokio::test]
async fn test_save_new_record_posts_to_collection() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/domains/example.com/records/"))
        .and(body_json(json!({
            "name": "www", "id": 0, "type": "A", "data": "10.0.0.1", "gtdLocation": "DEFAULT", "ttl": 3600
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "www", "id": 5001, "type": "A", "data": "10.0.0.1", "gtdLocation": "DEFAULT", "ttl": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let record = Record::new("www", RecordType::A, "10.0.0.1", 3600);
    let created = client.records("example.com").save(&record).await.unwrap();
    assert_eq!(created.id, 5001);
}

#[tokio::test]
async fn test_save_new_record_reported_failure() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/domains/example.com/records/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "A", "error": ["Duplicate record."]
        })))
        .mount(&server)
        .await;

    let record = Record::new("www", RecordType::A, "10.0.0.1", 3600);
    let err = client.records("example.com").save(&record).await.unwrap_err();
    assert_eq!(err.to_string(), "Duplicate record.");
}

#[tokio::test]
async fn test_save_existing_record_puts_to_id() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/domains/example.com/records/77"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let record = Record::new("www", RecordType::A, "10.0.0.2", 1800).with_id(77);
    let updated = client.records("example.com").save(&record).await.unwrap();
    assert_eq!(updated, record);

    let requests = server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["id"], 77);
    assert_eq!(sent["data"], "10.0.0.2");
}

#[tokio::test]
async fn test_delete_record() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/domains/example.com/records/77"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    tokio_test::assert_ok!(client.records("example.com").delete(77).await);
}

// ── Error-only replies ──────────────────────────────────────────────

fn error_only(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "error": [message] }))
}

async fn mount_error(server: &MockServer, verb: &str, route: &str, message: &str) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(error_only(message))
        .mount(server)
        .await;
}

fn assert_api_error(err: &DnsmeError, message: &str) {
    match err {
        DnsmeError::Api { messages } => assert_eq!(messages, &vec![message.to_string()]),
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_zone_error_only_replies() {
    let (server, client) = setup().await;
    mount_error(&server, "GET", "/domains/example.com", "Domain not found.").await;
    mount_error(&server, "PUT", "/domains/example.com", "Domain already exists.").await;

    let err = client.domains().get("example.com").await.unwrap_err();
    assert_api_error(&err, "Domain not found.");

    let err = client
        .domains()
        .create(&Domain::new("example.com"))
        .await
        .unwrap_err();
    assert_api_error(&err, "Domain already exists.");
}

#[tokio::test]
async fn test_secondary_error_only_replies() {
    let (server, client) = setup().await;
    mount_error(&server, "GET", "/secondary/example.com", "Secondary not found.").await;
    mount_error(&server, "PUT", "/secondary/example.com", "Invalid IP address.").await;

    let err = client.secondaries().get("example.com").await.unwrap_err();
    assert_api_error(&err, "Secondary not found.");

    let err = client
        .secondaries()
        .create(&SecondaryDomain::new("example.com", ["not-an-ip"]))
        .await
        .unwrap_err();
    assert_api_error(&err, "Invalid IP address.");
}

#[tokio::test]
async fn test_record_error_only_replies() {
    let (server, client) = setup().await;
    mount_error(&server, "GET", "/domains/example.com/records/42", "Record not found.").await;
    mount_error(&server, "POST", "/domains/example.com/records/", "Duplicate record.").await;

    let err = client.records("example.com").get(42).await.unwrap_err();
    assert_api_error(&err, "Record not found.");

    let record = Record::new("www", RecordType::A, "10.0.0.1", 3600);
    let err = client.records("example.com").save(&record).await.unwrap_err();
    assert_api_error(&err, "Duplicate record.");

    let sent: Value = serde_json::from_slice(&server.received_requests().await.unwrap()[1].body).unwrap();
    assert_eq!(sent["name"], "www");
}
