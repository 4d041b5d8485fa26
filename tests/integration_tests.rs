//! Integration tests using mock HTTP servers
//!
//! Tests the full end-to-end flow: service account token exchange →
//! Firestore listing → Appwrite provisioning → document writes

use firestore_to_appwrite::auth::{AuthConfig, ServiceAccountKey};
use firestore_to_appwrite::{
    AppwriteConfig, AppwriteWriter, CollectionOutcome, FirestoreConfig, FirestoreReader,
    MigrationEngine, ProvisioningDelays,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::io::Write;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const TEST_PRIVATE_KEY: &str = include_str!("fixtures/test_key.pem");

const FIRESTORE_ROOT: &str = "/firestore/v1/projects/demo/databases/(default)/documents";
const APPWRITE_COLLECTIONS: &str = "/appwrite/v1/databases/main/collections";

fn write_credentials(server: &MockServer) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let key = json!({
        "type": "service_account",
        "project_id": "demo",
        "private_key_id": "abc123",
        "private_key": TEST_PRIVATE_KEY,
        "client_email": "migrator@demo.iam.gserviceaccount.com",
        "token_uri": format!("{}/token", server.uri()),
    });
    file.write_all(key.to_string().as_bytes()).unwrap();
    file
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=urn"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "ya29.test",
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_firestore(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(format!("{FIRESTORE_ROOT}:listCollectionIds")))
        .and(header("Authorization", "Bearer ya29.test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collectionIds": ["users", "empty"]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{FIRESTORE_ROOT}/users")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [
                {
                    "name": "projects/demo/databases/(default)/documents/users/ana",
                    "fields": {
                        "name": {"stringValue": "Ana"},
                        "age": {"integerValue": "30"}
                    }
                },
                {
                    "name": "projects/demo/databases/(default)/documents/users/lee",
                    "fields": {
                        "name": {"stringValue": "Lee"},
                        "age": {"integerValue": "25"},
                        "tags": {"arrayValue": {"values": [
                            {"stringValue": "x"},
                            {"stringValue": "y"}
                        ]}}
                    }
                }
            ]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{FIRESTORE_ROOT}/empty")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(server)
        .await;
}

async fn mount_appwrite(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(APPWRITE_COLLECTIONS))
        .and(header("X-Appwrite-Project", "proj"))
        .and(header("X-Appwrite-Key", "key"))
        .and(body_json(json!({
            "collectionId": "users",
            "name": "users",
            "permissions": []
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"$id": "users"})))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{APPWRITE_COLLECTIONS}/users/attributes/string")))
        .and(body_json(json!({"key": "name", "required": false, "size": 1000})))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({})))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{APPWRITE_COLLECTIONS}/users/attributes/integer")))
        .and(body_json(json!({"key": "age", "required": false})))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({})))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{APPWRITE_COLLECTIONS}/users/documents")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(2)
        .mount(server)
        .await;
}

fn engine_for(
    server: &MockServer,
    key: &ServiceAccountKey,
) -> MigrationEngine<FirestoreReader, AppwriteWriter> {
    let source = FirestoreReader::new(
        FirestoreConfig::new(key.project_id.clone())
            .with_base_url(format!("{}/firestore/v1", server.uri())),
        AuthConfig::service_account(key),
    )
    .unwrap();
    let destination = AppwriteWriter::new(AppwriteConfig::new(
        format!("{}/appwrite/v1", server.uri()),
        "proj",
        "key",
        "main",
    ))
    .unwrap();

    MigrationEngine::new(source, destination).with_delays(ProvisioningDelays::none())
}

fn document_bodies(requests: &[Request]) -> Vec<Value> {
    requests
        .iter()
        .filter(|r| r.url.path() == format!("{APPWRITE_COLLECTIONS}/users/documents"))
        .map(|r| r.body_json::<Value>().unwrap())
        .collect()
}

// ============================================================================
// End-to-end
// ============================================================================

#[tokio::test]
async fn test_full_migration() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_firestore(&server).await;
    mount_appwrite(&server).await;

    let credentials = write_credentials(&server);
    let key = ServiceAccountKey::from_file(credentials.path()).unwrap();
    let report = engine_for(&server, &key).run().await.unwrap();

    assert_eq!(report.collections.len(), 2);
    assert_eq!(report.collection("users").unwrap().migrated, 2);
    assert_eq!(
        report.collection("empty").unwrap().outcome,
        CollectionOutcome::Skipped
    );
    assert_eq!(report.total_migrated(), 2);
    assert_eq!(report.total_failed(), 0);

    let requests = server.received_requests().await.unwrap();
    let docs = document_bodies(&requests);
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0]["data"], json!({"age": 30, "name": "Ana"}));
    assert_eq!(
        docs[1]["data"],
        json!({"age": 25, "name": "Lee", "tags": "[\"x\", \"y\"]"})
    );

    let ids: HashSet<&str> = docs
        .iter()
        .map(|d| d["documentId"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.iter().all(|id| uuid::Uuid::parse_str(id).is_ok()));

    // Nothing touches the destination for the empty collection
    assert!(requests
        .iter()
        .all(|r| !r.url.path().contains("/collections/empty")));
}

#[tokio::test]
async fn test_document_rejection_does_not_stop_run() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_firestore(&server).await;

    Mock::given(method("POST"))
        .and(path(APPWRITE_COLLECTIONS))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "Collection with the requested ID already exists.",
            "code": 409,
            "type": "collection_already_exists"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{APPWRITE_COLLECTIONS}/users/attributes/string")))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "Attribute with the requested key already exists.",
            "code": 409,
            "type": "attribute_already_exists"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{APPWRITE_COLLECTIONS}/users/attributes/integer")))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({})))
        .mount(&server)
        .await;

    // Documents carrying `tags` are rejected by the destination schema
    Mock::given(method("POST"))
        .and(path(format!("{APPWRITE_COLLECTIONS}/users/documents")))
        .and(body_string_contains("tags"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Invalid document structure: Unknown attribute: \"tags\"",
            "code": 400,
            "type": "document_invalid_structure"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{APPWRITE_COLLECTIONS}/users/documents")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .mount(&server)
        .await;

    let credentials = write_credentials(&server);
    let key = ServiceAccountKey::from_file(credentials.path()).unwrap();
    let report = engine_for(&server, &key).run().await.unwrap();

    let users = report.collection("users").unwrap();
    assert_eq!(users.migrated, 1);
    assert_eq!(users.failed, 1);
    assert_eq!(users.failed_attributes, 1);
}

#[tokio::test]
async fn test_source_listing_failure_is_fatal() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("POST"))
        .and(path(format!("{FIRESTORE_ROOT}:listCollectionIds")))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"code": 403, "message": "Missing or insufficient permissions.", "status": "PERMISSION_DENIED"}
        })))
        .mount(&server)
        .await;

    let credentials = write_credentials(&server);
    let key = ServiceAccountKey::from_file(credentials.path()).unwrap();
    let err = engine_for(&server, &key).run().await.unwrap_err();

    assert!(matches!(err, firestore_to_appwrite::Error::Source { .. }));
    let requests = server.received_requests().await.unwrap();
    assert!(requests
        .iter()
        .all(|r| !r.url.path().starts_with("/appwrite")));
}
