//! Integration tests for credential loading and client construction.

use std::io::Write;

use hero_graphql::credential::extract_token;
use hero_graphql::{ClientConfig, Credential, CredentialErrorKind, GraphqlClient};

fn key_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn config_for(path: &std::path::Path) -> ClientConfig {
    ClientConfig::builder()
        .endpoint("https://login.hero-software.de/api/external/v7/graphql")
        .credential_path(path)
        .build()
        .unwrap()
}

#[test]
fn test_body_lines_are_trimmed_and_joined_in_order() {
    let pem = "-----BEGIN KEY-----\n abc \ndef\n-----END KEY-----\n";
    assert_eq!(extract_token(pem), "abcdef");
}

#[test]
fn test_credential_from_file() {
    let file = key_file("-----BEGIN KEY-----\nline-one\nline-two\n-----END KEY-----\n");

    let credential = Credential::from_file(file.path()).unwrap();

    assert_eq!(credential.as_ref(), "line-oneline-two");
}

#[test]
fn test_client_uses_loader_output_as_bearer_token() {
    let file = key_file("-----BEGIN KEY-----\n abc \ndef\n-----END KEY-----\n");
    let expected = Credential::from_file(file.path()).unwrap();

    let client = GraphqlClient::new(&config_for(file.path())).unwrap();

    assert_eq!(
        client.default_headers().get("Authorization"),
        Some(&format!("Bearer {}", expected.as_ref()))
    );
}

#[test]
fn test_missing_file_fails_construction() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.pem");

    let error = GraphqlClient::new(&config_for(&path)).unwrap_err();

    assert!(error.is_not_found());
    assert!(error.to_string().contains("nope.pem"));
}

#[test]
fn test_delimiter_only_file_fails_construction() {
    let file = key_file("-----BEGIN KEY-----\n\n   \n-----END KEY-----\n");

    let error = GraphqlClient::new(&config_for(file.path())).unwrap_err();

    assert!(matches!(error.kind, CredentialErrorKind::Empty));
}

#[test]
fn test_empty_file_fails_construction() {
    let file = key_file("");

    let result = GraphqlClient::new(&config_for(file.path()));

    assert!(result.is_err());
}

#[test]
fn test_credential_debug_is_masked() {
    let credential = Credential::new("do-not-print").unwrap();
    assert_eq!(format!("{credential:?}"), "Credential(*****)");
}
