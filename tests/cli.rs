use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PRODUCTS_ENDPOINT: &str = "/public/openai/v0/products";
// Port 1 refuses connections
const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

fn klarnaai(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("klarnaai").unwrap();
    cmd.env_remove("KLARNAAI_API_KEY")
        .env_remove("KLARNAAI_BASE_URL")
        .arg("--config-dir")
        .arg(config_dir);
    cmd
}

async fn mock_two_laptops() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PRODUCTS_ENDPOINT))
        .and(query_param("q", "laptop"))
        .and(query_param("size", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [
                {"name": "Laptop A", "price": "$500.00", "url": "https://example.test/a"},
                {"name": "Laptop B", "price": "$700.00", "url": "https://example.test/b"}
            ]
        })))
        .mount(&server)
        .await;
    server
}

#[test]
fn test_no_arguments_prints_help() {
    Command::cargo_bin("klarnaai")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("products"));
}

#[test]
fn test_config_show_masks_key() {
    let temp_dir = tempfile::tempdir().unwrap();

    klarnaai(temp_dir.path())
        .args(["config", "set", "--api-key", "abc123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API Key set"));

    klarnaai(temp_dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API Key:  ********"))
        .stdout(predicate::str::contains("abc123").not());
}

#[test]
fn test_config_show_without_key() {
    let temp_dir = tempfile::tempdir().unwrap();

    klarnaai(temp_dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not set (optional for public endpoint)"));
}

#[test]
fn test_config_set_requires_option() {
    let temp_dir = tempfile::tempdir().unwrap();

    klarnaai(temp_dir.path())
        .args(["config", "set"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✗ No options provided. Use --api-key"));
}

#[test]
fn test_empty_query_fails_fast() {
    let temp_dir = tempfile::tempdir().unwrap();

    klarnaai(temp_dir.path())
        .args(["--base-url", UNREACHABLE_URL, "products", "search", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Query parameter is required"));
}

#[test]
fn test_unreachable_service_reports_no_response() {
    let temp_dir = tempfile::tempdir().unwrap();

    klarnaai(temp_dir.path())
        .args(["--base-url", UNREACHABLE_URL, "shopping", "find", "shoes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "No response from Klarna API. Check your internet connection.",
        ));
}

#[test]
fn test_json_mode_errors_stay_plain_text() {
    let temp_dir = tempfile::tempdir().unwrap();

    klarnaai(temp_dir.path())
        .args(["--base-url", UNREACHABLE_URL, "products", "search", "tv", "--json"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No response from Klarna API"));
}

#[test]
fn test_non_positive_size_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    klarnaai(temp_dir.path())
        .args(["products", "search", "tv", "--size", "0"])
        .assert()
        .failure();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_products_search_renders_table() {
    let server = mock_two_laptops().await;
    let uri = server.uri();
    let temp_dir = tempfile::tempdir().unwrap();

    klarnaai(temp_dir.path())
        .args(["--base-url", uri.as_str(), "products", "search", "laptop", "--size", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 products for: laptop"))
        .stdout(predicate::str::contains("Product Name"))
        .stdout(predicate::str::contains("2 result(s)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_products_search_json_output() {
    let server = mock_two_laptops().await;
    let uri = server.uri();
    let temp_dir = tempfile::tempdir().unwrap();

    let output = klarnaai(temp_dir.path())
        .args([
            "--base-url",
            uri.as_str(),
            "products",
            "search",
            "laptop",
            "--size",
            "5",
            "--json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["products"][1]["name"], "Laptop B");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rate_limited_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"message": "ignored"})))
        .mount(&server)
        .await;
    let uri = server.uri();
    let temp_dir = tempfile::tempdir().unwrap();

    klarnaai(temp_dir.path())
        .args(["--base-url", uri.as_str(), "recommendations", "get", "tv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Rate limit exceeded. Please wait before retrying.",
        ))
        .stderr(predicate::str::contains("ignored").not());
}
