use std::fs;

use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use wiremock::matchers::{any, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use practice_kit::cli::{add_problem, Settings};
use practice_kit::config::Config;
use practice_kit::fetch::LeetCodeClient;

const LISTING: &str = "/api/problems/algorithms/";

fn listing() -> Value {
    json!({
        "stat_status_pairs": [
            { "stat": { "frontend_question_id": 1, "question__title": "Two Sum",
                        "question__title_slug": "two-sum" } }
        ]
    })
}

fn question() -> Value {
    let defs = json!([
        { "value": "python3", "defaultCode": "class Solution:\n    pass" },
        { "value": "javascript", "defaultCode":
          "/**\n * @param {number[]} nums\n * @param {number} target\n * @return {number[]}\n */\nvar twoSum = function(nums, target) {\n    \n};" }
    ]);
    json!({
        "data": { "question": {
            "codeDefinition": defs.to_string(),
            "title": "Two Sum",
            "questionFrontendId": "1"
        }}
    })
}

async fn mount_listing(server: &MockServer, times: u64) {
    Mock::given(method("GET"))
        .and(path(LISTING))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing()))
        .expect(times)
        .mount(server)
        .await;
}

async fn mount_question(server: &MockServer, slug: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "operationName": "questionData",
            "variables": { "titleSlug": slug }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(question()))
        .expect(times)
        .mount(server)
        .await;
}

fn settings_for(server: &MockServer) -> (TempDir, Settings) {
    let root = tempdir().unwrap();
    let settings = Settings {
        root: root.path().to_path_buf(),
        config: Config {
            leetcode_url: server.uri(),
            ..Config::default()
        },
    };
    (root, settings)
}

#[tokio::test]
async fn listing_lookup_by_number() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LISTING))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing()))
        .expect(1)
        .mount(&server)
        .await;

    let meta = LeetCodeClient::new(server.uri())
        .problem_by_number(1)
        .await
        .unwrap();
    assert_eq!(meta.title, "Two Sum");
    assert_eq!(meta.slug.as_deref(), Some("two-sum"));
}

#[tokio::test]
async fn missing_number_is_absent() {
    let server = MockServer::start().await;
    mount_listing(&server, 1).await;
    assert_eq!(LeetCodeClient::new(server.uri()).problem_by_number(2).await, None);
}

#[tokio::test]
async fn starter_lookup_posts_graphql_query() {
    let server = MockServer::start().await;
    mount_question(&server, "two-sum", 1).await;

    let starter = LeetCodeClient::new(server.uri())
        .starter_by_slug("two-sum")
        .await
        .unwrap();
    assert!(starter.raw_source.contains("var twoSum = function(nums, target)"));
    assert_eq!(starter.frontend_id.as_deref(), Some("1"));

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body["query"].as_str().unwrap().contains("codeDefinition"));
}

#[tokio::test]
async fn non_json_body_is_absent() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;
    assert_eq!(LeetCodeClient::new(server.uri()).problem_by_number(1).await, None);
}

#[tokio::test]
async fn unreachable_host_is_absent() {
    // Nothing listens on the discard port.
    let client = LeetCodeClient::new("http://127.0.0.1:9");
    assert_eq!(client.problem_by_number(1).await, None);
    assert_eq!(client.starter_by_slug("two-sum").await, None);
}

#[tokio::test]
async fn full_pipeline_synthesizes_typed_scaffold() {
    let server = MockServer::start().await;
    mount_listing(&server, 1).await;
    mount_question(&server, "two-sum", 1).await;
    let (root, settings) = settings_for(&server);

    let path = add_problem(Some("1"), None, None, &settings).await.unwrap();
    assert_eq!(path, root.path().join("LeetCode").join("LC_0001_Two_Sum.ts"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains(" * 1. Two Sum\n"));
    assert!(content.contains(
        "export function twoSum(nums: number[], target: number): number[] {\n  // TODO\n}"
    ));
    assert!(content.contains("{ input: [[ /* nums */, /* target */ ]], expected: /* result */ }"));
    assert!(content.contains("], twoSum);"));
}

#[tokio::test]
async fn explicit_title_wins_over_listing() {
    // The slug is still missing, so the listing is consulted anyway.
    let server = MockServer::start().await;
    mount_listing(&server, 1).await;
    mount_question(&server, "two-sum", 1).await;
    let (root, settings) = settings_for(&server);

    let path = add_problem(Some("1"), Some("Pair Finder".into()), None, &settings)
        .await
        .unwrap();
    assert_eq!(path, root.path().join("LeetCode").join("LC_0001_Pair_Finder.ts"));
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains(" * 1. Pair Finder\n"));
}

#[tokio::test]
async fn known_title_and_slug_skip_the_listing() {
    let server = MockServer::start().await;
    mount_listing(&server, 0).await;
    mount_question(&server, "two-sum", 1).await;
    let (root, settings) = settings_for(&server);

    let path = add_problem(
        Some("1"),
        Some("Two Sum".into()),
        Some("two-sum".into()),
        &settings,
    )
    .await
    .unwrap();
    assert_eq!(path, root.path().join("LeetCode").join("LC_0001_Two_Sum.ts"));
}

#[tokio::test]
async fn failed_lookups_fall_back_to_placeholder() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;
    let (root, settings) = settings_for(&server);

    let path = add_problem(Some("7"), None, None, &settings).await.unwrap();
    assert_eq!(path, root.path().join("LeetCode").join("LC_0007_Problem_7.ts"));
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("export function solve(/* args */): any {"));
}
