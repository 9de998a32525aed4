//! LeetCode metadata lookups.
//!
//! Every lookup resolves to `Option`: a transport error, a body that is not
//! JSON, or a payload without the expected shape all become `None`. Callers
//! treat "no metadata" as an ordinary outcome and fall back to a placeholder.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::Config;
use crate::models::{ProblemMetadata, StarterTemplate};

const LISTING_PATH: &str = "/api/problems/algorithms/";
const GRAPHQL_PATH: &str = "/graphql";
const QUESTION_QUERY: &str = "query questionData($titleSlug: String!) { question(titleSlug: $titleSlug) { codeDefinition title questionFrontendId }}";

#[derive(Debug, Clone)]
pub struct LeetCodeClient {
    http: reqwest::Client,
    base_url: String,
    user_agent: String,
    starter_language: String,
}

impl LeetCodeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let config = Config::default();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_agent: config.user_agent,
            starter_language: config.starter_language,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.leetcode_url.as_str())
            .with_user_agent(config.user_agent.as_str())
            .with_starter_language(config.starter_language.as_str())
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_starter_language(mut self, language: impl Into<String>) -> Self {
        self.starter_language = language.into();
        self
    }

    /// Looks a problem up by its frontend number in the full algorithms listing.
    pub async fn problem_by_number(&self, id: u32) -> Option<ProblemMetadata> {
        let url = format!("{}{}", self.base_url, LISTING_PATH);
        let request = self.http.get(&url).header("User-Agent", &self.user_agent);
        let listing = self.send_for_json(request, &url).await?;

        let found = find_in_listing(&listing, id);
        if found.is_none() {
            tracing::warn!(id, "problem not found in listing");
        }
        found
    }

    /// Fetches the starter snippet for `slug` in the configured language.
    pub async fn starter_by_slug(&self, slug: &str) -> Option<StarterTemplate> {
        let url = format!("{}{}", self.base_url, GRAPHQL_PATH);
        let payload = json!({
            "operationName": "questionData",
            "variables": { "titleSlug": slug },
            "query": QUESTION_QUERY,
        });
        let request = self
            .http
            .post(&url)
            .header("User-Agent", &self.user_agent)
            .json(&payload);
        let response = self.send_for_json(request, &url).await?;

        let starter = starter_from_response(&response, &self.starter_language);
        if starter.is_none() {
            tracing::warn!(slug, language = %self.starter_language, "no starter code available");
        }
        starter
    }

    async fn send_for_json(&self, request: reqwest::RequestBuilder, url: &str) -> Option<Value> {
        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(%url, error = %e, "request failed");
                return None;
            }
        };
        tracing::debug!(%url, status = %response.status(), "response received");

        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!(%url, error = %e, "failed to read response body");
                return None;
            }
        };

        match serde_json::from_str(&body) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(%url, error = %e, "response is not JSON");
                None
            }
        }
    }
}

/// Scans `stat_status_pairs` for the entry whose frontend id is `id`.
pub fn find_in_listing(listing: &Value, id: u32) -> Option<ProblemMetadata> {
    listing
        .get("stat_status_pairs")?
        .as_array()?
        .iter()
        .filter_map(|pair| pair.get("stat"))
        .find(|stat| {
            stat.get("frontend_question_id").and_then(Value::as_u64) == Some(u64::from(id))
        })
        .and_then(|stat| {
            Some(ProblemMetadata {
                numeric_id: id,
                title: stat.get("question__title")?.as_str()?.to_string(),
                slug: stat
                    .get("question__title_slug")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            })
        })
}

#[derive(Debug, Deserialize)]
struct CodeDefinition {
    value: Option<String>,
    lang: Option<String>,
    #[serde(rename = "defaultCode")]
    default_code: Option<String>,
    code: Option<String>,
}

impl CodeDefinition {
    fn is_language(&self, language: &str) -> bool {
        [&self.value, &self.lang]
            .into_iter()
            .flatten()
            .any(|tag| tag.eq_ignore_ascii_case(language))
    }
}

/// Picks the `language` starter out of a `questionData` GraphQL response.
///
/// `codeDefinition` normally arrives as a JSON-encoded string; an inline array
/// is accepted too.
pub fn starter_from_response(response: &Value, language: &str) -> Option<StarterTemplate> {
    let question = response.get("data")?.get("question")?;
    if question.is_null() {
        return None;
    }

    let definitions = match question.get("codeDefinition")? {
        Value::String(encoded) => serde_json::from_str::<Value>(encoded).ok()?,
        other => other.clone(),
    };

    let chosen = definitions
        .as_array()?
        .iter()
        .filter_map(|d| serde_json::from_value::<CodeDefinition>(d.clone()).ok())
        .find(|d| d.is_language(language))?;

    let frontend_id = match question.get("questionFrontendId") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };

    Some(StarterTemplate {
        raw_source: chosen.default_code.or(chosen.code).unwrap_or_default(),
        title: question
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        frontend_id,
    })
}
