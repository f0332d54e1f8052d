//! API document retrieval from disk or over HTTP.

use tracing::{debug, warn};

use crate::error::{Error, Result};

fn is_remote(locator: &str) -> bool {
    locator.starts_with("http://") || locator.starts_with("https://")
}

fn is_yaml_locator(locator: &str) -> bool {
    let lower = locator.to_ascii_lowercase();
    let path = lower.split(['?', '#']).next().unwrap_or_default();
    path.ends_with(".yaml") || path.ends_with(".yml")
}

fn load_error(locator: &str, source: impl std::error::Error + Send + Sync + 'static) -> Error {
    Error::Load {
        locator: locator.to_string(),
        source: Box::new(source),
    }
}

async fn fetch(locator: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .build()
        .map_err(|err| load_error(locator, err))?;
    debug!(url = %locator, "Fetching API document.");
    let response = client
        .get(locator)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|err| {
            warn!(error = %err, url = %locator, "API document request failed.");
            load_error(locator, err)
        })?;
    debug!(status = %response.status(), "Received API document response.");
    response.text().await.map_err(|err| load_error(locator, err))
}

/// Read the raw document text for a path or `http(s)://` URL.
pub async fn read_source(locator: &str) -> Result<String> {
    if is_remote(locator) {
        fetch(locator).await
    } else {
        debug!(path = %locator, "Reading API document from disk.");
        std::fs::read_to_string(locator).map_err(|err| load_error(locator, err))
    }
}

/// Parse document text as JSON, or as YAML for `.yaml`/`.yml` locators
/// and for text that is not valid JSON.
pub fn parse_source(text: &str, locator: &str) -> Result<serde_json::Value> {
    if !is_yaml_locator(locator) {
        match serde_json::from_str(text) {
            Ok(value) => return Ok(value),
            Err(err) => {
                debug!(error = %err, locator, "Document is not JSON, trying YAML.");
            }
        }
    }
    serde_yaml::from_str(text).map_err(|err| Error::Parse {
        locator: locator.to_string(),
        message: err.to_string(),
    })
}

/// Load an API document as a JSON value with key order preserved.
pub async fn load_document(locator: &str) -> Result<serde_json::Value> {
    let text = read_source(locator).await?;
    let value = parse_source(&text, locator)?;
    debug!(locator, bytes = text.len(), "Loaded API document.");
    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_locator_detection() {
        assert!(is_yaml_locator("api.yaml"));
        assert!(is_yaml_locator("https://x.dev/spec.YML?v=2"));
        assert!(!is_yaml_locator("api.json"));
        assert!(!is_yaml_locator("https://x.dev/docs/json"));
    }

    #[test]
    fn test_parse_json_keeps_key_order() {
        let value = parse_source(r#"{ "z": 1, "a": 2, "m": 3 }"#, "doc.json").unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_parse_yaml_by_extension() {
        let value = parse_source("openapi: 3.0.0\ninfo:\n  title: Pets\n", "doc.yaml").unwrap();
        assert_eq!(value["openapi"], "3.0.0");
        assert_eq!(value["info"]["title"], "Pets");
    }

    #[test]
    fn test_yaml_numeric_keys_become_strings() {
        let value = parse_source(
            "paths:\n  /pets:\n    get:\n      responses:\n        200:\n          description: ok\n",
            "pets.yml",
        )
        .unwrap();
        assert_eq!(
            value["paths"]["/pets"]["get"]["responses"]["200"]["description"],
            "ok"
        );
    }

    #[test]
    fn test_parse_falls_back_to_yaml() {
        let value = parse_source("swagger: '2.0'\npaths: {}\n", "http://h/docs").unwrap();
        assert_eq!(value["swagger"], "2.0");
    }

    #[test]
    fn test_parse_failure_names_locator() {
        let err = parse_source("{ [unbalanced", "bad.yaml").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[tokio::test]
    async fn test_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = load_document(missing.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, Error::Load { .. }));
    }

    #[tokio::test]
    async fn test_load_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.json");
        std::fs::write(&path, r#"{ "swagger": "2.0", "paths": {} }"#).unwrap();
        let value = load_document(path.to_str().unwrap()).await.unwrap();
        assert_eq!(value["swagger"], "2.0");
    }
}
