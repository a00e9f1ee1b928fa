use async_trait::async_trait;
use lingo::ports::Translator;
use shared::{Error, Result};
use std::time::Duration;

// Google rejects requests without a browser User-Agent
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Translator backed by the public Google Translate endpoint
///
/// Uses the unauthenticated `translate_a/single` API with `client=gtx`. The
/// base URL is injected so deployments can point at a relay instance and
/// tests at a stub.
pub struct GoogleTranslator {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslator {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Internal(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, src: &str, dest: &str) -> Result<String> {
        let url = format!("{}/translate_a/single", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", src),
                ("tl", dest),
                ("dt", "t"),
                ("q", text),
            ])
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| Error::Provider(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Provider(format!(
                "provider returned {}",
                response.status()
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::MalformedResponse(e.to_string()))?;

        extract_translation(&payload)
    }
}

/// Pull the translated text out of the positional JSON payload.
///
/// Google splits the translation into segments at `[0][*][0]`; the segments
/// are concatenated to form the full translation.
fn extract_translation(payload: &serde_json::Value) -> Result<String> {
    let segments = payload
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| Error::MalformedResponse("missing segment array".to_string()))?;

    let mut translation = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(|v| v.as_str()) {
            translation.push_str(part);
        }
    }

    if translation.is_empty() {
        return Err(Error::EmptyTranslation);
    }

    Ok(translation)
}

impl std::fmt::Debug for GoogleTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslator")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_translation_single_segment() {
        let payload = json!([[["hola", "hello", null, null, 10]]]);
        assert_eq!(extract_translation(&payload).unwrap(), "hola");
    }

    #[test]
    fn test_extract_translation_concatenates_segments() {
        let payload = json!([
            [
                ["hola ", "hello ", null],
                ["mundo", "world", null]
            ]
        ]);
        assert_eq!(extract_translation(&payload).unwrap(), "hola mundo");
    }

    #[test]
    fn test_extract_translation_missing_segments() {
        let payload = json!({ "unexpected": "shape" });
        let err = extract_translation(&payload).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_extract_translation_empty_segments() {
        let payload = json!([[]]);
        let err = extract_translation(&payload).unwrap_err();
        assert!(matches!(err, Error::EmptyTranslation));
    }
}
