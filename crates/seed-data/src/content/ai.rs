//! AI copy-generation service client.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ContentContext, ContentKind, FaqSeed, Headline, IndustryProfile, Payload, SourceError};

const DEFAULT_BASE_URL: &str = "https://api.draftsmith.ai";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Client for the `/v1/generate` endpoint of the AI copy service.
pub struct AiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    content_type: &'static str,
    language: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    brief: Option<&'a str>,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    length: Option<&'static str>,
}

#[derive(Deserialize)]
struct ProfilesResponse {
    profiles: Vec<IndustryProfile>,
}

#[derive(Deserialize)]
struct TermsResponse {
    terms: Vec<String>,
}

#[derive(Deserialize)]
struct HeadlinesResponse {
    headlines: Vec<Headline>,
}

#[derive(Deserialize)]
struct BodyResponse {
    body: String,
}

#[derive(Deserialize)]
struct FaqsResponse {
    faqs: Vec<FaqSeed>,
}

impl AiClient {
    /// Reads credentials from the environment. `AI_API_KEY` must be set;
    /// `AI_API_URL` overrides the default endpoint.
    pub fn from_env() -> Result<Self, SourceError> {
        let api_key = std::env::var("AI_API_KEY")
            .map_err(|_| SourceError::MissingCredentials("AI_API_KEY"))?;
        let base_url =
            std::env::var("AI_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(base_url, api_key))
    }

    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Requests generated content for a kind. Non-2xx responses, malformed
    /// bodies, and empty result sets are all failures; the resolver treats
    /// each the same way and falls through to the next tier.
    pub async fn fetch(
        &self,
        kind: ContentKind,
        ctx: &ContentContext,
    ) -> Result<Payload, SourceError> {
        let url = format!("{}/v1/generate", self.base_url);
        let length = match kind {
            ContentKind::ArticleBody(length) => Some(length.as_str()),
            _ => None,
        };

        let request = GenerateRequest {
            content_type: kind.as_str(),
            language: &ctx.language,
            brief: ctx.brief.as_deref(),
            count: ctx.count,
            length,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        match kind {
            ContentKind::IndustryProfiles => {
                let parsed: ProfilesResponse = response.json().await?;
                non_empty(parsed.profiles).map(Payload::Profiles)
            }
            ContentKind::CategoryVocabulary | ContentKind::TagVocabulary => {
                let parsed: TermsResponse = response.json().await?;
                non_empty(parsed.terms).map(Payload::Terms)
            }
            ContentKind::ArticleTitles => {
                let parsed: HeadlinesResponse = response.json().await?;
                non_empty(parsed.headlines).map(Payload::Headlines)
            }
            ContentKind::ArticleBody(_) => {
                let parsed: BodyResponse = response.json().await?;
                if parsed.body.trim().is_empty() {
                    Err(SourceError::Empty("AI service"))
                } else {
                    Ok(Payload::Body(parsed.body))
                }
            }
            ContentKind::FaqTemplates => {
                let parsed: FaqsResponse = response.json().await?;
                non_empty(parsed.faqs).map(Payload::Faqs)
            }
        }
    }
}

fn non_empty<T>(items: Vec<T>) -> Result<Vec<T>, SourceError> {
    if items.is_empty() {
        Err(SourceError::Empty("AI service"))
    } else {
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_requires_key() {
        // Run with a scoped unset to avoid leaking into other tests
        let previous = std::env::var("AI_API_KEY").ok();
        unsafe { std::env::remove_var("AI_API_KEY") };

        assert!(matches!(
            AiClient::from_env(),
            Err(SourceError::MissingCredentials("AI_API_KEY"))
        ));

        if let Some(value) = previous {
            unsafe { std::env::set_var("AI_API_KEY", value) };
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_source_error() {
        let client = AiClient::new("http://127.0.0.1:1", "test-key");
        let ctx = ContentContext {
            language: "en".into(),
            brief: None,
            count: 3,
        };

        let result = client.fetch(ContentKind::TagVocabulary, &ctx).await;
        assert!(matches!(result, Err(SourceError::Http(_))));
    }
}
