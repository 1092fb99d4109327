//! News aggregation service client.
//!
//! Supplies real-world headlines and their tags for article titles and the
//! tag vocabulary. Every other content kind is out of this tier's reach.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use super::{ContentContext, ContentKind, Headline, Payload, SourceError};

const DEFAULT_BASE_URL: &str = "https://api.headlinefeed.io";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const DEFAULT_QUERY: &str = "business technology marketing";

/// Client for the headlines endpoint of the news aggregation service.
pub struct NewsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct HeadlinesResponse {
    articles: Vec<Headline>,
}

impl NewsClient {
    /// Reads credentials from the environment. `NEWS_API_KEY` must be set;
    /// `NEWS_API_URL` overrides the default endpoint.
    pub fn from_env() -> Result<Self, SourceError> {
        let api_key = std::env::var("NEWS_API_KEY")
            .map_err(|_| SourceError::MissingCredentials("NEWS_API_KEY"))?;
        let base_url =
            std::env::var("NEWS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(base_url, api_key))
    }

    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Whether this tier can produce the requested kind.
    pub fn supports(kind: ContentKind) -> bool {
        matches!(kind, ContentKind::ArticleTitles | ContentKind::TagVocabulary)
    }

    pub async fn fetch(
        &self,
        kind: ContentKind,
        ctx: &ContentContext,
    ) -> Result<Payload, SourceError> {
        let headlines = self.fetch_headlines(ctx).await?;

        match kind {
            ContentKind::ArticleTitles => Ok(Payload::Headlines(headlines)),
            ContentKind::TagVocabulary => {
                let terms: Vec<String> = headlines.into_iter().flat_map(|h| h.tags).collect();
                if terms.is_empty() {
                    Err(SourceError::Empty("news service"))
                } else {
                    Ok(Payload::Terms(terms))
                }
            }
            // Callers check supports() first; anything else has no headline mapping
            _ => Err(SourceError::Empty("news service")),
        }
    }

    /// Fetches current headlines. An empty article list is a failure so the
    /// chain can fall through to a tier that will produce something.
    async fn fetch_headlines(&self, ctx: &ContentContext) -> Result<Vec<Headline>, SourceError> {
        let url = format!("{}/v1/headlines", self.base_url);
        let query = ctx.brief.as_deref().unwrap_or(DEFAULT_QUERY);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .query(&[
                ("language", ctx.language.as_str()),
                ("page_size", &ctx.count.to_string()),
                ("q", query),
            ])
            .send()
            .await?
            .error_for_status()?;

        let parsed: HeadlinesResponse = response.json().await?;
        if parsed.articles.is_empty() {
            return Err(SourceError::Empty("news service"));
        }

        Ok(parsed.articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_kinds() {
        assert!(NewsClient::supports(ContentKind::ArticleTitles));
        assert!(NewsClient::supports(ContentKind::TagVocabulary));
        assert!(!NewsClient::supports(ContentKind::FaqTemplates));
        assert!(!NewsClient::supports(ContentKind::IndustryProfiles));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_source_error() {
        let client = NewsClient::new("http://127.0.0.1:1", "test-key");
        let ctx = ContentContext {
            language: "en".into(),
            brief: None,
            count: 5,
        };

        let result = client.fetch(ContentKind::ArticleTitles, &ctx).await;
        assert!(matches!(result, Err(SourceError::Http(_))));
    }
}
