use async_trait::async_trait;
use color_eyre::eyre::Context;
use posts::Post;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::instrument;
use url::Url;

#[derive(Debug, Clone)]
pub(crate) struct PostsApiConfig {
    pub base_url: Url,
}

impl PostsApiConfig {
    #[instrument(name = "PostsApiConfig::from_env")]
    pub(crate) fn from_env() -> color_eyre::Result<Self> {
        let base_url = std::env::var("POSTS_API_BASE_URL")
            .wrap_err("POSTS_API_BASE_URL env var missing")?;
        let base_url =
            Url::parse(&base_url).wrap_err("POSTS_API_BASE_URL is not a parsable url")?;

        Ok(Self { base_url })
    }
}

/// Failures surfaced by the collection resource. The listing view only ever
/// shows the `Display` text of these, so each variant carries enough to make
/// that text useful on its own.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("Failed to reach the posts api: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Posts api returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Posts api returned a malformed posts payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// Seam over the remote collection resource so tests can swap in a fake.
#[async_trait]
pub(crate) trait PostsApi: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;

    async fn delete_post(&self, id: i64) -> Result<(), ApiError>;
}

pub(crate) struct HttpPostsApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpPostsApi {
    pub(crate) fn new(config: &PostsApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    fn collection_url(&self) -> Url {
        let mut url = self.base_url.clone();

        url.set_path("/api/posts");

        url
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read response body".to_string());

    Err(ApiError::Status { status, body })
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    #[instrument(name = "HttpPostsApi::list_posts", skip(self))]
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let response = self.client.get(self.collection_url()).send().await?;
        let response = ensure_success(response).await?;

        let body = response.text().await?;
        let posts: Vec<Post> = serde_json::from_str(&body)?;

        Ok(posts)
    }

    #[instrument(name = "HttpPostsApi::delete_post", skip(self))]
    async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        let mut url = self.collection_url();
        url.query_pairs_mut().append_pair("id", &id.to_string());

        let response = self.client.delete(url).send().await?;
        ensure_success(response).await?;

        Ok(())
    }
}
