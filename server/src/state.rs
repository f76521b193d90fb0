use std::sync::Arc;

use color_eyre::eyre::Context;
use tracing::instrument;
use url::Url;

use crate::posts_api::{HttpPostsApi, PostsApi, PostsApiConfig};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: Url,
}

impl AppConfig {
    #[instrument(name = "AppConfig::from_env")]
    pub fn from_env() -> color_eyre::Result<Self> {
        let base_url = std::env::var("APP_BASE_URL")
            .wrap_err("Missing APP_BASE_URL, needed for app launch")?;
        let base_url = Url::parse(&base_url).wrap_err("Invalid APP_BASE_URL not parsable")?;

        Ok(Self { base_url })
    }

    pub fn app_url(&self, path: &str) -> String {
        let mut url = self.base_url.clone();

        url.set_path(path);

        url.into()
    }
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub app: AppConfig,
    pub posts_api: Arc<dyn PostsApi>,
}

impl AppState {
    #[instrument(name = "AppState::from_env", err)]
    pub fn from_env() -> color_eyre::Result<Self> {
        let posts_api = HttpPostsApi::new(&PostsApiConfig::from_env()?);

        Ok(Self {
            app: AppConfig::from_env()?,
            posts_api: Arc::new(posts_api),
        })
    }
}
