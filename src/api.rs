use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, header};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::models::{Page, PageQuery};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Paginated data source behind the list views
#[derive(Debug)]
pub struct Api {
    api: Url,
    client: Client,
}

impl Api {
    pub fn new(config: &Config) -> Result<Api> {
        let client = Self::create_client(config.api_token.as_deref())?;
        Ok(Self { api: config.api.clone(), client })
    }

    /// Create default headers for the API client.
    fn default_headers(bearer_token: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, USER_AGENT.parse()?);

        if let Some(token) = bearer_token {
            let mut auth_value = HeaderValue::try_from(format!("Bearer {}", token))?;
            auth_value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, auth_value);
        }
        Ok(headers)
    }

    fn create_client(bearer_token: Option<&str>) -> Result<Client> {
        let client = Client::builder()
            .default_headers(Self::default_headers(bearer_token)?)
            .no_proxy()
            .build()
            .context("Fail to build client")?;
        Ok(client)
    }

    /// `GET <api>/<path>?page=..&size=..&sort=<column>,<dir>...`
    ///
    /// `path` is always resolved below `api`, a leading `/` does not escape it.
    pub async fn fetch_page<T>(&self, path: &str, query: &PageQuery) -> Result<Page<T>>
    where
        T: DeserializeOwned,
    {
        let path = path.trim_start_matches('/');
        let url = self.api.join(path)?;
        debug!("fetch_page, url: {}, sort: [{}]", url, query.sort);
        let body = self
            .client
            .get(url)
            .query(&query.to_pairs())
            .send()
            .await
            .with_context(|| format!("Fail to send `GET /{path}`"))?
            .error_for_status()
            .with_context(|| format!("Fail to request `GET /{path}`"))?
            .json::<Page<T>>()
            .await
            .with_context(|| format!("Fail to parse response of `GET /{path}`"))?;

        Ok(body)
    }
}
