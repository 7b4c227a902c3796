use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::client::{Endpoint, MealApi};
use crate::config::BrowserConfig;
use crate::error::{BrowserError, Result};
use crate::model::{ApiMeal, ApiResponse, AreaEntry, CategoryEntry, FilterKind};

/// [`MealApi`] backed by TheMealDB's JSON API
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a client from configuration
    pub fn new(config: &BrowserConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout_duration() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: normalize_base_url(&config.base_url),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(&base_url.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<Option<Vec<T>>> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        let mut request = self.client.get(&url);
        if let Some(query) = endpoint.query() {
            request = request.query(&[query]);
        }

        debug!("GET {} {:?}", url, endpoint.query());
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BrowserError::StatusError(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("{} answered with {} bytes", endpoint.path(), body.len());

        let parsed: ApiResponse<T> = serde_json::from_str(&body)?;
        Ok(parsed.meals)
    }
}

fn normalize_base_url(base_url: &str) -> String {
    if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    }
}

#[async_trait]
impl MealApi for MealDbClient {
    async fn search(&self, term: &str) -> Result<Option<Vec<ApiMeal>>> {
        self.fetch(Endpoint::Search(term.to_string())).await
    }

    async fn random(&self) -> Result<Option<Vec<ApiMeal>>> {
        self.fetch(Endpoint::Random).await
    }

    async fn lookup(&self, id: &str) -> Result<Option<Vec<ApiMeal>>> {
        self.fetch(Endpoint::Lookup(id.to_string())).await
    }

    async fn list_categories(&self) -> Result<Option<Vec<CategoryEntry>>> {
        self.fetch(Endpoint::List(FilterKind::Category)).await
    }

    async fn list_areas(&self) -> Result<Option<Vec<AreaEntry>>> {
        self.fetch(Endpoint::List(FilterKind::Area)).await
    }

    async fn filter_by_category(&self, category: &str) -> Result<Option<Vec<ApiMeal>>> {
        self.fetch(Endpoint::Filter(FilterKind::Category, category.to_string()))
            .await
    }

    async fn filter_by_area(&self, area: &str) -> Result<Option<Vec<ApiMeal>>> {
        self.fetch(Endpoint::Filter(FilterKind::Area, area.to_string()))
            .await
    }
}
