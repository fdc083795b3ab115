//! Fetch, validate and cache the upstream subscription document.

use actix_web::web::Bytes;
use log::Level;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::{
    cache::CacheSlot, client_builder::build_client, config::AppConfig, errors::FetchError,
    serde_types::SubscriptionDocument, utils::log_err::LogErrResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Upstream,
    Cache,
}

/// Document chosen for a single request.
#[derive(Debug)]
pub struct Served {
    pub body: Bytes,
    pub source: Source,
}

#[derive(Debug)]
pub struct Subscription {
    client: Client,
    url: Url,
    cache: CacheSlot,
}

impl Subscription {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(config)?,
            url: config.url.clone(),
            cache: CacheSlot::new(config.cache_path.clone()),
        })
    }

    pub fn cache(&self) -> &CacheSlot {
        &self.cache
    }

    /// Fetch upstream document and make sure it is a valid subscription.
    pub async fn fetch_upstream(&self) -> Result<Bytes, FetchError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(FetchError::Request)?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.bytes().await.map_err(FetchError::Body)?;
        SubscriptionDocument::validate(&body)?;

        Ok(body)
    }

    /// Pick the document to serve.
    ///
    /// A fresh upstream document is cached and returned. On any upstream failure
    /// the cached document is returned instead, or an empty body when nothing is
    /// cached yet.
    pub async fn serve(&self) -> Served {
        let fetched = self.fetch_upstream().await.log_err(
            module_path!(),
            Level::Warn,
            format_args!("Failed to fetch subscription from {}", self.url),
        );

        match fetched {
            Ok(body) => {
                debug!("Fetched {} bytes from {}", body.len(), self.url);
                self.cache
                    .store(&body)
                    .await
                    .log_err(module_path!(), Level::Error, "Failed to write cache")
                    .ok();
                Served {
                    body,
                    source: Source::Upstream,
                }
            }
            Err(_) => Served {
                body: self.cache.load().await,
                source: Source::Cache,
            },
        }
    }
}
