//! HTTP-based `FleetSource` for the rental provider's API.
//!
//! # Architecture
//!
//! The [`FleetSource`] trait is synchronous so the planning core stays
//! embeddable in synchronous contexts. This source bridges the async HTTP
//! calls to the sync interface by blocking on a Tokio runtime internally.

use std::future::Future;
use std::time::Duration;

use fleetfare_core::{FleetSource, FleetSourceError, Geozone, PricingOfferSet, Vehicle};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use super::wire::{GeozoneItemDto, into_geozone};

/// Error type for [`HttpFleetSource`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Public API root of the provider.
pub const DEFAULT_BASE_URL: &str = "https://poppy.red/api/v3";

/// City whose fleet is queried by default (Brussels).
pub const DEFAULT_CITY_ID: &str = "a88ea9d0-3d5e-4002-8bbf-775313a5973c";

/// Default user agent for provider requests.
pub const DEFAULT_USER_AGENT: &str = "fleetfare/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`HttpFleetSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpFleetSourceConfig {
    /// API root, e.g. `"https://poppy.red/api/v3"`.
    pub base_url: String,
    /// City whose fleet is listed.
    pub city_id: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpFleetSourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            city_id: DEFAULT_CITY_ID.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpFleetSourceConfig {
    /// Create a new configuration with the given API root.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the city whose fleet is listed.
    #[must_use]
    pub fn with_city_id(mut self, city_id: impl Into<String>) -> Self {
        self.city_id = city_id.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// `FleetSource` backed by the provider's HTTP API.
///
/// The source owns a Tokio runtime that is reused across calls.
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime the stored runtime drives requests. Inside a
/// multi-threaded runtime (detected via [`Handle::try_current()`] and
/// [`RuntimeFlavor::MultiThread`]) the caller's handle is used with
/// [`tokio::task::block_in_place`] to avoid nested runtime panics. Inside a
/// `current_thread` runtime the stored runtime is used, which may deadlock
/// if the caller's runtime drives IO this request depends on.
pub struct HttpFleetSource {
    client: Client,
    config: HttpFleetSourceConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpFleetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFleetSource")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpFleetSource {
    /// Create a source for `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpFleetSourceConfig::new(base_url))
    }

    /// Create a source with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpFleetSourceConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// The configuration this source was built with.
    #[must_use]
    pub const fn config(&self) -> &HttpFleetSourceConfig {
        &self.config
    }

    /// Build `{base_url}/{segments...}`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FleetSourceError> {
        let mut url = Url::parse(&self.config.base_url).map_err(|err| {
            FleetSourceError::InvalidUrl {
                message: format!("{}: {err}", self.config.base_url),
            }
        })?;
        url.path_segments_mut()
            .map_err(|()| FleetSourceError::InvalidUrl {
                message: format!("{} cannot be a base URL", self.config.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn vehicles_url(&self) -> Result<Url, FleetSourceError> {
        self.endpoint(&["cities", &self.config.city_id, "vehicles"])
    }

    fn pricing_url(&self, model_type: &str, tier: &str) -> Result<Url, FleetSourceError> {
        let mut url = self.endpoint(&["pricing", "pay-per-use"])?;
        url.query_pairs_mut()
            .append_pair("modelType", model_type)
            .append_pair("tier", tier);
        Ok(url)
    }

    fn geozone_url(&self, vehicle_uuid: &str) -> Result<Url, FleetSourceError> {
        self.endpoint(&["geozones", vehicle_uuid])
    }

    /// Fetch and decode a JSON document asynchronously.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FleetSourceError> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url.as_str()))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, url.as_str()))?;

        response.json().await.map_err(|err| {
            if err.is_decode() {
                FleetSourceError::ParseError {
                    message: err.to_string(),
                }
            } else {
                self.convert_reqwest_error(&err, url.as_str())
            }
        })
    }

    /// Convert a reqwest error to a `FleetSourceError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> FleetSourceError {
        if error.is_timeout() {
            return FleetSourceError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return FleetSourceError::HttpError {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        FleetSourceError::NetworkError {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }

    /// Drive `future` to completion from synchronous code.
    fn block_on<F: Future>(&self, future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime detected, or current_thread runtime: use our own runtime.
            _ => self.runtime.block_on(future),
        }
    }
}

impl FleetSource for HttpFleetSource {
    fn fetch_fleet(&self) -> Result<Vec<Vehicle>, FleetSourceError> {
        let url = self.vehicles_url()?;
        self.block_on(self.get_json(url))
    }

    fn fetch_pricing_offers(
        &self,
        model_type: &str,
        tier: &str,
    ) -> Result<PricingOfferSet, FleetSourceError> {
        let url = self.pricing_url(model_type, tier)?;
        self.block_on(self.get_json(url))
    }

    fn fetch_geozone(&self, vehicle_uuid: &str) -> Result<Geozone, FleetSourceError> {
        let url = self.geozone_url(vehicle_uuid)?;
        let items: Vec<GeozoneItemDto> = self.block_on(self.get_json(url))?;
        into_geozone(items)
    }
}
