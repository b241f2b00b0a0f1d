//! Connection settings shared by every subcommand that talks to the provider.

use std::time::Duration;

use fleetfare_core::FleetSource;
use fleetfare_data::{HttpFleetSource, HttpFleetSourceConfig};

use crate::CliError;

/// Resolved provider connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceSettings {
    /// API root of the provider.
    pub(crate) api_base_url: String,
    /// City whose fleet is listed.
    pub(crate) city_id: String,
    /// Per-request timeout.
    pub(crate) timeout: Duration,
}

impl SourceSettings {
    /// Fill unset options from the HTTP source defaults.
    pub(crate) fn resolve(
        api_base_url: Option<String>,
        city_id: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Self {
        let defaults = HttpFleetSourceConfig::default();
        Self {
            api_base_url: api_base_url.unwrap_or(defaults.base_url),
            city_id: city_id.unwrap_or(defaults.city_id),
            timeout: timeout_secs.map_or(defaults.timeout, Duration::from_secs),
        }
    }

    fn http_config(&self) -> HttpFleetSourceConfig {
        HttpFleetSourceConfig::new(self.api_base_url.clone())
            .with_city_id(self.city_id.clone())
            .with_timeout(self.timeout)
    }
}

/// Builds the fleet source for the current invocation.
pub(crate) trait SourceBuilder {
    fn build(&self, settings: &SourceSettings) -> Result<Box<dyn FleetSource>, CliError>;
}

/// Builds an [`HttpFleetSource`] against the configured provider.
pub(crate) struct HttpSourceBuilder;

impl SourceBuilder for HttpSourceBuilder {
    fn build(&self, settings: &SourceSettings) -> Result<Box<dyn FleetSource>, CliError> {
        let source = HttpFleetSource::with_config(settings.http_config()).map_err(|source| {
            CliError::BuildFleetSource {
                base_url: settings.api_base_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(source))
    }
}
