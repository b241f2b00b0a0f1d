use thiserror::Error;

/// Errors from [`crate::source::FleetSource`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FleetSourceError {
    /// The request could not reach the provider.
    #[error("network error contacting {url}: {message}")]
    NetworkError {
        /// Requested URL.
        url: String,
        /// Underlying transport message.
        message: String,
    },
    /// The provider did not answer within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The provider answered with a non-success status.
    #[error("{url} returned HTTP {status}: {message}")]
    HttpError {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Status description.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to decode provider response: {message}")]
    ParseError {
        /// Decoder message.
        message: String,
    },
    /// A zone geometry could not be converted into polygons.
    #[error("invalid zone geometry: {message}")]
    InvalidGeometry {
        /// Description of the offending geometry.
        message: String,
    },
    /// A request URL could not be built from the configuration.
    #[error("invalid request URL: {message}")]
    InvalidUrl {
        /// Parser message.
        message: String,
    },
}
