//! Pluggable HTTP send capability.

use async_trait::async_trait;

use crate::error::BoxedError;

/// Executes a prepared HTTP request.
///
/// The dispatcher builds complete [`reqwest::Request`] values; a transport
/// only performs the wire exchange and reports send-time failures. Tests
/// substitute mock transports for the network.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request, returning the raw response or the send-time error.
    async fn execute(
        &self,
        request: reqwest::Request,
    ) -> std::result::Result<reqwest::Response, BoxedError>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn execute(
        &self,
        request: reqwest::Request,
    ) -> std::result::Result<reqwest::Response, BoxedError> {
        reqwest::Client::execute(self, request)
            .await
            .map_err(Into::into)
    }
}
