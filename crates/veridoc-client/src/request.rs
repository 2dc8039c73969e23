//! Request dispatch: one authenticated multipart call against the API.

use std::time::Duration;

use base64::Engine;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;
use veridoc_core::{
    Config, Error, FileSource, RequestPayload, ResponseInfo, Result, encode_payload,
};

use crate::TRACING_TARGET;

/// Correlation-id header forwarded to the service when supplied.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// API-key header attached to every call.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Fixed client identifier sent as the `User-Agent` of every call.
pub const CLIENT_USER_AGENT: &str = concat!("veridoc-rust/", env!("CARGO_PKG_VERSION"));

/// Parameters for one API call.
///
/// Constructed fresh per call and consumed by [`execute`]; never reused.
#[derive(Debug)]
pub struct RequestParameters {
    url: String,
    request_id: Option<String>,
    timeout: Option<Duration>,
    payload: RequestPayload,
}

impl RequestParameters {
    /// Creates parameters targeting `url` with an empty payload.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            request_id: None,
            timeout: None,
            payload: RequestPayload::new(),
        }
    }

    /// Sets the correlation id forwarded as `x-request-id`.
    ///
    /// Empty values are treated as absent.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        let request_id = request_id.into();
        self.request_id = (!request_id.is_empty()).then_some(request_id);
        self
    }

    /// Overrides the configured timeout for this call only.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Files `source` under `field` in the multipart payload.
    pub fn with_field(mut self, field: impl Into<String>, source: FileSource) -> Self {
        self.payload.insert(field, source);
        self
    }

    /// Replaces the whole payload.
    pub fn with_payload(mut self, payload: RequestPayload) -> Self {
        self.payload = payload;
        self
    }

    /// Target URL of the call.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Correlation id, if one was supplied.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

/// Executes one call against the API and decodes the response into `T`.
///
/// The pipeline encodes the payload into a multipart body, builds an
/// authenticated POST request, submits it through the configured transport
/// and classifies the outcome:
///
/// - a 200 response decodes into `T`; a body that does not match `T` yields
///   `T::default()` rather than an error
/// - any other status is classified into a structured [`Error`] carrying
///   [`ResponseInfo`] extracted from the response body
/// - encoding, URL and transport failures surface as `FileCorrupted`,
///   `InvalidUrl` and `BadClient` respectively, before any response exists
///
/// The response body is fully consumed or dropped on every path before this
/// function returns. Nothing is retried.
pub async fn execute<T>(params: RequestParameters, config: &Config) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let RequestParameters {
        url,
        request_id,
        timeout,
        payload,
    } = params;

    let field_count = payload.len();
    let encoded = encode_payload(payload).await?;

    let parsed = Url::parse(&url).map_err(|e| {
        Error::invalid_url()
            .with_message(format!("invalid request URL '{url}'"))
            .with_source(e)
    })?;

    let mut request = reqwest::Request::new(Method::POST, parsed);

    let headers = request.headers_mut();
    headers.insert(
        AUTHORIZATION,
        basic_auth(config.username(), config.password())?,
    );
    headers.insert(API_KEY_HEADER, header_value(config.api_key())?);
    headers.insert(CONTENT_TYPE, header_value(encoded.content_type())?);
    if let Some(id) = request_id.as_deref() {
        headers.insert(REQUEST_ID_HEADER, header_value(id)?);
    }
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

    *request.body_mut() = Some(encoded.into_body().into());
    *request.timeout_mut() = Some(timeout.unwrap_or_else(|| config.timeout()));

    tracing::debug!(
        target: TRACING_TARGET,
        url = %request.url(),
        fields = field_count,
        request_id = request_id.as_deref().unwrap_or_default(),
        "Dispatching request"
    );

    let response = config.transport().execute(request).await.map_err(|e| {
        Error::bad_client()
            .with_message("transport failed before a response was received")
            .with_source(e)
    })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(classify_failure(status, response).await);
    }

    tracing::debug!(
        target: TRACING_TARGET,
        status = status.as_u16(),
        "Received OK response"
    );

    // Bodies that do not match `T` fall back to the default value instead of
    // failing the call.
    match response.json::<T>().await {
        Ok(decoded) => Ok(decoded),
        Err(e) => {
            tracing::warn!(
                target: TRACING_TARGET,
                error = %e,
                "OK response body did not match the expected shape, returning default"
            );
            Ok(T::default())
        }
    }
}

/// Classifies a non-OK response into a structured error.
async fn classify_failure(status: StatusCode, response: reqwest::Response) -> Error {
    let code = status.as_u16();

    let body: serde_json::Map<String, serde_json::Value> = match response.json().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(
                target: TRACING_TARGET,
                status = code,
                "Non-OK response body was not a JSON object"
            );
            return Error::invalid_response()
                .with_message("failed to parse the API response body")
                .with_source(e)
                .with_response(ResponseInfo::with_code(code));
        }
    };

    let reason = body
        .get("reason")
        .and_then(serde_json::Value::as_str)
        .filter(|reason| !reason.is_empty())
        .or_else(|| body.get("message").and_then(serde_json::Value::as_str))
        .map(str::to_owned);
    let status_label = body
        .get("status")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned);

    tracing::warn!(
        target: TRACING_TARGET,
        status = code,
        reason = reason.as_deref().unwrap_or_default(),
        "API returned a non-OK response"
    );

    Error::api_error()
        .with_message("the API returned a non-OK response")
        .with_response(ResponseInfo {
            code,
            status: status_label,
            reason,
        })
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| {
        Error::invalid_url()
            .with_message("header value cannot be used to build the request")
            .with_source(e)
    })
}

fn basic_auth(username: &str, password: &str) -> Result<HeaderValue> {
    let token = base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
    let mut value = header_value(&format!("Basic {token}"))?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use veridoc_core::ErrorKind;

    use super::*;

    #[test]
    fn test_empty_request_id_is_absent() {
        let params = RequestParameters::new("http://localhost").with_request_id("");
        assert_eq!(params.request_id(), None);

        let params = RequestParameters::new("http://localhost").with_request_id("samples");
        assert_eq!(params.request_id(), Some("samples"));
    }

    #[test]
    fn test_with_field_builds_payload() {
        let params = RequestParameters::new("http://localhost")
            .with_field("image", FileSource::from_bytes(&b"bytes"[..], "a.jpg"))
            .with_field("reverse", FileSource::from_bytes(&b"bytes"[..], "b.jpg"));

        assert_eq!(params.payload.len(), 2);
    }

    #[test]
    fn test_basic_auth_value() {
        let value = basic_auth("username", "password").unwrap();
        // base64("username:password")
        assert_eq!(value.to_str().unwrap(), "Basic dXNlcm5hbWU6cGFzc3dvcmQ=");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_header_value_rejects_control_bytes() {
        let err = header_value("bad\nvalue").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUrl);
    }
}
