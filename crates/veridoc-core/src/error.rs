//! Structured error handling for Veridoc API calls.

use strum::{AsRefStr, Display, EnumString, IntoStaticStr};
use thiserror::Error;

/// Type alias for boxed dynamic errors that can be sent across threads.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for Results with our custom Error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Categories of failure for one Veridoc API call.
///
/// The kinds are mutually exclusive; callers match on them to decide how to
/// react. [`ErrorKind::ApiError`] is the only kind raised from a response the
/// service actually parsed and answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// A payload file could not be read or encoded into the request body.
    FileCorrupted,
    /// The request could not be built from the given URL.
    InvalidUrl,
    /// The transport failed before any response was received.
    BadClient,
    /// A non-OK response was received but its body was not a JSON object.
    InvalidResponse,
    /// The service answered with a non-OK response it described in the body.
    ApiError,
}

/// Details of a response actually received from the service.
///
/// `code` stays 0 when the call failed before any response arrived; `status`
/// and `reason` are only filled from fields the response body carried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseInfo {
    /// HTTP status code of the received response.
    pub code: u16,
    /// Machine-readable status label from the response body.
    pub status: Option<String>,
    /// Human-readable reason from the response body.
    pub reason: Option<String>,
}

impl ResponseInfo {
    /// Creates response info carrying only the status code.
    pub fn with_code(code: u16) -> Self {
        Self {
            code,
            ..Self::default()
        }
    }

    /// Whether a response was actually received from the service.
    pub fn received(&self) -> bool {
        self.code != 0
    }
}

/// Structured error type with classification and response context.
#[must_use]
#[derive(Debug, Error)]
#[error("[{kind}]{}", message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Primary error message.
    pub message: Option<String>,
    /// Underlying source error, if any.
    #[source]
    pub source: Option<BoxedError>,
    /// Response details when the service answered before the failure.
    pub response: ResponseInfo,
}

impl Error {
    /// Creates a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
            response: ResponseInfo::default(),
        }
    }

    /// Adds a message to this error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the source of the error.
    pub fn with_source(mut self, source: impl Into<BoxedError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attaches details of the received response.
    pub fn with_response(mut self, response: ResponseInfo) -> Self {
        self.response = response;
        self
    }

    /// Creates a new file corrupted error.
    pub fn file_corrupted() -> Self {
        Self::new(ErrorKind::FileCorrupted)
    }

    /// Creates a new invalid URL error.
    pub fn invalid_url() -> Self {
        Self::new(ErrorKind::InvalidUrl)
    }

    /// Creates a new bad client error.
    pub fn bad_client() -> Self {
        Self::new(ErrorKind::BadClient)
    }

    /// Creates a new invalid response error.
    pub fn invalid_response() -> Self {
        Self::new(ErrorKind::InvalidResponse)
    }

    /// Creates a new API error.
    pub fn api_error() -> Self {
        Self::new(ErrorKind::ApiError)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error kind as a string.
    pub fn kind_str(&self) -> &'static str {
        self.kind.into()
    }
}
