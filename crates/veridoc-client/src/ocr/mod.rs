//! Document-type OCR calls.
//!
//! Thin wrappers over the request dispatcher: each call joins its endpoint
//! path onto the configured base URL, files the source under the `image`
//! field and decodes the response into the endpoint's typed result.

use std::time::Duration;

use serde::de::DeserializeOwned;
use veridoc_core::{Config, FileSource, Result};

use crate::request::{RequestParameters, execute};

mod types;

pub use types::{
    DrivingLicense, DrivingLicenseRead, IdentityCard, IdentityCardRead, Invoice, InvoiceRead,
    OcrField, OcrResponse, Passport, PassportRead, Receipt, ReceiptRead,
};

/// Tracing target for OCR operations.
pub const TRACING_TARGET: &str = "veridoc_client::ocr";

/// Multipart field every OCR endpoint expects the document under.
const IMAGE_FIELD: &str = "image";

/// Per-call options for OCR endpoints.
#[derive(Debug, Clone, Default)]
pub struct OcrOptions {
    request_id: Option<String>,
    timeout: Option<Duration>,
}

impl OcrOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the correlation id forwarded with the call.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Overrides the configured timeout for the call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// OCR endpoints over a shared configuration.
///
/// Obtained from [`crate::Client::ocr`]; cheap to clone.
#[derive(Debug, Clone)]
pub struct Ocr {
    config: Config,
}

impl Ocr {
    /// Creates an OCR handle using `config`.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Reads an identity-card image.
    pub async fn identity_card(&self, file: FileSource) -> Result<IdentityCard> {
        self.read_document("ocr/v1/identity-card", file, OcrOptions::new())
            .await
    }

    /// Reads an identity-card image with per-call options.
    pub async fn identity_card_with_options(
        &self,
        file: FileSource,
        options: OcrOptions,
    ) -> Result<IdentityCard> {
        self.read_document("ocr/v1/identity-card", file, options)
            .await
    }

    /// Reads a passport image.
    pub async fn passport(&self, file: FileSource) -> Result<Passport> {
        self.read_document("ocr/v1/passport", file, OcrOptions::new())
            .await
    }

    /// Reads a passport image with per-call options.
    pub async fn passport_with_options(
        &self,
        file: FileSource,
        options: OcrOptions,
    ) -> Result<Passport> {
        self.read_document("ocr/v1/passport", file, options).await
    }

    /// Reads a driving-license image.
    pub async fn driving_license(&self, file: FileSource) -> Result<DrivingLicense> {
        self.read_document("ocr/v1/driving-license", file, OcrOptions::new())
            .await
    }

    /// Reads a driving-license image with per-call options.
    pub async fn driving_license_with_options(
        &self,
        file: FileSource,
        options: OcrOptions,
    ) -> Result<DrivingLicense> {
        self.read_document("ocr/v1/driving-license", file, options)
            .await
    }

    /// Reads an invoice document.
    pub async fn invoice(&self, file: FileSource) -> Result<Invoice> {
        self.read_document("ocr/v1/invoice", file, OcrOptions::new())
            .await
    }

    /// Reads an invoice document with per-call options.
    pub async fn invoice_with_options(
        &self,
        file: FileSource,
        options: OcrOptions,
    ) -> Result<Invoice> {
        self.read_document("ocr/v1/invoice", file, options).await
    }

    /// Reads a receipt image.
    pub async fn receipt(&self, file: FileSource) -> Result<Receipt> {
        self.read_document("ocr/v1/receipt", file, OcrOptions::new())
            .await
    }

    /// Reads a receipt image with per-call options.
    pub async fn receipt_with_options(
        &self,
        file: FileSource,
        options: OcrOptions,
    ) -> Result<Receipt> {
        self.read_document("ocr/v1/receipt", file, options).await
    }

    /// Reads a document at an arbitrary OCR endpoint path.
    ///
    /// Escape hatch for endpoints without a dedicated wrapper; `T` must match
    /// the endpoint's response shape.
    pub async fn read_document<T>(
        &self,
        endpoint: &str,
        file: FileSource,
        options: OcrOptions,
    ) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        tracing::debug!(
            target: TRACING_TARGET,
            endpoint,
            file_name = file.file_name(),
            "Reading document"
        );

        let mut params =
            RequestParameters::new(self.config.endpoint(endpoint)).with_field(IMAGE_FIELD, file);
        if let Some(request_id) = options.request_id {
            params = params.with_request_id(request_id);
        }
        if let Some(timeout) = options.timeout {
            params = params.with_timeout(timeout);
        }

        execute(params, &self.config).await
    }
}
