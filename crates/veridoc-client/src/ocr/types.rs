//! Typed OCR response envelopes and document fields.

use serde::{Deserialize, Serialize};

/// A single recognized field with its confidence score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrField {
    /// Recognized text value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Model confidence in the recognition, 0.0 to 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Common response envelope for OCR endpoints.
///
/// Partially recognized documents decode cleanly: every field the service
/// omitted stays `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OcrResponse<T> {
    /// Machine-readable status label reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Human-readable explanation of the status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Fields recognized from the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<T>,
}

/// Recognized identity-card fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityCardRead {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_number: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<OcrField>,
}

/// Identity-card OCR result.
pub type IdentityCard = OcrResponse<IdentityCardRead>;

/// Recognized passport fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PassportRead {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_number: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<OcrField>,
}

/// Passport OCR result.
pub type Passport = OcrResponse<PassportRead>;

/// Recognized driving-license fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrivingLicenseRead {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_number: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_class: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<OcrField>,
}

/// Driving-license OCR result.
pub type DrivingLicense = OcrResponse<DrivingLicenseRead>;

/// Recognized invoice fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceRead {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<OcrField>,
}

/// Invoice OCR result.
pub type Invoice = OcrResponse<InvoiceRead>;

/// Recognized receipt fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReceiptRead {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<OcrField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<OcrField>,
}

/// Receipt OCR result.
pub type Receipt = OcrResponse<ReceiptRead>;
