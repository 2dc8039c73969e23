#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//! # veridoc-client
//!
//! Client for the Veridoc document-recognition API.
//!
//! ## Features
//!
//! - **Client**: per-document OCR calls over a shared configuration
//! - **Dispatcher**: one generic, typed request pipeline ([`execute`])
//! - **Error handling**: structured errors callers can match on by kind
//! - **Observability**: structured logging via `tracing`
//!
//! ## Quick start
//!
//! ```ignore
//! use veridoc_client::{Client, Config, FileSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), veridoc_client::Error> {
//!     let config = Config::new("username", "password", "api-key");
//!     let client = Client::new(config);
//!
//!     let file = FileSource::open("card.jpg").await?;
//!     let card = client.ocr().identity_card(file).await?;
//!     println!("{:?}", card.read);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Cancellation
//!
//! Every call is a single future: dropping it aborts the in-flight request,
//! and the configured (or per-call) timeout bounds how long the transport may
//! block. Calls issued concurrently against one [`Config`] are independent;
//! the configuration is read-only after construction.

/// Tracing target for request dispatch operations.
pub const TRACING_TARGET: &str = "veridoc_client::request";

mod client;
mod request;

pub mod ocr;

pub use client::Client;
pub use ocr::{Ocr, OcrOptions};
pub use request::{API_KEY_HEADER, CLIENT_USER_AGENT, REQUEST_ID_HEADER};
pub use request::{RequestParameters, execute};
pub use veridoc_core::{
    BoxedError, Config, EncodedPayload, Error, ErrorKind, FileSource, RequestPayload, ResponseInfo,
    Result, Transport, encode_payload,
};
