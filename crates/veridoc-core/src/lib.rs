#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//! # veridoc-core
//!
//! Foundational types for the Veridoc SDK. This crate carries everything a
//! call needs before it touches the network: credentials and transport
//! configuration ([`Config`]), the payload model ([`RequestPayload`],
//! [`FileSource`]), the multipart encoder ([`encode_payload`]) and the
//! structured error taxonomy ([`Error`], [`ErrorKind`], [`ResponseInfo`]).
//!
//! The request dispatcher and the per-document endpoint wrappers live in
//! `veridoc-client`.

/// Tracing target for payload encoding operations.
pub const TRACING_TARGET: &str = "veridoc_core::payload";

mod config;
mod error;
mod multipart;
mod payload;
mod transport;

pub use config::{Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{BoxedError, Error, ErrorKind, ResponseInfo, Result};
pub use multipart::{EncodedPayload, encode_payload};
pub use payload::{FileSource, RequestPayload};
pub use transport::Transport;
