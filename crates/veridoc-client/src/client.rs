//! Top-level client bundling configuration and service handles.

use veridoc_core::Config;

use crate::ocr::Ocr;

/// Entry point for the Veridoc API.
///
/// Bundles the shared [`Config`] with the service handles. Cloning is cheap;
/// all clones share the same transport, and concurrent calls through one
/// client are independent.
///
/// # Examples
///
/// ```ignore
/// use veridoc_client::{Client, Config, FileSource};
///
/// let config = Config::new("username", "password", "api-key");
/// let client = Client::new(config);
///
/// let file = FileSource::open("card.jpg").await?;
/// let card = client.ocr().identity_card(file).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
    ocr: Ocr,
}

impl Client {
    /// Creates a client from `config`.
    pub fn new(config: Config) -> Self {
        let ocr = Ocr::new(config.clone());
        Self { config, ocr }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// OCR endpoints.
    pub fn ocr(&self) -> &Ocr {
        &self.ocr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_bundles_services() {
        let client = Client::new(
            Config::new("username", "password", "api-key").with_base_url("http://localhost:8080"),
        );

        assert_eq!(client.config().base_url(), "http://localhost:8080");

        let cloned = client.clone();
        assert_eq!(cloned.config().base_url(), client.config().base_url());
    }
}
