//! Reads an identity-card image and prints the recognized fields.
//!
//! Usage:
//!
//! ```sh
//! VERIDOC_USERNAME=... VERIDOC_PASSWORD=... VERIDOC_API_KEY=... \
//!     cargo run --example read_identity_card -- path/to/card.jpg
//! ```

use veridoc_client::{Client, Config, FileSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .expect("usage: read_identity_card <image-path>");

    let config = Config::new(
        std::env::var("VERIDOC_USERNAME")?,
        std::env::var("VERIDOC_PASSWORD")?,
        std::env::var("VERIDOC_API_KEY")?,
    );
    let client = Client::new(config);

    let file = FileSource::open(&path).await?;
    let card = client.ocr().identity_card(file).await?;

    println!("{}", serde_json::to_string_pretty(&card)?);

    Ok(())
}
