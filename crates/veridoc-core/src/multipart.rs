//! Multipart/form-data encoding of request payloads.

use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::AsyncReadExt;
use uuid::Uuid;

use crate::TRACING_TARGET;
use crate::error::{Error, Result};
use crate::payload::RequestPayload;

/// A fully terminated multipart body and its associated content-type value.
#[derive(Debug, Clone)]
pub struct EncodedPayload {
    content_type: String,
    body: Bytes,
}

impl EncodedPayload {
    /// Value for the `Content-Type` header, boundary included.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// The encoded body bytes.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consumes the payload, returning the body bytes.
    pub fn into_body(self) -> Bytes {
        self.body
    }
}

/// Serializes `payload` into a single `multipart/form-data` body.
///
/// Every field present in the payload appears exactly once in the output,
/// tagged with its field name and the source's file name, with the source
/// read to end-of-stream. The boundary token is freshly generated per call
/// and embedded in the returned content-type value.
///
/// Fails with [`crate::ErrorKind::FileCorrupted`] when a source cannot be
/// read. Content is copied as-is; no size or MIME validation happens here.
pub async fn encode_payload(payload: RequestPayload) -> Result<EncodedPayload> {
    let boundary = Uuid::new_v4().simple().to_string();
    let field_count = payload.len();
    let mut body = BytesMut::new();

    for (field, source) in payload.into_fields() {
        let (file_name, mut reader) = source.into_parts();

        body.put_slice(format!("--{boundary}\r\n").as_bytes());
        body.put_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                escape_quoted(&field),
                escape_quoted(&file_name),
            )
            .as_bytes(),
        );
        body.put_slice(b"Content-Type: application/octet-stream\r\n\r\n");

        let mut content = Vec::new();
        reader.read_to_end(&mut content).await.map_err(|e| {
            Error::file_corrupted()
                .with_message(format!("failed to read payload field '{field}'"))
                .with_source(e)
        })?;
        body.put_slice(&content);
        body.put_slice(b"\r\n");
    }

    body.put_slice(format!("--{boundary}--\r\n").as_bytes());

    tracing::debug!(
        target: TRACING_TARGET,
        fields = field_count,
        bytes = body.len(),
        "Encoded multipart payload"
    );

    Ok(EncodedPayload {
        content_type: format!("multipart/form-data; boundary={boundary}"),
        body: body.freeze(),
    })
}

/// Escapes backslashes and quotes in `Content-Disposition` parameter values.
fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use tokio::io::{AsyncRead, ReadBuf};

    use super::*;
    use crate::payload::FileSource;

    /// Reader whose first poll always fails.
    struct BrokenReader;

    impl AsyncRead for BrokenReader {
        fn poll_read(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &mut ReadBuf<'_>,
        ) -> Poll<std::io::Result<()>> {
            Poll::Ready(Err(std::io::Error::other("read failed")))
        }
    }

    fn boundary_of(encoded: &EncodedPayload) -> String {
        encoded
            .content_type()
            .split("boundary=")
            .nth(1)
            .expect("content type carries a boundary")
            .to_string()
    }

    fn count_parts(encoded: &EncodedPayload) -> usize {
        let body = String::from_utf8(encoded.body().to_vec()).unwrap();
        let opener = format!("--{}\r\n", boundary_of(encoded));
        body.matches(&opener).count()
    }

    #[tokio::test]
    async fn test_one_part_per_field() {
        let payload = RequestPayload::new()
            .with_field("image", FileSource::from_bytes(&b"front"[..], "front.jpg"))
            .with_field("reverse", FileSource::from_bytes(&b"back"[..], "back.jpg"));

        let encoded = encode_payload(payload).await.unwrap();
        let body = String::from_utf8(encoded.body().to_vec()).unwrap();

        assert_eq!(count_parts(&encoded), 2);
        assert!(body.contains("name=\"image\"; filename=\"front.jpg\""));
        assert!(body.contains("name=\"reverse\"; filename=\"back.jpg\""));
        assert!(body.contains("front"));
        assert!(body.contains("back"));
    }

    #[tokio::test]
    async fn test_body_is_terminated() {
        let payload = RequestPayload::new()
            .with_field("image", FileSource::from_bytes(&b"bytes"[..], "scan.png"));

        let encoded = encode_payload(payload).await.unwrap();
        let body = String::from_utf8(encoded.body().to_vec()).unwrap();
        let boundary = boundary_of(&encoded);

        assert!(body.ends_with(&format!("--{boundary}--\r\n")));
        assert!(
            encoded
                .content_type()
                .starts_with("multipart/form-data; boundary=")
        );
    }

    #[tokio::test]
    async fn test_empty_payload_encodes_zero_parts() {
        let encoded = encode_payload(RequestPayload::new()).await.unwrap();
        assert_eq!(count_parts(&encoded), 0);

        let body = String::from_utf8(encoded.body().to_vec()).unwrap();
        let boundary = boundary_of(&encoded);
        assert_eq!(body, format!("--{boundary}--\r\n"));
    }

    #[tokio::test]
    async fn test_file_contents_copied_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not actually a jpeg").unwrap();

        let source = FileSource::open(file.path()).await.unwrap();
        let payload = RequestPayload::new().with_field("image", source);

        let encoded = encode_payload(payload).await.unwrap();
        let body = String::from_utf8(encoded.body().to_vec()).unwrap();
        assert!(body.contains("not actually a jpeg"));
    }

    #[tokio::test]
    async fn test_unreadable_source_is_file_corrupted() {
        let payload = RequestPayload::new()
            .with_field("image", FileSource::from_reader(BrokenReader, "broken.jpg"));

        let err = encode_payload(payload).await.unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::FileCorrupted);
        assert!(err.source.is_some());
        assert!(!err.response.received());
    }

    #[tokio::test]
    async fn test_quotes_in_names_are_escaped() {
        let payload = RequestPayload::new().with_field(
            "image",
            FileSource::from_bytes(&b"x"[..], "we\"ird\\name.jpg"),
        );

        let encoded = encode_payload(payload).await.unwrap();
        let body = String::from_utf8(encoded.body().to_vec()).unwrap();
        assert!(body.contains("filename=\"we\\\"ird\\\\name.jpg\""));
    }

    #[tokio::test]
    async fn test_fresh_boundary_per_call() {
        let first = encode_payload(RequestPayload::new()).await.unwrap();
        let second = encode_payload(RequestPayload::new()).await.unwrap();
        assert_ne!(boundary_of(&first), boundary_of(&second));
    }
}
