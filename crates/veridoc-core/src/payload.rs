//! Request payload types: named file sources for multipart upload.

use std::fmt;
use std::path::Path;

use bytes::Bytes;
use tokio::fs::File;
use tokio::io::AsyncRead;

use crate::error::{Error, Result};

/// A readable byte source filed under a name in a request payload.
///
/// The encoder reads the source to end-of-stream; it never closes anything
/// beyond dropping what the caller moved in, so handles the caller still
/// holds stay untouched.
pub struct FileSource {
    file_name: String,
    reader: Box<dyn AsyncRead + Send + Unpin>,
}

impl FileSource {
    /// Opens the file at `path`, deriving the part file name from its base
    /// name.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).await.map_err(|e| {
            Error::file_corrupted()
                .with_message(format!("failed to open '{}'", path.display()))
                .with_source(e)
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::from_reader(file, file_name))
    }

    /// Wraps an already-open file under an explicit part file name.
    pub fn from_file(file: File, file_name: impl Into<String>) -> Self {
        Self::from_reader(file, file_name)
    }

    /// Uses an in-memory buffer as the source.
    pub fn from_bytes(bytes: impl Into<Bytes>, file_name: impl Into<String>) -> Self {
        Self::from_reader(std::io::Cursor::new(bytes.into()), file_name)
    }

    /// Wraps an arbitrary async byte stream.
    pub fn from_reader(
        reader: impl AsyncRead + Send + Unpin + 'static,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            reader: Box::new(reader),
        }
    }

    /// Part file name recorded for this source.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub(crate) fn into_parts(self) -> (String, Box<dyn AsyncRead + Send + Unpin>) {
        (self.file_name, self.reader)
    }
}

impl fmt::Debug for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSource")
            .field("file_name", &self.file_name)
            .finish_non_exhaustive()
    }
}

/// Mapping of unique field names to file sources for one request.
///
/// Field names are unique; filing a source under an existing name replaces
/// the previous source. Built fresh per call and consumed by the encoder.
#[derive(Debug, Default)]
pub struct RequestPayload {
    fields: Vec<(String, FileSource)>,
}

impl RequestPayload {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `source` under `field`, replacing any source already filed
    /// there.
    pub fn with_field(mut self, field: impl Into<String>, source: FileSource) -> Self {
        self.insert(field, source);
        self
    }

    /// Files `source` under `field` in place.
    pub fn insert(&mut self, field: impl Into<String>, source: FileSource) {
        let field = field.into();
        self.fields.retain(|(name, _)| *name != field);
        self.fields.push((field, source));
    }

    /// Number of fields in the payload.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the payload has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in filing order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub(crate) fn into_fields(self) -> Vec<(String, FileSource)> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_insert_keeps_fields_unique() {
        let payload = RequestPayload::new()
            .with_field("image", FileSource::from_bytes(&b"first"[..], "a.jpg"))
            .with_field("scan", FileSource::from_bytes(&b"other"[..], "b.jpg"))
            .with_field("image", FileSource::from_bytes(&b"second"[..], "c.jpg"));

        assert_eq!(payload.len(), 2);
        let names: Vec<&str> = payload.field_names().collect();
        assert_eq!(names, vec!["scan", "image"]);
    }

    #[test]
    fn test_empty_payload() {
        let payload = RequestPayload::new();
        assert!(payload.is_empty());
        assert_eq!(payload.len(), 0);
    }

    #[tokio::test]
    async fn test_open_derives_file_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"content").unwrap();

        let source = FileSource::open(file.path()).await.unwrap();
        let expected = file.path().file_name().unwrap().to_string_lossy();
        assert_eq!(source.file_name(), expected);
    }

    #[tokio::test]
    async fn test_open_missing_file_is_file_corrupted() {
        let err = FileSource::open("/nonexistent/definitely-missing.jpg")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::FileCorrupted);
        assert!(!err.response.received());
    }
}
