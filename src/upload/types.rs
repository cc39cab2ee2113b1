use derivative::Derivative;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub const GENERIC_FAILURE: &str = "Upload failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Cat,
    Loaf,
}

impl Label {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Loaf => "loaf",
        }
    }

    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Cat => "🐱",
            Self::Loaf => "🍞",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a 2xx answer from the classification endpoint. The confidence is
/// kept exactly as reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: Label,
    pub confidence: f64,
}

#[derive(Debug, Error)]
pub enum UploadError {
    /// Non-2xx answer. Holds the server's `detail` or the generic message.
    #[error("{0}")]
    Rejected(String),
    #[error("{}", GENERIC_FAILURE)]
    MalformedResponse,
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to read {file}: {source}")]
    Read {
        file: String,
        #[source]
        source: std::io::Error,
    },
    /// The upload task went away without reporting.
    #[error("{}", GENERIC_FAILURE)]
    Aborted,
}

pub type ClassifyOutcome = Result<Classification, UploadError>;

#[derive(Derivative)]
#[derivative(Debug)]
enum ImageSource {
    Disk(PathBuf),
    Memory(#[derivative(Debug = "ignore")] Vec<u8>),
}

/// The picked image. Disk-backed files are only read once the upload runs.
#[derive(Debug)]
pub struct ImageFile {
    file_name: String,
    source: ImageSource,
}

impl ImageFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        Self {
            file_name,
            source: ImageSource::Disk(path),
        }
    }

    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            source: ImageSource::Memory(bytes),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Byte count, known only once the image is in memory. Never touches
    /// the filesystem.
    pub fn loaded_len(&self) -> Option<u64> {
        match &self.source {
            ImageSource::Disk(_) => None,
            ImageSource::Memory(bytes) => Some(bytes.len() as u64),
        }
    }

    pub fn mime(&self) -> mime_guess::Mime {
        mime_guess::from_path(&self.file_name).first_or_octet_stream()
    }

    pub async fn into_bytes(self) -> Result<(String, Vec<u8>), UploadError> {
        match self.source {
            ImageSource::Disk(path) => match tokio::fs::read(&path).await {
                Ok(bytes) => Ok((self.file_name, bytes)),
                Err(source) => Err(UploadError::Read {
                    file: self.file_name,
                    source,
                }),
            },
            ImageSource::Memory(bytes) => Ok((self.file_name, bytes)),
        }
    }

    /// Reads a disk-backed image into memory.
    pub async fn load(self) -> Result<ImageFile, UploadError> {
        let (file_name, bytes) = self.into_bytes().await?;
        Ok(Self::from_bytes(file_name, bytes))
    }
}
