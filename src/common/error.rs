use thiserror::Error;

use super::metadata::ECLevel;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum QRError {
    // Encoding
    #[error("Empty payload")]
    EmptyPayload,
    #[error("Payload too long for error correction level {0:?}")]
    DataTooLong(ECLevel),
    #[error("Encoder rejected payload: {0}")]
    EncodingFailed(String),

    // Drawing
    #[error("Surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error("Invalid scale factor {0}, expected 1..=16")]
    InvalidScale(u32),

    // Style
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
    #[error("Invalid error correction level: {0:?}")]
    InvalidECLevel(String),

    // Style store
    #[error("Style not found: {0}")]
    StyleNotFound(String),
    #[error("Style store failure: {0}")]
    Storage(String),
}

impl QRError {
    /// True for failures raised while producing the module matrix. The caller has to change
    /// the payload or the error correction level, retrying as-is cannot succeed.
    pub fn is_encoding_error(&self) -> bool {
        matches!(self, Self::EmptyPayload | Self::DataTooLong(_) | Self::EncodingFailed(_))
    }
}

impl From<std::io::Error> for QRError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for QRError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<image::ImageError> for QRError {
    fn from(err: image::ImageError) -> Self {
        Self::Storage(err.to_string())
    }
}

pub type QRResult<T> = Result<T, QRError>;
