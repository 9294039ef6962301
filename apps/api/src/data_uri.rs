//! Parsing for `data:<mime-type>;base64,<payload>` URIs.
//!
//! The Presentation Layer reads the user-selected résumé file and sends it in
//! this encoding; the payload is forwarded to the model API as a base64
//! document block, so it is kept encoded and only decoded here to verify it.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataUriError {
    #[error("not a data URI")]
    MissingScheme,

    #[error("data URI has no payload")]
    MissingPayload,

    #[error("only base64-encoded data URIs are supported")]
    NotBase64Encoded,

    #[error("payload is not valid base64")]
    InvalidPayload,
}

/// A parsed data URI. `data` stays base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub media_type: String,
    pub data: String,
}

impl DataUri {
    pub fn parse(input: &str) -> Result<Self, DataUriError> {
        let rest = input
            .strip_prefix("data:")
            .ok_or(DataUriError::MissingScheme)?;
        let (header, payload) = rest.split_once(',').ok_or(DataUriError::MissingPayload)?;
        let media_type = header
            .strip_suffix(";base64")
            .ok_or(DataUriError::NotBase64Encoded)?;

        if payload.is_empty() {
            return Err(DataUriError::MissingPayload);
        }
        BASE64
            .decode(payload)
            .map_err(|_| DataUriError::InvalidPayload)?;

        Ok(DataUri {
            media_type: if media_type.is_empty() {
                "application/octet-stream".to_string()
            } else {
                media_type.to_string()
            },
            data: payload.to_string(),
        })
    }
}
