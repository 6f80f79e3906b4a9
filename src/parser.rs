//! Ingestion of credential JWTs and Credential Endpoint responses from JSON
//! text.
//!
//! Unknown members are tolerated everywhere. Only text that is not JSON, or
//! JSON that cannot hold the expected object, is rejected.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::core::credential::{CredentialEndpointResponse, W3CCredentialJwtV1};

/// Failure to parse an input document.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The document is not valid JSON, or does not have the expected shape.
    #[error("invalid {what}: {source}")]
    Invalid {
        what: &'static str,
        #[source]
        source: serde_path_to_error::Error<serde_json::Error>,
    },

    /// The document is followed by something other than whitespace.
    #[error("invalid {what}: {source}")]
    TrailingCharacters {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ParseError {
    /// Path to the value that could not be deserialized, `.` for the root.
    pub fn path(&self) -> String {
        match self {
            Self::Invalid { source, .. } => source.path().to_string(),
            Self::TrailingCharacters { .. } => ".".to_owned(),
        }
    }
}

fn parse<T: DeserializeOwned>(what: &'static str, json: &str) -> Result<T, ParseError> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let value = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|source| ParseError::Invalid { what, source })?;
    deserializer
        .end()
        .map_err(|source| ParseError::TrailingCharacters { what, source })?;
    Ok(value)
}

/// Parses a decoded credential JWT: an object with a `payload` object and an
/// optional `header` object.
pub fn parse_credential_jwt(json: &str) -> Result<W3CCredentialJwtV1, ParseError> {
    parse("credential JWT", json)
}

/// Parses a Credential Endpoint response.
///
/// A missing or malformed `credentials` member does not fail: it is left
/// absent on the returned response.
pub fn parse_credential_endpoint_response(
    json: &str,
) -> Result<CredentialEndpointResponse, ParseError> {
    parse("credential endpoint response", json)
}

/// Like [parse_credential_jwt], discarding the error.
pub fn parse_credential_jwt_or_none(json: &str) -> Option<W3CCredentialJwtV1> {
    parse_credential_jwt(json)
        .map_err(|e| debug!("unable to parse credential JWT: {e}"))
        .ok()
}

/// Like [parse_credential_endpoint_response], discarding the error.
pub fn parse_credential_endpoint_response_or_none(
    json: &str,
) -> Option<CredentialEndpointResponse> {
    parse_credential_endpoint_response(json)
        .map_err(|e| debug!("unable to parse credential endpoint response: {e}"))
        .ok()
}
