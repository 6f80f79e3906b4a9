use core::fmt;

use serde::{Deserialize, Serialize};

/// Profile violations reported by the credential verifiers.
///
/// The serialized form is the stable identifier shared with other
/// implementations of the Velocity profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Unsupported or missing signing algorithm.
    #[serde(rename = "invalid_alg")]
    InvalidAlg,

    /// Key ID is missing or not prefixed with `did:velocity:v2`.
    #[serde(rename = "invalid_kid")]
    InvalidKid,

    /// Credential has neither `sub: "did:jwk"` nor a `cnf` claim.
    #[serde(rename = "sub_or_cnf_missing")]
    SubOrCnfMissing,

    /// `iss` claim does not match the expected issuer metadata.
    #[serde(rename = "unexpected_credential_payload_iss")]
    UnexpectedCredentialPayloadIss,

    /// Unexpected or malformed issuer metadata.
    ///
    /// Reserved: none of the current verifiers raise it.
    #[serde(rename = "unexpected_credential_credential_issuer_metadata")]
    UnexpectedCredentialIssuerMetadata,

    /// Credential lacks a `credentialStatus` entry, required for revocation.
    #[serde(rename = "missing_credential_status")]
    MissingCredentialStatus,

    /// Credential lacks a `credentialSchema` entry.
    #[serde(rename = "missing_credential_schema")]
    MissingCredentialSchema,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidAlg => "invalid_alg",
            Self::InvalidKid => "invalid_kid",
            Self::SubOrCnfMissing => "sub_or_cnf_missing",
            Self::UnexpectedCredentialPayloadIss => "unexpected_credential_payload_iss",
            Self::UnexpectedCredentialIssuerMetadata => {
                "unexpected_credential_credential_issuer_metadata"
            }
            Self::MissingCredentialStatus => "missing_credential_status",
            Self::MissingCredentialSchema => "missing_credential_schema",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of the path to an offending value: an object member or an array
/// index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Name(String),
}

impl From<&str> for PathSegment {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl From<usize> for PathSegment {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Renders a path JSON-pointer style, e.g. `/credentials/0/header/alg`.
///
/// The empty path renders as the empty string, like the root pointer.
pub fn display_path(path: &[PathSegment]) -> String {
    path.iter().fold(String::new(), |mut acc, segment| {
        acc.push('/');
        // RFC 6901 escaping.
        acc.push_str(&segment.to_string().replace('~', "~0").replace('/', "~1"));
        acc
    })
}

/// A single profile violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{code} at '{}': {message}", display_path(.path))]
pub struct VerificationError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default)]
    pub path: Vec<PathSegment>,
}

/// Builds a [VerificationError].
pub fn build_error(
    code: ErrorCode,
    message: impl Into<String>,
    path: Vec<PathSegment>,
) -> VerificationError {
    VerificationError {
        code,
        message: message.into(),
        path,
    }
}
