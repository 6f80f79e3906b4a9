use super::{error::PathSegment, metadata::CredentialIssuerMetadata};

/// State threaded through a verification run.
///
/// A context is never mutated: descending into a value produces a new context
/// through [VerificationContext::with_path], leaving the caller's one intact
/// for sibling checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerificationContext<'a> {
    pub credential_issuer_metadata: Option<&'a CredentialIssuerMetadata>,
    pub path: Vec<PathSegment>,
}

impl<'a> VerificationContext<'a> {
    pub fn new(credential_issuer_metadata: Option<&'a CredentialIssuerMetadata>) -> Self {
        Self {
            credential_issuer_metadata,
            path: Vec::new(),
        }
    }

    /// Returns a copy of this context with `extension` appended to its path.
    pub fn with_path<I>(&self, extension: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PathSegment>,
    {
        let mut path = self.path.clone();
        path.extend(extension.into_iter().map(Into::into));
        Self {
            credential_issuer_metadata: self.credential_issuer_metadata,
            path,
        }
    }

    /// The path of this context extended with `extension`, for use in an error.
    pub fn path_with<I>(&self, extension: I) -> Vec<PathSegment>
    where
        I: IntoIterator,
        I::Item: Into<PathSegment>,
    {
        self.with_path(extension).path
    }
}
