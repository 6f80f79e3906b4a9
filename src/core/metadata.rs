use serde::{Deserialize, Serialize};

/// Trusted issuer values the `iss` claim of a credential is checked against.
///
/// `credential_issuer` is the OpenID4VCI `credential_issuer` identifier, which
/// some issuers use as `iss` instead of their DID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialIssuerMetadata {
    pub iss: String,
    #[serde(
        default,
        alias = "credential_issuer",
        skip_serializing_if = "Option::is_none"
    )]
    pub credential_issuer: Option<String>,
}

impl CredentialIssuerMetadata {
    pub fn new(iss: impl Into<String>) -> Self {
        Self {
            iss: iss.into(),
            credential_issuer: None,
        }
    }

    pub fn with_credential_issuer(mut self, credential_issuer: impl Into<String>) -> Self {
        self.credential_issuer = Some(credential_issuer.into());
        self
    }
}
