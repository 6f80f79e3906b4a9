//! Pure checks of the Velocity profile over a single credential.
//!
//! Each check inspects its own claims and reports at most one
//! [VerificationError]; none of them fail on data shape. They are gathered
//! behind [CredentialVerifiers] so that a caller, typically a test, can
//! substitute any one of them without touching the others.

use super::{
    context::VerificationContext, credential::W3CCredentialJwtV1, error::VerificationError,
};

pub mod alg;
pub mod credential_schema;
pub mod credential_status;
pub mod iss;
pub mod kid;
pub mod sub;

pub use alg::alg_is_supported;
pub use credential_schema::credential_schema;
pub use credential_status::credential_status;
pub use iss::{
    iss_claim_matches_either_metadata_or_credential_issuer, iss_claim_matches_metadata,
};
pub use kid::kid_claim_is_velocity_v2;
pub use sub::sub_is_did_jwk_or_cnf;

/// A single check over a value of type `T`.
pub type Verifier<T> = fn(&T, &VerificationContext<'_>) -> Option<VerificationError>;

/// The rule set applied to each credential of a Credential Response.
///
/// Every method defaults to the production check of the same name.
pub trait CredentialVerifiers {
    /// See default implementation [alg_is_supported].
    fn alg_is_supported(
        &self,
        credential: &W3CCredentialJwtV1,
        context: &VerificationContext<'_>,
    ) -> Option<VerificationError> {
        alg_is_supported(credential, context)
    }

    /// See default implementation [credential_schema].
    fn credential_schema(
        &self,
        credential: &W3CCredentialJwtV1,
        context: &VerificationContext<'_>,
    ) -> Option<VerificationError> {
        credential_schema(credential, context)
    }

    /// See default implementation [credential_status].
    fn credential_status(
        &self,
        credential: &W3CCredentialJwtV1,
        context: &VerificationContext<'_>,
    ) -> Option<VerificationError> {
        credential_status(credential, context)
    }

    /// See default implementation [iss_claim_matches_either_metadata_or_credential_issuer].
    fn iss_claim_matches_either_metadata_or_credential_issuer(
        &self,
        credential: &W3CCredentialJwtV1,
        context: &VerificationContext<'_>,
    ) -> Option<VerificationError> {
        iss_claim_matches_either_metadata_or_credential_issuer(credential, context)
    }

    /// See default implementation [iss_claim_matches_metadata].
    fn iss_claim_matches_metadata(
        &self,
        credential: &W3CCredentialJwtV1,
        context: &VerificationContext<'_>,
    ) -> Option<VerificationError> {
        iss_claim_matches_metadata(credential, context)
    }

    /// See default implementation [kid_claim_is_velocity_v2].
    fn kid_claim_is_velocity_v2(
        &self,
        credential: &W3CCredentialJwtV1,
        context: &VerificationContext<'_>,
    ) -> Option<VerificationError> {
        kid_claim_is_velocity_v2(credential, context)
    }

    /// See default implementation [sub_is_did_jwk_or_cnf].
    fn sub_is_did_jwk_or_cnf(
        &self,
        credential: &W3CCredentialJwtV1,
        context: &VerificationContext<'_>,
    ) -> Option<VerificationError> {
        sub_is_did_jwk_or_cnf(credential, context)
    }
}

/// The Velocity profile rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCredentialVerifiers;

impl CredentialVerifiers for DefaultCredentialVerifiers {}

pub const DEFAULT_CREDENTIAL_VERIFIERS: DefaultCredentialVerifiers = DefaultCredentialVerifiers;

/// Combines `rules` into a single check returning every error, in rule order.
pub fn compose<T>(
    rules: &[Verifier<T>],
) -> impl Fn(&T, &VerificationContext<'_>) -> Vec<VerificationError> + '_ {
    move |value: &T, context: &VerificationContext<'_>| {
        rules
            .iter()
            .filter_map(|rule| rule(value, context))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use serde_json::{json, Value as Json};

    use super::*;
    use crate::core::{error::ErrorCode, metadata::CredentialIssuerMetadata};

    pub(crate) fn credential(value: Json) -> W3CCredentialJwtV1 {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn compose_runs_rules_in_order() {
        let metadata = CredentialIssuerMetadata::new("did:issuer:example");
        let context = VerificationContext::new(Some(&metadata));
        let credential = credential(json!({ "header": { "alg": "none" }, "payload": {} }));

        let rules: [Verifier<W3CCredentialJwtV1>; 3] =
            [kid_claim_is_velocity_v2, alg_is_supported, credential_status];
        let check = compose(&rules);

        let codes: Vec<_> = check(&credential, &context)
            .into_iter()
            .map(|e| e.code)
            .collect();
        assert_eq!(
            codes,
            vec![
                ErrorCode::InvalidKid,
                ErrorCode::InvalidAlg,
                ErrorCode::MissingCredentialStatus
            ]
        );
    }

    #[test]
    fn compose_of_nothing_accepts_everything() {
        let context = VerificationContext::default();
        let check = compose::<W3CCredentialJwtV1>(&[]);
        assert!(check(&credential(json!({ "payload": {} })), &context).is_empty());
    }
}
