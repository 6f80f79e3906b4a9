use tracing::debug;

use super::{
    context::VerificationContext,
    credential::W3CCredentialJwtV1,
    error::{display_path, VerificationError},
    verifiers::CredentialVerifiers,
};

/// Applies every check of `verifiers` to `credential`, in a fixed order.
///
/// All checks run, whatever the outcome of the previous ones; errors are
/// returned in check order.
pub fn verify_credential_jwt_payload_strict<V: CredentialVerifiers + ?Sized>(
    credential: &W3CCredentialJwtV1,
    context: &VerificationContext<'_>,
    verifiers: &V,
) -> Vec<VerificationError> {
    let errors: Vec<VerificationError> = [
        verifiers.alg_is_supported(credential, context),
        verifiers.credential_schema(credential, context),
        verifiers.credential_status(credential, context),
        verifiers.iss_claim_matches_either_metadata_or_credential_issuer(credential, context),
        verifiers.iss_claim_matches_metadata(credential, context),
        verifiers.kid_claim_is_velocity_v2(credential, context),
        verifiers.sub_is_did_jwk_or_cnf(credential, context),
    ]
    .into_iter()
    .flatten()
    .collect();

    for error in &errors {
        debug!(
            "credential at '{}' rejected: {} at '{}'",
            display_path(&context.path),
            error.code,
            display_path(&error.path)
        );
    }

    errors
}
