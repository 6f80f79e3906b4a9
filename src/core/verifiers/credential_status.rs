use crate::core::{
    context::VerificationContext,
    credential::W3CCredentialJwtV1,
    error::{build_error, ErrorCode, VerificationError},
};

/// Checks that `payload.vc.credentialStatus` is present, so that the
/// credential can be revoked.
pub fn credential_status(
    credential: &W3CCredentialJwtV1,
    context: &VerificationContext<'_>,
) -> Option<VerificationError> {
    if credential.payload().vc().credential_status().is_some() {
        return None;
    }

    Some(build_error(
        ErrorCode::MissingCredentialStatus,
        "Expected vc.credentialStatus to exist",
        context.path_with(["payload", "vc", "credentialStatus"]),
    ))
}
