use crate::core::{
    context::VerificationContext,
    credential::W3CCredentialJwtV1,
    error::{build_error, ErrorCode, VerificationError},
};

/// Checks that `payload.vc.credentialSchema` is present.
pub fn credential_schema(
    credential: &W3CCredentialJwtV1,
    context: &VerificationContext<'_>,
) -> Option<VerificationError> {
    if credential.payload().vc().credential_schema().is_some() {
        return None;
    }

    Some(build_error(
        ErrorCode::MissingCredentialSchema,
        "Expected credentialSchema in payload.vc.credentialSchema but got undefined",
        context.path_with(["payload", "vc", "credentialSchema"]),
    ))
}
