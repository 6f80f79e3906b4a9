use crate::core::{
    context::VerificationContext,
    credential::W3CCredentialJwtV1,
    error::{build_error, ErrorCode, VerificationError},
};

/// JOSE algorithms a credential may be signed with.
pub const SUPPORTED_ALGS: [&str; 3] = ["ES256", "ES256K", "RS256"];

/// Checks that `header.alg` is one of [SUPPORTED_ALGS].
///
/// A missing header or `alg` is unsupported.
pub fn alg_is_supported(
    credential: &W3CCredentialJwtV1,
    context: &VerificationContext<'_>,
) -> Option<VerificationError> {
    let alg = credential.header().and_then(|header| header.alg());

    match alg.as_deref() {
        Some(alg) if SUPPORTED_ALGS.contains(&alg) => None,
        alg => Some(build_error(
            ErrorCode::InvalidAlg,
            format!("Unsupported alg: '{}'", alg.unwrap_or("null")),
            context.path_with(["header", "alg"]),
        )),
    }
}
