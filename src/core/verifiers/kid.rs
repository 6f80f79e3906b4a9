use crate::core::{
    context::VerificationContext,
    credential::W3CCredentialJwtV1,
    error::{build_error, ErrorCode, VerificationError},
};

/// DID method and version every Velocity issuer key id starts with.
pub const VELOCITY_V2_KID_PREFIX: &str = "did:velocity:v2";

/// Checks that `header.kid` starts with [VELOCITY_V2_KID_PREFIX].
pub fn kid_claim_is_velocity_v2(
    credential: &W3CCredentialJwtV1,
    context: &VerificationContext<'_>,
) -> Option<VerificationError> {
    let kid = credential.header().and_then(|header| header.kid());

    match kid.as_deref() {
        Some(kid) if kid.starts_with(VELOCITY_V2_KID_PREFIX) => None,
        kid => Some(build_error(
            ErrorCode::InvalidKid,
            format!(
                "kid must start with '{VELOCITY_V2_KID_PREFIX}', got '{}'",
                kid.unwrap_or("null")
            ),
            context.path_with(["header", "kid"]),
        )),
    }
}
