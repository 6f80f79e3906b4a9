use crate::core::{
    context::VerificationContext,
    credential::{parameters::Cnf, W3CCredentialJwtV1},
    error::{build_error, ErrorCode, VerificationError},
    object::TypedParameter,
};

/// The `sub` value of a credential bound to the holder through `did:jwk`.
pub const DID_JWK_SUB: &str = "did:jwk";

/// Checks that the credential is bound to a holder, either through
/// `sub: "did:jwk"` or through a `cnf` claim of any shape.
///
/// The error points at the payload itself since it concerns two claims.
pub fn sub_is_did_jwk_or_cnf(
    credential: &W3CCredentialJwtV1,
    context: &VerificationContext<'_>,
) -> Option<VerificationError> {
    let payload = credential.payload();
    let sub = payload.sub();

    if sub.as_deref() == Some(DID_JWK_SUB) || payload.contains(Cnf::KEY) {
        return None;
    }

    let cnf = payload
        .get_raw(Cnf::KEY)
        .map_or_else(|| "null".to_owned(), ToString::to_string);
    Some(build_error(
        ErrorCode::SubOrCnfMissing,
        format!(
            "Expected sub to be '{DID_JWK_SUB}' or cnf to be present. Got sub={}, cnf={cnf}",
            sub.as_deref().unwrap_or("null")
        ),
        context.path_with(["payload"]),
    ))
}
