use crate::core::{
    context::VerificationContext,
    credential::W3CCredentialJwtV1,
    error::{build_error, ErrorCode, VerificationError},
};

/// Checks that `payload.iss` matches either the issuer's `iss` or its
/// OpenID4VCI `credential_issuer` identifier.
///
/// Blank metadata values are never matched, and a blank or missing `iss`
/// always fails.
pub fn iss_claim_matches_either_metadata_or_credential_issuer(
    credential: &W3CCredentialJwtV1,
    context: &VerificationContext<'_>,
) -> Option<VerificationError> {
    let allowed: Vec<&str> = context
        .credential_issuer_metadata
        .map(|metadata| {
            [Some(metadata.iss.as_str()), metadata.credential_issuer.as_deref()]
                .into_iter()
                .flatten()
                .filter(|value| !value.trim().is_empty())
                .collect()
        })
        .unwrap_or_default();

    let actual = credential.payload().iss();
    match actual.as_deref() {
        Some(iss) if !iss.trim().is_empty() && allowed.contains(&iss) => None,
        iss => Some(build_error(
            ErrorCode::UnexpectedCredentialPayloadIss,
            format!(
                "Expected iss to be one of [{}], but got '{}'",
                allowed.join(", "),
                iss.unwrap_or("null")
            ),
            context.path_with(["payload", "iss"]),
        )),
    }
}

/// Checks that `payload.iss` is exactly the issuer's `iss`, without the
/// `credential_issuer` fallback.
pub fn iss_claim_matches_metadata(
    credential: &W3CCredentialJwtV1,
    context: &VerificationContext<'_>,
) -> Option<VerificationError> {
    let actual = credential.payload().iss();
    let expected = context
        .credential_issuer_metadata
        .map(|metadata| metadata.iss.as_str());

    if actual.as_deref() == expected {
        return None;
    }

    Some(build_error(
        ErrorCode::UnexpectedCredentialPayloadIss,
        format!(
            "Expected iss to be exactly '{}', but got '{}'",
            expected.unwrap_or("null"),
            actual.as_deref().unwrap_or("null")
        ),
        context.path_with(["payload", "iss"]),
    ))
}
