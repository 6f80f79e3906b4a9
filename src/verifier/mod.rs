//! Verification of OpenID4VCI Credential Endpoint responses against the
//! Velocity profile.

use tracing::{debug, trace};

use crate::core::{
    context::VerificationContext,
    credential::CredentialEndpointResponse,
    error::{display_path, PathSegment, VerificationError},
    rules::verify_credential_jwt_payload_strict,
    verifiers::{CredentialVerifiers, DEFAULT_CREDENTIAL_VERIFIERS},
};

/// Verifies every credential of a Credential Endpoint response with the
/// default Velocity profile rules.
///
/// This covers immediate issuance only: deferred issuance parameters
/// (`transaction_id`, `interval`) and `notification_id` are not looked at.
///
/// Each credential is checked by [verify_credential_jwt_payload_strict] under
/// the path `credentials/<index>`. Errors are returned by ascending credential
/// index, then in check order. A response without credentials has no errors.
pub fn verify_credential_endpoint_response(
    response: &CredentialEndpointResponse,
    context: &VerificationContext<'_>,
) -> Vec<VerificationError> {
    verify_credential_endpoint_response_with(response, context, &DEFAULT_CREDENTIAL_VERIFIERS)
}

/// Same as [verify_credential_endpoint_response], with a custom rule set.
pub fn verify_credential_endpoint_response_with<V: CredentialVerifiers + ?Sized>(
    response: &CredentialEndpointResponse,
    context: &VerificationContext<'_>,
    verifiers: &V,
) -> Vec<VerificationError> {
    let Some(credentials) = response.credentials() else {
        trace!("no credentials in response at '{}'", display_path(&context.path));
        return Vec::new();
    };

    credentials
        .iter()
        .enumerate()
        .flat_map(|(index, credential)| {
            let context =
                context.with_path([PathSegment::from("credentials"), PathSegment::from(index)]);
            debug!("verifying credential at '{}'", display_path(&context.path));
            verify_credential_jwt_payload_strict(credential, &context, verifiers)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use serde_json::{json, Value as Json};

    use super::*;
    use crate::core::{
        credential::W3CCredentialJwtV1,
        error::{build_error, ErrorCode},
        metadata::CredentialIssuerMetadata,
    };

    fn metadata() -> CredentialIssuerMetadata {
        CredentialIssuerMetadata::new("did:issuer:example")
            .with_credential_issuer("https://issuer.example.com")
    }

    fn mock_credential() -> Json {
        json!({
            "header": { "alg": "ES256", "kid": "did:velocity:v2:abc123" },
            "payload": {
                "iss": "did:issuer:example",
                "sub": "did:jwk",
                "vc": {}
            }
        })
    }

    fn response(credentials: Json) -> CredentialEndpointResponse {
        serde_json::from_value(json!({ "credentials": credentials })).unwrap()
    }

    struct Passing;

    impl CredentialVerifiers for Passing {
        fn alg_is_supported(
            &self,
            _: &W3CCredentialJwtV1,
            _: &VerificationContext<'_>,
        ) -> Option<VerificationError> {
            None
        }

        fn credential_schema(
            &self,
            _: &W3CCredentialJwtV1,
            _: &VerificationContext<'_>,
        ) -> Option<VerificationError> {
            None
        }

        fn credential_status(
            &self,
            _: &W3CCredentialJwtV1,
            _: &VerificationContext<'_>,
        ) -> Option<VerificationError> {
            None
        }

        fn iss_claim_matches_either_metadata_or_credential_issuer(
            &self,
            _: &W3CCredentialJwtV1,
            _: &VerificationContext<'_>,
        ) -> Option<VerificationError> {
            None
        }

        fn iss_claim_matches_metadata(
            &self,
            _: &W3CCredentialJwtV1,
            _: &VerificationContext<'_>,
        ) -> Option<VerificationError> {
            None
        }

        fn kid_claim_is_velocity_v2(
            &self,
            _: &W3CCredentialJwtV1,
            _: &VerificationContext<'_>,
        ) -> Option<VerificationError> {
            None
        }

        fn sub_is_did_jwk_or_cnf(
            &self,
            _: &W3CCredentialJwtV1,
            _: &VerificationContext<'_>,
        ) -> Option<VerificationError> {
            None
        }
    }

    struct Panicking;

    impl CredentialVerifiers for Panicking {
        fn alg_is_supported(
            &self,
            _: &W3CCredentialJwtV1,
            _: &VerificationContext<'_>,
        ) -> Option<VerificationError> {
            panic!("should not be called")
        }

        fn credential_schema(
            &self,
            _: &W3CCredentialJwtV1,
            _: &VerificationContext<'_>,
        ) -> Option<VerificationError> {
            panic!("should not be called")
        }

        fn credential_status(
            &self,
            _: &W3CCredentialJwtV1,
            _: &VerificationContext<'_>,
        ) -> Option<VerificationError> {
            panic!("should not be called")
        }

        fn iss_claim_matches_either_metadata_or_credential_issuer(
            &self,
            _: &W3CCredentialJwtV1,
            _: &VerificationContext<'_>,
        ) -> Option<VerificationError> {
            panic!("should not be called")
        }

        fn iss_claim_matches_metadata(
            &self,
            _: &W3CCredentialJwtV1,
            _: &VerificationContext<'_>,
        ) -> Option<VerificationError> {
            panic!("should not be called")
        }

        fn kid_claim_is_velocity_v2(
            &self,
            _: &W3CCredentialJwtV1,
            _: &VerificationContext<'_>,
        ) -> Option<VerificationError> {
            panic!("should not be called")
        }

        fn sub_is_did_jwk_or_cnf(
            &self,
            _: &W3CCredentialJwtV1,
            _: &VerificationContext<'_>,
        ) -> Option<VerificationError> {
            panic!("should not be called")
        }
    }

    #[test]
    fn returns_no_errors_when_credentials_are_valid() {
        let metadata = metadata();
        let result = verify_credential_endpoint_response_with(
            &response(json!([mock_credential()])),
            &VerificationContext::new(Some(&metadata)),
            &Passing,
        );
        assert!(result.is_empty());
    }

    #[test]
    fn returns_errors_from_a_single_check() {
        struct FailingAlg;

        impl CredentialVerifiers for FailingAlg {
            fn alg_is_supported(
                &self,
                _: &W3CCredentialJwtV1,
                context: &VerificationContext<'_>,
            ) -> Option<VerificationError> {
                Some(build_error(
                    ErrorCode::InvalidAlg,
                    "alg is not supported",
                    context.path_with(["header", "alg"]),
                ))
            }
        }

        let metadata = metadata();
        let result = verify_credential_endpoint_response_with(
            &response(json!([mock_credential()])),
            &VerificationContext::new(Some(&metadata)),
            &FailingAlg,
        );

        // The other checks fall back to the defaults: the credential lacks
        // credentialSchema and credentialStatus.
        assert_eq!(
            result[0],
            build_error(
                ErrorCode::InvalidAlg,
                "alg is not supported",
                vec!["credentials".into(), 0.into(), "header".into(), "alg".into()],
            )
        );
        let codes: Vec<_> = result.iter().map(|e| e.code).collect();
        assert_eq!(
            codes,
            vec![
                ErrorCode::InvalidAlg,
                ErrorCode::MissingCredentialSchema,
                ErrorCode::MissingCredentialStatus
            ]
        );
    }

    #[test]
    fn aggregates_errors_from_multiple_credentials() {
        struct ByIndex {
            visited: Cell<usize>,
        }

        impl CredentialVerifiers for ByIndex {
            fn alg_is_supported(
                &self,
                _: &W3CCredentialJwtV1,
                _: &VerificationContext<'_>,
            ) -> Option<VerificationError> {
                None
            }

            fn credential_schema(
                &self,
                _: &W3CCredentialJwtV1,
                _: &VerificationContext<'_>,
            ) -> Option<VerificationError> {
                None
            }

            fn credential_status(
                &self,
                _: &W3CCredentialJwtV1,
                context: &VerificationContext<'_>,
            ) -> Option<VerificationError> {
                (self.visited.get() == 1).then(|| {
                    build_error(
                        ErrorCode::MissingCredentialStatus,
                        "Missing credentialStatus",
                        context.path_with(["payload", "vc", "credentialStatus"]),
                    )
                })
            }

            fn iss_claim_matches_either_metadata_or_credential_issuer(
                &self,
                _: &W3CCredentialJwtV1,
                _: &VerificationContext<'_>,
            ) -> Option<VerificationError> {
                None
            }

            fn iss_claim_matches_metadata(
                &self,
                _: &W3CCredentialJwtV1,
                _: &VerificationContext<'_>,
            ) -> Option<VerificationError> {
                None
            }

            fn kid_claim_is_velocity_v2(
                &self,
                _: &W3CCredentialJwtV1,
                context: &VerificationContext<'_>,
            ) -> Option<VerificationError> {
                (self.visited.get() == 0).then(|| {
                    build_error(
                        ErrorCode::InvalidKid,
                        "Invalid kid",
                        context.path_with(["header", "kid"]),
                    )
                })
            }

            fn sub_is_did_jwk_or_cnf(
                &self,
                _: &W3CCredentialJwtV1,
                _: &VerificationContext<'_>,
            ) -> Option<VerificationError> {
                self.visited.set(self.visited.get() + 1);
                None
            }
        }

        let metadata = metadata();
        let verifiers = ByIndex {
            visited: Cell::new(0),
        };
        let result = verify_credential_endpoint_response_with(
            &response(json!([mock_credential(), mock_credential()])),
            &VerificationContext::new(Some(&metadata)),
            &verifiers,
        );

        assert_eq!(
            result,
            vec![
                build_error(
                    ErrorCode::InvalidKid,
                    "Invalid kid",
                    vec!["credentials".into(), 0.into(), "header".into(), "kid".into()],
                ),
                build_error(
                    ErrorCode::MissingCredentialStatus,
                    "Missing credentialStatus",
                    vec![
                        "credentials".into(),
                        1.into(),
                        "payload".into(),
                        "vc".into(),
                        "credentialStatus".into()
                    ],
                ),
            ]
        );
        assert_eq!(verifiers.visited.get(), 2);
    }

    #[test]
    fn returns_empty_list_when_credentials_are_missing() {
        let metadata = metadata();
        let response: CredentialEndpointResponse =
            serde_json::from_value(json!({ "notification_id": "abc" })).unwrap();
        let result = verify_credential_endpoint_response_with(
            &response,
            &VerificationContext::new(Some(&metadata)),
            &Panicking,
        );
        assert!(result.is_empty());
    }

    #[test]
    fn returns_empty_list_when_credentials_is_an_empty_array() {
        let metadata = metadata();
        let result = verify_credential_endpoint_response_with(
            &response(json!([])),
            &VerificationContext::new(Some(&metadata)),
            &Panicking,
        );
        assert!(result.is_empty());
    }

    #[test]
    #[should_panic(expected = "should not be called")]
    fn panicking_checks_propagate() {
        verify_credential_endpoint_response_with(
            &response(json!([mock_credential()])),
            &VerificationContext::default(),
            &Panicking,
        );
    }

    #[test]
    fn base_path_is_kept() {
        let metadata = metadata();
        let context = VerificationContext::new(Some(&metadata)).with_path(["response"]);
        let result =
            verify_credential_endpoint_response(&response(json!([mock_credential()])), &context);

        assert_eq!(
            result[0].path,
            vec![
                "response".into(),
                "credentials".into(),
                0.into(),
                "payload".into(),
                "vc".into(),
                "credentialSchema".into()
            ]
        );
        assert_eq!(context.path, vec!["response".into()]);
    }
}
