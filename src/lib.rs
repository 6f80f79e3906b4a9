//! This library checks OpenID4VCI [Credential Responses] against the Velocity
//! profile.
//!
//! [Credential Responses]: <https://openid.net/specs/openid-4-verifiable-credential-issuance-1_0.html#section-8.3>
//!
//! It is a rule-based claims validator: it looks at the header and payload of
//! each decoded credential JWT and reports every profile violation it finds,
//! with the path to the offending value. It does not verify signatures nor
//! resolve DIDs; this is expected to happen upstream.
//!
//! # Usage
//!
//! ```
//! use velocity_exchange_verifiers::{
//!     core::{context::VerificationContext, error::ErrorCode, metadata::CredentialIssuerMetadata},
//!     parser::parse_credential_endpoint_response,
//!     verify_credential_endpoint_response,
//! };
//!
//! let response = parse_credential_endpoint_response(
//!     r#"{
//!         "credentials": [{
//!             "header": { "alg": "ES256", "kid": "did:velocity:v2:abc123" },
//!             "payload": { "iss": "did:issuer:example", "sub": "did:jwk", "vc": {} }
//!         }]
//!     }"#,
//! )?;
//!
//! let metadata = CredentialIssuerMetadata::new("did:issuer:example")
//!     .with_credential_issuer("https://issuer.example.com");
//! let errors =
//!     verify_credential_endpoint_response(&response, &VerificationContext::new(Some(&metadata)));
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].code, ErrorCode::MissingCredentialSchema);
//! assert_eq!(errors[1].code, ErrorCode::MissingCredentialStatus);
//! # Ok::<(), velocity_exchange_verifiers::parser::ParseError>(())
//! ```
//!
//! # Profile
//!
//! Each credential must satisfy all of the following, checked in this order:
//!
//! 1. `header.alg` is `ES256`, `ES256K` or `RS256`.
//! 2. `payload.vc.credentialSchema` is present.
//! 3. `payload.vc.credentialStatus` is present.
//! 4. `payload.iss` is the issuer's `iss` or its `credential_issuer`.
//! 5. `payload.iss` is exactly the issuer's `iss`.
//! 6. `header.kid` starts with `did:velocity:v2`.
//! 7. `payload.sub` is `did:jwk`, or `payload.cnf` is present.
//!
//! The checks live in [`core::verifiers`]. They can be replaced one by one by
//! implementing [`CredentialVerifiers`] and calling
//! [`verify_credential_endpoint_response_with`].
//!
//! [`CredentialVerifiers`]: crate::core::verifiers::CredentialVerifiers

pub mod core;
pub mod parser;
pub mod verifier;

pub use crate::core::verifiers::DEFAULT_CREDENTIAL_VERIFIERS;
pub use verifier::{verify_credential_endpoint_response, verify_credential_endpoint_response_with};
