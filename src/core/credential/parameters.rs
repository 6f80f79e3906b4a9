use anyhow::Error;
use serde_json::{Map, Value as Json};

use crate::core::object::{TypedParameter, UntypedObject};

use super::{JwtHeader, JwtPayload, W3CCredentialJwtV1};

/// Text form of a JSON string, number or boolean.
///
/// Numbers and booleans keep their JSON spelling (`42`, `true`). Objects and
/// arrays are rejected.
fn primitive_text(value: Json) -> Result<String, Error> {
    match value {
        Json::String(s) => Ok(s),
        Json::Number(n) => Ok(n.to_string()),
        Json::Bool(b) => Ok(b.to_string()),
        other => anyhow::bail!("expected a JSON string, number or boolean, found {other}"),
    }
}

/// JOSE `alg` header parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alg(pub String);

impl TypedParameter for Alg {
    const KEY: &'static str = "alg";
}

impl TryFrom<Json> for Alg {
    type Error = Error;

    fn try_from(value: Json) -> Result<Self, Self::Error> {
        primitive_text(value).map(Self)
    }
}

impl From<Alg> for Json {
    fn from(value: Alg) -> Json {
        Json::String(value.0)
    }
}

/// JOSE `kid` header parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kid(pub String);

impl TypedParameter for Kid {
    const KEY: &'static str = "kid";
}

impl TryFrom<Json> for Kid {
    type Error = Error;

    fn try_from(value: Json) -> Result<Self, Self::Error> {
        primitive_text(value).map(Self)
    }
}

impl From<Kid> for Json {
    fn from(value: Kid) -> Json {
        Json::String(value.0)
    }
}

/// JOSE `typ` header parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typ(pub String);

impl TypedParameter for Typ {
    const KEY: &'static str = "typ";
}

impl TryFrom<Json> for Typ {
    type Error = Error;

    fn try_from(value: Json) -> Result<Self, Self::Error> {
        primitive_text(value).map(Self)
    }
}

impl From<Typ> for Json {
    fn from(value: Typ) -> Json {
        Json::String(value.0)
    }
}

/// `iss` claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iss(pub String);

impl TypedParameter for Iss {
    const KEY: &'static str = "iss";
}

impl TryFrom<Json> for Iss {
    type Error = Error;

    fn try_from(value: Json) -> Result<Self, Self::Error> {
        primitive_text(value).map(Self)
    }
}

impl From<Iss> for Json {
    fn from(value: Iss) -> Json {
        Json::String(value.0)
    }
}

/// `sub` claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sub(pub String);

impl TypedParameter for Sub {
    const KEY: &'static str = "sub";
}

impl TryFrom<Json> for Sub {
    type Error = Error;

    fn try_from(value: Json) -> Result<Self, Self::Error> {
        primitive_text(value).map(Self)
    }
}

impl From<Sub> for Json {
    fn from(value: Sub) -> Json {
        Json::String(value.0)
    }
}

/// `cnf` (confirmation) claim, used for proof-of-possession key binding.
///
/// See [RFC 7800](https://www.rfc-editor.org/rfc/rfc7800).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cnf(pub UntypedObject);

impl Cnf {
    /// The confirmation key, when expressed as a JWK.
    pub fn jwk(&self) -> Option<Jwk> {
        self.0.get_lenient()
    }
}

impl TypedParameter for Cnf {
    const KEY: &'static str = "cnf";
}

impl TryFrom<Json> for Cnf {
    type Error = Error;

    fn try_from(value: Json) -> Result<Self, Self::Error> {
        UntypedObject::try_from(value).map(Self)
    }
}

impl From<Cnf> for Json {
    fn from(value: Cnf) -> Json {
        value.0.into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Jwk(pub Map<String, Json>);

impl TypedParameter for Jwk {
    const KEY: &'static str = "jwk";
}

impl TryFrom<Json> for Jwk {
    type Error = Error;

    fn try_from(value: Json) -> Result<Self, Self::Error> {
        Ok(Self(serde_json::from_value(value)?))
    }
}

impl From<Jwk> for Json {
    fn from(value: Jwk) -> Json {
        Json::Object(value.0)
    }
}

/// The `vc` claim of a JWT-encoded W3C Verifiable Credential (VC Data Model 1.1,
/// section 6.3.1).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vc(pub UntypedObject);

impl Vc {
    pub fn credential_schema(&self) -> Option<CredentialSchema> {
        self.0.get_lenient()
    }

    pub fn credential_status(&self) -> Option<CredentialStatus> {
        self.0.get_lenient()
    }
}

impl TypedParameter for Vc {
    const KEY: &'static str = "vc";
}

impl TryFrom<Json> for Vc {
    type Error = Error;

    fn try_from(value: Json) -> Result<Self, Self::Error> {
        UntypedObject::try_from(value).map(Self)
    }
}

impl From<Vc> for Json {
    fn from(value: Vc) -> Json {
        value.0.into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CredentialSchema(pub Map<String, Json>);

impl TypedParameter for CredentialSchema {
    const KEY: &'static str = "credentialSchema";
}

impl TryFrom<Json> for CredentialSchema {
    type Error = Error;

    fn try_from(value: Json) -> Result<Self, Self::Error> {
        Ok(Self(serde_json::from_value(value)?))
    }
}

impl From<CredentialSchema> for Json {
    fn from(value: CredentialSchema) -> Json {
        Json::Object(value.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CredentialStatus(pub Map<String, Json>);

impl TypedParameter for CredentialStatus {
    const KEY: &'static str = "credentialStatus";
}

impl TryFrom<Json> for CredentialStatus {
    type Error = Error;

    fn try_from(value: Json) -> Result<Self, Self::Error> {
        Ok(Self(serde_json::from_value(value)?))
    }
}

impl From<CredentialStatus> for Json {
    fn from(value: CredentialStatus) -> Json {
        Json::Object(value.0)
    }
}

#[derive(Debug, Clone)]
pub struct Header(pub JwtHeader);

impl TypedParameter for Header {
    const KEY: &'static str = "header";
}

impl TryFrom<Json> for Header {
    type Error = Error;

    fn try_from(value: Json) -> Result<Self, Self::Error> {
        UntypedObject::try_from(value).map(JwtHeader).map(Self)
    }
}

impl From<Header> for Json {
    fn from(value: Header) -> Json {
        value.0 .0.into()
    }
}

#[derive(Debug, Clone)]
pub struct Payload(pub JwtPayload);

impl TypedParameter for Payload {
    const KEY: &'static str = "payload";
}

impl TryFrom<Json> for Payload {
    type Error = Error;

    fn try_from(value: Json) -> Result<Self, Self::Error> {
        UntypedObject::try_from(value).map(JwtPayload).map(Self)
    }
}

impl From<Payload> for Json {
    fn from(value: Payload) -> Json {
        value.0 .0.into()
    }
}

/// `credentials` parameter of a Credential Response
/// ([OpenID4VCI, section 8.3](https://openid.net/specs/openid-4-verifiable-credential-issuance-1_0.html#section-8.3)).
#[derive(Debug, Clone)]
pub struct Credentials(pub Vec<W3CCredentialJwtV1>);

impl TypedParameter for Credentials {
    const KEY: &'static str = "credentials";
}

impl TryFrom<Json> for Credentials {
    type Error = Error;

    fn try_from(value: Json) -> Result<Self, Self::Error> {
        Ok(Self(serde_json::from_value(value)?))
    }
}

impl From<Credentials> for Json {
    fn from(value: Credentials) -> Json {
        Json::Array(
            value
                .0
                .into_iter()
                .map(UntypedObject::from)
                .map(Json::from)
                .collect(),
        )
    }
}
