use std::ops::Deref;

use anyhow::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use self::parameters::{
    Alg, Cnf, Credentials, Header, Iss, Kid, Payload, Sub, Typ, Vc,
};

use super::object::{ParsingErrorContext, TypedParameter, UntypedObject};

pub mod parameters;

/// A decoded JWT-encoded W3C Verifiable Credential (VC Data Model 1.1) as
/// returned by an OpenID4VCI Credential Endpoint.
///
/// The signature is not part of this value; it is checked upstream, if at all.
/// The header is optional, the payload is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UntypedObject", into = "UntypedObject")]
pub struct W3CCredentialJwtV1 {
    header: Option<JwtHeader>,
    payload: JwtPayload,
}

impl W3CCredentialJwtV1 {
    pub fn new(header: Option<JwtHeader>, payload: JwtPayload) -> Self {
        Self { header, payload }
    }

    pub fn header(&self) -> Option<&JwtHeader> {
        self.header.as_ref()
    }

    pub fn payload(&self) -> &JwtPayload {
        &self.payload
    }
}

impl TryFrom<UntypedObject> for W3CCredentialJwtV1 {
    type Error = Error;

    fn try_from(value: UntypedObject) -> Result<Self, Self::Error> {
        let header = value
            .get::<Header>()
            .map(ParsingErrorContext::parsing_error)
            .transpose()?
            .map(|Header(h)| h);
        let Payload(payload) = value.get::<Payload>().parsing_error()?;
        Ok(Self { header, payload })
    }
}

impl From<W3CCredentialJwtV1> for UntypedObject {
    fn from(value: W3CCredentialJwtV1) -> Self {
        let mut inner = UntypedObject::new();
        if let Some(header) = value.header {
            inner.insert(Header(header));
        }
        inner.insert(Payload(value.payload));
        inner
    }
}

/// JOSE header of a credential JWT.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JwtHeader(UntypedObject);

impl JwtHeader {
    pub fn alg(&self) -> Option<String> {
        self.0.get_lenient::<Alg>().map(|Alg(alg)| alg)
    }

    pub fn kid(&self) -> Option<String> {
        self.0.get_lenient::<Kid>().map(|Kid(kid)| kid)
    }

    pub fn typ(&self) -> Option<String> {
        self.0.get_lenient::<Typ>().map(|Typ(typ)| typ)
    }
}

impl From<UntypedObject> for JwtHeader {
    fn from(value: UntypedObject) -> Self {
        Self(value)
    }
}

impl TryFrom<Json> for JwtHeader {
    type Error = Error;

    fn try_from(value: Json) -> Result<Self, Self::Error> {
        UntypedObject::try_from(value).map(Self)
    }
}

impl Deref for JwtHeader {
    type Target = UntypedObject;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Claims set of a credential JWT.
///
/// Known claims are read through typed accessors; a claim of the wrong JSON
/// shape reads as absent instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JwtPayload(UntypedObject);

impl JwtPayload {
    pub fn iss(&self) -> Option<String> {
        self.0.get_lenient::<Iss>().map(|Iss(iss)| iss)
    }

    pub fn sub(&self) -> Option<String> {
        self.0.get_lenient::<Sub>().map(|Sub(sub)| sub)
    }

    /// The `cnf` claim, when it is a JSON object.
    pub fn cnf(&self) -> Option<Cnf> {
        self.0.get_lenient::<Cnf>()
    }

    /// The `vc` claim, or an empty one if it is absent or not an object.
    pub fn vc(&self) -> Vc {
        self.0.get_lenient::<Vc>().unwrap_or_default()
    }
}

impl From<UntypedObject> for JwtPayload {
    fn from(value: UntypedObject) -> Self {
        Self(value)
    }
}

impl TryFrom<Json> for JwtPayload {
    type Error = Error;

    fn try_from(value: Json) -> Result<Self, Self::Error> {
        UntypedObject::try_from(value).map(Self)
    }
}

impl Deref for JwtPayload {
    type Target = UntypedObject;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Credential Response of an OpenID4VCI Credential Endpoint, restricted to
/// immediate issuance.
///
/// `credentials` is read once, on construction. A missing, `null` or
/// malformed `credentials` member leaves it absent; every other member is kept
/// untouched in the untyped object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "UntypedObject", into = "UntypedObject")]
pub struct CredentialEndpointResponse(UntypedObject, Option<Vec<W3CCredentialJwtV1>>);

impl CredentialEndpointResponse {
    /// `credentials` replaces any `credentials` member of `other`.
    pub fn new(credentials: Option<Vec<W3CCredentialJwtV1>>, other: Option<UntypedObject>) -> Self {
        let mut other = other.unwrap_or_default();
        other.0.remove(Credentials::KEY);
        Self(other, credentials)
    }

    pub fn credentials(&self) -> Option<&[W3CCredentialJwtV1]> {
        self.1.as_deref()
    }
}

impl From<UntypedObject> for CredentialEndpointResponse {
    fn from(value: UntypedObject) -> Self {
        let credentials = value.get_lenient::<Credentials>().map(|Credentials(c)| c);
        Self(value, credentials)
    }
}

impl From<CredentialEndpointResponse> for UntypedObject {
    fn from(value: CredentialEndpointResponse) -> Self {
        let mut inner = value.0;
        if let Some(credentials) = value.1 {
            inner.insert(Credentials(credentials));
        }
        inner
    }
}

impl Deref for CredentialEndpointResponse {
    type Target = UntypedObject;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
