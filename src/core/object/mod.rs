use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

/// An untyped (JSON) Object from which [TypedParameters](TypedParameter) can be read.
///
/// Backs every claims set in this crate: JOSE headers, JWT payloads, the `vc`
/// claim and the credential endpoint response itself. Unknown members are
/// kept as-is so that a claims set serializes back to the object it was read
/// from.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UntypedObject(pub(crate) Map<String, Json>);

/// A strongly typed view over a single member of an [UntypedObject].
pub trait TypedParameter:
    TryFrom<Json, Error = anyhow::Error> + Into<Json> + Clone + std::fmt::Debug
{
    const KEY: &'static str;
}

impl UntypedObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a [TypedParameter] from the Object.
    ///
    /// Returns `None` if the member is absent. A member that is present but
    /// JSON `null` is also reported as absent.
    ///
    /// Note that this method clones the underlying data.
    pub fn get<T: TypedParameter>(&self) -> Option<Result<T>> {
        match self.0.get(T::KEY)? {
            Json::Null => None,
            value => Some(value.clone().try_into()),
        }
    }

    /// Get a [TypedParameter] from the Object, treating a member of the wrong
    /// shape the same way as an absent one.
    pub fn get_lenient<T: TypedParameter>(&self) -> Option<T> {
        self.get().and_then(Result::ok)
    }

    /// Raw access to a member, whatever its shape.
    pub fn get_raw(&self, key: &str) -> Option<&Json> {
        self.0.get(key)
    }

    /// Whether the member is present with a non-null value.
    pub fn contains(&self, key: &str) -> bool {
        !matches!(self.0.get(key), None | Some(Json::Null))
    }

    /// Insert a [TypedParameter].
    ///
    /// Returns the existing [TypedParameter] if one already exists.
    pub fn insert<T: TypedParameter>(&mut self, t: T) -> Option<Result<T>> {
        Some(self.0.insert(T::KEY.to_owned(), t.into())?.try_into())
    }
}

impl From<Map<String, Json>> for UntypedObject {
    fn from(value: Map<String, Json>) -> Self {
        Self(value)
    }
}

impl From<UntypedObject> for Json {
    fn from(value: UntypedObject) -> Self {
        value.0.into()
    }
}

impl TryFrom<Json> for UntypedObject {
    type Error = anyhow::Error;

    fn try_from(value: Json) -> Result<Self, Self::Error> {
        match value {
            Json::Object(map) => Ok(Self(map)),
            other => anyhow::bail!("expected a JSON object, found {other}"),
        }
    }
}

pub trait ParsingErrorContext {
    type T: TypedParameter;

    fn parsing_error(self) -> Result<Self::T>;
}

impl<T: TypedParameter> ParsingErrorContext for Option<Result<T>> {
    type T = T;

    fn parsing_error(self) -> Result<T> {
        self.context(format!("'{}' is missing", T::KEY))?
            .context(format!("'{}' could not be parsed", T::KEY))
    }
}

impl<T: TypedParameter> ParsingErrorContext for Result<T> {
    type T = T;

    fn parsing_error(self) -> Result<T> {
        self.context(format!("'{}' could not be parsed", T::KEY))
    }
}
