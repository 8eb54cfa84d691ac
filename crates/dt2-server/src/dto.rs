//! Request bodies and their validation.
//!
//! Every body field is deserialized as optional so that a missing field is a
//! validation message rather than a generic deserialization failure.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Json, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ServerError;

/// A request body that checks itself and yields the values handlers use.
pub trait Validate: Sized {
    type Output;

    fn validate(self) -> Result<Self::Output, ServerError>;
}

/// JSON body extractor that rejects with a 400 [`ServerError::Validation`].
pub struct ValidatedJson<T: Validate>(pub T::Output);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: Validate + DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ServerError::Validation(rejection.body_text()))?;
        Ok(Self(body.validate()?))
    }
}

/// Like [`ValidatedJson`], but a request with no body or no JSON content
/// type yields `None`. A JSON body that fails to parse or validate is still
/// a 400.
pub struct OptionalJson<T: Validate>(pub Option<T::Output>);

#[async_trait]
impl<T, S> FromRequest<S> for OptionalJson<T>
where
    T: Validate + DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = is_json(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ServerError::Validation(rejection.body_text()))?;
        if bytes.is_empty() || !json {
            return Ok(Self(None));
        }
        let Json(body) = Json::<T>::from_bytes(&bytes)
            .map_err(|rejection| ServerError::Validation(rejection.body_text()))?;
        Ok(Self(Some(body.validate()?)))
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

fn present<T>(field: &str, value: Option<T>) -> Result<T, ServerError> {
    value.ok_or_else(|| ServerError::Validation(format!("{field} should not be empty")))
}

fn not_empty(field: &str, value: Option<String>) -> Result<String, ServerError> {
    let value = present(field, value)?;
    if value.is_empty() {
        return Err(ServerError::Validation(format!("{field} should not be empty")));
    }
    Ok(value)
}

#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub message: Option<String>,
}

impl Validate for MessageBody {
    type Output = String;

    fn validate(self) -> Result<String, ServerError> {
        present("message", self.message)
    }
}

#[derive(Debug, Deserialize)]
pub struct NumberBody {
    pub number: Option<u64>,
}

impl Validate for NumberBody {
    type Output = u64;

    fn validate(self) -> Result<u64, ServerError> {
        present("number", self.number)
    }
}

#[derive(Debug, Deserialize)]
pub struct NameBody {
    pub name: Option<String>,
}

impl Validate for NameBody {
    type Output = String;

    fn validate(self) -> Result<String, ServerError> {
        present("name", self.name)
    }
}

#[derive(Debug, Deserialize)]
pub struct SetBalanceBody {
    pub address: Option<String>,
    pub value: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetBalance {
    pub address: String,
    pub value: u64,
}

impl Validate for SetBalanceBody {
    type Output = SetBalance;

    fn validate(self) -> Result<SetBalance, ServerError> {
        Ok(SetBalance {
            address: not_empty("address", self.address)?,
            value: present("value", self.value)?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SetUserBody {
    pub address: Option<String>,
    pub name: Option<String>,
    pub age: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetUser {
    pub address: String,
    pub name: Option<String>,
    pub age: Option<u64>,
}

impl Validate for SetUserBody {
    type Output = SetUser;

    fn validate(self) -> Result<SetUser, ServerError> {
        // Blank names pass here; the service owns that rule.
        Ok(SetUser {
            address: not_empty("address", self.address)?,
            name: self.name,
            age: self.age,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct DataBody {
    pub data: Option<String>,
}

impl Validate for DataBody {
    type Output = String;

    fn validate(self) -> Result<String, ServerError> {
        present("data", self.data)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DetailsBody {
    pub state: Option<i64>,
}

impl Validate for DetailsBody {
    type Output = Option<i64>;

    fn validate(self) -> Result<Option<i64>, ServerError> {
        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<T: DeserializeOwned>(json: &str) -> T {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn balance_requires_both_fields() {
        let ok = parse::<SetBalanceBody>(r#"{"address":"0xabc","value":10}"#)
            .validate()
            .unwrap();
        assert_eq!(ok, SetBalance { address: "0xabc".into(), value: 10 });

        let err = parse::<SetBalanceBody>(r#"{"value":10}"#).validate().unwrap_err();
        assert_eq!(err.to_string(), "address should not be empty");

        let err = parse::<SetBalanceBody>(r#"{"address":"","value":10}"#)
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "address should not be empty");

        let err = parse::<SetBalanceBody>(r#"{"address":"0xabc"}"#).validate().unwrap_err();
        assert_eq!(err.to_string(), "value should not be empty");
    }

    #[test]
    fn user_name_and_age_are_optional() {
        let user = parse::<SetUserBody>(r#"{"address":"0xabc"}"#).validate().unwrap();
        assert_eq!(user.name, None);
        assert_eq!(user.age, None);

        let user = parse::<SetUserBody>(r#"{"address":"0xabc","name":"","age":3}"#)
            .validate()
            .unwrap();
        assert_eq!(user.name.as_deref(), Some(""));
    }

    #[test]
    fn message_may_be_empty_but_not_missing() {
        assert_eq!(parse::<MessageBody>(r#"{"message":""}"#).validate().unwrap(), "");
        assert!(parse::<MessageBody>("{}").validate().is_err());
    }

    #[test]
    fn number_type_is_enforced_by_serde() {
        assert!(serde_json::from_str::<NumberBody>(r#"{"number":"10"}"#).is_err());
        assert!(serde_json::from_str::<NumberBody>(r#"{"number":-1}"#).is_err());
        assert_eq!(parse::<NumberBody>(r#"{"number":10}"#).validate().unwrap(), 10);
    }

    #[test]
    fn json_content_type_detection() {
        let mut headers = HeaderMap::new();
        assert!(!is_json(&headers));
        headers.insert(CONTENT_TYPE, "application/json; charset=utf-8".parse().unwrap());
        assert!(is_json(&headers));
        headers.insert(CONTENT_TYPE, "application/merge-patch+json".parse().unwrap());
        assert!(is_json(&headers));
        headers.insert(CONTENT_TYPE, "text/plain".parse().unwrap());
        assert!(!is_json(&headers));
    }

    #[test]
    fn details_state_is_optional() {
        assert_eq!(parse::<DetailsBody>("{}").validate().unwrap(), None);
        assert_eq!(parse::<DetailsBody>(r#"{"state":1}"#).validate().unwrap(), Some(1));
    }
}
