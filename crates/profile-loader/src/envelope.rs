//! Response payload normalization.
//!
//! The API answers either with the bare entity or with an envelope of the
//! form `{"data": <entity>, ...}`. Bodies are decoded once into [`Payload`]
//! so callers never inspect the shape themselves.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{LoadError, LoadResult};

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    /// Body was `{"data": T, ...}`.
    Enveloped(T),
    /// Body was `T` itself.
    Bare(T),
}

impl<T> Payload<T> {
    pub fn into_inner(self) -> T {
        match self {
            Payload::Enveloped(value) | Payload::Bare(value) => value,
        }
    }

    pub fn is_enveloped(&self) -> bool {
        matches!(self, Payload::Enveloped(_))
    }
}

impl<T: DeserializeOwned> Payload<T> {
    /// Decode a raw response body.
    pub fn from_slice(body: &[u8]) -> LoadResult<Self> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(value)
    }

    /// Decode an already parsed JSON value.
    ///
    /// An object with a `data` key is an envelope. A null `data` is rejected,
    /// carrying the envelope's `error` field in the message when present.
    pub fn from_value(value: Value) -> LoadResult<Self> {
        match value {
            Value::Object(mut map) if map.contains_key("data") => {
                match map.remove("data") {
                    Some(Value::Null) | None => {
                        let detail = map
                            .get("error")
                            .filter(|e| !e.is_null())
                            .map(|e| e.to_string())
                            .unwrap_or_else(|| "envelope without data".to_string());
                        Err(LoadError::MalformedResponse(detail))
                    }
                    Some(data) => Ok(Payload::Enveloped(serde_json::from_value(data)?)),
                }
            }
            other => Ok(Payload::Bare(serde_json::from_value(other)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_and_enveloped_list() {
        let bare: Payload<Vec<i64>> = Payload::from_value(json!([1, 2, 3])).unwrap();
        assert!(!bare.is_enveloped());

        let wrapped: Payload<Vec<i64>> =
            Payload::from_value(json!({"data": [1, 2, 3], "error": null})).unwrap();
        assert!(wrapped.is_enveloped());

        assert_eq!(bare.into_inner(), wrapped.into_inner());
    }

    #[test]
    fn test_empty_list_stays_bare() {
        let payload: Payload<Vec<i64>> = Payload::from_slice(b"[]").unwrap();
        assert_eq!(payload, Payload::Bare(vec![]));
    }

    #[test]
    fn test_null_data_is_malformed() {
        let err = Payload::<Vec<i64>>::from_value(json!({"data": null, "error": {"message": "boom"}}))
            .unwrap_err();
        assert!(matches!(err, LoadError::MalformedResponse(ref msg) if msg.contains("boom")));

        let err = Payload::<Vec<i64>>::from_value(json!({"data": null})).unwrap_err();
        assert!(matches!(err, LoadError::MalformedResponse(_)));
    }

    #[test]
    fn test_shape_mismatch_is_malformed() {
        let err = Payload::<Vec<i64>>::from_slice(br#"{"items": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::MalformedResponse(_)));

        let err = Payload::<Vec<i64>>::from_slice(b"not json").unwrap_err();
        assert!(matches!(err, LoadError::MalformedResponse(_)));
    }
}
