//! JSON encoding and decoding.
//!
//! The "prototype" of a decoded value is its Rust type: decoding into `T`
//! gives the result every trait `T` implements. [`from_json_onto`] also
//! takes a prototype *value* whose fields fill in whatever the text leaves
//! out.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Errors from [`to_json`], [`from_json`] and [`from_json_onto`].
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    /// The value could not be represented as JSON (e.g. a map with non-string keys).
    #[error("failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),
    /// The text is not valid JSON, or its shape does not fit the target type.
    #[error("failed to decode JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Compact JSON text of `value`, fields in declaration order.
///
/// JSON has no NaN or infinity: serde_json writes non-finite floats as
/// `null`, so such a value encodes fine but won't decode back into an `f64`
/// field.
///
/// ```
/// use motif_objects::json::to_json;
///
/// assert_eq!(to_json(&[1, 2, 3]).unwrap(), "[1,2,3]");
/// ```
///
/// # Errors
///
/// Returns [`JsonError::Encode`] if `value`'s `Serialize` impl fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Encode)
}

/// Parse `json` into a `T`.
///
/// # Errors
///
/// Returns [`JsonError::Decode`] if `json` is malformed or doesn't match `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, JsonError> {
    serde_json::from_str(json).map_err(JsonError::Decode)
}

/// Parse `json` and lay its fields over `proto`.
///
/// When both `proto` and the parsed text are JSON objects, fields present in
/// the text replace the prototype's (a shallow merge), and fields missing from
/// the text keep the prototype's values. Otherwise the parsed value is used
/// as is.
///
/// ```
/// use motif_objects::json::from_json_onto;
/// use motif_objects::shape::Rectangle;
///
/// let base = Rectangle::new(1.0, 2.0);
/// let r: Rectangle = from_json_onto(&base, r#"{"height":5}"#).unwrap();
/// assert_eq!(r, Rectangle::new(1.0, 5.0));
/// ```
///
/// # Errors
///
/// Returns [`JsonError::Encode`] if `proto` can't be serialized and
/// [`JsonError::Decode`] if `json` is malformed or the merged value doesn't
/// match `T`.
pub fn from_json_onto<T>(proto: &T, json: &str) -> Result<T, JsonError>
where
    T: Serialize + DeserializeOwned,
{
    let patch: Value = serde_json::from_str(json).map_err(JsonError::Decode)?;
    let base = serde_json::to_value(proto).map_err(JsonError::Encode)?;

    let merged = match (base, patch) {
        (Value::Object(mut fields), Value::Object(overrides)) => {
            fields.extend(overrides);
            Value::Object(fields)
        }
        (_, patch) => patch,
    };

    serde_json::from_value(merged).map_err(JsonError::Decode)
}
