use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Cursor;

use crate::utils::error::{Result, UtilError};

/// A serialized value in both of the forms callers ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonText {
    pub text: String,
    pub bytes: Vec<u8>,
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<JsonText> {
    let text = serde_json::to_string(value)?;
    let bytes = text.clone().into_bytes();
    Ok(JsonText { text, bytes })
}

/// Serializes `value` into a reader for downstream consumers such as request bodies.
pub fn to_json_reader<T: Serialize + ?Sized>(value: &T) -> Result<Cursor<Vec<u8>>> {
    let bytes = serde_json::to_vec(value).map_err(|source| UtilError::Encode {
        context: "error marshaling a value into JSON bytes".to_string(),
        source,
    })?;
    Ok(Cursor::new(bytes))
}

pub fn from_json<T: DeserializeOwned>(input: &str) -> Result<T> {
    serde_json::from_str(input).map_err(|e| {
        tracing::warn!("Error converting json string to a data structure: {}", e);
        UtilError::Json(e)
    })
}

pub fn from_json_bytes<T: DeserializeOwned>(input: &[u8]) -> Result<T> {
    serde_json::from_slice(input).map_err(|e| {
        tracing::warn!("Error converting json bytes to a data structure: {}", e);
        UtilError::Json(e)
    })
}
