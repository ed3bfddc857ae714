//! Key-path traversal over nested JSON objects

use serde_json::Value;

use crate::error::{ApiError, Result};

/// Walk `map` one key at a time and return the value at the end of `path`.
///
/// Every intermediate value must be a JSON object holding the next key.
/// The first key that cannot be resolved, whether because it is absent or
/// because the value at that level is not an object, is reported as
/// [`ApiError::MissingKey`].
///
/// An empty path resolves to `map` itself.
///
/// # Example
/// ```
/// use serde_json::json;
/// use ghorg::nested::access_nested_map;
///
/// let map = json!({"a": {"b": 2}});
/// assert_eq!(access_nested_map(&map, &["a", "b"]).unwrap(), &json!(2));
/// ```
pub fn access_nested_map<'a, K: AsRef<str>>(map: &'a Value, path: &[K]) -> Result<&'a Value> {
    let mut current = map;
    for key in path {
        let key = key.as_ref();
        current = current
            .as_object()
            .and_then(|object| object.get(key))
            .ok_or_else(|| ApiError::MissingKey(key.to_string()))?;
    }
    Ok(current)
}

/// Like [`access_nested_map`], but the terminal value must be a string.
pub fn access_nested_str<'a, K: AsRef<str>>(map: &'a Value, path: &[K]) -> Result<&'a str> {
    let value = access_nested_map(map, path)?;
    value.as_str().ok_or_else(|| {
        let key = path.last().map(|k| k.as_ref()).unwrap_or_default();
        ApiError::UnexpectedType {
            key: key.to_string(),
            expected: "string",
        }
        .into()
    })
}
