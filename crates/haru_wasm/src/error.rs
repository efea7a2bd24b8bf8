//! Error conversion across the wasm boundary.
//!
//! Core errors cross into JavaScript as plain `{ kind, message, file }`
//! objects so the frontend can branch on the kind without string
//! matching. Conversion never panics; if an error itself fails to
//! serialize, the message string is used.

use haru_core::error::HaruError;
use wasm_bindgen::JsValue;

/// Convert a core result into a JS result with a serialized error.
pub trait IntoJsResult<T> {
    /// Map the error side into a `JsValue`.
    fn into_js(self) -> Result<T, JsValue>;
}

impl<T> IntoJsResult<T> for Result<T, HaruError> {
    fn into_js(self) -> Result<T, JsValue> {
        self.map_err(|e| {
            serde_wasm_bindgen::to_value(&e.to_serializable())
                .unwrap_or_else(|_| JsValue::from_str(&e.to_string()))
        })
    }
}
