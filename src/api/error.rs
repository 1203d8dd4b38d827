//! Fetch Errors

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No `window` to fetch from (not running in a browser)
    #[error("browser window unavailable")]
    Unavailable,

    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("server returned status: {0}")]
    Status(u16),

    /// The body was not the expected JSON
    #[error("decoding error: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn network(value: JsValue) -> Self {
        FetchError::Network(describe_js(&value))
    }

    pub fn decode(value: JsValue) -> Self {
        FetchError::Decode(describe_js(&value))
    }
}

impl From<serde_wasm_bindgen::Error> for FetchError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

/// Message of a thrown JS error, or its debug form
fn describe_js(value: &JsValue) -> String {
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{:?}", value),
    }
}
