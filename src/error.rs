//! Errors raised at the page and configuration boundaries.
//!
//! Crossing into JS, every error becomes a plain `Error` with the display
//! message.
//!
//! Arithmetic itself never fails: bad input degrades to NaN.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum AdderError {
    #[error("no global window object")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element #{id} not found")]
    MissingElement { id: String },

    #[error("element #{id} is not {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("unknown field {name:?}, expected \"num1\" or \"num2\"")]
    UnknownField { name: String },

    #[error("failed to install listener: {0}")]
    Listener(String),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON config error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML config error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, AdderError>;

impl From<AdderError> for JsValue {
    fn from(error: AdderError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}
