use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LandingError {
    #[error("Intersection observer unavailable: {0}")]
    Observer(String),
    #[error("Invalid counter target {0:?}, falling back to 0")]
    InvalidCounterTarget(String),
    #[error("No window object available")]
    MissingWindow,
    #[error("Browser call failed: {0}")]
    Browser(String),
}

impl From<JsValue> for LandingError {
    fn from(value: JsValue) -> Self {
        // JsValue::as_string only covers string throws; fall back to the debug form
        let message = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        LandingError::Browser(message)
    }
}

pub type Result<T> = std::result::Result<T, LandingError>;
