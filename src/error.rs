//! Error type for site components
//!
//! Nothing here is fatal: a component that fails to set up is logged and
//! left disabled, the rest of the page carries on.

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum SiteError {
    /// Required document structure is absent
    #[error("{component} elements not found: {missing}")]
    MissingElement {
        component: &'static str,
        missing: &'static str,
    },

    /// Browser API call failed
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    /// Site settings could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl SiteError {
    pub fn missing(component: &'static str, missing: &'static str) -> Self {
        Self::MissingElement { component, missing }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<JsValue> for SiteError {
    fn from(js_val: JsValue) -> Self {
        let message = js_val
            .as_string()
            .unwrap_or_else(|| format!("{:?}", js_val));
        SiteError::JavaScript(message)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type SiteResult<T> = Result<T, SiteError>;
