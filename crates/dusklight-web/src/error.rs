//! Installation errors.

use wasm_bindgen::JsValue;

/// Error returned when the page cannot host the behaviors at all.
///
/// Missing selectors or nav elements are not errors; only a missing
/// browser environment or a failing DOM call is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstallError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoRootElement,
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for InstallError {
    fn from(value: JsValue) -> Self {
        InstallError::Js(describe(&value))
    }
}

impl From<InstallError> for JsValue {
    fn from(err: InstallError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Renders a thrown JS value as text.
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
