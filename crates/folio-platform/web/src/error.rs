use wasm_bindgen::JsValue;

/// Failures while wiring the page. Effects themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("no global `window` exists")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("document has no {0}")]
    MissingElement(&'static str),
    #[error("{operation} failed: {message}")]
    Js {
        operation: &'static str,
        message: String,
    },
}

impl WebError {
    pub(crate) fn js(operation: &'static str, value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        WebError::Js { operation, message }
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
