use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("site config decode failed: {0}")]
    ConfigDecode(#[from] serde_json::Error),
    #[error("site config has no {0}")]
    EmptyList(&'static str),
    #[error("dom operation failed: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SiteError::Dom(format!("{value:?}"))
    }
}
