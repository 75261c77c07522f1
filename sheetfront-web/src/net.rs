use crate::dom;
use sheetfront_core::DatasetError;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

/// Failure modes for one section's sheet load. Every variant is caught at
/// the top of that section's load routine; nothing propagates further.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("sheet request failed with status {0}")]
    Http(u16),
    #[error("sheet request failed: {0}")]
    Transport(String),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

impl From<JsValue> for LoadError {
    fn from(value: JsValue) -> Self {
        Self::Transport(dom::js_error_message(&value))
    }
}

/// Fetch a sheet as CSV text. The published endpoint is re-read on every
/// page load; the request bypasses every cache layer.
///
/// # Errors
/// Returns an error on transport failure or a non-success response status.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_csv(url: &str) -> Result<String, LoadError> {
    let init = RequestInit::new();
    init.set_cache(RequestCache::NoStore);
    let request = Request::new_with_str_and_init(url, &init)?;

    let resp_value = JsFuture::from(dom::window().fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;
    if !resp.ok() {
        return Err(LoadError::Http(resp.status()));
    }

    let text_value = JsFuture::from(resp.text()?).await?;
    Ok(text_value.as_string().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::LoadError;
    use sheetfront_core::DatasetError;

    #[test]
    fn errors_render_readable_messages() {
        assert_eq!(
            LoadError::Http(404).to_string(),
            "sheet request failed with status 404"
        );
        assert_eq!(
            LoadError::Transport("offline".to_string()).to_string(),
            "sheet request failed: offline"
        );
        assert_eq!(
            LoadError::from(DatasetError::Empty).to_string(),
            "dataset requires a header row and at least one data row"
        );
    }
}
