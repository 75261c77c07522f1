//! Clipboard access for the inquiry summary.

use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

/// Copy text via the async clipboard API, falling back to the legacy
/// select-and-copy path when the primary call is rejected.
///
/// # Errors
/// Returns a readable message when both paths fail.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn copy_text(text: &str) -> Result<(), String> {
    let clipboard = dom::window().navigator().clipboard();
    match JsFuture::from(clipboard.write_text(text)).await {
        Ok(_) => Ok(()),
        Err(_) => fallback_copy(text),
    }
}

fn fallback_copy(text: &str) -> Result<(), String> {
    let document = dom::document();
    let textarea = document
        .create_element("textarea")
        .map_err(|_| "Failed to create textarea".to_string())?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| "Failed to cast to textarea".to_string())?;

    textarea.set_value(text);

    if let Ok(style) = js_sys::Reflect::get(&textarea, &"style".into()) {
        let _ = js_sys::Reflect::set(&style, &"position".into(), &"fixed".into());
        let _ = js_sys::Reflect::set(&style, &"top".into(), &"-1000px".into());
        let _ = js_sys::Reflect::set(&style, &"left".into(), &"-1000px".into());
    }

    let Some(body) = document.body() else {
        return Err("No body element".to_string());
    };
    body.append_child(&textarea)
        .map_err(|_| "Failed to append textarea".to_string())?;
    textarea.select();
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .and_then(|doc| doc.exec_command("copy").ok())
        .unwrap_or(false);
    body.remove_child(&textarea)
        .map_err(|_| "Failed to remove textarea".to_string())?;

    if copied {
        Ok(())
    } else {
        Err("Copy command was rejected".to_string())
    }
}
