//! Locale-aware string comparison for ad hoc group names.

use std::cmp::Ordering;

/// Compare strings with Korean collation via `Intl.Collator` in the
/// browser. Host builds fall back to codepoint order, which already matches
/// Korean alphabetical order for precomposed Hangul syllables.
#[must_use]
pub fn korean(a: &str, b: &str) -> Ordering {
    #[cfg(target_arch = "wasm32")]
    {
        use js_sys::{Array, Intl, Object};
        use wasm_bindgen::JsValue;

        let locales = Array::new();
        locales.push(&JsValue::from_str("ko"));
        let collator = Intl::Collator::new(&locales, &Object::new());
        let result = collator
            .compare()
            .call2(&collator, &JsValue::from_str(a), &JsValue::from_str(b))
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        if result < 0.0 {
            Ordering::Less
        } else if result > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        a.cmp(b)
    }
}
