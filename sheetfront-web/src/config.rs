//! Site configuration: the published-spreadsheet endpoint and the sheet
//! name behind each page section.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static SITE: Lazy<SiteConfig> = Lazy::new(|| {
    serde_json::from_str(include_str!("../static/assets/data/site.json")).unwrap_or_default()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub csv_base: String,
    pub sheets: SheetNames,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetNames {
    pub notice: String,
    pub packages: String,
    pub options: String,
    pub inquiry: String,
    pub faq: String,
    pub templates: String,
    pub portfolio: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            csv_base: String::new(),
            sheets: SheetNames {
                notice: "notice".to_string(),
                packages: "packages".to_string(),
                options: "options".to_string(),
                inquiry: "inquiry".to_string(),
                faq: "faq".to_string(),
                templates: "templates".to_string(),
                portfolio: "portfolio".to_string(),
            },
        }
    }
}

impl SiteConfig {
    /// Shared configuration parsed once from the embedded site asset.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SITE
    }

    /// Endpoint for one sheet, with the sheet name URL-encoded.
    #[must_use]
    pub fn sheet_url(&self, sheet: &str) -> String {
        format!("{}&sheet={}", self.csv_base, encode_component(sheet))
    }
}

fn encode_component(value: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        String::from(js_sys::encode_uri_component(value))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        value.to_string()
    }
}
