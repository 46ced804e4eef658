use js_sys::Reflect;
use wasm_bindgen::JsValue;

use crate::dom::js_err;
use store_gallery_core::GalleryConfig;

/// Optional page global overriding the template contract, e.g.
/// `window.__GALLERY_CONFIG = { fade_ms: 150 }`.
pub(crate) const CONFIG_GLOBAL: &str = "__GALLERY_CONFIG";

pub(crate) fn load() -> GalleryConfig {
    let Some(window) = web_sys::window() else {
        return GalleryConfig::default();
    };
    let Ok(value) = Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) else {
        return GalleryConfig::default();
    };
    if value.is_null() || value.is_undefined() {
        return GalleryConfig::default();
    }
    match config_from_js(&value) {
        Ok(config) => config,
        Err(message) => {
            gloo::console::warn!("gallery config: using defaults", message);
            GalleryConfig::default()
        }
    }
}

/// Accepts either a plain object or its JSON text.
pub(crate) fn config_from_js(value: &JsValue) -> Result<GalleryConfig, String> {
    let raw = match value.as_string() {
        Some(raw) => raw,
        None => js_sys::JSON::stringify(value)
            .map_err(js_err)?
            .as_string()
            .ok_or_else(|| "config is not serializable".to_string())?,
    };
    GalleryConfig::from_json(&raw).map_err(|err| err.to_string())
}
