use js_sys::{Reflect, JSON};
use shared::{ClientConfig, PageConfig};
use wasm_bindgen::JsValue;

use crate::services::logging::Logger;

/// Global set by the hosting page template
const CSRF_TOKEN_GLOBAL: &str = "csrf_token";
/// Optional object with `base_url`, `success_message_ms` and `log_level`
const PAGE_CONFIG_GLOBAL: &str = "expense_tracker_config";

/// Read the client configuration from page globals. Called once at startup;
/// components receive the result through context.
pub fn load() -> ClientConfig {
    let global = js_sys::global();

    let csrf_token = read_global(&global, CSRF_TOKEN_GLOBAL)
        .and_then(|v| v.as_string())
        .unwrap_or_default();

    let page = read_global(&global, PAGE_CONFIG_GLOBAL)
        .and_then(|v| parse_page_config(&v))
        .unwrap_or_default();

    let config = ClientConfig::new(csrf_token).merge(page);
    Logger::init(config.log_level);

    if !config.has_csrf_token() {
        Logger::warn_with_component(
            "config",
            "No csrf_token on the page; creating and deleting expenses will be rejected",
        );
    }
    config
}

fn read_global(global: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(global, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn parse_page_config(value: &JsValue) -> Option<PageConfig> {
    let json = JSON::stringify(value).ok()?;
    let json = String::from(json);
    match serde_json::from_str::<PageConfig>(&json) {
        Ok(page) => Some(page),
        Err(e) => {
            Logger::warn_with_component(
                "config",
                &format!("Ignoring malformed {}: {}", PAGE_CONFIG_GLOBAL, e),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use js_sys::Object;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_parse_page_config_object() {
        let obj = Object::new();
        Reflect::set(&obj, &"base_url".into(), &"http://localhost:8000".into()).unwrap();
        Reflect::set(&obj, &"success_message_ms".into(), &JsValue::from_f64(500.0)).unwrap();

        let page = parse_page_config(&obj.into()).unwrap();
        assert_eq!(page.base_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(page.success_message_ms, Some(500));
        assert_eq!(page.log_level, None);
    }

    #[wasm_bindgen_test]
    fn test_parse_page_config_rejects_wrong_shape() {
        let value = JsValue::from_str("not an object");
        assert_eq!(parse_page_config(&value), None);
    }

    #[wasm_bindgen_test]
    fn test_missing_global_reads_as_none() {
        let global = js_sys::global();
        assert!(read_global(&global, "expense_tracker_missing_global").is_none());
    }
}
