#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let query_string = web_sys::window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default();
    let level = ai_translate::config::log_level_from_query(&query_string);
    console_log::init_with_level(level)
        .map_err(|e| JsValue::from_str(&format!("could not initialize logger: {}", e)))?;
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    log::info!("Installing translate widget...");
    ai_translate::wasm_proxy::install(ai_translate::LauncherConfig::default())
}
