//! JavaScript Bridge bindings
//!
//! File download, clipboard and window.open are delegated to `js/bridge.js`.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/bridge.js")]
extern "C" {
    /// Saves `text` as a file named `filename`
    #[wasm_bindgen(js_name = "downloadText")]
    pub fn download_text_js(text: &str, filename: &str, mime_type: &str);

    #[wasm_bindgen(js_name = "copyText", catch)]
    pub async fn copy_text_js(text: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "openInNewTab")]
    pub fn open_in_new_tab_js(url: &str);
}
