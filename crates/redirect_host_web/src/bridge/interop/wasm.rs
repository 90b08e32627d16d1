use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::bridge::js_error_to_string;

#[wasm_bindgen(inline_js = r#"
function copyWithCommand(text) {
  const area = document.createElement('textarea');
  area.value = text;
  area.setAttribute('readonly', '');
  area.style.position = 'fixed';
  area.style.top = '0';
  area.style.opacity = '0';
  document.body.appendChild(area);
  area.select();
  let copied = false;
  try {
    copied = document.execCommand('copy');
  } finally {
    document.body.removeChild(area);
  }
  if (!copied) {
    throw new Error('copy command was rejected');
  }
}

export async function jsCopyText(text) {
  if (navigator.clipboard && window.isSecureContext) {
    try {
      await navigator.clipboard.writeText(text);
      return null;
    } catch (_) {
      // fall through to the legacy copy command
    }
  }
  copyWithCommand(text);
  return null;
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsCopyText)]
    fn js_copy_text(text: &str) -> Promise;
}

pub async fn copy_text(text: &str) -> Result<(), String> {
    JsFuture::from(js_copy_text(text))
        .await
        .map(|_| ())
        .map_err(js_error_to_string)
}
