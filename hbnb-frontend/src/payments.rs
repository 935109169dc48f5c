//! Access to the hosted payment form (`public/payments.js`).

use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = hbnbPayments, js_name = mount, catch)]
    fn mount_payment_form(client_secret: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = hbnbPayments, js_name = confirm, catch)]
    fn confirm_payment(client_secret: &str) -> Result<js_sys::Promise, JsValue>;
}

fn js_error(err: &JsValue) -> anyhow::Error {
    let msg = err
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| "unknown JS error".to_string());
    anyhow!(msg)
}

pub fn mount(client_secret: &str) -> anyhow::Result<()> {
    mount_payment_form(client_secret).map_err(|err| js_error(&err))
}

/// Returns the id of the succeeded payment intent.
pub async fn confirm(client_secret: &str) -> anyhow::Result<String> {
    let promise = confirm_payment(client_secret).map_err(|err| js_error(&err))?;
    let value = JsFuture::from(promise).await.map_err(|err| js_error(&err))?;
    value
        .as_string()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| anyhow!("The payment was not confirmed"))
}
