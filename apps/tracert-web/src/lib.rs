//! Browser entry point for the traceroute dashboard's group filter.
#![cfg(target_arch = "wasm32")]

use tracert_ui::{initialize, Dom, DomError, HttpNodeSource, SelectorConfig, WebDom};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    spawn_local(async {
        if let Err(err) = run(SelectorConfig::default()).await {
            web_sys::console::error_1(&JsValue::from_str(&format!("group selector: {err}")));
        }
    });
}

async fn run(config: SelectorConfig) -> Result<(), tracert_ui::SelectorError> {
    let dom = WebDom::from_window()?;
    let container = dom
        .element_by_id(&config.container_id)
        .ok_or_else(|| DomError::MissingContainer(config.container_id.clone()))?;
    let source = HttpNodeSource::new(config.endpoint.clone());

    let selector = initialize(&source, &dom, container, config).await?;
    web_sys::console::log_1(&JsValue::from_str(&format!(
        "group selector ready with {} options",
        selector.options().len()
    )));
    Ok(())
}
