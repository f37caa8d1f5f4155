#![cfg(target_arch = "wasm32")]
use motion_core::{AnimationEngine, Backend, EngineConfig};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod events;
mod gsap;

/// The live page: DOM elements animated through GSAP.
pub struct Web;

impl Backend for Web {
    type Element = web::Element;
    type Host = dom::DomHost;
    type Tweener = gsap::Gsap;
    type Observer = gsap::ScrollTriggers;
}

fn launch(document: web::Document) -> anyhow::Result<()> {
    if !gsap::available() {
        anyhow::bail!("gsap is not loaded; effects disabled");
    }
    let scroll = gsap::register_scroll_trigger();

    let config = match document.document_element() {
        Some(root) => EngineConfig::from_lookup(|key| root.get_attribute(key)),
        None => EngineConfig::default(),
    };
    log::info!(
        "[config] magnetic_force={:.2} cursor_ease={}",
        config.magnetic_force,
        config.cursor_ease
    );

    let engine = AnimationEngine::<Web>::new(
        dom::DomHost::new(document),
        gsap::Gsap,
        gsap::ScrollTriggers::new(scroll),
        config,
    );
    // Installed handlers keep the stage alive after the engine goes out of scope.
    engine.start();
    Ok(())
}

fn boot() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let ready = document.clone();
    events::when_ready(&document, move || {
        if let Err(e) = launch(ready) {
            log::error!("launch error: {:?}", e);
        }
    });
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);
    log::info!("saffron-motion starting");
    if let Err(e) = boot() {
        log::error!("boot error: {:?}", e);
    }
    Ok(())
}
