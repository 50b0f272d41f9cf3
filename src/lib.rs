#![cfg(target_arch = "wasm32")]
//! Client-side visual embellishments for the marketing site: the animated
//! hero canvas, scroll-triggered chrome, the mobile menu, the image slider
//! and form-submission UX. Everything degrades to a silent no-op when its
//! DOM counterpart is missing; decoration never breaks the page.

use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod events;
mod hero;
mod page;
mod render;

pub mod core;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    hero::start(&window, &document);
    events::menu::wire(&document);
    events::slider::wire(&window, &document);
    events::scroll::wire(&window, &document);
    events::forms::wire(&window, &document);
    page::wire(&window, &document);

    Ok(())
}
