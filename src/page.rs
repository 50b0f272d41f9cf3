//! Page-level niceties that run once: the load-screen dismissal, lazy video
//! sources and the startup log lines.

use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const LOADER_HIDE_DELAY_MS: i32 = 500;
const LOADER_REMOVE_DELAY_MS: i32 = 500;

pub fn wire(window: &web::Window, document: &web::Document) {
    wire_loader(window, document);
    wire_lazy_videos(document);
    wire_load_timing(window);
}

/// Fade the loader out half a second after `load`, drop it from the DOM
/// half a second after that.
fn wire_loader(window: &web::Window, document: &web::Document) {
    let Some(loader) = document.query_selector(".page-loader").ok().flatten() else {
        return;
    };
    let win = window.clone();
    dom::add_event_listener(window, "load", move || {
        let loader = loader.clone();
        let win2 = win.clone();
        dom::set_timeout(&win, LOADER_HIDE_DELAY_MS, move || {
            let _ = loader.class_list().add_1("hidden");
            dom::set_timeout(&win2, LOADER_REMOVE_DELAY_MS, move || {
                loader.remove();
            });
        });
    });
}

/// Videos carrying `data-src` get their source attached only when they
/// approach the viewport.
fn wire_lazy_videos(document: &web::Document) {
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let el = entry.target();
                observer.unobserve(&el);
                let Ok(video) = el.dyn_into::<web::HtmlVideoElement>() else {
                    continue;
                };
                if video.src().is_empty() {
                    if let Some(src) = video.get_attribute("data-src") {
                        video.set_src(&src);
                        video.load();
                    }
                }
            }
        },
    )
        as Box<dyn FnMut(_, _)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_root_margin("50px");
    let Ok(observer) =
        web::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)
    else {
        return;
    };
    cb.forget();

    for el in dom::query_all(document, "video[data-src]") {
        observer.observe(&el);
    }
}

fn wire_load_timing(window: &web::Window) {
    let win = window.clone();
    dom::add_event_listener(window, "load", move || {
        if let Some(perf) = win.performance() {
            log::info!("[page] loaded in {}ms", perf.now().round());
        }
    });
}
