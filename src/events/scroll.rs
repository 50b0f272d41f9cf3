//! Scroll-driven chrome: navbar state, progress bar, back-to-top, parallax,
//! smooth anchors, plus the IntersectionObserver-driven fade-ups and
//! counters.

use crate::core::counter::{Counter, CounterStep};
use crate::core::scroll;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn wire(window: &web::Window, document: &web::Document) {
    wire_navbar_state(window, document);
    wire_progress_bar(window, document);
    wire_back_to_top(window, document);
    wire_parallax(window, document);
    wire_smooth_anchors(document);
    wire_fade_ups(document);
    wire_counters(document);
}

fn scroll_y(window: &web::Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}

fn wire_navbar_state(window: &web::Window, document: &web::Document) {
    let Some(nav) = document.query_selector("nav").ok().flatten() else {
        return;
    };
    let win = window.clone();
    dom::add_event_listener(window, "scroll", move || {
        let cl = nav.class_list();
        if scroll::navbar_scrolled(scroll_y(&win)) {
            let _ = cl.add_1("scrolled");
        } else {
            let _ = cl.remove_1("scrolled");
        }
    });
}

fn wire_progress_bar(window: &web::Window, document: &web::Document) {
    let Some(bar) = document
        .query_selector(".scroll-progress")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let win = window.clone();
    let doc = document.clone();
    dom::add_event_listener(window, "scroll", move || {
        let Some(root) = doc.document_element() else {
            return;
        };
        let pct = scroll::progress_percent(
            scroll_y(&win),
            root.scroll_height() as f64,
            root.client_height() as f64,
        );
        let _ = bar.style().set_property("width", &format!("{pct}%"));
    });
}

fn wire_back_to_top(window: &web::Window, document: &web::Document) {
    let Some(btn) = document.query_selector(".back-to-top").ok().flatten() else {
        return;
    };

    let win = window.clone();
    let btn_for_scroll = btn.clone();
    dom::add_event_listener(window, "scroll", move || {
        let cl = btn_for_scroll.class_list();
        if scroll::back_to_top_visible(scroll_y(&win)) {
            let _ = cl.add_1("visible");
        } else {
            let _ = cl.remove_1("visible");
        }
    });

    let win = window.clone();
    dom::add_event_listener(&btn, "click", move || {
        let opts = web::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    });
}

fn wire_parallax(window: &web::Window, document: &web::Document) {
    let win = window.clone();
    let doc = document.clone();
    dom::add_event_listener(window, "scroll", move || {
        let y = scroll_y(&win);
        for el in dom::query_all(&doc, ".parallax") {
            let speed = scroll::parse_speed(el.get_attribute("data-speed").as_deref());
            if let Ok(html) = el.dyn_into::<web::HtmlElement>() {
                let offset = scroll::parallax_offset(y, speed);
                let _ = html
                    .style()
                    .set_property("transform", &format!("translateY({offset}px)"));
            }
        }
    });
}

fn wire_smooth_anchors(document: &web::Document) {
    let doc = document.clone();
    for anchor in dom::query_all(document, "a[href^='#']") {
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        let doc = doc.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            if let Some(target) = doc.query_selector(&href).ok().flatten() {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = anchor
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Elements with `.fade-up` gain `visible` the first time they scroll into
/// view; the class stays on afterwards.
fn wire_fade_ups(document: &web::Document) {
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("visible");
                }
            }
        },
    )
        as Box<dyn FnMut(_, _)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from(0.15));
    opts.set_root_margin("0px 0px -50px 0px");
    let Ok(observer) =
        web::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)
    else {
        return;
    };
    cb.forget();

    for el in dom::query_all(document, ".fade-up") {
        observer.observe(&el);
    }
}

/// Each `.counter` starts counting toward its `data-target` the first time
/// half of it is visible, then stops being observed.
fn wire_counters(document: &web::Document) {
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
                let target = el
                    .get_attribute("data-target")
                    .and_then(|s| s.trim().parse::<i64>().ok())
                    .unwrap_or(0);
                run_counter(el, target);
            }
        },
    )
        as Box<dyn FnMut(_, _)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from(0.5));
    let Ok(observer) =
        web::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)
    else {
        return;
    };
    cb.forget();

    for el in dom::query_all(document, ".counter") {
        observer.observe(&el);
    }
}

/// RAF-stepped count-up on one element; stops rescheduling once done.
fn run_counter(el: web::Element, target: i64) {
    let counter = Rc::new(RefCell::new(Counter::new(target)));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let step = counter.borrow_mut().step();
        el.set_text_content(Some(&step.display().to_string()));
        if let CounterStep::Running(_) = step {
            if let Some(w) = web::window() {
                let _ = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
