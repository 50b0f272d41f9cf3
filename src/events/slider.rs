//! Hero image slider: prev/next buttons, clickable indicators and a
//! 5-second auto-advance that restarts after any manual navigation.

use crate::core::slider::SliderState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const AUTO_SLIDE_MS: i32 = 5000;

struct Wiring {
    window: web::Window,
    slides: Vec<web::Element>,
    indicators: Vec<web::Element>,
    state: RefCell<SliderState>,
    timer: RefCell<Option<i32>>,
}

pub fn wire(window: &web::Window, document: &web::Document) {
    let slides = dom::query_all(document, ".slider-slide");
    if slides.is_empty() {
        return;
    }
    let indicators = dom::query_all(document, "[id^='slideIndicator']");
    log::info!("[slider] {} slides, {} indicators", slides.len(), indicators.len());

    let len = slides.len();
    let wiring = Rc::new(Wiring {
        window: window.clone(),
        slides,
        indicators,
        state: RefCell::new(SliderState::new(len)),
        timer: RefCell::new(None),
    });

    {
        let w = wiring.clone();
        dom::add_click_listener(document, "prevSlide", move || {
            let i = w.state.borrow_mut().prev();
            show_slide(&w, i);
            restart_auto(&w);
        });
    }
    {
        let w = wiring.clone();
        dom::add_click_listener(document, "nextSlide", move || {
            let i = w.state.borrow_mut().next();
            show_slide(&w, i);
            restart_auto(&w);
        });
    }
    for (index, indicator) in wiring.indicators.iter().enumerate() {
        let w = wiring.clone();
        let indicator = indicator.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let i = w.state.borrow_mut().go_to(index);
            show_slide(&w, i);
            restart_auto(&w);
        }) as Box<dyn FnMut()>);
        use wasm_bindgen::JsCast;
        let _ =
            indicator.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    restart_auto(&wiring);
}

/// Make one slide active and restyle every indicator to match.
fn show_slide(w: &Rc<Wiring>, index: usize) {
    for (i, slide) in w.slides.iter().enumerate() {
        let cl = slide.class_list();
        let _ = cl.remove_3("active", "opacity-100", "pointer-events-auto");
        let _ = cl.add_2("opacity-0", "pointer-events-none");

        if let Some(ind) = w.indicators.get(i) {
            let cl = ind.class_list();
            let _ = cl.remove_1("active-indicator");
            let _ = cl.add_3("w-2", "h-2", "bg-white/50");
            let _ = cl.remove_3("w-8", "h-1", "bg-white");
        }
    }

    let cl = w.slides[index].class_list();
    let _ = cl.remove_2("opacity-0", "pointer-events-none");
    let _ = cl.add_3("active", "opacity-100", "pointer-events-auto");

    if let Some(ind) = w.indicators.get(index) {
        let cl = ind.class_list();
        let _ = cl.add_1("active-indicator");
        let _ = cl.add_3("w-8", "h-1", "bg-white");
        let _ = cl.remove_3("w-2", "h-2", "bg-white/50");
    }
}

/// Clear any pending auto-advance and schedule a fresh one. The auto tick
/// only advances; it does not reschedule, so the cadence stays fixed until
/// the next manual interaction.
fn restart_auto(w: &Rc<Wiring>) {
    if let Some(handle) = w.timer.borrow_mut().take() {
        w.window.clear_interval_with_handle(handle);
    }
    let w2 = w.clone();
    let handle = dom::set_interval(&w.window, AUTO_SLIDE_MS, move || {
        let i = w2.state.borrow_mut().next();
        show_slide(&w2, i);
    });
    *w.timer.borrow_mut() = handle;
}
