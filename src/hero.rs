//! Hero canvas wiring: surface lookup, sizing, pointer tracking and the
//! requestAnimationFrame loop that drives the scene.

use crate::core::Scene;
use crate::dom;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Set up the animation against `#heroCanvas`. A page without that canvas
/// gets no animation and no loop; this is a silent no-op, not an error.
pub fn start(window: &web::Window, document: &web::Document) {
    let Some(el) = document.get_element_by_id("heroCanvas") else {
        return;
    };
    let canvas: web::HtmlCanvasElement = match el.dyn_into() {
        Ok(c) => c,
        Err(_) => return,
    };
    let ctx = match canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
    {
        Some(c) => c,
        None => return,
    };

    let (w, h) = dom::viewport_size(window);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);

    // Seed from the wall clock; the particle field is decorative and only
    // needs to differ between page loads.
    let scene = Rc::new(RefCell::new(Scene::new(w, h, js_sys::Date::now() as u64)));
    log::info!(
        "[hero] canvas {}x{}, {} nodes, {} particles",
        w as u32,
        h as u32,
        scene.borrow().nodes.len(),
        scene.borrow().particles.len()
    );

    wire_resize(window, &canvas, &scene);
    wire_pointer(document, &scene);
    start_loop(scene, ctx);
}

/// Resizing the surface clears it by platform convention; the next frame
/// repaints everything anyway.
fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<Scene>>,
) {
    let canvas = canvas.clone();
    let scene = scene.clone();
    dom::add_event_listener(window, "resize", move || {
        if let Some(w) = web::window() {
            let (vw, vh) = dom::viewport_size(&w);
            canvas.set_width(vw as u32);
            canvas.set_height(vh as u32);
            scene.borrow_mut().resize(vw, vh);
        }
    });
}

fn wire_pointer(document: &web::Document, scene: &Rc<RefCell<Scene>>) {
    let scene = scene.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        scene
            .borrow_mut()
            .set_pointer(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    let _ = document
        .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn start_loop(scene: Rc<RefCell<Scene>>, ctx: web::CanvasRenderingContext2d) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let mut s = scene.borrow_mut();
            s.step();
            render::draw(&ctx, &s);
        }
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
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
