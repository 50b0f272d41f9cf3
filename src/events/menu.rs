//! Mobile hamburger menu shared across pages: button toggles the menu and
//! animates the three lines into a cross; any menu link closes it again.

use crate::dom;
use web_sys as web;

const LINE1_CLASSES: [&str; 2] = ["rotate-45", "translate-y-2"];
const LINE2_CLASSES: [&str; 1] = ["opacity-0"];
const LINE3_CLASSES: [&str; 2] = ["-rotate-45", "-translate-y-2"];

pub fn wire(document: &web::Document) {
    let (Some(btn), Some(menu)) = (
        document.get_element_by_id("mobileMenuBtn"),
        document.get_element_by_id("mobileMenu"),
    ) else {
        return;
    };
    let lines: Vec<web::Element> = ["line1", "line2", "line3"]
        .iter()
        .filter_map(|id| document.get_element_by_id(id))
        .collect();
    if lines.len() != 3 {
        return;
    }

    {
        let menu = menu.clone();
        let lines = lines.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let _ = menu.class_list().toggle("hidden");
            toggle_lines(&lines);
        }) as Box<dyn FnMut()>);
        use wasm_bindgen::JsCast;
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Navigating from the menu always closes it
    for link in dom::query_all_in(&menu, "a") {
        let menu = menu.clone();
        let lines = lines.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let _ = menu.class_list().add_1("hidden");
            reset_lines(&lines);
        }) as Box<dyn FnMut()>);
        use wasm_bindgen::JsCast;
        let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn toggle_lines(lines: &[web::Element]) {
    for class in LINE1_CLASSES {
        let _ = lines[0].class_list().toggle(class);
    }
    for class in LINE2_CLASSES {
        let _ = lines[1].class_list().toggle(class);
    }
    for class in LINE3_CLASSES {
        let _ = lines[2].class_list().toggle(class);
    }
}

fn reset_lines(lines: &[web::Element]) {
    let _ = lines[0].class_list().remove_2(LINE1_CLASSES[0], LINE1_CLASSES[1]);
    let _ = lines[1].class_list().remove_1(LINE2_CLASSES[0]);
    let _ = lines[2].class_list().remove_2(LINE3_CLASSES[0], LINE3_CLASSES[1]);
}
