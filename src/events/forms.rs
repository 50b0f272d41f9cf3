//! Form-submission UX: inline required-field validation and a temporary
//! success state on the submit button. No network request is made here;
//! submission is decorative on this site.

use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const SUCCESS_TEXT: &str = "\u{2713} Sent Successfully!";
const SUCCESS_BACKGROUND: &str = "#10b981";
const RESTORE_AFTER_MS: i32 = 3000;

pub fn wire(window: &web::Window, document: &web::Document) {
    for form in dom::query_all(document, "form") {
        wire_form(window, &form);
    }
}

fn wire_form(window: &web::Window, form: &web::Element) {
    let inputs = dom::query_all_in(form, "input[required], textarea[required]");

    for input in &inputs {
        wire_field_feedback(input);
    }

    let Ok(form) = form.clone().dyn_into::<web::HtmlFormElement>() else {
        return;
    };
    let win = window.clone();
    let form_for_submit = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();

        let mut valid = true;
        for input in &inputs {
            if field_value(input).trim().is_empty() {
                let _ = input.class_list().add_1("error");
                valid = false;
            }
        }
        if valid {
            show_success(&win, &form_for_submit);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Blur marks the field, typing clears the error state again.
fn wire_field_feedback(input: &web::Element) {
    {
        let input2 = input.clone();
        dom::add_event_listener(input, "blur", move || {
            let cl = input2.class_list();
            if field_value(&input2).trim().is_empty() {
                let _ = cl.add_1("error");
                let _ = cl.remove_1("success");
            } else {
                let _ = cl.add_1("success");
                let _ = cl.remove_1("error");
            }
        });
    }
    let input2 = input.clone();
    dom::add_event_listener(input, "input", move || {
        let _ = input2.class_list().remove_1("error");
    });
}

fn field_value(el: &web::Element) -> String {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Swap the submit button into its confirmation look, then restore the
/// original text and reset the form.
fn show_success(window: &web::Window, form: &web::HtmlFormElement) {
    let Some(button) = form
        .query_selector("button[type='submit']")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };

    let original = button.text_content().unwrap_or_default();
    button.set_text_content(Some(SUCCESS_TEXT));
    let _ = button.style().set_property("background", SUCCESS_BACKGROUND);

    let form = form.clone();
    dom::set_timeout(window, RESTORE_AFTER_MS, move || {
        button.set_text_content(Some(&original));
        let _ = button.style().set_property("background", "");
        form.reset();
    });
}
