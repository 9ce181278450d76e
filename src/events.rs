//! DOM event wiring. Listeners never touch the simulation directly; they
//! push small `InputEvent`s into a shared queue that the frame loop drains
//! once per frame, so event/frame interleaving is deterministic.

use crate::core::InputEvent;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type EventQueue = Rc<RefCell<Vec<InputEvent>>>;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub queue: EventQueue,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_scroll(&w);
    wire_pointermove(&w);
    wire_resize(&w);
}

fn wire_scroll(w: &InputWiring) {
    let queue = w.queue.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        queue.borrow_mut().push(InputEvent::Scroll {
            offset_y: dom::scroll_y(),
        });
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let queue = w.queue.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        queue.borrow_mut().push(InputEvent::PointerMove {
            x: ev.client_x() as f32,
            y: ev.client_y() as f32,
        });
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&w.canvas);
        let (width, height) = dom::viewport_css_size();
        w.queue
            .borrow_mut()
            .push(InputEvent::Resize { width, height });
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
