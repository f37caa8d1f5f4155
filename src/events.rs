use motion_core::{EventKind, PointerHandler, PointerSample};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Forward `kind` mouse events on `target` to `handler` for the page lifetime.
pub fn wire_pointer(target: &web::EventTarget, kind: EventKind, mut handler: PointerHandler) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        handler(PointerSample::new(ev.client_x() as f32, ev.client_y() as f32));
    }) as Box<dyn FnMut(_)>);

    if let Err(e) =
        target.add_event_listener_with_callback(kind.dom_name(), closure.as_ref().unchecked_ref())
    {
        log::warn!("[events] could not listen for {}: {:?}", kind.dom_name(), e);
    }

    closure.forget();
}

/// Run `f` once the document has been parsed: right away if it already has,
/// otherwise on `DOMContentLoaded`.
pub fn when_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    _ = document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref());
}
