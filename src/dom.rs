use crate::events;
use glam::Vec2;
use motion_core::{EventKind, Host, PointerHandler, Rect};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

/// The live document as seen by the effect installers.
pub struct DomHost {
    document: web::Document,
}

impl DomHost {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl Host for DomHost {
    type Element = web::Element;

    fn query_all(&self, selector: &str) -> Vec<web::Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => (0..list.length())
                .filter_map(|i| list.get(i))
                .filter_map(|node| node.dyn_into::<web::Element>().ok())
                .collect(),
            Err(e) => {
                log::warn!("[dom] bad selector {:?}: {:?}", selector, e);
                Vec::new()
            }
        }
    }

    fn query_within(&self, parent: &web::Element, selector: &str) -> Option<web::Element> {
        parent.query_selector(selector).ok().flatten()
    }

    fn attribute(&self, element: &web::Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn bounds(&self, element: &web::Element) -> Rect {
        element_rect(element)
    }

    fn viewport(&self) -> Vec2 {
        let Some(w) = web::window() else {
            return Vec2::ZERO;
        };
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Vec2::new(width as f32, height as f32)
    }

    fn overlay_slot(&self, owner: &web::Element, class_name: &str) -> Option<web::Element> {
        let existing = owner
            .query_selector(&format!(":scope > .{}", class_name))
            .ok()
            .flatten();
        if existing.is_some() {
            return existing;
        }
        let el = match self.document.create_element("div") {
            Ok(el) => el,
            Err(e) => {
                log::warn!("[dom] could not create .{}: {:?}", class_name, e);
                return None;
            }
        };
        el.set_class_name(class_name);
        owner.append_child(&el).ok()?;
        Some(el)
    }

    fn set_class(&self, element: &web::Element, class_name: &str, on: bool) {
        _ = element.class_list().toggle_with_force(class_name, on);
    }

    fn listen(&self, element: &web::Element, kind: EventKind, handler: PointerHandler) {
        events::wire_pointer(element, kind, handler);
    }
}
