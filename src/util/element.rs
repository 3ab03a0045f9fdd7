//! `web_sys::Element` adapters for the DOM ports.
//!
//! DOM writes that the browser rejects are logged and otherwise ignored; a
//! missing class or style never breaks the page.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::util::dom::ElementPort;
use crate::util::ripple::{Rect, RippleGeometry, RippleHost};

fn report(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        leptos::logging::warn!("{what} failed: {err:?}");
    }
}

impl ElementPort for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        report(self.class_list().add_1(class), "classList.add");
    }

    fn remove_class(&self, class: &str) {
        report(self.class_list().remove_1(class), "classList.remove");
    }

    fn set_attribute(&self, name: &str, value: &str) {
        report(Element::set_attribute(self, name, value), "setAttribute");
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(html) = self.dyn_ref::<HtmlElement>() {
            report(html.style().set_property(property, value), "style.setProperty");
        }
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

/// A `.btn` control together with the document used to create ripples.
pub struct ButtonHost {
    pub element: Element,
    pub document: Document,
}

impl RippleHost for ButtonHost {
    type Ripple = Element;

    fn bounding_rect(&self) -> Rect {
        let rect = self.element.get_bounding_client_rect();
        Rect { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() }
    }

    fn label(&self) -> String {
        self.element.text()
    }

    fn insert_ripple(&self, class: &str, geometry: &RippleGeometry) -> Option<Element> {
        let span = match self.document.create_element("span") {
            Ok(span) => span,
            Err(err) => {
                leptos::logging::warn!("ripple create failed: {err:?}");
                return None;
            }
        };
        for (property, value) in geometry.styles() {
            span.set_style(property, &value);
        }
        span.add_class(class);
        if let Err(err) = self.element.append_child(&span) {
            leptos::logging::warn!("ripple insert failed: {err:?}");
            return None;
        }
        Some(span)
    }

    fn remove_ripple(ripple: &Element) {
        ripple.remove();
    }
}

/// Elements matching `selector`, in document order. Non-element nodes and
/// invalid selectors yield nothing.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            leptos::logging::warn!("querySelectorAll({selector}) failed: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
