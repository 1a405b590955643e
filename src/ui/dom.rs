//! Small DOM helpers shared by the UI modules

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub fn by_id(doc: &Document, id: &str) -> Result<Element, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

pub fn input_by_id(doc: &Document, id: &str) -> Result<HtmlInputElement, JsValue> {
    by_id(doc, id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an input")))
}

pub fn set_text(doc: &Document, id: &str, text: &str) -> Result<(), JsValue> {
    by_id(doc, id)?.set_text_content(Some(text));
    Ok(())
}

/// Toggle the `hidden` attribute
pub fn set_shown(el: &Element, shown: bool) -> Result<(), JsValue> {
    if shown {
        el.remove_attribute("hidden")
    } else {
        el.set_attribute("hidden", "")
    }
}

pub fn show_id(doc: &Document, id: &str, shown: bool) -> Result<(), JsValue> {
    set_shown(&by_id(doc, id)?, shown)
}

pub fn create(doc: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    if !class.is_empty() {
        el.set_attribute("class", class)?;
    }
    Ok(el)
}

pub fn create_svg(doc: &Document, tag: &str) -> Result<Element, JsValue> {
    doc.create_element_ns(Some(SVG_NS), tag)
}

pub fn clear(el: &Element) {
    el.set_inner_html("");
}
