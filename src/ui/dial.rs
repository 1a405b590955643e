//! SVG dial rendering

use wasm_bindgen::JsValue;
use web_sys::Document;

use super::dom;
use crate::game::PhaseView;
use crate::scene::DialScene;

/// Push a scene into the `#dial` SVG and its overlay
pub fn render(doc: &Document, scene: &DialScene, view: &PhaseView) -> Result<(), JsValue> {
    let layout = &scene.layout;
    let svg = dom::by_id(doc, "dial")?;
    svg.set_attribute("width", &layout.width.to_string())?;
    svg.set_attribute("height", &layout.height.to_string())?;
    svg.set_attribute(
        "viewBox",
        &format!("0 0 {} {}", layout.width, layout.height),
    )?;
    svg.set_attribute(
        "class",
        if view.interactive { "dial" } else { "dial locked" },
    )?;

    let rim = dom::by_id(doc, "dial-rim")?;
    rim.set_attribute("d", &scene.base_arc)?;
    rim.set_attribute("stroke-width", &(layout.radius * 0.06).max(8.0).to_string())?;
    // Wide transparent stroke so drags near the rim still register
    let hit = dom::by_id(doc, "dial-hit")?;
    hit.set_attribute("d", &scene.base_arc)?;
    hit.set_attribute("stroke-width", &(layout.radius * 0.25).max(42.0).to_string())?;

    let bands = dom::by_id(doc, "dial-bands")?;
    dom::clear(&bands);
    for band in &scene.bands {
        let path = dom::create_svg(doc, "path")?;
        path.set_attribute("d", &band.path)?;
        path.set_attribute("fill", band.fill)?;
        bands.append_child(&path)?;
    }

    let tip = scene.pointer_tip;
    let line = dom::by_id(doc, "dial-pointer")?;
    line.set_attribute("x1", &layout.center.x.to_string())?;
    line.set_attribute("y1", &layout.center.y.to_string())?;
    line.set_attribute("x2", &tip.x.to_string())?;
    line.set_attribute("y2", &tip.y.to_string())?;
    let knob = dom::by_id(doc, "dial-knob")?;
    knob.set_attribute("cx", &tip.x.to_string())?;
    knob.set_attribute("cy", &tip.y.to_string())?;

    let right = dom::by_id(doc, "dial-right-label")?;
    right.set_attribute("x", &(layout.width - 60.0).to_string())?;

    dom::show_id(doc, "dial-cover", view.dial_hidden)
}
